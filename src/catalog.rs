// ABOUTME: Static seed data for the recipe club
// ABOUTME: Initial recipe collection and the premium gift catalog
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Static Catalog
//!
//! Seed recipes the session starts populated with, and the read-only
//! premium gift catalog. Data only; nothing here is generated or mutated at
//! runtime.

use crate::models::{Difficulty, Gift, GiftType, Recipe, RecipeCategory};

/// Seed recipes shown before the user generates anything
#[must_use]
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "seed-salmon-dorado".to_owned(),
            title: "Salmón Dorado con Espárragos".to_owned(),
            description: "Filete de salmón salvaje sellado en ghee, con espárragos trufados y un toque de cúrcuma.".to_owned(),
            category: RecipeCategory::Dinner,
            time: "25 min".to_owned(),
            time_value: 25,
            calories: 480,
            ingredients: vec![
                "200g de salmón salvaje".to_owned(),
                "1 manojo de espárragos verdes".to_owned(),
                "1 cda de ghee".to_owned(),
                "Cúrcuma fresca rallada".to_owned(),
                "Sal marina y pimienta rosa".to_owned(),
            ],
            instructions: vec![
                "Sella el salmón en ghee a fuego medio-alto, 3 minutos por lado.".to_owned(),
                "Saltea los espárragos con cúrcuma hasta que estén al dente.".to_owned(),
                "Emplata y termina con pimienta rosa recién molida.".to_owned(),
            ],
            image: "https://images.unsplash.com/photo-1467003909585-2f8a72700288?q=80&w=800&auto=format&fit=crop".to_owned(),
            difficulty: Difficulty::Easy,
            dietary_restrictions: vec!["Sin Gluten".to_owned(), "Keto".to_owned()],
            rating: 4.8,
            reviews: 1240,
        },
        Recipe {
            id: "seed-bowl-verde".to_owned(),
            title: "Bowl Verde Detox".to_owned(),
            description: "Kale masajeado, aguacate, pepino y semillas activadas con aderezo de tahini y limón.".to_owned(),
            category: RecipeCategory::Lunch,
            time: "15 min".to_owned(),
            time_value: 15,
            calories: 390,
            ingredients: vec![
                "2 tazas de kale".to_owned(),
                "1 aguacate maduro".to_owned(),
                "1/2 pepino".to_owned(),
                "2 cdas de semillas de calabaza activadas".to_owned(),
                "1 cda de tahini".to_owned(),
                "Jugo de medio limón".to_owned(),
            ],
            instructions: vec![
                "Masajea el kale con unas gotas de limón y sal.".to_owned(),
                "Arma el bowl con el aguacate en láminas y el pepino.".to_owned(),
                "Mezcla tahini, limón y agua para el aderezo; corona con semillas.".to_owned(),
            ],
            image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?q=80&w=800&auto=format&fit=crop".to_owned(),
            difficulty: Difficulty::Easy,
            dietary_restrictions: vec!["Vegano".to_owned(), "Sin Gluten".to_owned()],
            rating: 4.7,
            reviews: 860,
        },
        Recipe {
            id: "seed-pancakes-proteicos".to_owned(),
            title: "Pancakes Proteicos de Avena".to_owned(),
            description: "Pancakes esponjosos de avena y claras con frutos rojos y miel cruda de montaña.".to_owned(),
            category: RecipeCategory::Breakfast,
            time: "20 min".to_owned(),
            time_value: 20,
            calories: 430,
            ingredients: vec![
                "1 taza de avena molida".to_owned(),
                "4 claras de huevo".to_owned(),
                "1 plátano maduro".to_owned(),
                "1 puñado de frutos rojos".to_owned(),
                "1 cdita de miel cruda".to_owned(),
            ],
            instructions: vec![
                "Licúa la avena, las claras y el plátano hasta obtener una mezcla homogénea.".to_owned(),
                "Cocina los pancakes en sartén antiadherente a fuego medio.".to_owned(),
                "Sirve con los frutos rojos y un hilo de miel cruda.".to_owned(),
            ],
            image: "https://images.unsplash.com/photo-1506084868230-bb9d95c24759?q=80&w=800&auto=format&fit=crop".to_owned(),
            difficulty: Difficulty::Medium,
            dietary_restrictions: vec!["Vegetariano".to_owned()],
            rating: 4.9,
            reviews: 1510,
        },
    ]
}

/// The premium gift catalog (read-only)
#[must_use]
pub fn premium_gifts() -> Vec<Gift> {
    vec![
        Gift {
            id: "gift-guia-biohacking".to_owned(),
            title: "Guía de Biohacking Metabólico".to_owned(),
            description: "Protocolo de 30 días para acelerar tu metabolismo.".to_owned(),
            long_description: "Una guía paso a paso con los protocolos de ayuno, termogénesis y suplementación que usan los atletas de élite.".to_owned(),
            icon: "fa-dna".to_owned(),
            gift_type: GiftType::Guide,
            value: "$49 USD".to_owned(),
            tag: "Exclusivo".to_owned(),
        },
        Gift {
            id: "gift-masterclass-chef".to_owned(),
            title: "Masterclass con Chef Michelin".to_owned(),
            description: "3 horas de técnicas de cocina saludable de lujo.".to_owned(),
            long_description: "Acceso de por vida a la masterclass grabada: emplatado, sellado perfecto y salsas funcionales sin azúcar.".to_owned(),
            icon: "fa-clapperboard".to_owned(),
            gift_type: GiftType::Video,
            value: "$120 USD".to_owned(),
            tag: "Más Popular".to_owned(),
        },
        Gift {
            id: "gift-recetario-pdf".to_owned(),
            title: "Recetario Elite 2024".to_owned(),
            description: "150 recetas premium en PDF descargable.".to_owned(),
            long_description: "El recetario completo del club con macros calculados, listas de compras y variaciones por objetivo.".to_owned(),
            icon: "fa-file-pdf".to_owned(),
            gift_type: GiftType::Pdf,
            value: "$35 USD".to_owned(),
            tag: "Nuevo".to_owned(),
        },
        Gift {
            id: "gift-app-macros".to_owned(),
            title: "Calculadora de Macros Pro".to_owned(),
            description: "Licencia anual del software de seguimiento.".to_owned(),
            long_description: "Herramienta de escritorio para planificar tus macronutrientes semana a semana, sincronizada con tu objetivo.".to_owned(),
            icon: "fa-calculator".to_owned(),
            gift_type: GiftType::Software,
            value: "$60 USD".to_owned(),
            tag: "Premium".to_owned(),
        },
    ]
}
