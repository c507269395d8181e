// ABOUTME: Core domain models for the VidaSana recipe club
// ABOUTME: Recipe, Goal, UserProfile, and Gift value records with Spanish wire names
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Domain Models
//!
//! Value records shared across the crate. All user-facing copy and every
//! wire-level enum value is Spanish (the product locale); Rust identifiers
//! stay English. The closed enums (`RecipeCategory`, `Difficulty`, `Goal`,
//! `Gender`) derive `Deserialize` without a catch-all variant, so a payload
//! carrying a value outside the closed set fails deserialization instead of
//! being admitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

// ============================================================================
// Goal
// ============================================================================

/// The user's stated wellness objective
///
/// Selected once during onboarding and echoed into every prompt sent to the
/// generative model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// "Perder Peso"
    #[serde(rename = "Perder Peso")]
    LoseWeight,
    /// "Ganar Músculo"
    #[serde(rename = "Ganar Músculo")]
    GainMuscle,
    /// "Desintoxicación"
    #[serde(rename = "Desintoxicación")]
    Detox,
    /// "Mantenerse Sano"
    #[serde(rename = "Mantenerse Sano")]
    StayHealthy,
}

impl Goal {
    /// All goal values, in onboarding display order
    pub const ALL: [Self; 4] = [
        Self::LoseWeight,
        Self::GainMuscle,
        Self::Detox,
        Self::StayHealthy,
    ];

    /// Spanish label embedded into prompts and shown in the UI
    #[must_use]
    pub const fn as_wire_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "Perder Peso",
            Self::GainMuscle => "Ganar Músculo",
            Self::Detox => "Desintoxicación",
            Self::StayHealthy => "Mantenerse Sano",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    /// Accepts the Spanish wire label or an English kebab-case alias
    /// (`lose-weight`, `gain-muscle`, `detox`, `stay-healthy`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "perder peso" | "lose-weight" => Ok(Self::LoseWeight),
            "ganar músculo" | "ganar musculo" | "gain-muscle" => Ok(Self::GainMuscle),
            "desintoxicación" | "desintoxicacion" | "detox" => Ok(Self::Detox),
            "mantenerse sano" | "stay-healthy" => Ok(Self::StayHealthy),
            other => Err(AppError::invalid_input(format!("unknown goal: {other}"))),
        }
    }
}

// ============================================================================
// Recipe
// ============================================================================

/// Meal category for a recipe (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeCategory {
    /// "Desayuno"
    #[serde(rename = "Desayuno")]
    Breakfast,
    /// "Almuerzo"
    #[serde(rename = "Almuerzo")]
    Lunch,
    /// "Cena"
    #[serde(rename = "Cena")]
    Dinner,
    /// "Snack"
    Snack,
    /// "Postre"
    #[serde(rename = "Postre")]
    Dessert,
}

impl RecipeCategory {
    /// Wire values declared in the structured-output schema
    pub const WIRE_VALUES: [&'static str; 5] =
        ["Desayuno", "Almuerzo", "Cena", "Snack", "Postre"];
}

/// Preparation difficulty (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// "Fácil"
    #[serde(rename = "Fácil")]
    Easy,
    /// "Media"
    #[serde(rename = "Media")]
    Medium,
    /// "Avanzada"
    #[serde(rename = "Avanzada")]
    Advanced,
}

impl Difficulty {
    /// Wire values declared in the structured-output schema
    pub const WIRE_VALUES: [&'static str; 3] = ["Fácil", "Media", "Avanzada"];
}

/// A recipe shown in the club's browsing and detail views
///
/// Constructed either from the static seed catalog at startup or synthesized
/// once per successful generation cycle; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Opaque client-generated identifier
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Short marketing description
    pub description: String,
    /// Meal category
    pub category: RecipeCategory,
    /// Display time label (e.g. "25 min")
    pub time: String,
    /// Preparation time in minutes
    pub time_value: u32,
    /// Calories per serving
    pub calories: u32,
    /// Ordered ingredient lines
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Display image URL
    pub image: String,
    /// Preparation difficulty
    pub difficulty: Difficulty,
    /// Dietary restriction tags (free-form, e.g. "Sin Gluten")
    pub dietary_restrictions: Vec<String>,
    /// Display rating
    pub rating: f32,
    /// Display review count
    pub reviews: u32,
}

// ============================================================================
// UserProfile
// ============================================================================

/// Biological profile selected during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// "Masculino"
    #[serde(rename = "Masculino")]
    Male,
    /// "Femenino"
    #[serde(rename = "Femenino")]
    Female,
    /// "Otro"
    #[serde(rename = "Otro")]
    Other,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculino" | "male" => Ok(Self::Male),
            "femenino" | "female" => Ok(Self::Female),
            "otro" | "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!("unknown gender: {other}"))),
        }
    }
}

/// The single durable record of the application
///
/// Created once at onboarding completion, persisted, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age as entered in the onboarding form (string-typed numeric)
    pub age: String,
    /// Biological profile
    pub gender: Gender,
    /// Wellness objective, parameterizes every generation and insight call
    pub goal: Goal,
}

impl UserProfile {
    /// Validate the onboarding form fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the name is blank or the age is not a
    /// plausible number of years.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        match self.age.trim().parse::<u32>() {
            Ok(years) if (1..=120).contains(&years) => Ok(()),
            Ok(years) => Err(AppError::invalid_input(format!(
                "age {years} is out of range"
            ))),
            Err(_) => Err(AppError::invalid_input(format!(
                "age '{}' is not a number",
                self.age
            ))),
        }
    }
}

// ============================================================================
// Gift
// ============================================================================

/// Kind of reward in the premium catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GiftType {
    /// "PDF"
    #[serde(rename = "PDF")]
    Pdf,
    /// "Video"
    Video,
    /// "Guía"
    #[serde(rename = "Guía")]
    Guide,
    /// "Software"
    Software,
}

/// Static reward catalog entry
///
/// Sourced entirely from the built-in catalog; never generated or mutated at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    /// Catalog identifier
    pub id: String,
    /// Card title
    pub title: String,
    /// Short card description
    pub description: String,
    /// Detail view description
    pub long_description: String,
    /// Icon reference (Font Awesome class in the shipped UI)
    pub icon: String,
    /// Reward kind
    #[serde(rename = "type")]
    pub gift_type: GiftType,
    /// Display value label (e.g. "$49 USD")
    pub value: String,
    /// Badge tag (e.g. "Exclusivo")
    pub tag: String,
}
