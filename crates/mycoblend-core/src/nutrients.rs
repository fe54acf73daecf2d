// ABOUTME: Closed nutrient vocabulary with regional spelling tolerance
// ABOUTME: Canonical keys, display units, comparison direction, and value formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! The nutrient vocabulary.
//!
//! Reference data arrives keyed by label strings that vary by region
//! ("Dietary Fiber" vs "Dietary Fibre", "Carbohydrate" vs "Total
//! Carbohydrate"). Modelling nutrients as a closed enum whose parser accepts
//! every regional spelling keeps one logical nutrient from splitting into
//! two table entries, which is exactly the bug class the old spelling-keyed
//! lookups invited.

use crate::errors::BlendError;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A nutrient tracked by the reference tables and nutrition panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    /// Energy in kilojoules
    EnergyKj,
    /// Energy in kilocalories
    EnergyKcal,
    /// Total fat (g)
    TotalFat,
    /// Saturated fat (g)
    SaturatedFat,
    /// Trans fat (g)
    TransFat,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sodium (mg)
    Sodium,
    /// Salt (g)
    Salt,
    /// Carbohydrate (g)
    Carbohydrate,
    /// Total sugars (g)
    TotalSugars,
    /// Added sugars (g)
    AddedSugars,
    /// Dietary fiber (g)
    Fiber,
    /// Protein (g)
    Protein,
    /// Vitamin D (micrograms)
    VitaminD,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Potassium (mg)
    Potassium,
}

impl Nutrient {
    /// Canonical data key for this nutrient.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EnergyKj => "Energy (kJ)",
            Self::EnergyKcal => "Energy (Calories)",
            Self::TotalFat => "Total Fat",
            Self::SaturatedFat => "Saturated Fat",
            Self::TransFat => "Trans Fat",
            Self::Cholesterol => "Cholesterol",
            Self::Sodium => "Sodium",
            Self::Salt => "Salt",
            Self::Carbohydrate => "Carbohydrate",
            Self::TotalSugars => "Total Sugars",
            Self::AddedSugars => "Added Sugars",
            Self::Fiber => "Dietary Fiber",
            Self::Protein => "Protein",
            Self::VitaminD => "Vitamin D",
            Self::Calcium => "Calcium",
            Self::Iron => "Iron",
            Self::Potassium => "Potassium",
        }
    }

    /// Display unit for this nutrient.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::EnergyKj => "kJ",
            Self::EnergyKcal => "kcal",
            Self::TotalFat
            | Self::SaturatedFat
            | Self::TransFat
            | Self::Salt
            | Self::Carbohydrate
            | Self::TotalSugars
            | Self::AddedSugars
            | Self::Fiber
            | Self::Protein => "g",
            Self::Cholesterol | Self::Sodium | Self::Calcium | Self::Iron | Self::Potassium => {
                "mg"
            }
            Self::VitaminD => "µg",
        }
    }

    /// Whether a lower blend value reads as an improvement over the beef
    /// reference. The complement set (fiber, protein, micronutrients) reads
    /// higher-is-better.
    #[must_use]
    pub const fn lower_is_better(self) -> bool {
        match self {
            Self::EnergyKj
            | Self::EnergyKcal
            | Self::TotalFat
            | Self::SaturatedFat
            | Self::TransFat
            | Self::Cholesterol
            | Self::Sodium
            | Self::Carbohydrate
            | Self::TotalSugars
            | Self::AddedSugars
            | Self::Salt => true,
            Self::Fiber
            | Self::Protein
            | Self::VitaminD
            | Self::Calcium
            | Self::Iron
            | Self::Potassium => false,
        }
    }

    /// Format a value of this nutrient for display.
    ///
    /// Energy and sodium round to whole numbers; values under 1 keep two
    /// decimals; everything else keeps one.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        if value == 0.0 {
            return "0".into();
        }
        match self {
            Self::EnergyKj | Self::EnergyKcal | Self::Sodium => {
                format!("{}", value.round() as i64)
            }
            _ if value < 1.0 => format!("{value:.2}"),
            _ => format!("{value:.1}"),
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Nutrient {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "energy (kj)" => Ok(Self::EnergyKj),
            "energy (calories)" | "energy (kcal)" | "calories" => Ok(Self::EnergyKcal),
            "total fat" | "fat" => Ok(Self::TotalFat),
            "saturated fat" | "saturates" => Ok(Self::SaturatedFat),
            "trans fat" => Ok(Self::TransFat),
            "cholesterol" => Ok(Self::Cholesterol),
            "sodium" => Ok(Self::Sodium),
            "salt" => Ok(Self::Salt),
            "carbohydrate" | "total carbohydrate" => Ok(Self::Carbohydrate),
            "total sugars" | "sugars" => Ok(Self::TotalSugars),
            "added sugars" => Ok(Self::AddedSugars),
            "dietary fiber" | "dietary fibre" | "fiber" | "fibre" => Ok(Self::Fiber),
            "protein" => Ok(Self::Protein),
            "vitamin d" => Ok(Self::VitaminD),
            "calcium" => Ok(Self::Calcium),
            "iron" => Ok(Self::Iron),
            "potassium" => Ok(Self::Potassium),
            other => Err(BlendError::invalid_input(format!(
                "Unknown nutrient: '{other}'. Use a panel key such as 'Energy (kJ)', 'Total Fat', 'Dietary Fibre', or 'Protein'"
            ))),
        }
    }
}

impl Serialize for Nutrient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Nutrient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_spellings_collapse_to_one_variant() {
        assert_eq!("Dietary Fiber".parse::<Nutrient>().unwrap(), Nutrient::Fiber);
        assert_eq!("Dietary Fibre".parse::<Nutrient>().unwrap(), Nutrient::Fiber);
        assert_eq!(
            "Total Carbohydrate".parse::<Nutrient>().unwrap(),
            Nutrient::Carbohydrate
        );
        assert_eq!(
            "Carbohydrate".parse::<Nutrient>().unwrap(),
            Nutrient::Carbohydrate
        );
    }

    #[test]
    fn unknown_nutrient_is_rejected() {
        assert!("Umami".parse::<Nutrient>().is_err());
    }

    #[test]
    fn formatting_follows_panel_rules() {
        assert_eq!(Nutrient::Protein.format_value(0.0), "0");
        assert_eq!(Nutrient::EnergyKj.format_value(1063.4), "1063");
        assert_eq!(Nutrient::Sodium.format_value(66.7), "67");
        assert_eq!(Nutrient::Salt.format_value(0.168), "0.17");
        assert_eq!(Nutrient::Protein.format_value(17.25), "17.2");
    }

    #[test]
    fn direction_sets_are_exhaustive_and_disjoint() {
        assert!(Nutrient::Salt.lower_is_better());
        assert!(Nutrient::EnergyKcal.lower_is_better());
        assert!(!Nutrient::Fiber.lower_is_better());
        assert!(!Nutrient::Potassium.lower_is_better());
    }

    #[test]
    fn serde_uses_canonical_keys() {
        let json = serde_json::to_string(&Nutrient::Fiber).unwrap();
        assert_eq!(json, "\"Dietary Fiber\"");
        let parsed: Nutrient = serde_json::from_str("\"Dietary Fibre\"").unwrap();
        assert_eq!(parsed, Nutrient::Fiber);
    }
}
