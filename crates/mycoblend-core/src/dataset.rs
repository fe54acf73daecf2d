// ABOUTME: In-memory reference dataset: trim prices, recipes, nutrition, CO2 factors
// ABOUTME: Direct construction plus tolerant ingestion from flat data-source rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! The reference dataset the engine computes over.
//!
//! All tables are plain in-memory lookups, loaded before the engine runs.
//! Insertion order is semantic: tie-breaks and degenerate defaults resolve to
//! the first entry in table order, so every table is an [`IndexMap`].

use crate::errors::BlendError;
use crate::nutrients::Nutrient;
use crate::trim::{TrimData, TrimGrade, TrimTable};
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Tolerance for matching a caller's fat ceiling against a trim's fat
/// fraction. Ceilings are quantized to 0.05 steps, so anything tighter than
/// this is a representation artifact.
const FAT_MATCH_EPSILON: f64 = 1e-9;

/// Product format a blend is sold in.
///
/// Formed products (burgers, meatballs) need binding strength, which rules
/// out rehydrated and half-beef recipes during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductFormat {
    /// Formed products: burgers and meatballs
    BurgerMeatball,
    /// Unformed ground beef / mince
    GroundBeef,
}

impl ProductFormat {
    /// Canonical data key for this format.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BurgerMeatball => "Burger / Meatball",
            Self::GroundBeef => "Ground Beef (unformed)",
        }
    }

    /// Whether this format is formed and therefore subject to the binding
    /// recipe exclusions.
    #[must_use]
    pub const fn is_formed(self) -> bool {
        matches!(self, Self::BurgerMeatball)
    }
}

impl fmt::Display for ProductFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProductFormat {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "burger / meatball" | "burger/meatball" | "burger" | "meatball" | "formed" => {
                Ok(Self::BurgerMeatball)
            }
            "ground beef (unformed)" | "ground beef" | "ground" | "mince" | "unformed" => {
                Ok(Self::GroundBeef)
            }
            other => Err(BlendError::invalid_input(format!(
                "Unknown product format: '{other}'. Supported: 'Burger / Meatball', 'Ground Beef (unformed)'"
            ))),
        }
    }
}

impl Serialize for ProductFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ProductFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Mass fractions of a blend recipe. Nominally sum to 1; the dataset author
/// is responsible for that, not this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendRatios {
    /// Beef mass fraction in [0, 1]
    pub beef: f64,
    /// Mushroom extract mass fraction in [0, 1]
    pub extract: f64,
    /// Added water mass fraction in [0, 1]
    pub water: f64,
}

impl BlendRatios {
    /// Build ratios from the three mass fractions.
    #[must_use]
    pub const fn new(beef: f64, extract: f64, water: f64) -> Self {
        Self {
            beef,
            extract,
            water,
        }
    }

    /// Combined non-beef share (extract + water). The balance recipe bonus
    /// centers on this.
    #[must_use]
    pub fn non_beef(self) -> f64 {
        self.extract + self.water
    }
}

/// Recipes per product format, keyed by recipe name, in dataset order.
pub type RecipeTable = IndexMap<ProductFormat, IndexMap<String, BlendRatios>>;

/// Per-100 g nutrient values for the extract and for each beef trim.
///
/// Absent entries read as zero everywhere, mirroring how the reference data
/// behaves when a market's tables omit a nutrient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientReference {
    /// Extract nutrients per 100 g
    pub extract: IndexMap<Nutrient, f64>,
    /// Beef nutrients per 100 g, keyed by trim grade
    pub beef: IndexMap<TrimGrade, IndexMap<Nutrient, f64>>,
}

impl NutrientReference {
    /// Extract nutrient value, zero when absent.
    #[must_use]
    pub fn extract_value(&self, nutrient: Nutrient) -> f64 {
        self.extract.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Beef nutrient value for a trim, zero when absent.
    #[must_use]
    pub fn beef_value(&self, trim: TrimGrade, nutrient: Nutrient) -> f64 {
        self.beef
            .get(&trim)
            .and_then(|table| table.get(&nutrient))
            .copied()
            .unwrap_or(0.0)
    }
}

/// The full in-memory dataset: trim prices, recipes, nutrient reference, and
/// CO₂e factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Trim grades with fat fraction and price, in dataset order
    pub trims: TrimTable,
    /// Recipes per product format
    pub recipes: RecipeTable,
    /// Nutrient reference values
    pub reference: NutrientReference,
    /// Extract CO₂e per kg
    pub extract_co2: f64,
    /// Beef CO₂e per kg
    pub beef_co2: f64,
}

/// A beef price row as the upstream `beef_prices` table stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimPriceRow {
    /// Trim display name, e.g. "80CL Beef Trim"
    pub trim: String,
    /// Fat fraction in [0, 1] (the upstream column name, kept as-is)
    pub fat_pct: f64,
    /// Price per market pricing unit
    pub price: f64,
}

/// A recipe row as the upstream `recipes` table stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRow {
    /// Product format key
    pub format: String,
    /// Recipe display name, e.g. "70/30, no water"
    pub recipe: String,
    /// Beef mass fraction
    pub beef_pct: f64,
    /// Extract mass fraction
    #[serde(alias = "fable_pct")]
    pub extract_pct: f64,
    /// Water mass fraction
    pub water_pct: f64,
}

/// A nutrition row as the upstream `nutrition` table stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRow {
    /// "extract" (or the legacy "shiitake") or a trim display name
    pub ingredient: String,
    /// Nutrient label, regional spellings accepted
    pub nutrient: String,
    /// Value per 100 g
    pub value: f64,
    /// Display unit carried by the upstream table; units here derive from
    /// the nutrient itself, so this is accepted and ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A CO₂e row as the upstream `co2_kg_e` table stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Row {
    /// "beef" or "extract" (or the legacy "shiitake")
    pub ingredient: String,
    /// kg CO₂e per kg of ingredient
    pub co2_per_kg: f64,
}

fn is_extract_ingredient(name: &str) -> bool {
    let lowered = name.trim().to_lowercase();
    lowered == "extract" || lowered == "shiitake"
}

impl Dataset {
    /// Build a dataset from already-typed tables.
    #[must_use]
    pub const fn new(
        trims: TrimTable,
        recipes: RecipeTable,
        reference: NutrientReference,
        extract_co2: f64,
        beef_co2: f64,
    ) -> Self {
        Self {
            trims,
            recipes,
            reference,
            extract_co2,
            beef_co2,
        }
    }

    /// Assemble a dataset from flat rows in the upstream table shapes.
    ///
    /// Rows that fail to parse (unknown trim name, format, nutrient, or
    /// ingredient) are logged at WARN and skipped rather than failing the
    /// whole load; insertion order of the surviving rows is preserved.
    #[must_use]
    pub fn from_rows(
        trim_rows: &[TrimPriceRow],
        recipe_rows: &[RecipeRow],
        nutrition_rows: &[NutritionRow],
        co2_rows: &[Co2Row],
    ) -> Self {
        let mut trims = TrimTable::default();
        for row in trim_rows {
            match row.trim.parse::<TrimGrade>() {
                Ok(grade) => {
                    trims.insert(
                        grade,
                        TrimData {
                            fat_fraction: row.fat_pct,
                            price: row.price,
                        },
                    );
                }
                Err(err) => warn!(trim = %row.trim, %err, "Skipping unparseable beef price row"),
            }
        }

        let mut recipes = RecipeTable::default();
        for row in recipe_rows {
            match row.format.parse::<ProductFormat>() {
                Ok(format) => {
                    recipes.entry(format).or_default().insert(
                        row.recipe.clone(),
                        BlendRatios::new(row.beef_pct, row.extract_pct, row.water_pct),
                    );
                }
                Err(err) => warn!(format = %row.format, %err, "Skipping unparseable recipe row"),
            }
        }

        let mut reference = NutrientReference::default();
        for row in nutrition_rows {
            let nutrient = match row.nutrient.parse::<Nutrient>() {
                Ok(n) => n,
                Err(err) => {
                    warn!(nutrient = %row.nutrient, %err, "Skipping unknown nutrient row");
                    continue;
                }
            };
            if is_extract_ingredient(&row.ingredient) {
                reference.extract.insert(nutrient, row.value);
            } else {
                match row.ingredient.parse::<TrimGrade>() {
                    Ok(grade) => {
                        reference
                            .beef
                            .entry(grade)
                            .or_default()
                            .insert(nutrient, row.value);
                    }
                    Err(err) => {
                        warn!(ingredient = %row.ingredient, %err, "Skipping unknown nutrition ingredient");
                    }
                }
            }
        }

        let mut extract_co2 = 0.0;
        let mut beef_co2 = 0.0;
        for row in co2_rows {
            if is_extract_ingredient(&row.ingredient) {
                extract_co2 = row.co2_per_kg;
            } else if row.ingredient.trim().eq_ignore_ascii_case("beef") {
                beef_co2 = row.co2_per_kg;
            } else {
                warn!(ingredient = %row.ingredient, "Skipping unknown CO2 ingredient");
            }
        }

        Self::new(trims, recipes, reference, extract_co2, beef_co2)
    }

    /// Find the trim whose fat fraction matches a caller's fat ceiling.
    #[must_use]
    pub fn trim_for_fat(&self, fat_fraction: f64) -> Option<TrimGrade> {
        self.trims
            .iter()
            .find(|(_, data)| (data.fat_fraction - fat_fraction).abs() < FAT_MATCH_EPSILON)
            .map(|(grade, _)| *grade)
    }

    /// Fat fractions available in the trim table, in dataset order. Used for
    /// the unmatched-ceiling error message.
    #[must_use]
    pub fn available_fat_fractions(&self) -> Vec<f64> {
        self.trims.values().map(|data| data.fat_fraction).collect()
    }

    /// Recipes for a product format, if the dataset has any.
    #[must_use]
    pub fn recipes_for(&self, format: ProductFormat) -> Option<&IndexMap<String, BlendRatios>> {
        self.recipes.get(&format)
    }

    /// Extract fat as a mass fraction (the reference stores grams per 100 g).
    #[must_use]
    pub fn extract_fat_fraction(&self) -> f64 {
        self.reference.extract_value(Nutrient::TotalFat) / 100.0
    }

    /// Extract fiber in grams per 100 g.
    #[must_use]
    pub fn extract_fiber(&self) -> f64 {
        self.reference.extract_value(Nutrient::Fiber)
    }
}
