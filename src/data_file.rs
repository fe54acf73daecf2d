// ABOUTME: JSON file loading for reference datasets and scoring overrides
// ABOUTME: Reads row-oriented data files from disk into typed Dataset and ScoringConfig values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! # Data File Loading
//!
//! Reads the row-oriented JSON files accepted by `mycoblend-cli` and turns
//! them into typed values. A dataset file carries the four reference tables:
//!
//! ```json
//! {
//!   "trim_prices": [{ "trim": "80CL Beef Trim", "fat_pct": 0.20, "price": 3.10 }],
//!   "recipes": [{ "format": "Burger / Meatball", "recipe": "70/30, no water",
//!                 "beef_pct": 0.70, "extract_pct": 0.30, "water_pct": 0.0 }],
//!   "nutrition": [{ "ingredient": "extract", "nutrient": "Dietary Fiber", "value": 24.0 }],
//!   "co2": [{ "ingredient": "beef", "co2_per_kg": 27.0 }]
//! }
//! ```
//!
//! A scoring file is a flat key/value object of tunable overrides, e.g.
//! `{ "cost_pad": 2.0, "balance_trim_penalty": 0.08 }`. Unknown keys are
//! logged and ignored; absent keys keep their defaults.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use mycoblend_core::dataset::{Co2Row, NutritionRow, RecipeRow, TrimPriceRow};
use mycoblend_core::{BlendError, BlendResult, Dataset};
use mycoblend_engine::{ScoringConfig, ScoringRow};

/// Row-oriented dataset file contents
///
/// Every table is optional in the file; missing tables load as empty, and
/// the engine degrades accordingly (no CO₂ table means no carbon summary).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataFile {
    /// Trim price table rows
    #[serde(default)]
    pub trim_prices: Vec<TrimPriceRow>,
    /// Recipe table rows
    #[serde(default)]
    pub recipes: Vec<RecipeRow>,
    /// Per-100 g nutrition rows for the extract and each trim
    #[serde(default)]
    pub nutrition: Vec<NutritionRow>,
    /// Carbon intensity rows
    #[serde(default)]
    pub co2: Vec<Co2Row>,
}

impl DataFile {
    /// Assemble the in-memory dataset from the parsed rows
    #[must_use]
    pub fn into_dataset(self) -> Dataset {
        Dataset::from_rows(&self.trim_prices, &self.recipes, &self.nutrition, &self.co2)
    }
}

/// Load a reference dataset from a row-oriented JSON file
///
/// Malformed individual rows are logged and skipped by `Dataset::from_rows`;
/// only an unreadable file or invalid JSON is an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON for the
/// documented shape.
pub fn load_dataset(path: &Path) -> BlendResult<Dataset> {
    let content = fs::read_to_string(path).map_err(|e| {
        BlendError::data_invalid(format!("Failed to read data file {}: {e}", path.display()))
            .with_source(e)
    })?;

    let file: DataFile = serde_json::from_str(&content).map_err(|e| {
        BlendError::serialization(format!("Failed to parse data file {}: {e}", path.display()))
            .with_source(e)
    })?;

    Ok(file.into_dataset())
}

/// Load scoring overrides from a flat key/value JSON object
///
/// The returned configuration starts from defaults and applies each
/// recognized key once. Unknown keys are logged at WARN and skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON object of
/// numeric values.
pub fn load_scoring_config(path: &Path) -> BlendResult<ScoringConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        BlendError::config_invalid(format!(
            "Failed to read scoring file {}: {e}",
            path.display()
        ))
        .with_source(e)
    })?;

    let overrides: IndexMap<String, f64> = serde_json::from_str(&content).map_err(|e| {
        BlendError::config_invalid(format!(
            "Failed to parse scoring file {}: {e}",
            path.display()
        ))
        .with_source(e)
    })?;

    let rows: Vec<ScoringRow> = overrides
        .into_iter()
        .map(|(key, value)| ScoringRow { key, value })
        .collect();

    Ok(ScoringConfig::from_rows(&rows))
}
