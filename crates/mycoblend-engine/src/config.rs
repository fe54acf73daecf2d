// ABOUTME: Scoring engine configuration with per-tunable defaults
// ABOUTME: Merges flat key/value overrides from the upstream scoring_config table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Scoring Engine Configuration
//!
//! Every tunable the scoring engine reads lives here with an explicit
//! default. Overrides arrive either as a partial JSON object (missing fields
//! keep their defaults) or as flat key/value rows in the upstream
//! `scoring_config` shape, merged exactly once at engine construction.

use crate::scoring::Priority;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A scoring override row as the upstream `scoring_config` table stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRow {
    /// Flat tunable key, e.g. "cost_pad" or "balance_recipe_bonus"
    pub key: String,
    /// Override value
    pub value: f64,
}

/// Padding factors for the padded normalizer.
///
/// Padding widens the normalization window by `pad × spread` on each side so
/// real differences land mid-scale instead of pinning candidates to 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationPads {
    /// Pad applied to the cost dimension
    pub cost: f64,
    /// Pad applied to the CO₂e dimension
    pub co2: f64,
}

/// Weights for the nutrition composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionWeights {
    /// Fiber weight (higher fiber is better)
    pub fiber: f64,
    /// Protein weight (higher protein is better)
    pub protein: f64,
    /// Calorie weight (lower calories are better)
    pub calories: f64,
    /// Saturated fat weight (lower saturated fat is better)
    pub saturated_fat: f64,
}

/// One priority's weighting of the three normalized dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight on the nutrition composite
    pub nutrition: f64,
    /// Weight on normalized cost
    pub cost: f64,
    /// Weight on normalized CO₂e
    pub sustainability: f64,
}

/// The weight triple for each selectable priority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeightTable {
    /// Pure cost: nothing else influences the score
    pub cost: PriorityWeights,
    /// Nutrition-led with small cost and sustainability influence
    pub nutrition: PriorityWeights,
    /// Even nutrition/cost split, sustainability excluded
    pub balance: PriorityWeights,
    /// Sustainability-led with small nutrition and cost influence
    pub sustainability: PriorityWeights,
}

/// Shaping applied only under the balance priority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceShaping {
    /// Multiplicative penalty per trim step below the caller's ceiling
    pub trim_penalty: f64,
    /// Peak of the Gaussian bonus centred on the 40% non-beef recipe
    pub recipe_bonus: f64,
}

/// All scoring tunables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Normalization pads for cost and CO₂e
    pub pads: NormalizationPads,
    /// Nutrition composite weights
    pub nutrition_weights: NutritionWeights,
    /// Per-priority dimension weights
    pub priority_weights: PriorityWeightTable,
    /// Balance-only shaping
    pub balance: BalanceShaping,
}

impl Default for NormalizationPads {
    fn default() -> Self {
        Self { cost: 1.5, co2: 1.0 }
    }
}

impl Default for NutritionWeights {
    fn default() -> Self {
        Self {
            fiber: 0.35,
            protein: 0.35,
            calories: 0.20,
            saturated_fat: 0.10,
        }
    }
}

impl Default for PriorityWeightTable {
    fn default() -> Self {
        Self {
            cost: PriorityWeights {
                nutrition: 0.0,
                cost: 1.0,
                sustainability: 0.0,
            },
            nutrition: PriorityWeights {
                nutrition: 1.0,
                cost: 0.15,
                sustainability: 0.10,
            },
            balance: PriorityWeights {
                nutrition: 0.50,
                cost: 0.50,
                sustainability: 0.0,
            },
            sustainability: PriorityWeights {
                nutrition: 0.15,
                cost: 0.10,
                sustainability: 1.0,
            },
        }
    }
}

impl Default for BalanceShaping {
    fn default() -> Self {
        Self {
            trim_penalty: 0.05,
            recipe_bonus: 0.12,
        }
    }
}

impl ScoringConfig {
    /// The weight triple for a priority.
    #[must_use]
    pub const fn weights_for(&self, priority: Priority) -> PriorityWeights {
        match priority {
            Priority::Cost => self.priority_weights.cost,
            Priority::Nutrition => self.priority_weights.nutrition,
            Priority::Balance => self.priority_weights.balance,
            Priority::Sustainability => self.priority_weights.sustainability,
        }
    }

    /// Merge flat key/value override rows onto this configuration.
    ///
    /// Keys follow the upstream `scoring_config` naming. Unknown keys are
    /// logged at WARN and ignored so a stray row cannot poison the engine.
    pub fn apply_rows(&mut self, rows: &[ScoringRow]) {
        for row in rows {
            let value = row.value;
            match row.key.as_str() {
                "cost_pad" => self.pads.cost = value,
                "co2_pad" => self.pads.co2 = value,
                "nutr_w_fiber" => self.nutrition_weights.fiber = value,
                "nutr_w_protein" => self.nutrition_weights.protein = value,
                "nutr_w_calories" => self.nutrition_weights.calories = value,
                "nutr_w_satfat" => self.nutrition_weights.saturated_fat = value,
                "cost_n" => self.priority_weights.cost.nutrition = value,
                "cost_c" => self.priority_weights.cost.cost = value,
                "cost_s" => self.priority_weights.cost.sustainability = value,
                "nutrition_n" => self.priority_weights.nutrition.nutrition = value,
                "nutrition_c" => self.priority_weights.nutrition.cost = value,
                "nutrition_s" => self.priority_weights.nutrition.sustainability = value,
                "balance_n" => self.priority_weights.balance.nutrition = value,
                "balance_c" => self.priority_weights.balance.cost = value,
                "balance_s" => self.priority_weights.balance.sustainability = value,
                "sustainability_n" => self.priority_weights.sustainability.nutrition = value,
                "sustainability_c" => self.priority_weights.sustainability.cost = value,
                "sustainability_s" => self.priority_weights.sustainability.sustainability = value,
                "balance_trim_penalty" => self.balance.trim_penalty = value,
                "balance_recipe_bonus" => self.balance.recipe_bonus = value,
                unknown => warn!(key = unknown, value, "Ignoring unknown scoring config key"),
            }
        }
    }

    /// Defaults plus a set of override rows.
    #[must_use]
    pub fn from_rows(rows: &[ScoringRow]) -> Self {
        let mut config = Self::default();
        config.apply_rows(rows);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_tunables() {
        let config = ScoringConfig::default();
        assert_eq!(config.pads.cost, 1.5);
        assert_eq!(config.pads.co2, 1.0);
        assert_eq!(config.nutrition_weights.fiber, 0.35);
        assert_eq!(config.nutrition_weights.saturated_fat, 0.10);
        assert_eq!(config.priority_weights.cost.cost, 1.0);
        assert_eq!(config.priority_weights.cost.nutrition, 0.0);
        assert_eq!(config.priority_weights.balance.sustainability, 0.0);
        assert_eq!(config.balance.trim_penalty, 0.05);
        assert_eq!(config.balance.recipe_bonus, 0.12);
    }

    #[test]
    fn rows_override_only_named_keys() {
        let rows = vec![
            ScoringRow {
                key: "cost_pad".into(),
                value: 2.0,
            },
            ScoringRow {
                key: "balance_n".into(),
                value: 0.6,
            },
            ScoringRow {
                key: "no_such_key".into(),
                value: 9.9,
            },
        ];
        let config = ScoringConfig::from_rows(&rows);
        assert_eq!(config.pads.cost, 2.0);
        assert_eq!(config.priority_weights.balance.nutrition, 0.6);
        assert_eq!(config.priority_weights.balance.cost, 0.50);
        assert_eq!(config.balance.recipe_bonus, 0.12);
    }

    #[test]
    fn partial_json_merges_onto_defaults() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"pads":{"cost":0.5},"balance":{"trim_penalty":0.1}}"#)
                .unwrap();
        assert_eq!(config.pads.cost, 0.5);
        assert_eq!(config.pads.co2, 1.0);
        assert_eq!(config.balance.trim_penalty, 0.1);
        assert_eq!(config.balance.recipe_bonus, 0.12);
    }

    #[test]
    fn weights_resolve_per_priority() {
        let config = ScoringConfig::default();
        let w = config.weights_for(Priority::Sustainability);
        assert_eq!(w.sustainability, 1.0);
        assert_eq!(w.nutrition, 0.15);
        assert_eq!(w.cost, 0.10);
    }
}
