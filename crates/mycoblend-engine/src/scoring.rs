// ABOUTME: Multi-criteria candidate scoring under priority weight profiles
// ABOUTME: Nutrition composite, balance-only shaping, and strict-greater winner pick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Candidate scoring.
//!
//! Each candidate's raw metrics are normalized across the pool, folded into
//! a nutrition composite, then weighted by the caller's priority:
//!
//! - nutrition composite = `√(0.35·fiber + 0.35·protein + 0.20·calories +
//!   0.10·satfat)`, the square root giving diminishing returns;
//! - final score = `n·nutrition + c·cost + s·co2` with the priority's
//!   weight triple;
//! - balance priority only: a multiplicative trim penalty per step below
//!   the caller's ceiling, then an additive Gaussian bonus centred on the
//!   40% non-beef recipe.
//!
//! The winner is the strictly greatest final score; ties keep the earliest
//! candidate in enumeration order.

use crate::config::ScoringConfig;
use crate::enumerate::Candidate;
use crate::normalize::{normalize, normalize_padded};
use mycoblend_core::constants::scoring_shape;
use mycoblend_core::BlendError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The caller's stated optimization priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Minimize blend cost; nothing else influences the score
    Cost,
    /// Maximize the nutrition composite with small cost/CO₂e influence
    Nutrition,
    /// Even nutrition/cost split with trim and recipe shaping
    #[default]
    Balance,
    /// Minimize CO₂e with small nutrition/cost influence
    Sustainability,
}

impl Priority {
    /// All priorities, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Cost, Self::Nutrition, Self::Balance, Self::Sustainability]
    }

    /// Lowercase name as used in configuration and the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Nutrition => "nutrition",
            Self::Balance => "balance",
            Self::Sustainability => "sustainability",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cost" => Ok(Self::Cost),
            "nutrition" => Ok(Self::Nutrition),
            "balance" => Ok(Self::Balance),
            "sustainability" => Ok(Self::Sustainability),
            other => Err(BlendError::invalid_input(format!(
                "Unknown priority: '{other}'. Supported: cost, nutrition, balance, sustainability"
            ))),
        }
    }
}

/// A candidate's scores, parallel to the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Nutrition composite in [0, 1]
    pub nutrition: f64,
    /// Final priority-weighted score
    pub final_score: f64,
}

/// Score every candidate in the pool.
///
/// `ceiling_index` is the caller's trim position in the lean order; the
/// balance trim penalty counts steps below it.
#[must_use]
pub fn score_pool(
    candidates: &[Candidate],
    ceiling_index: usize,
    priority: Priority,
    config: &ScoringConfig,
) -> Vec<Scores> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let metric = |f: fn(&Candidate) -> f64| candidates.iter().map(f).collect::<Vec<_>>();
    let n_fiber = normalize(&metric(|c| c.fiber), false);
    let n_protein = normalize(&metric(|c| c.protein), false);
    let n_calories = normalize(&metric(|c| c.calories), true);
    let n_satfat = normalize(&metric(|c| c.saturated_fat), true);
    let n_cost = normalize_padded(&metric(|c| c.cost), true, config.pads.cost);
    let n_co2 = normalize_padded(&metric(|c| c.co2), true, config.pads.co2);

    let nw = config.nutrition_weights;
    let pw = config.weights_for(priority);

    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let nutrition_raw = nw.fiber * n_fiber[i]
                + nw.protein * n_protein[i]
                + nw.calories * n_calories[i]
                + nw.saturated_fat * n_satfat[i];
            let nutrition = nutrition_raw.sqrt();

            let raw = pw.nutrition * nutrition + pw.cost * n_cost[i] + pw.sustainability * n_co2[i];
            let final_score = if priority == Priority::Balance {
                let steps_below_ceiling = candidate
                    .trim
                    .lean_order_index()
                    .map_or(0, |idx| ceiling_index.saturating_sub(idx));
                let penalized =
                    raw * (1.0 - config.balance.trim_penalty * steps_below_ceiling as f64);
                let offset = candidate.ratios.non_beef() - scoring_shape::RECIPE_BONUS_CENTER;
                let bonus = config.balance.recipe_bonus
                    * (-(offset * offset)
                        / (2.0 * scoring_shape::RECIPE_BONUS_SIGMA * scoring_shape::RECIPE_BONUS_SIGMA))
                        .exp();
                penalized + bonus
            } else {
                raw
            };

            Scores {
                nutrition,
                final_score,
            }
        })
        .collect()
}

/// Index of the winning candidate: strictly greatest final score, earliest
/// on ties. `None` only for an empty pool.
#[must_use]
pub fn pick_winner(scores: &[Scores]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if score.final_score > scores[best].final_score {
            best = i;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mycoblend_core::{BlendRatios, TrimGrade};

    fn candidate(cl: u8, non_beef: f64, cost: f64, co2: f64, fiber: f64) -> Candidate {
        Candidate {
            recipe_name: format!("{}/{} test", 100.0 - non_beef * 100.0, non_beef * 100.0),
            trim: TrimGrade::new(cl),
            ratios: BlendRatios::new(1.0 - non_beef, non_beef, 0.0),
            fiber,
            protein: 16.0,
            energy_kj: 1000.0,
            calories: 239.0,
            saturated_fat: 4.0,
            cost,
            co2,
            blended_fat: 0.18,
        }
    }

    #[test]
    fn cost_priority_winner_has_minimum_cost() {
        let pool = vec![
            candidate(80, 0.30, 3.20, 20.0, 7.0),
            candidate(80, 0.40, 2.70, 18.0, 9.6),
            candidate(90, 0.30, 3.90, 20.0, 7.0),
        ];
        let scores = score_pool(&pool, 4, Priority::Cost, &ScoringConfig::default());
        let winner = pick_winner(&scores).unwrap();
        let min_cost = pool
            .iter()
            .map(|c| c.cost)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(pool[winner].cost, min_cost);
    }

    #[test]
    fn balance_penalty_decreases_strictly_with_steps_below_ceiling() {
        // Identical metrics, trims stepping away from the 90CL ceiling
        let pool = vec![
            candidate(90, 0.40, 3.0, 20.0, 9.6),
            candidate(85, 0.40, 3.0, 20.0, 9.6),
            candidate(80, 0.40, 3.0, 20.0, 9.6),
        ];
        let scores = score_pool(&pool, 6, Priority::Balance, &ScoringConfig::default());
        assert!(scores[0].final_score > scores[1].final_score);
        assert!(scores[1].final_score > scores[2].final_score);
    }

    #[test]
    fn recipe_bonus_peaks_at_forty_percent_non_beef() {
        let pool = vec![
            candidate(80, 0.40, 3.0, 20.0, 9.6),
            candidate(80, 0.30, 3.0, 20.0, 9.6),
            candidate(80, 0.20, 3.0, 20.0, 9.6),
        ];
        let mut config = ScoringConfig::default();
        // isolate the bonus: no trim penalty, fiber spread would otherwise differ
        config.balance.trim_penalty = 0.0;
        let scores = score_pool(&pool, 4, Priority::Balance, &config);
        assert!(scores[0].final_score > scores[1].final_score);
        assert!(scores[1].final_score > scores[2].final_score);
    }

    #[test]
    fn ties_resolve_to_enumeration_order() {
        let pool = vec![
            candidate(80, 0.30, 3.0, 20.0, 7.0),
            candidate(80, 0.30, 3.0, 20.0, 7.0),
        ];
        let scores = score_pool(&pool, 4, Priority::Nutrition, &ScoringConfig::default());
        assert_eq!(scores[0].final_score, scores[1].final_score);
        assert_eq!(pick_winner(&scores), Some(0));
    }

    #[test]
    fn empty_pool_has_no_winner() {
        let scores = score_pool(&[], 4, Priority::Balance, &ScoringConfig::default());
        assert!(scores.is_empty());
        assert_eq!(pick_winner(&scores), None);
    }

    #[test]
    fn identical_inputs_score_identically() {
        let pool = vec![
            candidate(80, 0.30, 3.2, 20.0, 7.2),
            candidate(80, 0.40, 2.7, 18.0, 9.6),
        ];
        let config = ScoringConfig::default();
        let first = score_pool(&pool, 4, Priority::Balance, &config);
        let second = score_pool(&pool, 4, Priority::Balance, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn priority_names_round_trip() {
        for priority in Priority::all() {
            assert_eq!(priority.name().parse::<Priority>().unwrap(), priority);
        }
        assert!("speed".parse::<Priority>().is_err());
        assert_eq!(Priority::default(), Priority::Balance);
    }
}
