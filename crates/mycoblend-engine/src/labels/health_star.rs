// ABOUTME: AU Health Star Rating per the FSANZ NPSC algorithm, Category 2 Foods
// ABOUTME: Baseline and modifying points, the protein tipping rule, and star mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! AU Health Star Rating.
//!
//! Implements the FSANZ Nutrient Profiling Scoring Criterion for Category 2
//! (general foods), as published in the Health Star Rating Calculator's
//! points tables. Baseline points accumulate per table entry the value
//! *strictly exceeds*, scanning in order and stopping at the first entry
//! not exceeded:
//!
//! - energy (kJ): 335 to 3685 in 11 steps
//! - saturated fat (g): 1.01 to 30.01 in 20 steps
//! - total sugars (g): 5.01 to 79.41 in 20 steps
//! - sodium (mg): 90 to 1800 in 20 steps of 90
//!
//! Modifying points use the same rule over the FVNL%, fibre, and protein
//! tables. Shiitake mushroom counts as FVNL under the FSANZ vegetable
//! definition, so a blend's FVNL% is its extract fraction; 100% beef
//! carries 0%.
//!
//! Tipping rule: when baseline points reach 13 and FVNL points are below 5,
//! protein is excluded from the modifying points. The net score (baseline
//! minus modifying) maps to stars in half-star steps from 5.0 (net ≤ −15)
//! down to 0.5 (net > 25).

use serde::{Deserialize, Serialize};

use crate::blend::LabelNutrients;

const A_ENERGY_KJ: [f64; 11] = [
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0, 3685.0,
];
const A_SATFAT_G: [f64; 20] = [
    1.01, 2.01, 3.01, 4.01, 5.01, 6.01, 7.01, 8.01, 9.01, 10.01, 11.21, 12.51, 13.91, 15.51,
    17.31, 19.31, 21.61, 24.11, 26.91, 30.01,
];
const A_SUGARS_G: [f64; 20] = [
    5.01, 8.91, 12.81, 16.81, 20.71, 24.61, 28.51, 32.41, 36.31, 40.31, 44.21, 48.11, 52.01,
    55.91, 59.81, 63.81, 67.71, 71.61, 75.51, 79.41,
];
const A_SODIUM_MG: [f64; 20] = [
    90.0, 180.0, 270.0, 360.0, 450.0, 540.0, 630.0, 720.0, 810.0, 900.0, 990.0, 1080.0, 1170.0,
    1260.0, 1350.0, 1440.0, 1530.0, 1620.0, 1710.0, 1800.0,
];
const C_FVNL_PCT: [f64; 9] = [40.0, 60.0, 67.0, 75.0, 80.0, 90.0, 95.0, 99.5, 100.0];
const C_FIBER_G: [f64; 15] = [
    0.91, 1.91, 2.81, 3.71, 4.71, 5.41, 6.31, 7.31, 8.41, 9.71, 11.21, 13.01, 15.01, 17.31,
    20.01,
];
const C_PROTEIN_G: [f64; 15] = [
    1.61, 3.20, 4.81, 6.41, 8.01, 9.61, 11.61, 13.91, 16.71, 20.01, 24.01, 28.91, 34.71, 41.61,
    50.01,
];

/// Baseline points at which the protein tipping rule can engage.
const TIPPING_BASELINE: u8 = 13;
/// FVNL points at which protein is restored despite high baseline points.
const TIPPING_FVNL: u8 = 5;

/// A computed Health Star Rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthStarLabel {
    /// Star rating, 0.5 to 5.0 in half-star steps
    pub stars: f64,
    /// Baseline minus modifying points
    pub net_score: i32,
    /// Baseline points from energy, saturated fat, sugars, and sodium
    pub points_a: u8,
    /// Modifying points from FVNL%, fibre, and protein
    pub points_c: u8,
    /// Whether protein contributed to the modifying points
    pub protein_counted: bool,
}

fn points_exceeding(value: f64, thresholds: &[f64]) -> u8 {
    let mut points = 0;
    for (i, threshold) in thresholds.iter().enumerate() {
        if value > *threshold {
            points = i as u8 + 1;
        } else {
            break;
        }
    }
    points
}

const fn stars_for(net_score: i32) -> f64 {
    if net_score <= -15 {
        5.0
    } else if net_score <= -10 {
        4.5
    } else if net_score <= -5 {
        4.0
    } else if net_score <= 0 {
        3.5
    } else if net_score <= 5 {
        3.0
    } else if net_score <= 10 {
        2.5
    } else if net_score <= 15 {
        2.0
    } else if net_score <= 20 {
        1.5
    } else if net_score <= 25 {
        1.0
    } else {
        0.5
    }
}

/// Compute the Health Star Rating for a per-100 g nutrient vector.
#[must_use]
pub fn assess(nutrients: &LabelNutrients) -> HealthStarLabel {
    let points_a = points_exceeding(nutrients.energy_kj, &A_ENERGY_KJ)
        + points_exceeding(nutrients.saturated_fat, &A_SATFAT_G)
        + points_exceeding(nutrients.sugars, &A_SUGARS_G)
        + points_exceeding(nutrients.sodium_mg, &A_SODIUM_MG);

    let fvnl = points_exceeding(nutrients.fvnl_pct, &C_FVNL_PCT);
    let fiber = points_exceeding(nutrients.fiber, &C_FIBER_G);
    let protein = points_exceeding(nutrients.protein, &C_PROTEIN_G);

    let protein_counted = !(points_a >= TIPPING_BASELINE && fvnl < TIPPING_FVNL);
    let points_c = if protein_counted {
        fvnl + fiber + protein
    } else {
        fvnl + fiber
    };
    let net_score = i32::from(points_a) - i32::from(points_c);

    HealthStarLabel {
        stars: stars_for(net_score),
        net_score,
        points_a,
        points_c,
        protein_counted,
    }
}
