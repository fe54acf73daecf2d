// ABOUTME: EU Nutri-Score computation for meat-category foods
// ABOUTME: Points A minus points C with the high-A protein exclusion rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! EU Nutri-Score.
//!
//! Implements the Santé Publique France general-foods algorithm as applied
//! to red meat products. Unfavourable points A accumulate from energy,
//! sugars, saturated fat, and sodium; favourable points C from fruit,
//! vegetables and legumes (always 0% for a beef blend), fibre, and protein.
//!
//! A nutrient's points are the index of the first table entry at or above
//! its value, or the table length when it exceeds every entry:
//!
//! - energy (kJ): 335, 670, ..., 3350 (10 steps)
//! - sugars (g): 4.5, 9, 13.5, 18, 22.5, 27, 31, 36, 40, 45
//! - saturated fat (g): 1 through 10
//! - sodium (mg): 90 through 900 in steps of 90
//! - fibre (g): 0.9, 1.9, 2.8, 3.7, 4.7
//! - protein (g): 1.6, 3.2, 4.8, 6.4, 8.0
//!
//! Score = A − C. Protein only counts toward C when A < 11 or the FVL
//! points are maxed, which never happens here; a protein-rich product with
//! heavy negatives cannot buy its grade back. Grades: A below 0, B to 2,
//! C to 10, D to 18, E above.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::blend::LabelNutrients;

const ENERGY_KJ: [f64; 10] = [
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
];
const SUGARS_G: [f64; 10] = [4.5, 9.0, 13.5, 18.0, 22.5, 27.0, 31.0, 36.0, 40.0, 45.0];
const SATFAT_G: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
const SODIUM_MG: [f64; 10] = [
    90.0, 180.0, 270.0, 360.0, 450.0, 540.0, 630.0, 720.0, 810.0, 900.0,
];
const FIBER_G: [f64; 5] = [0.9, 1.9, 2.8, 3.7, 4.7];
const PROTEIN_G: [f64; 5] = [1.6, 3.2, 4.8, 6.4, 8.0];

/// Points A threshold above which protein stops counting toward C.
const PROTEIN_EXCLUSION_A: u8 = 11;

/// Nutri-Score letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutriGrade {
    /// Score below 0
    A,
    /// Score 0 to 2
    B,
    /// Score 3 to 10
    C,
    /// Score 11 to 18
    D,
    /// Score 19 and above
    E,
}

impl fmt::Display for NutriGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        })
    }
}

/// Per-nutrient point breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutriScorePoints {
    /// Energy points (0 to 10)
    pub energy: u8,
    /// Sugars points (0 to 10)
    pub sugars: u8,
    /// Saturated fat points (0 to 10)
    pub saturated_fat: u8,
    /// Sodium points (0 to 10)
    pub sodium: u8,
    /// Fibre points (0 to 5)
    pub fiber: u8,
    /// Protein points (0 to 5)
    pub protein: u8,
}

/// A computed Nutri-Score with its inputs' point breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutriScoreLabel {
    /// Final score, points A minus points C
    pub score: i32,
    /// Letter grade derived from the score
    pub grade: NutriGrade,
    /// Sum of unfavourable points
    pub points_a: u8,
    /// Per-nutrient breakdown
    pub points: NutriScorePoints,
    /// Whether protein contributed to points C
    pub protein_counted: bool,
}

fn points_up_to(value: f64, thresholds: &[f64]) -> u8 {
    for (i, threshold) in thresholds.iter().enumerate() {
        if value <= *threshold {
            return i as u8;
        }
    }
    thresholds.len() as u8
}

const fn grade_for(score: i32) -> NutriGrade {
    if score < 0 {
        NutriGrade::A
    } else if score <= 2 {
        NutriGrade::B
    } else if score <= 10 {
        NutriGrade::C
    } else if score <= 18 {
        NutriGrade::D
    } else {
        NutriGrade::E
    }
}

/// Compute the Nutri-Score for a per-100 g nutrient vector.
///
/// Sodium is taken from the vector's derived milligram field, so markets
/// that declare salt instead of sodium score identically.
#[must_use]
pub fn assess(nutrients: &LabelNutrients) -> NutriScoreLabel {
    let points = NutriScorePoints {
        energy: points_up_to(nutrients.energy_kj, &ENERGY_KJ),
        sugars: points_up_to(nutrients.sugars, &SUGARS_G),
        saturated_fat: points_up_to(nutrients.saturated_fat, &SATFAT_G),
        sodium: points_up_to(nutrients.sodium_mg, &SODIUM_MG),
        fiber: points_up_to(nutrients.fiber, &FIBER_G),
        protein: points_up_to(nutrients.protein, &PROTEIN_G),
    };
    let points_a = points.energy + points.sugars + points.saturated_fat + points.sodium;

    // FVL points stay 0 for a beef blend, so only the A cutoff can
    // restore protein
    let protein_counted = points_a < PROTEIN_EXCLUSION_A;
    let points_c = if protein_counted {
        points.fiber + points.protein
    } else {
        points.fiber
    };
    let score = i32::from(points_a) - i32::from(points_c);

    NutriScoreLabel {
        score,
        grade: grade_for(score),
        points_a,
        points,
        protein_counted,
    }
}
