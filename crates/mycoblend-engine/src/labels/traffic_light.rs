// ABOUTME: UK front-of-pack traffic light label per the FSA 2013 guidance
// ABOUTME: Colour banding, reference intake percentages, and the energy cell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! UK Traffic Light label.
//!
//! Implements the FSA "Guide to creating a front of pack nutrition label"
//! (June 2013) for products sold per 100 g. Each of the four signpost
//! nutrients is banded against two cutoffs:
//!
//! | nutrient  | green ≤ | amber ≤ | RI (g) |
//! |-----------|---------|---------|--------|
//! | fat       | 3.0     | 17.5    | 70     |
//! | saturates | 1.5     | 5.0     | 20     |
//! | sugars    | 5.0     | 22.5    | 90     |
//! | salt      | 0.3     | 1.5     | 6      |
//!
//! Values above the amber cutoff are red. Each cell also carries the
//! nutrient's share of an adult's reference intake, and the label leads
//! with an energy cell showing kJ, kcal, and the kJ share of the 8400 kJ
//! adult RI. Salt prints with two decimals, the rest with one, matching
//! the printed label format.

use mycoblend_core::constants::reference_intake;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::blend::LabelNutrients;

/// Signpost colour band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficColor {
    /// At or below the green cutoff
    Green,
    /// Above green, at or below amber
    Amber,
    /// Above the amber cutoff
    Red,
}

impl fmt::Display for TrafficColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Red => "Red",
        })
    }
}

/// One coloured nutrient cell of the label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficCell {
    /// Signpost nutrient name as printed
    pub name: &'static str,
    /// Value per 100 g
    pub value: f64,
    /// Value formatted for the label
    pub display: String,
    /// Colour band
    pub color: TrafficColor,
    /// Rounded percentage of the adult reference intake
    pub ri_pct: i32,
}

/// The assembled four-cell label plus the energy lead cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficLightLabel {
    /// Energy per 100 g in kJ
    pub energy_kj: f64,
    /// Energy per 100 g in kcal
    pub energy_kcal: f64,
    /// Rounded kJ percentage of the 8400 kJ adult reference intake
    pub energy_ri_pct: i32,
    /// Fat, saturates, sugars, and salt cells in label order
    pub cells: Vec<TrafficCell>,
}

struct Band {
    name: &'static str,
    green: f64,
    amber: f64,
    ri: f64,
}

const FAT: Band = Band {
    name: "Fat",
    green: 3.0,
    amber: 17.5,
    ri: reference_intake::FAT_G,
};
const SATURATES: Band = Band {
    name: "Saturates",
    green: 1.5,
    amber: 5.0,
    ri: reference_intake::SATURATES_G,
};
const SUGARS: Band = Band {
    name: "Sugars",
    green: 5.0,
    amber: 22.5,
    ri: reference_intake::SUGARS_G,
};
const SALT: Band = Band {
    name: "Salt",
    green: 0.3,
    amber: 1.5,
    ri: reference_intake::SALT_G,
};

fn color_for(value: f64, band: &Band) -> TrafficColor {
    if value <= band.green {
        TrafficColor::Green
    } else if value <= band.amber {
        TrafficColor::Amber
    } else {
        TrafficColor::Red
    }
}

fn ri_pct(value: f64, ri: f64) -> i32 {
    (value / ri * 100.0).round() as i32
}

fn cell(value: f64, band: &Band, decimals: usize) -> TrafficCell {
    TrafficCell {
        name: band.name,
        value,
        display: format!("{value:.decimals$}"),
        color: color_for(value, band),
        ri_pct: ri_pct(value, band.ri),
    }
}

/// Build the traffic light label for a per-100 g nutrient vector.
#[must_use]
pub fn assess(nutrients: &LabelNutrients) -> TrafficLightLabel {
    TrafficLightLabel {
        energy_kj: nutrients.energy_kj,
        energy_kcal: nutrients.energy_kcal,
        energy_ri_pct: ri_pct(nutrients.energy_kj, reference_intake::ENERGY_KJ),
        cells: vec![
            cell(nutrients.total_fat, &FAT, 1),
            cell(nutrients.saturated_fat, &SATURATES, 1),
            cell(nutrients.sugars, &SUGARS, 1),
            cell(nutrients.salt_g, &SALT, 2),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_fat(total_fat: f64) -> LabelNutrients {
        LabelNutrients {
            total_fat,
            ..LabelNutrients::default()
        }
    }

    #[test]
    fn fat_bands_split_at_three_and_seventeen_five() {
        assert_eq!(assess(&with_fat(2.5)).cells[0].color, TrafficColor::Green);
        assert_eq!(assess(&with_fat(10.0)).cells[0].color, TrafficColor::Amber);
        assert_eq!(assess(&with_fat(20.0)).cells[0].color, TrafficColor::Red);
    }

    #[test]
    fn cutoffs_are_inclusive() {
        assert_eq!(assess(&with_fat(3.0)).cells[0].color, TrafficColor::Green);
        assert_eq!(assess(&with_fat(17.5)).cells[0].color, TrafficColor::Amber);
        let salt = LabelNutrients {
            salt_g: 0.3,
            ..LabelNutrients::default()
        };
        assert_eq!(assess(&salt).cells[3].color, TrafficColor::Green);
    }

    #[test]
    fn reference_intake_percentages_round() {
        let nutrients = LabelNutrients {
            energy_kj: 1050.0,
            total_fat: 14.0,
            salt_g: 0.45,
            ..LabelNutrients::default()
        };
        let label = assess(&nutrients);
        assert_eq!(label.energy_ri_pct, 13); // 1050 / 8400
        assert_eq!(label.cells[0].ri_pct, 20); // 14 / 70
        assert_eq!(label.cells[3].ri_pct, 8); // 0.45 / 6 = 7.5
    }

    #[test]
    fn salt_prints_two_decimals_and_fat_one() {
        let nutrients = LabelNutrients {
            total_fat: 12.345,
            salt_g: 0.456,
            ..LabelNutrients::default()
        };
        let label = assess(&nutrients);
        assert_eq!(label.cells[0].display, "12.3");
        assert_eq!(label.cells[3].display, "0.46");
    }

    #[test]
    fn cells_keep_label_order() {
        let names: Vec<_> = assess(&LabelNutrients::default())
            .cells
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Fat", "Saturates", "Sugars", "Salt"]);
    }
}
