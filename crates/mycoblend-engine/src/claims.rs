// ABOUTME: Nutrition-claim evaluation against country-specific thresholds
// ABOUTME: Builds the consumer-facing claim list in nutrition-panel order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Claim evaluation.
//!
//! "High in" and "source of" claims are regulatory assertions with
//! country-specific thresholds. Fiber claims compare grams per 100 g.
//! Protein claims follow the market's [`ProteinRule`]: absolute grams (US
//! FDA, AU FSANZ) or the share of total energy contributed by protein
//! (UK FSA / EU 1924/2006, at 17 kJ per gram of protein).

use crate::blend::LabelNutrients;
use mycoblend_core::constants::{claims, energy};
use mycoblend_core::{CountryProfile, Nutrient, ProteinRule};
use serde::{Deserialize, Serialize};

/// The claim being tested: "high in" or the weaker "source of".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClaimLevel {
    High,
    Source,
}

fn meets_protein(level: ClaimLevel, protein_g: f64, energy_kj: f64, profile: &CountryProfile) -> bool {
    match profile.protein_rule {
        ProteinRule::Grams { high_g, source_g } => {
            let threshold = match level {
                ClaimLevel::High => high_g,
                ClaimLevel::Source => source_g,
            };
            protein_g >= threshold
        }
        ProteinRule::EnergyPercent { high_pct, source_pct } => {
            if energy_kj <= 0.0 {
                return false;
            }
            let threshold = match level {
                ClaimLevel::High => high_pct,
                ClaimLevel::Source => source_pct,
            };
            protein_g * energy::PROTEIN_KJ_PER_G / energy_kj * 100.0 >= threshold
        }
    }
}

/// Whether a protein level clears the market's "high in protein" claim.
#[must_use]
pub fn meets_high_protein(protein_g: f64, energy_kj: f64, profile: &CountryProfile) -> bool {
    meets_protein(ClaimLevel::High, protein_g, energy_kj, profile)
}

/// Whether a protein level clears the market's "source of protein" claim.
#[must_use]
pub fn meets_source_protein(protein_g: f64, energy_kj: f64, profile: &CountryProfile) -> bool {
    meets_protein(ClaimLevel::Source, protein_g, energy_kj, profile)
}

/// Typed identity of a claim, independent of display spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    /// Fiber at or above the market's "high in" threshold
    HighFiber,
    /// Fiber at or above the market's "source of" threshold
    SourceFiber,
    /// Protein clearing the market's "high in protein" rule
    HighProtein,
    /// Protein clearing the market's "source of protein" rule
    SourceProtein,
    /// Vitamin D at or above 10 µg per 100 g (US panel only)
    HighVitaminD,
}

/// A claim the blend has earned, with market-appropriate display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// What was claimed
    pub kind: ClaimKind,
    /// Display text, e.g. "High in Fibre"
    pub text: String,
}

/// Build the blend's claim list.
///
/// Claims are emitted in the market's nutrition-panel row order, which is
/// why AU lists its protein claim ahead of fibre. The vitamin D claim only
/// exists where the panel carries a vitamin D row.
#[must_use]
pub fn claims_for(
    vector: &LabelNutrients,
    vitamin_d_ug: f64,
    profile: &CountryProfile,
) -> Vec<Claim> {
    let mut out = Vec::new();
    for nutrient in profile.country.panel() {
        match nutrient {
            Nutrient::Fiber => {
                if vector.fiber >= profile.high_fiber_g {
                    out.push(Claim {
                        kind: ClaimKind::HighFiber,
                        text: format!("High in {}", profile.fiber_spelling),
                    });
                } else if vector.fiber >= profile.source_fiber_g {
                    out.push(Claim {
                        kind: ClaimKind::SourceFiber,
                        text: format!("Source of {}", profile.fiber_spelling),
                    });
                }
            }
            Nutrient::Protein => {
                if meets_high_protein(vector.protein, vector.energy_kj, profile) {
                    out.push(Claim {
                        kind: ClaimKind::HighProtein,
                        text: "High in Protein".into(),
                    });
                } else if meets_source_protein(vector.protein, vector.energy_kj, profile) {
                    out.push(Claim {
                        kind: ClaimKind::SourceProtein,
                        text: "Source of Protein".into(),
                    });
                }
            }
            Nutrient::VitaminD => {
                if vitamin_d_ug >= claims::HIGH_VITAMIN_D_UG {
                    out.push(Claim {
                        kind: ClaimKind::HighVitaminD,
                        text: "High in Vitamin D".into(),
                    });
                }
            }
            _ => {}
        }
    }
    out
}
