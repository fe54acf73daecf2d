// ABOUTME: Cross-format analysis matrix with balanced, cost, and nutrition sections
// ABOUTME: Per-format computations fan out in parallel and gather in format order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! The analysis matrix.
//!
//! For every product format in the dataset, three ranked views of the same
//! candidate pool: the balanced recommendation order, a cheapest-first
//! re-sort of the cost-priority ranking, and the nutrition-priority order.
//! Each section is capped at four rows, a winner plus three alternatives.
//! Formats are independent, so they are scored in parallel and gathered
//! back in dataset order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use mycoblend_core::{BlendResult, ProductFormat};

use crate::engine::{BlendEngine, BlendRequest, RankedCandidate};
use crate::enumerate::ClaimConstraints;
use crate::scoring::Priority;

/// Rows kept per section: the winner and up to three alternatives.
const SECTION_ROW_CAP: usize = 4;

/// Three ranked views of one format's candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatAnalysis {
    /// Product format the sections describe
    pub format: ProductFormat,
    /// Balance-priority ranking, best first
    pub balanced: Vec<RankedCandidate>,
    /// Cost-priority ranking re-sorted cheapest first
    pub cheapest: Vec<RankedCandidate>,
    /// Nutrition-priority ranking, best first
    pub most_nutritious: Vec<RankedCandidate>,
    /// A hard constraint was requested but no candidate satisfied it
    pub used_fallback: bool,
}

/// Per-format analysis sections for one fat ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMatrix {
    /// Fat ceiling the matrix was computed for
    pub fat_ceiling: f64,
    /// One analysis per dataset format, in dataset order
    pub formats: Vec<FormatAnalysis>,
}

impl BlendEngine {
    fn format_analysis(
        &self,
        format: ProductFormat,
        fat_ceiling: f64,
        constraints: ClaimConstraints,
    ) -> BlendResult<FormatAnalysis> {
        let request = |priority| BlendRequest {
            format,
            fat_ceiling,
            priority,
            constraints,
        };
        let balanced = self.rank(&request(Priority::Balance))?;
        let cost = self.rank(&request(Priority::Cost))?;
        let nutrition = self.rank(&request(Priority::Nutrition))?;

        let used_fallback = balanced.used_fallback;
        let mut balanced = balanced.entries;
        let mut cheapest = cost.entries;
        let mut most_nutritious = nutrition.entries;
        // stable sort keeps the score order among equal costs
        cheapest.sort_by(|a, b| a.candidate.cost.total_cmp(&b.candidate.cost));
        balanced.truncate(SECTION_ROW_CAP);
        cheapest.truncate(SECTION_ROW_CAP);
        most_nutritious.truncate(SECTION_ROW_CAP);

        Ok(FormatAnalysis {
            format,
            balanced,
            cheapest,
            most_nutritious,
            used_fallback,
        })
    }

    /// Compute the analysis matrix across every format in the dataset.
    ///
    /// # Errors
    ///
    /// Returns an error when the fat ceiling matches no trim in the dataset.
    pub fn analysis_matrix(
        &self,
        fat_ceiling: f64,
        constraints: ClaimConstraints,
    ) -> BlendResult<AnalysisMatrix> {
        let formats: Vec<ProductFormat> = self.dataset().recipes.keys().copied().collect();
        let formats = formats
            .par_iter()
            .map(|format| self.format_analysis(*format, fat_ceiling, constraints))
            .collect::<BlendResult<Vec<_>>>()?;
        Ok(AnalysisMatrix {
            fat_ceiling,
            formats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use mycoblend_core::trim::{TrimData, TrimGrade};
    use mycoblend_core::{BlendRatios, Country, Dataset, Nutrient, NutrientReference};

    use crate::config::ScoringConfig;

    fn dataset() -> Dataset {
        let mut trims = IndexMap::new();
        for (cl, fat, price) in [(70, 0.30, 2.60), (80, 0.20, 3.10), (90, 0.10, 4.05)] {
            trims.insert(
                TrimGrade::new(cl),
                TrimData {
                    fat_fraction: fat,
                    price,
                },
            );
        }
        let mut burger = IndexMap::new();
        burger.insert("70/30, no water".to_owned(), BlendRatios::new(0.7, 0.3, 0.0));
        let mut mince = IndexMap::new();
        mince.insert("70/30, no water".to_owned(), BlendRatios::new(0.7, 0.3, 0.0));
        mince.insert("60/40, no water".to_owned(), BlendRatios::new(0.6, 0.4, 0.0));
        mince.insert("55/45, no water".to_owned(), BlendRatios::new(0.55, 0.45, 0.0));
        let mut recipes = IndexMap::new();
        recipes.insert(ProductFormat::BurgerMeatball, burger);
        recipes.insert(ProductFormat::GroundBeef, mince);

        let mut reference = NutrientReference::default();
        reference.extract.insert(Nutrient::Fiber, 24.0);
        reference.extract.insert(Nutrient::TotalFat, 2.0);
        reference.extract.insert(Nutrient::Protein, 4.0);
        reference.extract.insert(Nutrient::EnergyKj, 250.0);
        for (cl, protein, kj) in [(70, 15.5, 1350.0), (80, 17.2, 1050.0), (90, 19.0, 820.0)] {
            let mut table = IndexMap::new();
            table.insert(Nutrient::Protein, protein);
            table.insert(Nutrient::EnergyKj, kj);
            table.insert(Nutrient::SaturatedFat, 4.0);
            reference.beef.insert(TrimGrade::new(cl), table);
        }
        Dataset::new(trims, recipes, reference, 2.1, 27.0)
    }

    fn engine() -> BlendEngine {
        BlendEngine::new(dataset(), Country::Us.profile(), ScoringConfig::default())
    }

    #[test]
    fn formats_come_back_in_dataset_order() {
        let matrix = engine()
            .analysis_matrix(0.20, ClaimConstraints::default())
            .unwrap();
        let order: Vec<_> = matrix.formats.iter().map(|f| f.format).collect();
        assert_eq!(
            order,
            vec![ProductFormat::BurgerMeatball, ProductFormat::GroundBeef]
        );
    }

    #[test]
    fn sections_cap_at_four_rows() {
        // 90CL ceiling spans two trims per mince recipe: 3 recipes x 2 = 6
        let matrix = engine()
            .analysis_matrix(0.10, ClaimConstraints::default())
            .unwrap();
        let mince = &matrix.formats[1];
        assert_eq!(mince.balanced.len(), SECTION_ROW_CAP);
        assert_eq!(mince.cheapest.len(), SECTION_ROW_CAP);
        assert_eq!(mince.most_nutritious.len(), SECTION_ROW_CAP);
    }

    #[test]
    fn cheapest_section_ascends_by_cost() {
        let matrix = engine()
            .analysis_matrix(0.20, ClaimConstraints::default())
            .unwrap();
        for analysis in &matrix.formats {
            for pair in analysis.cheapest.windows(2) {
                assert!(pair[0].candidate.cost <= pair[1].candidate.cost);
            }
        }
    }

    #[test]
    fn balanced_section_descends_by_final_score() {
        let matrix = engine()
            .analysis_matrix(0.20, ClaimConstraints::default())
            .unwrap();
        for analysis in &matrix.formats {
            for pair in analysis.balanced.windows(2) {
                assert!(pair[0].scores.final_score >= pair[1].scores.final_score);
            }
        }
    }

    #[test]
    fn constraint_fallback_is_reported_per_format() {
        let mut profile = Country::Us.profile();
        profile.high_fiber_g = 15.0;
        let engine = BlendEngine::new(dataset(), profile, ScoringConfig::default());
        let constraints = ClaimConstraints {
            must_fiber: true,
            must_protein: false,
        };
        let matrix = engine.analysis_matrix(0.20, constraints).unwrap();
        for analysis in &matrix.formats {
            assert!(analysis.used_fallback);
            assert!(!analysis.balanced.is_empty());
        }
    }
}
