// ABOUTME: Blend recommendation engine tying enumeration, scoring, and report assembly
// ABOUTME: One engine instance serves recommend, rank, and full report generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! The recommendation engine.
//!
//! [`BlendEngine`] owns a dataset, a market profile, and a scoring
//! configuration; requests borrow it immutably so one instance serves
//! concurrent callers. `recommend` answers the core question (which recipe
//! at which trim), `rank` exposes the scored pool behind that answer, and
//! `report` assembles the full consumer-facing result: claims, the panel
//! comparison, cost, carbon, and the market's front-of-pack label.

use chrono::{DateTime, Utc};
use mycoblend_core::trim::DEFAULT_TRIM;
use mycoblend_core::{
    BlendError, BlendRatios, BlendResult, Country, CountryProfile, Dataset, Nutrient,
    ProductFormat, TrimGrade,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::blend::{blend_nutrient, LabelNutrients};
use crate::claims::{claims_for, Claim};
use crate::comparison::{
    carbon_summary, comparison_rows, cost_breakdown, CarbonSummary, ComparisonRow, CostBreakdown,
};
use crate::config::ScoringConfig;
use crate::enumerate::{build_pool, Candidate, ClaimConstraints, PoolBuild};
use crate::labels::{self, LabelAssessment};
use crate::scoring::{pick_winner, score_pool, Priority, Scores};

/// One blend question: format, fat ceiling, priority, optional hard claims.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendRequest {
    /// Product format the blend is destined for
    pub format: ProductFormat,
    /// Fat ceiling as a fraction, e.g. `0.20` for an 80CL selection
    pub fat_ceiling: f64,
    /// Optimization priority
    #[serde(default)]
    pub priority: Priority,
    /// Hard claim constraints
    #[serde(default)]
    pub constraints: ClaimConstraints,
}

/// The engine's answer: a recipe and the trim to blend it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Winning recipe display name
    pub recipe_name: String,
    /// Beef trim grade to buy
    pub trim: TrimGrade,
    /// The recipe's mass fractions
    pub ratios: BlendRatios,
    /// A hard constraint was requested but no candidate satisfied it
    pub used_fallback: bool,
    /// No candidate existed at all; this is the default blend
    pub pool_empty: bool,
}

/// One scored entry of the ranked pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// The candidate and its raw metrics
    pub candidate: Candidate,
    /// Its nutrition composite and final score
    pub scores: Scores,
}

/// The full scored pool, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPool {
    /// Candidates in descending final-score order
    pub entries: Vec<RankedCandidate>,
    /// A hard constraint was requested but no candidate satisfied it
    pub used_fallback: bool,
    /// The caller's trim position in the lean order
    pub ceiling_index: usize,
}

/// Everything a caller needs to present one recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendReport {
    /// Report id
    pub id: Uuid,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Market the report was computed for
    pub country: Country,
    /// Requested product format
    pub format: ProductFormat,
    /// Requested fat ceiling
    pub fat_ceiling: f64,
    /// Requested priority
    pub priority: Priority,
    /// The engine's answer
    pub recommendation: Recommendation,
    /// Nutrition claims the blend may carry, in panel order
    pub claims: Vec<Claim>,
    /// Blend-versus-beef panel comparison
    pub comparison: Vec<ComparisonRow>,
    /// Ingredient cost lines and the beef reference price
    pub cost: CostBreakdown,
    /// CO₂e against the all-beef baseline
    pub carbon: CarbonSummary,
    /// The market's front-of-pack label pair, when the market has one
    pub label: Option<LabelAssessment>,
}

struct Solved {
    pool: PoolBuild,
    scores: Vec<Scores>,
    winner: Option<usize>,
}

/// Recommends blend recipes and trims over one dataset and market profile.
#[derive(Debug, Clone)]
pub struct BlendEngine {
    dataset: Dataset,
    profile: CountryProfile,
    config: ScoringConfig,
}

impl BlendEngine {
    /// Create an engine over a dataset, market profile, and scoring
    /// configuration.
    #[must_use]
    pub const fn new(dataset: Dataset, profile: CountryProfile, config: ScoringConfig) -> Self {
        Self {
            dataset,
            profile,
            config,
        }
    }

    /// The engine's dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The engine's market profile.
    #[must_use]
    pub const fn profile(&self) -> &CountryProfile {
        &self.profile
    }

    /// The engine's scoring configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn solve(&self, request: &BlendRequest) -> BlendResult<Solved> {
        let pool = build_pool(
            &self.dataset,
            &self.profile,
            request.format,
            request.fat_ceiling,
            request.constraints,
        )?;
        let scores = score_pool(
            &pool.candidates,
            pool.ceiling_index,
            request.priority,
            &self.config,
        );
        let winner = pick_winner(&scores);
        debug!(
            candidates = pool.candidates.len(),
            priority = %request.priority,
            "scored candidate pool"
        );
        Ok(Solved {
            pool,
            scores,
            winner,
        })
    }

    fn default_recommendation(&self, format: ProductFormat) -> BlendResult<Recommendation> {
        let (name, ratios) = self
            .dataset
            .recipes_for(format)
            .and_then(|recipes| recipes.first())
            .map(|(name, ratios)| (name.clone(), *ratios))
            .ok_or_else(|| {
                BlendError::not_found(format!("no recipes defined for format '{format}'"))
            })?;
        warn!(format = %format, recipe = %name, "empty candidate pool, using default blend");
        Ok(Recommendation {
            recipe_name: name,
            trim: DEFAULT_TRIM,
            ratios,
            used_fallback: false,
            pool_empty: true,
        })
    }

    /// Recommend a recipe and trim for the request.
    ///
    /// An empty candidate pool degrades to the format's first recipe at the
    /// default trim rather than failing, with `pool_empty` set.
    ///
    /// # Errors
    ///
    /// Returns an error when the fat ceiling matches no trim in the dataset
    /// or the format has no recipes at all.
    pub fn recommend(&self, request: &BlendRequest) -> BlendResult<Recommendation> {
        let solved = self.solve(request)?;
        let Some(best) = solved.winner else {
            return self.default_recommendation(request.format);
        };
        let candidate = &solved.pool.candidates[best];
        Ok(Recommendation {
            recipe_name: candidate.recipe_name.clone(),
            trim: candidate.trim,
            ratios: candidate.ratios,
            used_fallback: solved.pool.used_fallback,
            pool_empty: false,
        })
    }

    /// Score and rank every candidate for the request, best first.
    ///
    /// # Errors
    ///
    /// Returns an error when the fat ceiling matches no trim in the dataset.
    pub fn rank(&self, request: &BlendRequest) -> BlendResult<RankedPool> {
        let solved = self.solve(request)?;
        let mut entries: Vec<RankedCandidate> = solved
            .pool
            .candidates
            .into_iter()
            .zip(solved.scores)
            .map(|(candidate, scores)| RankedCandidate { candidate, scores })
            .collect();
        entries.sort_by(|a, b| b.scores.final_score.total_cmp(&a.scores.final_score));
        Ok(RankedPool {
            entries,
            used_fallback: solved.pool.used_fallback,
            ceiling_index: solved.pool.ceiling_index,
        })
    }

    /// Build the full report for the request.
    ///
    /// The 100%-beef reference throughout the report is the trim matching
    /// the caller's fat ceiling; the blend columns use the recommended trim.
    ///
    /// # Errors
    ///
    /// Returns an error when the fat ceiling matches no trim in the dataset
    /// or the format has no recipes at all.
    pub fn report(&self, request: &BlendRequest) -> BlendResult<BlendReport> {
        let recommendation = self.recommend(request)?;
        let reference_trim = self.dataset.trim_for_fat(request.fat_ceiling).ok_or_else(|| {
            BlendError::invalid_input(format!(
                "fat ceiling {:.2} matches no trim in the dataset",
                request.fat_ceiling
            ))
        })?;

        let blend_vector = LabelNutrients::for_blend(
            &self.dataset.reference,
            recommendation.ratios,
            recommendation.trim,
        );
        let beef_vector = LabelNutrients::for_beef(&self.dataset.reference, reference_trim);
        let vitamin_d = blend_nutrient(
            &self.dataset.reference,
            Nutrient::VitaminD,
            recommendation.ratios,
            recommendation.trim,
        );

        Ok(BlendReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            country: self.profile.country,
            format: request.format,
            fat_ceiling: request.fat_ceiling,
            priority: request.priority,
            claims: claims_for(&blend_vector, vitamin_d, &self.profile),
            comparison: comparison_rows(
                &self.dataset,
                &self.profile,
                recommendation.ratios,
                recommendation.trim,
                reference_trim,
            ),
            cost: cost_breakdown(
                &self.dataset,
                &self.profile,
                recommendation.ratios,
                recommendation.trim,
                reference_trim,
            ),
            carbon: carbon_summary(&self.dataset, recommendation.ratios),
            label: labels::for_country(self.profile.country, &blend_vector, &beef_vector),
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use mycoblend_core::trim::TrimData;
    use mycoblend_core::NutrientReference;

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
        burger.insert(
            "55/35 rehydrated".to_owned(),
            BlendRatios::new(0.55, 0.35, 0.10),
        );
        let mut mince = IndexMap::new();
        mince.insert("70/30, no water".to_owned(), BlendRatios::new(0.7, 0.3, 0.0));
        mince.insert("60/40, no water".to_owned(), BlendRatios::new(0.6, 0.4, 0.0));
        let mut recipes = IndexMap::new();
        recipes.insert(ProductFormat::BurgerMeatball, burger);
        recipes.insert(ProductFormat::GroundBeef, mince);

        let mut reference = NutrientReference::default();
        reference.extract.insert(Nutrient::Fiber, 24.0);
        reference.extract.insert(Nutrient::TotalFat, 2.0);
        reference.extract.insert(Nutrient::Protein, 4.0);
        reference.extract.insert(Nutrient::EnergyKj, 250.0);
        for (cl, protein, kj, satfat) in [
            (70, 15.5, 1350.0, 6.5),
            (80, 17.2, 1050.0, 4.0),
            (90, 19.0, 820.0, 2.0),
        ] {
            let mut table = IndexMap::new();
            table.insert(Nutrient::Protein, protein);
            table.insert(Nutrient::EnergyKj, kj);
            table.insert(Nutrient::SaturatedFat, satfat);
            reference.beef.insert(TrimGrade::new(cl), table);
        }
        Dataset::new(trims, recipes, reference, 2.1, 27.0)
    }

    fn engine() -> BlendEngine {
        BlendEngine::new(
            dataset(),
            Country::Us.profile(),
            ScoringConfig::default(),
        )
    }

    fn request(priority: Priority) -> BlendRequest {
        BlendRequest {
            format: ProductFormat::GroundBeef,
            fat_ceiling: 0.20,
            priority,
            constraints: ClaimConstraints::default(),
        }
    }

    #[test]
    fn cost_priority_recommends_the_cheapest_candidate() {
        let engine = engine();
        let ranked = engine.rank(&request(Priority::Cost)).unwrap();
        let min_cost = ranked
            .entries
            .iter()
            .map(|e| e.candidate.cost)
            .fold(f64::INFINITY, f64::min);
        let recommendation = engine.recommend(&request(Priority::Cost)).unwrap();
        let winner = ranked
            .entries
            .iter()
            .find(|e| {
                e.candidate.recipe_name == recommendation.recipe_name
                    && e.candidate.trim == recommendation.trim
            })
            .unwrap();
        assert!((winner.candidate.cost - min_cost).abs() < 1e-12);
    }

    #[test]
    fn rank_orders_by_descending_final_score() {
        let ranked = engine().rank(&request(Priority::Balance)).unwrap();
        assert!(!ranked.entries.is_empty());
        for pair in ranked.entries.windows(2) {
            assert!(pair[0].scores.final_score >= pair[1].scores.final_score);
        }
    }

    #[test]
    fn unmet_constraint_falls_back_with_a_flag() {
        let engine = engine();
        let mut req = request(Priority::Balance);
        // fiber ceiling in this pool is 24 * 0.4 = 9.6, so 15g is unreachable
        let mut profile = Country::Us.profile();
        profile.high_fiber_g = 15.0;
        let engine = BlendEngine::new(
            engine.dataset().clone(),
            profile,
            ScoringConfig::default(),
        );
        req.constraints.must_fiber = true;
        let recommendation = engine.recommend(&req).unwrap();
        assert!(recommendation.used_fallback);
        assert!(!recommendation.pool_empty);
    }

    #[test]
    fn empty_pool_degrades_to_the_default_blend() {
        // Burger format where every recipe is excluded by the formed rules
        let mut data = dataset();
        let mut burger = IndexMap::new();
        burger.insert(
            "55/35 rehydrated".to_owned(),
            BlendRatios::new(0.55, 0.35, 0.10),
        );
        burger.insert("50/50, no water".to_owned(), BlendRatios::new(0.5, 0.5, 0.0));
        data.recipes.insert(ProductFormat::BurgerMeatball, burger);
        let engine = BlendEngine::new(data, Country::Us.profile(), ScoringConfig::default());
        let recommendation = engine
            .recommend(&BlendRequest {
                format: ProductFormat::BurgerMeatball,
                fat_ceiling: 0.20,
                priority: Priority::Balance,
                constraints: ClaimConstraints::default(),
            })
            .unwrap();
        assert!(recommendation.pool_empty);
        assert!(!recommendation.used_fallback);
        assert_eq!(recommendation.recipe_name, "55/35 rehydrated");
        assert_eq!(recommendation.trim, TrimGrade::new(80));
    }

    #[test]
    fn unmatched_ceiling_is_an_error() {
        let err = engine()
            .recommend(&BlendRequest {
                format: ProductFormat::GroundBeef,
                fat_ceiling: 0.17,
                priority: Priority::Balance,
                constraints: ClaimConstraints::default(),
            })
            .unwrap_err();
        assert!(err.to_string().contains("available fat fractions"));
    }

    #[test]
    fn identical_requests_recommend_identically() {
        let engine = engine();
        let first = engine.recommend(&request(Priority::Balance)).unwrap();
        let second = engine.recommend(&request(Priority::Balance)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_gates_the_label_by_market() {
        let us = engine().report(&request(Priority::Balance)).unwrap();
        assert!(us.label.is_none());
        assert_eq!(us.comparison.len(), 15);
        assert_eq!(us.country, Country::Us);

        let uk_engine = BlendEngine::new(
            dataset(),
            Country::Uk.profile(),
            ScoringConfig::default(),
        );
        let uk = uk_engine.report(&request(Priority::Balance)).unwrap();
        assert!(matches!(
            uk.label,
            Some(LabelAssessment::TrafficLight { .. })
        ));
        assert_eq!(uk.comparison.len(), 9);
    }

    #[test]
    fn report_reference_trim_follows_the_ceiling() {
        let report = engine().report(&request(Priority::Balance)).unwrap();
        assert_eq!(report.cost.reference_trim, TrimGrade::new(80));
        assert!((report.cost.reference_price - 3.10).abs() < 1e-12);
        assert_eq!(
            report.recommendation.trim,
            report.cost.components[0]
                .ingredient
                .parse::<TrimGrade>()
                .unwrap()
        );
    }
}
