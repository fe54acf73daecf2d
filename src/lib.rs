// ABOUTME: Main library entry point for the MycoBlend recommendation platform
// ABOUTME: Re-exports the core types and engine, plus logging, file loading, and sample data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

#![deny(unsafe_code)]

//! # MycoBlend
//!
//! A blend-recommendation engine for beef extended with shiitake extract.
//! Given a market, a product format, and a fat ceiling, the engine picks the
//! optimal beef-trim grade and recipe under the chosen priority, then builds
//! the full comparison report against a 100% beef reference: nutrition panel
//! deltas, claims, cost, carbon, and the market's front-of-pack label.
//!
//! ## Features
//!
//! - **Market-aware**: US, UK, EU, and AU profiles with local prices,
//!   claim thresholds, panel layouts, and regional spellings
//! - **Four priorities**: cost, nutrition, balance, and sustainability
//! - **Hard claim constraints**: require high-fiber or high-protein blends,
//!   with a flagged fallback when the data cannot satisfy them
//! - **Front-of-pack labels**: UK traffic lights, EU Nutri-Score, and the
//!   AU/NZ Health Star Rating, each for the blend and the beef reference
//! - **Analysis matrix**: ranked candidate tables per product format,
//!   fanned out with rayon
//!
//! ## Architecture
//!
//! The workspace is split the way the data flows:
//! - **mycoblend-core**: trim grades, nutrient vocabulary, country
//!   profiles, datasets, and the error type
//! - **mycoblend-engine**: enumeration, scoring, claims, comparison,
//!   labels, and the [`BlendEngine`] facade
//! - **mycoblend** (this crate): logging setup, JSON file loading, the
//!   bundled sample dataset, and the `mycoblend-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use mycoblend::{
//!     sample, BlendEngine, BlendRequest, ClaimConstraints, Country, Priority, ProductFormat,
//!     ScoringConfig,
//! };
//!
//! fn main() -> mycoblend::BlendResult<()> {
//!     let country = Country::Uk;
//!     let engine = BlendEngine::new(
//!         sample::dataset(country),
//!         country.profile(),
//!         ScoringConfig::default(),
//!     );
//!
//!     let request = BlendRequest {
//!         format: ProductFormat::BurgerMeatball,
//!         fat_ceiling: 0.20,
//!         priority: Priority::Balance,
//!         constraints: ClaimConstraints::default(),
//!     };
//!     let report = engine.report(&request)?;
//!     println!(
//!         "{} on {}",
//!         report.recommendation.recipe_name, report.recommendation.trim
//!     );
//!     Ok(())
//! }
//! ```

/// JSON file loading for datasets and scoring overrides
pub mod data_file;

/// Structured logging configuration
pub mod logging;

/// Bundled per-market demonstration dataset
pub mod sample;

pub use mycoblend_core::{
    BlendError, BlendRatios, BlendResult, Country, CountryProfile, Dataset, ErrorCode, Nutrient,
    NutrientReference, ProductFormat, ProteinRule, TrimGrade, LEAN_ORDER,
};

pub use mycoblend_engine::{
    blend_nutrient, carbon_summary, claims_for, comparison_rows, cost_breakdown, AnalysisMatrix,
    BlendEngine, BlendReport, BlendRequest, CarbonSummary, Claim, ClaimConstraints, ClaimKind,
    ComparisonRow, CostBreakdown, CostComponent, FormatAnalysis, LabelAssessment, LabelNutrients,
    NutrientDelta, Priority, RankedCandidate, RankedPool, Recommendation, ScoringConfig,
    ScoringRow,
};

pub use mycoblend_engine::labels;
pub use mycoblend_engine::labels::{
    HealthStarLabel, NutriGrade, NutriScoreLabel, NutriScorePoints, TrafficCell, TrafficColor,
    TrafficLightLabel,
};
