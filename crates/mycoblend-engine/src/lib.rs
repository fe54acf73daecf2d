// ABOUTME: Recommendation engine for mushroom-extract beef blends
// ABOUTME: Candidate enumeration, multi-criteria scoring, claims, labels, and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

#![deny(unsafe_code)]

//! # MycoBlend Engine
//!
//! The scoring and recommendation engine. Given a [`mycoblend_core::Dataset`]
//! and a market profile, it enumerates every eligible recipe and trim
//! combination, scores the pool under the caller's priority, and assembles
//! consumer-facing output: nutrition claims, the blend-versus-beef panel
//! comparison, cost and carbon summaries, and the market's front-of-pack
//! label.
//!
//! ## Modules
//!
//! - **engine**: [`BlendEngine`] with `recommend`, `rank`, and `report`
//! - **enumerate**: candidate pool construction and constraint fallback
//! - **scoring**: normalization-based scoring under priority weight profiles
//! - **config**: typed scoring tunables with defaults and row overrides
//! - **blend**: nutrient interpolation and per-100 g label vectors
//! - **claims**: country-specific nutrition claim checks
//! - **comparison**: panel comparison rows, cost breakdown, carbon summary
//! - **labels**: UK traffic light, EU Nutri-Score, AU Health Star Rating
//! - **matrix**: parallel cross-format analysis sections
//! - **normalize**: pool normalization primitives

/// Nutrient interpolation and label vectors
pub mod blend;

/// Nutrition claim evaluation
pub mod claims;

/// Comparison rows, cost breakdown, and carbon summary
pub mod comparison;

/// Scoring configuration with explicit defaults
pub mod config;

/// The blend engine and its request/result types
pub mod engine;

/// Candidate enumeration and hard-constraint handling
pub mod enumerate;

/// Front-of-pack label algorithms
pub mod labels;

/// Cross-format analysis matrix
pub mod matrix;

/// Pool normalization primitives
pub mod normalize;

/// Priority weights and candidate scoring
pub mod scoring;

pub use blend::{blend_nutrient, LabelNutrients};
pub use claims::{claims_for, Claim, ClaimKind};
pub use comparison::{
    carbon_summary, comparison_rows, cost_breakdown, CarbonSummary, ComparisonRow, CostBreakdown,
    CostComponent, NutrientDelta,
};
pub use config::{ScoringConfig, ScoringRow};
pub use engine::{BlendEngine, BlendReport, BlendRequest, RankedCandidate, RankedPool, Recommendation};
pub use enumerate::{Candidate, ClaimConstraints};
pub use labels::LabelAssessment;
pub use matrix::{AnalysisMatrix, FormatAnalysis};
pub use scoring::Priority;
