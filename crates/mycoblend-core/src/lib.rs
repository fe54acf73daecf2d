// ABOUTME: Core types and constants for the MycoBlend recommendation platform
// ABOUTME: Foundation crate with error types, trim grades, nutrient vocabulary, and datasets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

#![deny(unsafe_code)]

//! # MycoBlend Core
//!
//! Foundation crate providing shared types and constants for the MycoBlend
//! blend-recommendation platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `BlendError`, `ErrorCode`, and `BlendResult`
//! - **constants**: Domain constants (energy factors, claim thresholds, reference intakes)
//! - **trim**: Beef-trim grades ("80CL Beef Trim"), the fixed lean order, and the trim table
//! - **nutrients**: The closed nutrient vocabulary with regional spelling support
//! - **profile**: Country profiles (currency, prices, claim thresholds, protein rules)
//! - **dataset**: The in-memory reference dataset and its flat row representations

/// Unified error handling with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Beef-trim grades and the trim price/fat table
pub mod trim;

/// Nutrient vocabulary, units, comparison direction, and display formatting
pub mod nutrients;

/// Country profiles and nutrition-claim rules
pub mod profile;

/// Reference dataset model and row-based construction
pub mod dataset;

pub use dataset::{BlendRatios, Dataset, NutrientReference, ProductFormat};
pub use errors::{BlendError, BlendResult, ErrorCode};
pub use nutrients::Nutrient;
pub use profile::{Country, CountryProfile, ProteinRule};
pub use trim::{TrimGrade, LEAN_ORDER};
