// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup and sample-dataset engine construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `mycoblend`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::Once;

use mycoblend::{
    sample, BlendEngine, BlendRequest, ClaimConstraints, Country, Priority, ProductFormat,
    ScoringConfig,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine over the bundled sample dataset for a market
pub fn sample_engine(country: Country) -> BlendEngine {
    init_test_logging();
    BlendEngine::new(
        sample::dataset(country),
        country.profile(),
        ScoringConfig::default(),
    )
}

/// A burger request at the 80CL fat ceiling
pub fn burger_request(priority: Priority) -> BlendRequest {
    BlendRequest {
        format: ProductFormat::BurgerMeatball,
        fat_ceiling: 0.20,
        priority,
        constraints: ClaimConstraints::default(),
    }
}

/// A mince request at the 80CL fat ceiling
pub fn mince_request(priority: Priority) -> BlendRequest {
    BlendRequest {
        format: ProductFormat::GroundBeef,
        fat_ceiling: 0.20,
        priority,
        constraints: ClaimConstraints::default(),
    }
}
