// ABOUTME: Integration tests for the cross-format analysis matrix
// ABOUTME: Section shape, ordering, and per-format fallback over the sample dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Analysis matrix tests over the bundled sample dataset.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use common::{init_test_logging, sample_engine};
use mycoblend::{
    sample, BlendEngine, ClaimConstraints, Country, ProductFormat, ScoringConfig, TrimGrade,
};

#[test]
fn formats_come_back_in_dataset_order() {
    let matrix = sample_engine(Country::Us)
        .analysis_matrix(0.20, ClaimConstraints::default())
        .unwrap();
    let order: Vec<ProductFormat> = matrix.formats.iter().map(|f| f.format).collect();
    assert_eq!(
        order,
        vec![ProductFormat::BurgerMeatball, ProductFormat::GroundBeef]
    );
    assert!((matrix.fat_ceiling - 0.20).abs() < 1e-12);
}

#[test]
fn sections_cap_at_four_rows() {
    let matrix = sample_engine(Country::Uk)
        .analysis_matrix(0.20, ClaimConstraints::default())
        .unwrap();
    // Burger has 6 eligible candidates, mince 12; both sections truncate.
    for analysis in &matrix.formats {
        assert_eq!(analysis.balanced.len(), 4);
        assert_eq!(analysis.cheapest.len(), 4);
        assert_eq!(analysis.most_nutritious.len(), 4);
    }
}

#[test]
fn cheapest_section_ascends_by_cost() {
    let matrix = sample_engine(Country::Us)
        .analysis_matrix(0.20, ClaimConstraints::default())
        .unwrap();
    for analysis in &matrix.formats {
        for pair in analysis.cheapest.windows(2) {
            assert!(pair[0].candidate.cost <= pair[1].candidate.cost);
        }
    }
}

#[test]
fn balanced_and_nutrition_sections_descend_by_score() {
    let matrix = sample_engine(Country::Au)
        .analysis_matrix(0.20, ClaimConstraints::default())
        .unwrap();
    for analysis in &matrix.formats {
        for pair in analysis.balanced.windows(2) {
            assert!(pair[0].scores.final_score >= pair[1].scores.final_score);
        }
        for pair in analysis.most_nutritious.windows(2) {
            assert!(pair[0].scores.final_score >= pair[1].scores.final_score);
        }
    }
}

#[test]
fn matrix_sections_agree_with_single_format_rankings() {
    let engine = sample_engine(Country::Eu);
    let matrix = engine
        .analysis_matrix(0.20, ClaimConstraints::default())
        .unwrap();
    let burger = &matrix.formats[0];

    let ranked = engine
        .rank(&common::burger_request(mycoblend::Priority::Balance))
        .unwrap();
    assert_eq!(burger.balanced[0], ranked.entries[0]);
    assert_eq!(burger.balanced.len(), 4);
}

#[test]
fn no_section_row_exceeds_the_ceiling_trim() {
    let matrix = sample_engine(Country::Us)
        .analysis_matrix(0.20, ClaimConstraints::default())
        .unwrap();
    for analysis in &matrix.formats {
        for row in analysis
            .balanced
            .iter()
            .chain(&analysis.cheapest)
            .chain(&analysis.most_nutritious)
        {
            assert!(row.candidate.trim <= TrimGrade::new(80));
        }
    }
}

#[test]
fn constraint_fallback_is_reported_per_format() {
    init_test_logging();
    // Sample fiber tops out at 9.6 g (mince, 40% extract); 12 g is out of
    // reach for every format.
    let mut profile = Country::Us.profile();
    profile.high_fiber_g = 12.0;
    let engine = BlendEngine::new(
        sample::dataset(Country::Us),
        profile,
        ScoringConfig::default(),
    );

    let constraints = ClaimConstraints {
        must_fiber: true,
        must_protein: false,
    };
    let matrix = engine.analysis_matrix(0.20, constraints).unwrap();
    for analysis in &matrix.formats {
        assert!(analysis.used_fallback, "{:?}", analysis.format);
        assert!(!analysis.balanced.is_empty());
    }
}

#[test]
fn unmatched_ceiling_fails_the_whole_matrix() {
    let err = sample_engine(Country::Us)
        .analysis_matrix(0.17, ClaimConstraints::default())
        .unwrap_err();
    assert_eq!(err.code, mycoblend::ErrorCode::InvalidInput);
}
