// ABOUTME: Integration tests for nutrition claims as surfaced on blend reports
// ABOUTME: Protein rule regimes, fiber thresholds, and the US-only vitamin D claim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Claim evaluation tests over the bundled sample dataset.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use common::{burger_request, sample_engine};
use mycoblend::{ClaimKind, Country, Priority};
use mycoblend_engine::claims::{meets_high_protein, meets_source_protein};

#[test]
fn energy_percent_rule_matches_the_worked_example() {
    let profile = Country::Uk.profile();
    // 15 g x 17 kJ/g / 1000 kJ = 25.5% of energy from protein, over the 20%
    // high-protein threshold
    assert!(meets_high_protein(15.0, 1000.0, &profile));
    assert!(!meets_high_protein(10.0, 1000.0, &profile));
    assert!(meets_source_protein(10.0, 1000.0, &profile));
    // missing energy can never satisfy an energy-share rule
    assert!(!meets_high_protein(15.0, 0.0, &profile));
}

#[test]
fn grams_rule_is_energy_independent() {
    let profile = Country::Us.profile();
    assert!(meets_high_protein(10.0, 0.0, &profile));
    assert!(!meets_high_protein(9.9, 5000.0, &profile));
}

#[test]
fn sample_blends_earn_fiber_and_protein_claims_in_every_market() {
    // The balanced burger winner lands near 30% extract: enough fiber for
    // every market's "high in" threshold and protein for both rule regimes.
    for country in Country::all() {
        let engine = sample_engine(country);
        let report = engine.report(&burger_request(Priority::Balance)).unwrap();
        let kinds: Vec<ClaimKind> = report.claims.iter().map(|c| c.kind).collect();
        assert!(
            kinds.contains(&ClaimKind::HighFiber),
            "{country:?}: {kinds:?}"
        );
        assert!(
            kinds.contains(&ClaimKind::HighProtein),
            "{country:?}: {kinds:?}"
        );
    }
}

#[test]
fn claim_text_follows_regional_spelling() {
    let us = sample_engine(Country::Us)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    assert!(us.claims.iter().any(|c| c.text == "High in Fiber"));

    let uk = sample_engine(Country::Uk)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    assert!(uk.claims.iter().any(|c| c.text == "High in Fibre"));
}

#[test]
fn vitamin_d_claim_appears_only_on_the_us_panel() {
    // The sample extract is UV-enriched: a ~30% inclusion clears 10 µg.
    let us = sample_engine(Country::Us)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    assert!(us
        .claims
        .iter()
        .any(|c| c.kind == ClaimKind::HighVitaminD));

    for country in [Country::Uk, Country::Eu, Country::Au] {
        let report = sample_engine(country)
            .report(&burger_request(Priority::Balance))
            .unwrap();
        assert!(
            report
                .claims
                .iter()
                .all(|c| c.kind != ClaimKind::HighVitaminD),
            "{country:?}"
        );
    }
}

#[test]
fn claims_come_back_in_panel_order() {
    // AU panels list protein ahead of fibre; the US panel is the reverse.
    let au = sample_engine(Country::Au)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    let au_kinds: Vec<ClaimKind> = au.claims.iter().map(|c| c.kind).collect();
    let protein_pos = au_kinds
        .iter()
        .position(|k| matches!(k, ClaimKind::HighProtein | ClaimKind::SourceProtein))
        .unwrap();
    let fiber_pos = au_kinds
        .iter()
        .position(|k| matches!(k, ClaimKind::HighFiber | ClaimKind::SourceFiber))
        .unwrap();
    assert!(protein_pos < fiber_pos);

    let us = sample_engine(Country::Us)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    let us_kinds: Vec<ClaimKind> = us.claims.iter().map(|c| c.kind).collect();
    let fiber_pos = us_kinds
        .iter()
        .position(|k| matches!(k, ClaimKind::HighFiber | ClaimKind::SourceFiber))
        .unwrap();
    let protein_pos = us_kinds
        .iter()
        .position(|k| matches!(k, ClaimKind::HighProtein | ClaimKind::SourceProtein))
        .unwrap();
    assert!(fiber_pos < protein_pos);
}
