// ABOUTME: Integration tests for full blend report assembly
// ABOUTME: Panel comparison, cost breakdown, carbon summary, and report identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Report assembly tests over the bundled sample dataset.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use common::{burger_request, mince_request, sample_engine};
use mycoblend::{Country, Nutrient, NutrientDelta, Priority, TrimGrade};

#[test]
fn comparison_follows_the_market_panel() {
    let us = sample_engine(Country::Us)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    assert_eq!(us.comparison.len(), 15);
    assert_eq!(us.comparison[0].nutrient, Nutrient::EnergyKcal);

    let uk = sample_engine(Country::Uk)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    assert_eq!(uk.comparison.len(), 9);
    assert_eq!(uk.comparison[0].nutrient, Nutrient::EnergyKj);

    let au = sample_engine(Country::Au)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    assert_eq!(au.comparison.len(), 8);
    assert!(au.comparison.iter().any(|r| r.nutrient == Nutrient::Sodium));
    assert!(au.comparison.iter().all(|r| r.nutrient != Nutrient::Salt));
}

#[test]
fn blend_gains_fiber_and_sheds_fat_against_beef() {
    let report = sample_engine(Country::Uk)
        .report(&burger_request(Priority::Balance))
        .unwrap();

    let fiber = report
        .comparison
        .iter()
        .find(|r| r.nutrient == Nutrient::Fiber)
        .unwrap();
    // Beef has no fiber row, so the blend's fiber is an addition
    assert_eq!(fiber.delta, Some(NutrientDelta::AddedFiber));
    assert!(fiber.blend_value > 0.0);

    let fat = report
        .comparison
        .iter()
        .find(|r| r.nutrient == Nutrient::TotalFat)
        .unwrap();
    match fat.delta {
        Some(NutrientDelta::Changed { percent, improved }) => {
            assert!(percent < 0);
            assert!(improved);
        }
        other => panic!("expected a fat reduction, got {other:?}"),
    }
}

#[test]
fn protein_dilution_reads_as_worse_not_better() {
    let report = sample_engine(Country::Uk)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    let protein = report
        .comparison
        .iter()
        .find(|r| r.nutrient == Nutrient::Protein)
        .unwrap();
    match protein.delta {
        Some(NutrientDelta::Changed { percent, improved }) => {
            assert!(percent < 0);
            assert!(!improved);
        }
        other => panic!("expected a protein decrease, got {other:?}"),
    }
}

#[test]
fn cost_breakdown_sums_and_prices_the_reference() {
    let engine = sample_engine(Country::Us);
    let report = engine.report(&mince_request(Priority::Balance)).unwrap();

    let cost = &report.cost;
    assert_eq!(cost.currency, "$");
    assert_eq!(cost.price_unit, "per lb");

    let component_sum: f64 = cost.components.iter().map(|c| c.cost).sum();
    assert!((component_sum - cost.total).abs() < 1e-9);

    // Reference column prices 100% beef at the caller's 80CL ceiling
    assert_eq!(cost.reference_trim, TrimGrade::new(80));
    assert!((cost.reference_price - 3.05).abs() < 1e-12);

    // The first line is the recommended trim itself
    assert_eq!(
        cost.components[0].ingredient.parse::<TrimGrade>().unwrap(),
        report.recommendation.trim
    );
}

#[test]
fn water_cost_line_tracks_the_recipe() {
    let engine = sample_engine(Country::Us);
    let report = engine.report(&mince_request(Priority::Cost)).unwrap();
    let has_water_share = report.recommendation.ratios.water > 0.0;
    let has_water_line = report.cost.components.iter().any(|c| c.ingredient == "Water");
    assert_eq!(has_water_share, has_water_line);
}

#[test]
fn carbon_summary_scales_with_the_beef_share() {
    let report = sample_engine(Country::Eu)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    let ratios = report.recommendation.ratios;
    let expected = ratios.beef * 27.0 + ratios.extract * 2.1;
    assert!((report.carbon.blend_co2 - expected).abs() < 1e-9);
    assert!((report.carbon.beef_co2 - 27.0).abs() < 1e-12);

    let reduction = report.carbon.reduction_pct.unwrap();
    assert!((20..=50).contains(&reduction));
}

#[test]
fn reports_are_stamped_and_echo_the_request() {
    let engine = sample_engine(Country::Au);
    let request = burger_request(Priority::Sustainability);
    let report = engine.report(&request).unwrap();

    assert_eq!(report.country, Country::Au);
    assert_eq!(report.format, request.format);
    assert!((report.fat_ceiling - request.fat_ceiling).abs() < 1e-12);
    assert_eq!(report.priority, Priority::Sustainability);

    let second = engine.report(&request).unwrap();
    assert_ne!(report.id, second.id);
    assert_eq!(report.recommendation, second.recommendation);
}

#[test]
fn reports_serialize_to_json() {
    let report = sample_engine(Country::Uk)
        .report(&burger_request(Priority::Balance))
        .unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"traffic_light\""));
    assert!(json.contains(&report.recommendation.recipe_name));
}
