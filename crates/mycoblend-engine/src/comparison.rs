// ABOUTME: Blend-versus-beef panel comparison, cost breakdown, and carbon summary
// ABOUTME: Reference column uses the caller's ceiling trim, blend column the winner's
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Report building blocks.
//!
//! The comparison table walks the market's fixed nutrition panel and puts
//! the blend next to 100% beef at the caller's originally selected trim.
//! Deltas are percentage changes of the per-100 g values; a fiber row with
//! no beef baseline gets an added-fiber marker instead of a percentage.

use mycoblend_core::constants::energy;
use mycoblend_core::trim::TrimData;
use mycoblend_core::{BlendRatios, CountryProfile, Dataset, Nutrient, NutrientReference, TrimGrade};
use serde::{Deserialize, Serialize};

use crate::blend::blend_nutrient;

/// How a blend value relates to the beef reference for one panel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NutrientDelta {
    /// Fiber present in the blend with a zero beef baseline
    AddedFiber,
    /// Rounded change is 0%
    Unchanged,
    /// Rounded percentage change with its direction judged by the
    /// nutrient's preferred direction
    Changed {
        /// `round((blend / reference - 1) * 100)`
        percent: i32,
        /// Whether the change moves in the nutrient's preferred direction
        improved: bool,
    },
}

/// One row of the blend-versus-beef nutrition comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Panel nutrient
    pub nutrient: Nutrient,
    /// Market-specific row label
    pub label: String,
    /// Blend value per 100 g
    pub blend_value: f64,
    /// 100% beef value per 100 g at the reference trim
    pub reference_value: f64,
    /// Blend value formatted for display
    pub blend_display: String,
    /// Reference value formatted for display
    pub reference_display: String,
    /// Delta classification; absent when both sides are zero
    pub delta: Option<NutrientDelta>,
}

fn blend_panel_value(
    reference: &NutrientReference,
    nutrient: Nutrient,
    ratios: BlendRatios,
    trim: TrimGrade,
) -> f64 {
    let value = blend_nutrient(reference, nutrient, ratios, trim);
    if nutrient == Nutrient::EnergyKcal && value == 0.0 {
        let kj = blend_nutrient(reference, Nutrient::EnergyKj, ratios, trim);
        if kj > 0.0 {
            return kj / energy::KJ_PER_KCAL;
        }
    }
    value
}

fn beef_panel_value(reference: &NutrientReference, nutrient: Nutrient, trim: TrimGrade) -> f64 {
    let value = reference.beef_value(trim, nutrient);
    if nutrient == Nutrient::EnergyKcal && value == 0.0 {
        let kj = reference.beef_value(trim, Nutrient::EnergyKj);
        if kj > 0.0 {
            return kj / energy::KJ_PER_KCAL;
        }
    }
    value
}

fn delta_for(nutrient: Nutrient, blend: f64, reference: f64) -> Option<NutrientDelta> {
    if nutrient == Nutrient::Fiber && reference == 0.0 && blend > 0.0 {
        return Some(NutrientDelta::AddedFiber);
    }
    if reference > 0.0 {
        let percent = ((blend / reference - 1.0) * 100.0).round() as i32;
        if percent == 0 {
            return Some(NutrientDelta::Unchanged);
        }
        let improved = if nutrient.lower_is_better() {
            percent < 0
        } else {
            percent > 0
        };
        return Some(NutrientDelta::Changed { percent, improved });
    }
    None
}

/// Comparison rows in the market's panel order.
///
/// `blend_trim` is the recommended trim; `reference_trim` is the caller's
/// original fat-ceiling selection, which is what the 100%-beef column
/// replaces.
#[must_use]
pub fn comparison_rows(
    dataset: &Dataset,
    profile: &CountryProfile,
    ratios: BlendRatios,
    blend_trim: TrimGrade,
    reference_trim: TrimGrade,
) -> Vec<ComparisonRow> {
    profile
        .country
        .panel()
        .iter()
        .map(|&nutrient| {
            let blend_value = blend_panel_value(&dataset.reference, nutrient, ratios, blend_trim);
            let reference_value = beef_panel_value(&dataset.reference, nutrient, reference_trim);
            ComparisonRow {
                nutrient,
                label: profile.country.panel_label(nutrient).to_owned(),
                blend_value,
                reference_value,
                blend_display: nutrient.format_value(blend_value),
                reference_display: nutrient.format_value(reference_value),
                delta: delta_for(nutrient, blend_value, reference_value),
            }
        })
        .collect()
}

/// One priced ingredient line of the blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    /// Ingredient display name
    pub ingredient: String,
    /// Mass fraction of the blend
    pub share: f64,
    /// Price per pricing unit
    pub unit_price: f64,
    /// `share * unit_price`
    pub cost: f64,
}

/// Ingredient-level cost of the blend next to the 100%-beef reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Market currency symbol
    pub currency: String,
    /// Pricing unit label, e.g. "per lb"
    pub price_unit: String,
    /// Beef, extract, and (when present) water lines
    pub components: Vec<CostComponent>,
    /// Blend cost per pricing unit
    pub total: f64,
    /// The caller's original trim selection
    pub reference_trim: TrimGrade,
    /// Price of 100% beef at the reference trim
    pub reference_price: f64,
}

fn trim_price(dataset: &Dataset, trim: TrimGrade) -> f64 {
    dataset.trims.get(&trim).map_or(0.0, |data: &TrimData| data.price)
}

/// Cost lines for a recommended blend. The water line appears only for
/// rehydrated recipes.
#[must_use]
pub fn cost_breakdown(
    dataset: &Dataset,
    profile: &CountryProfile,
    ratios: BlendRatios,
    blend_trim: TrimGrade,
    reference_trim: TrimGrade,
) -> CostBreakdown {
    let beef_price = trim_price(dataset, blend_trim);
    let mut components = vec![
        CostComponent {
            ingredient: blend_trim.to_string(),
            share: ratios.beef,
            unit_price: beef_price,
            cost: ratios.beef * beef_price,
        },
        CostComponent {
            ingredient: "Shiitake Infusion".to_owned(),
            share: ratios.extract,
            unit_price: profile.extract_price,
            cost: ratios.extract * profile.extract_price,
        },
    ];
    if ratios.water > 0.0 {
        components.push(CostComponent {
            ingredient: "Water".to_owned(),
            share: ratios.water,
            unit_price: profile.water_price,
            cost: ratios.water * profile.water_price,
        });
    }
    let total = ratios.beef * beef_price
        + ratios.extract * profile.extract_price
        + ratios.water * profile.water_price;
    CostBreakdown {
        currency: profile.currency.clone(),
        price_unit: profile.price_unit.clone(),
        components,
        total,
        reference_trim,
        reference_price: trim_price(dataset, reference_trim),
    }
}

/// Footprint of the blend against 100% beef, per kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonSummary {
    /// Blend CO₂e per kg; water carries none
    pub blend_co2: f64,
    /// 100%-beef CO₂e per kg
    pub beef_co2: f64,
    /// `round((1 - blend/beef) * 100)`; absent when the beef factor is zero
    pub reduction_pct: Option<i32>,
}

/// CO₂e of the blend against the all-beef baseline.
#[must_use]
pub fn carbon_summary(dataset: &Dataset, ratios: BlendRatios) -> CarbonSummary {
    let blend_co2 = ratios.beef * dataset.beef_co2 + ratios.extract * dataset.extract_co2;
    let beef_co2 = dataset.beef_co2;
    let reduction_pct = if beef_co2 == 0.0 {
        None
    } else {
        Some(((1.0 - blend_co2 / beef_co2) * 100.0).round() as i32)
    };
    CarbonSummary {
        blend_co2,
        beef_co2,
        reduction_pct,
    }
}
