// ABOUTME: Front-of-pack label schemes gated by market
// ABOUTME: UK traffic light, EU Nutri-Score, AU Health Star Rating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Front-of-pack nutrition labels.
//!
//! Each market mandates a different scheme, computed here for the blend
//! and for the 100%-beef reference so reports can put the two side by
//! side. The US has no comparable front-of-pack scheme and yields no
//! assessment.

pub mod health_star;
pub mod nutri_score;
pub mod traffic_light;

pub use health_star::HealthStarLabel;
pub use nutri_score::{NutriGrade, NutriScoreLabel, NutriScorePoints};
pub use traffic_light::{TrafficCell, TrafficColor, TrafficLightLabel};

use mycoblend_core::Country;
use serde::Serialize;

use crate::blend::LabelNutrients;

/// Blend-versus-beef label pair under the market's mandated scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum LabelAssessment {
    /// UK FSA traffic light
    TrafficLight {
        /// Label for the recommended blend
        blend: TrafficLightLabel,
        /// Label for 100% beef at the reference trim
        reference: TrafficLightLabel,
    },
    /// EU Nutri-Score
    NutriScore {
        /// Label for the recommended blend
        blend: NutriScoreLabel,
        /// Label for 100% beef at the reference trim
        reference: NutriScoreLabel,
    },
    /// AU Health Star Rating
    HealthStar {
        /// Label for the recommended blend
        blend: HealthStarLabel,
        /// Label for 100% beef at the reference trim
        reference: HealthStarLabel,
    },
}

/// Compute the market's label scheme for a blend and its beef reference.
/// Returns `None` for markets without a front-of-pack scheme.
#[must_use]
pub fn for_country(
    country: Country,
    blend: &LabelNutrients,
    reference: &LabelNutrients,
) -> Option<LabelAssessment> {
    match country {
        Country::Uk => Some(LabelAssessment::TrafficLight {
            blend: traffic_light::assess(blend),
            reference: traffic_light::assess(reference),
        }),
        Country::Eu => Some(LabelAssessment::NutriScore {
            blend: nutri_score::assess(blend),
            reference: nutri_score::assess(reference),
        }),
        Country::Au => Some(LabelAssessment::HealthStar {
            blend: health_star::assess(blend),
            reference: health_star::assess(reference),
        }),
        Country::Us => None,
    }
}
