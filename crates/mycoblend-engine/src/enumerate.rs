// ABOUTME: Candidate enumeration over eligible recipe and trim combinations
// ABOUTME: Fat-ceiling validation, trim floor scan, and hard-constraint fallback policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Candidate enumeration.
//!
//! For a product format and fat ceiling, every physically valid
//! (recipe, trim) pair becomes a [`Candidate`] carrying the raw metrics the
//! scoring engine normalizes. Trim eligibility runs between two bounds in
//! [`LEAN_ORDER`]:
//!
//! - the **ceiling** is the trim matching the caller's fat selection — the
//!   leanest grade the engine may use;
//! - the **floor** is found per recipe by scanning fatty-to-lean for the
//!   last grade whose blended fat still exceeds the ceiling, i.e. the
//!   closest-above option (falling back to the first at-or-below grade when
//!   nothing exceeds it).
//!
//! Hard claim constraints filter the pool first; an empty constrained pool
//! falls back to the unconstrained rebuild with a flag the caller surfaces.

use crate::blend::blend_nutrient;
use crate::claims::meets_high_protein;
use mycoblend_core::constants::energy;
use mycoblend_core::trim::LEAN_ORDER;
use mycoblend_core::{
    BlendError, BlendRatios, BlendResult, CountryProfile, Dataset, Nutrient, ProductFormat,
    TrimGrade,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One scoreable (recipe, trim) combination with its raw metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Recipe display name
    pub recipe_name: String,
    /// Beef trim grade
    pub trim: TrimGrade,
    /// Recipe mass fractions
    pub ratios: BlendRatios,
    /// Dietary fiber (g per 100 g); beef contributes none
    pub fiber: f64,
    /// Protein (g per 100 g)
    pub protein: f64,
    /// Energy (kJ per 100 g)
    pub energy_kj: f64,
    /// Energy (kcal per 100 g), derived from kJ when the table lacks kcal
    pub calories: f64,
    /// Saturated fat (g per 100 g)
    pub saturated_fat: f64,
    /// Blend cost per pricing unit
    pub cost: f64,
    /// Blend CO₂e per kg
    pub co2: f64,
    /// Weighted-average fat fraction of the blend
    pub blended_fat: f64,
}

/// Optional hard claim constraints on the candidate pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimConstraints {
    /// Require the blend to clear the market's high-fiber threshold
    pub must_fiber: bool,
    /// Require the blend to clear the market's high-protein rule
    pub must_protein: bool,
}

impl ClaimConstraints {
    /// Whether any hard constraint is requested.
    #[must_use]
    pub const fn any(self) -> bool {
        self.must_fiber || self.must_protein
    }
}

/// The enumerated pool plus the context scoring needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolBuild {
    /// Candidates in enumeration order (recipe order, then fatty-to-lean)
    pub candidates: Vec<Candidate>,
    /// True when a hard constraint emptied the pool and the unconstrained
    /// rebuild was used instead
    pub used_fallback: bool,
    /// Position of the caller's ceiling trim in [`LEAN_ORDER`]
    pub ceiling_index: usize,
}

/// Resolve the caller's fat ceiling to its [`LEAN_ORDER`] position.
///
/// The ceiling must match a trim in the dataset exactly; anything else is an
/// invalid-input error listing the fractions on offer.
///
/// # Errors
/// Returns an error when no trim matches the ceiling or the matching trim
/// is not a standard grade
pub fn ceiling_index(dataset: &Dataset, fat_ceiling: f64) -> BlendResult<usize> {
    let grade = dataset.trim_for_fat(fat_ceiling).ok_or_else(|| {
        let available = dataset
            .available_fat_fractions()
            .iter()
            .map(|f| format!("{f:.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        BlendError::invalid_input(format!(
            "Fat ceiling {fat_ceiling} matches no trim in the dataset; available fat fractions: {available}"
        ))
    })?;
    grade.lean_order_index().ok_or_else(|| {
        BlendError::data_invalid(format!("Trim {grade} is outside the standard lean order"))
    })
}

/// Floor of the eligible trim range for one recipe.
///
/// Scans fatty-to-lean and keeps the last grade whose blended fat exceeds
/// the ceiling; when nothing exceeds it, the first grade at-or-below; when
/// nothing qualifies at all, the leanest grade.
fn floor_index(dataset: &Dataset, ratios: BlendRatios, fat_ceiling: f64, extract_fat: f64) -> usize {
    let blended = |grade: &TrimGrade| {
        dataset
            .trims
            .get(grade)
            .map(|data| data.fat_fraction * ratios.beef + extract_fat * ratios.extract)
    };

    let mut floor = None;
    for (i, grade) in LEAN_ORDER.iter().enumerate() {
        if let Some(fat) = blended(grade) {
            if fat > fat_ceiling {
                floor = Some(i);
            }
        }
    }
    if let Some(i) = floor {
        return i;
    }
    for (i, grade) in LEAN_ORDER.iter().enumerate() {
        if let Some(fat) = blended(grade) {
            if fat <= fat_ceiling {
                return i;
            }
        }
    }
    LEAN_ORDER.len() - 1
}

fn collect(
    dataset: &Dataset,
    profile: &CountryProfile,
    format: ProductFormat,
    fat_ceiling: f64,
    ceiling_index: usize,
    constraints: ClaimConstraints,
) -> Vec<Candidate> {
    let extract_fat = dataset.extract_fat_fraction();
    let extract_fiber = dataset.extract_fiber();
    let mut out = Vec::new();

    let Some(recipes) = dataset.recipes_for(format) else {
        return out;
    };

    for (recipe_name, &ratios) in recipes {
        // Formed products need binding strength: no rehydrated recipes and
        // no half-beef recipes.
        if format.is_formed() && ratios.water > 0.0 {
            continue;
        }
        if format.is_formed() && (ratios.beef - 0.5).abs() < f64::EPSILON {
            continue;
        }

        let floor = floor_index(dataset, ratios, fat_ceiling, extract_fat);
        let lo = floor.min(ceiling_index);
        let hi = floor.max(ceiling_index);

        for grade in &LEAN_ORDER[lo..=hi] {
            let Some(data) = dataset.trims.get(grade) else {
                continue;
            };

            let blended_fat = data.fat_fraction * ratios.beef + extract_fat * ratios.extract;
            let fiber = extract_fiber * ratios.extract;
            let protein = blend_nutrient(&dataset.reference, Nutrient::Protein, ratios, *grade);
            let energy_kj = blend_nutrient(&dataset.reference, Nutrient::EnergyKj, ratios, *grade);
            let mut calories =
                blend_nutrient(&dataset.reference, Nutrient::EnergyKcal, ratios, *grade);
            if calories == 0.0 && energy_kj > 0.0 {
                calories = energy_kj / energy::KJ_PER_KCAL;
            }
            let saturated_fat =
                blend_nutrient(&dataset.reference, Nutrient::SaturatedFat, ratios, *grade);
            let cost = ratios.beef * data.price
                + ratios.extract * profile.extract_price
                + ratios.water * profile.water_price;
            let co2 = ratios.beef * dataset.beef_co2 + ratios.extract * dataset.extract_co2;

            if constraints.must_fiber && fiber < profile.high_fiber_g {
                continue;
            }
            if constraints.must_protein && !meets_high_protein(protein, energy_kj, profile) {
                continue;
            }

            out.push(Candidate {
                recipe_name: recipe_name.clone(),
                trim: *grade,
                ratios,
                fiber,
                protein,
                energy_kj,
                calories,
                saturated_fat,
                cost,
                co2,
                blended_fat,
            });
        }
    }
    out
}

/// Enumerate the candidate pool for a format under a fat ceiling.
///
/// Constraints apply first; when they empty the pool the unconstrained
/// rebuild is returned with `used_fallback` set (and a WARN logged), so the
/// caller always gets whatever candidates the data allows.
///
/// # Errors
/// Returns an error when the fat ceiling matches no trim in the dataset
pub fn build_pool(
    dataset: &Dataset,
    profile: &CountryProfile,
    format: ProductFormat,
    fat_ceiling: f64,
    constraints: ClaimConstraints,
) -> BlendResult<PoolBuild> {
    let ceiling = ceiling_index(dataset, fat_ceiling)?;

    let constrained = collect(dataset, profile, format, fat_ceiling, ceiling, constraints);
    if !constrained.is_empty() || !constraints.any() {
        return Ok(PoolBuild {
            candidates: constrained,
            used_fallback: false,
            ceiling_index: ceiling,
        });
    }

    let unconstrained = collect(
        dataset,
        profile,
        format,
        fat_ceiling,
        ceiling,
        ClaimConstraints::default(),
    );
    let used_fallback = !unconstrained.is_empty();
    if used_fallback {
        warn!(
            %format,
            must_fiber = constraints.must_fiber,
            must_protein = constraints.must_protein,
            "Hard claim constraints eliminated every candidate; using unconstrained pool"
        );
    }
    Ok(PoolBuild {
        candidates: unconstrained,
        used_fallback,
        ceiling_index: ceiling,
    })
}
