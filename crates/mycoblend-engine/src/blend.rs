// ABOUTME: Nutrient interpolation between mushroom extract and beef trim by mass fraction
// ABOUTME: Derived label vector with kcal, salt, and sodium fallbacks plus the FVNL proxy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Blend nutrient math.
//!
//! A blend's per-100 g nutrient value is the linear interpolation of the
//! extract and trim reference values by mass fraction; water contributes
//! nothing. [`LabelNutrients`] packages the values the claim evaluator and
//! the three label algorithms consume, with the cross-derivations some
//! markets' data requires (kJ-only energy, sodium-only salt).

use mycoblend_core::constants::{energy, salt};
use mycoblend_core::dataset::NutrientReference;
use mycoblend_core::trim::TrimGrade;
use mycoblend_core::{BlendRatios, Nutrient};
use serde::{Deserialize, Serialize};

/// Per-100 g blend value of one nutrient.
///
/// `extract[nutrient] × extract_fraction + beef[trim][nutrient] ×
/// beef_fraction`; absent reference entries contribute zero.
#[must_use]
pub fn blend_nutrient(
    reference: &NutrientReference,
    nutrient: Nutrient,
    ratios: BlendRatios,
    trim: TrimGrade,
) -> f64 {
    reference.extract_value(nutrient) * ratios.extract
        + reference.beef_value(trim, nutrient) * ratios.beef
}

/// The nutrient vector consumed by claims, labels, and panel comparisons.
///
/// Values are per 100 g. Three fields are derived when their own entry is
/// missing from the data:
///
/// - `energy_kcal` falls back to `energy_kj / 4.184` (AU tables store kJ
///   only);
/// - `salt_g` falls back to `sodium_mg / 400`;
/// - `sodium_mg` falls back to `salt_g × 400`.
///
/// `fvnl_pct` is the fruit/vegetable/nut/legume percentage the Health Star
/// Rating needs; the mushroom extract fraction serves as its proxy, so the
/// 100%-beef reference always carries zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelNutrients {
    /// Energy in kJ
    pub energy_kj: f64,
    /// Energy in kcal, derived from kJ when absent
    pub energy_kcal: f64,
    /// Total fat (g)
    pub total_fat: f64,
    /// Saturated fat (g)
    pub saturated_fat: f64,
    /// Total sugars (g)
    pub sugars: f64,
    /// Dietary fiber (g)
    pub fiber: f64,
    /// Protein (g)
    pub protein: f64,
    /// Salt (g), derived from sodium when absent
    pub salt_g: f64,
    /// Sodium (mg), derived from salt when absent
    pub sodium_mg: f64,
    /// Fruit/vegetable/nut/legume percentage (extract-fraction proxy)
    pub fvnl_pct: f64,
}

impl LabelNutrients {
    fn from_lookup(lookup: impl Fn(Nutrient) -> f64, fvnl_pct: f64) -> Self {
        let energy_kj = lookup(Nutrient::EnergyKj);
        let mut energy_kcal = lookup(Nutrient::EnergyKcal);
        if energy_kcal == 0.0 && energy_kj > 0.0 {
            energy_kcal = energy_kj / energy::KJ_PER_KCAL;
        }
        let mut salt_g = lookup(Nutrient::Salt);
        let mut sodium_mg = lookup(Nutrient::Sodium);
        if salt_g == 0.0 && sodium_mg > 0.0 {
            salt_g = sodium_mg / salt::SODIUM_MG_PER_SALT_G;
        }
        if sodium_mg == 0.0 && salt_g > 0.0 {
            sodium_mg = salt_g * salt::SODIUM_MG_PER_SALT_G;
        }
        Self {
            energy_kj,
            energy_kcal,
            total_fat: lookup(Nutrient::TotalFat),
            saturated_fat: lookup(Nutrient::SaturatedFat),
            sugars: lookup(Nutrient::TotalSugars),
            fiber: lookup(Nutrient::Fiber),
            protein: lookup(Nutrient::Protein),
            salt_g,
            sodium_mg,
            fvnl_pct,
        }
    }

    /// Vector for a blend of the given ratios on the given trim.
    #[must_use]
    pub fn for_blend(reference: &NutrientReference, ratios: BlendRatios, trim: TrimGrade) -> Self {
        Self::from_lookup(
            |nutrient| blend_nutrient(reference, nutrient, ratios, trim),
            ratios.extract * 100.0,
        )
    }

    /// Vector for the 100%-beef reference on the given trim.
    #[must_use]
    pub fn for_beef(reference: &NutrientReference, trim: TrimGrade) -> Self {
        Self::from_lookup(|nutrient| reference.beef_value(trim, nutrient), 0.0)
    }

    /// Field lookup by nutrient for the nutrients this vector carries.
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::EnergyKj => Some(self.energy_kj),
            Nutrient::EnergyKcal => Some(self.energy_kcal),
            Nutrient::TotalFat => Some(self.total_fat),
            Nutrient::SaturatedFat => Some(self.saturated_fat),
            Nutrient::TotalSugars => Some(self.sugars),
            Nutrient::Fiber => Some(self.fiber),
            Nutrient::Protein => Some(self.protein),
            Nutrient::Salt => Some(self.salt_g),
            Nutrient::Sodium => Some(self.sodium_mg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn reference() -> NutrientReference {
        let mut extract = IndexMap::new();
        extract.insert(Nutrient::Fiber, 24.0);
        extract.insert(Nutrient::Protein, 4.0);
        extract.insert(Nutrient::EnergyKj, 250.0);

        let mut beef_80 = IndexMap::new();
        beef_80.insert(Nutrient::Protein, 17.0);
        beef_80.insert(Nutrient::EnergyKj, 1050.0);
        beef_80.insert(Nutrient::Sodium, 66.0);

        let mut beef = IndexMap::new();
        beef.insert(TrimGrade::new(80), beef_80);
        NutrientReference { extract, beef }
    }

    #[test]
    fn interpolates_by_mass_fraction() {
        let reference = reference();
        let ratios = BlendRatios::new(0.6, 0.4, 0.0);
        let protein = blend_nutrient(&reference, Nutrient::Protein, ratios, TrimGrade::new(80));
        assert!((protein - (4.0 * 0.4 + 17.0 * 0.6)).abs() < 1e-12);
    }

    #[test]
    fn missing_entries_contribute_zero() {
        let reference = reference();
        let ratios = BlendRatios::new(0.6, 0.4, 0.0);
        let fiber = blend_nutrient(&reference, Nutrient::Fiber, ratios, TrimGrade::new(80));
        // beef has no fiber entry, only the extract side counts
        assert!((fiber - 24.0 * 0.4).abs() < 1e-12);
        let unknown_trim =
            blend_nutrient(&reference, Nutrient::Protein, ratios, TrimGrade::new(65));
        assert!((unknown_trim - 4.0 * 0.4).abs() < 1e-12);
    }

    #[test]
    fn kcal_derives_from_kj_when_absent() {
        let reference = reference();
        let vector = LabelNutrients::for_beef(&reference, TrimGrade::new(80));
        assert!((vector.energy_kcal - 1050.0 / 4.184).abs() < 1e-9);
    }

    #[test]
    fn salt_and_sodium_derive_from_each_other() {
        let reference = reference();
        let vector = LabelNutrients::for_beef(&reference, TrimGrade::new(80));
        assert!((vector.salt_g - 66.0 / 400.0).abs() < 1e-12);
        assert_eq!(vector.sodium_mg, 66.0);

        let mut with_salt = NutrientReference::default();
        with_salt.extract.insert(Nutrient::Salt, 0.5);
        let blend = LabelNutrients::for_blend(
            &with_salt,
            BlendRatios::new(0.0, 1.0, 0.0),
            TrimGrade::new(80),
        );
        assert_eq!(blend.salt_g, 0.5);
        assert_eq!(blend.sodium_mg, 200.0);
    }

    #[test]
    fn fvnl_is_extract_fraction_for_blends_and_zero_for_beef() {
        let reference = reference();
        let blend = LabelNutrients::for_blend(
            &reference,
            BlendRatios::new(0.55, 0.40, 0.05),
            TrimGrade::new(80),
        );
        assert_eq!(blend.fvnl_pct, 40.0);
        let beef = LabelNutrients::for_beef(&reference, TrimGrade::new(80));
        assert_eq!(beef.fvnl_pct, 0.0);
    }
}
