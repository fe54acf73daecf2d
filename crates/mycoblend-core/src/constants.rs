// ABOUTME: Domain constants shared across the workspace, organized by concern
// ABOUTME: Energy conversion factors, salt/sodium equivalence, claim thresholds, reference intakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Domain constants for blend calculation and labelling.
//!
//! Values follow the published regulatory sources cited per module; the
//! scoring shape constants mirror the production scoring rules.

/// Energy conversion factors
pub mod energy {
    /// Energy yield of protein (kJ per gram) - EU Regulation 1169/2011, Annex XIV
    pub const PROTEIN_KJ_PER_G: f64 = 17.0;

    /// Kilojoules per kilocalorie (thermochemical calorie)
    pub const KJ_PER_KCAL: f64 = 4.184;
}

/// Salt and sodium equivalence
pub mod salt {
    /// Milligrams of sodium per gram of salt (NaCl is 40% sodium by mass)
    pub const SODIUM_MG_PER_SALT_G: f64 = 400.0;
}

/// Nutrition-claim thresholds that do not vary by country
pub mod claims {
    /// "High in Vitamin D" threshold (micrograms per 100g) - 50% NRV per EU 1169/2011
    pub const HIGH_VITAMIN_D_UG: f64 = 10.0;
}

/// Adult daily reference intakes used by the UK front-of-pack label (FSA 2013)
pub mod reference_intake {
    /// Energy reference intake in kilojoules
    pub const ENERGY_KJ: f64 = 8400.0;

    /// Energy reference intake in kilocalories
    pub const ENERGY_KCAL: f64 = 2000.0;

    /// Total fat reference intake (grams)
    pub const FAT_G: f64 = 70.0;

    /// Saturated fat reference intake (grams)
    pub const SATURATES_G: f64 = 20.0;

    /// Total sugars reference intake (grams)
    pub const SUGARS_G: f64 = 90.0;

    /// Salt reference intake (grams)
    pub const SALT_G: f64 = 6.0;
}

/// Fixed shape parameters of the balance-priority score adjustments
pub mod scoring_shape {
    /// Target extract-plus-water share the balance recipe bonus is centred on
    pub const RECIPE_BONUS_CENTER: f64 = 0.40;

    /// Width (standard deviation) of the balance recipe bonus curve
    pub const RECIPE_BONUS_SIGMA: f64 = 0.10;
}
