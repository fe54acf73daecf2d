// ABOUTME: Country profiles with currencies, ingredient prices, and claim thresholds
// ABOUTME: Fixed nutrition-panel layouts and per-country nutrient labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Per-country configuration.
//!
//! Every market the blend ships to carries its own currency, ingredient
//! pricing basis, nutrition-claim thresholds, and fixed nutrition-panel
//! layout. A [`CountryProfile`] is an immutable value passed explicitly into
//! engine calls; there is no process-wide "active country".

use crate::errors::BlendError;
use crate::nutrients::Nutrient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    /// United States
    Us,
    /// United Kingdom
    Uk,
    /// European Union
    Eu,
    /// Australia
    Au,
}

/// How a country defines its protein content claims.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum ProteinRule {
    /// Absolute grams of protein per 100 g (US FDA, AU FSANZ style).
    Grams {
        /// Grams per 100 g for a "high in protein" claim
        high_g: f64,
        /// Grams per 100 g for a "source of protein" claim
        source_g: f64,
    },
    /// Share of total energy contributed by protein (UK FSA / EU 1924/2006).
    EnergyPercent {
        /// Percent of energy from protein for a "high in protein" claim
        high_pct: f64,
        /// Percent of energy from protein for a "source of protein" claim
        source_pct: f64,
    },
}

/// Market configuration: currency, ingredient prices, claim thresholds, and
/// panel conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    /// Which market this profile describes
    pub country: Country,
    /// Currency symbol for cost displays
    pub currency: String,
    /// Pricing basis shown next to prices ("per lb" or "per kg")
    pub price_unit: String,
    /// Price of the mushroom extract per pricing unit
    pub extract_price: f64,
    /// Price of water per pricing unit (nominal, non-zero for cost totals)
    pub water_price: f64,
    /// Grams of fiber per 100 g for a "high in fiber" claim
    pub high_fiber_g: f64,
    /// Grams of fiber per 100 g for a "source of fiber" claim
    pub source_fiber_g: f64,
    /// Protein claim rule for this market
    pub protein_rule: ProteinRule,
    /// Regional spelling used in claim text ("Fiber" or "Fibre")
    pub fiber_spelling: String,
}

/// US nutrition facts panel rows, in label order.
const PANEL_US: &[Nutrient] = &[
    Nutrient::EnergyKcal,
    Nutrient::TotalFat,
    Nutrient::SaturatedFat,
    Nutrient::TransFat,
    Nutrient::Cholesterol,
    Nutrient::Sodium,
    Nutrient::Carbohydrate,
    Nutrient::Fiber,
    Nutrient::TotalSugars,
    Nutrient::AddedSugars,
    Nutrient::Protein,
    Nutrient::VitaminD,
    Nutrient::Calcium,
    Nutrient::Iron,
    Nutrient::Potassium,
];

/// UK and EU back-of-pack rows, in label order.
const PANEL_UK_EU: &[Nutrient] = &[
    Nutrient::EnergyKj,
    Nutrient::EnergyKcal,
    Nutrient::TotalFat,
    Nutrient::SaturatedFat,
    Nutrient::Carbohydrate,
    Nutrient::TotalSugars,
    Nutrient::Fiber,
    Nutrient::Protein,
    Nutrient::Salt,
];

/// AU nutrition information panel rows, in label order.
const PANEL_AU: &[Nutrient] = &[
    Nutrient::EnergyKj,
    Nutrient::Protein,
    Nutrient::TotalFat,
    Nutrient::SaturatedFat,
    Nutrient::Carbohydrate,
    Nutrient::TotalSugars,
    Nutrient::Fiber,
    Nutrient::Sodium,
];

impl Country {
    /// All supported markets, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Us, Self::Uk, Self::Eu, Self::Au]
    }

    /// Two-letter market code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Uk => "UK",
            Self::Eu => "EU",
            Self::Au => "AU",
        }
    }

    /// The fixed nutrition-panel layout for this market.
    #[must_use]
    pub const fn panel(self) -> &'static [Nutrient] {
        match self {
            Self::Us => PANEL_US,
            Self::Uk | Self::Eu => PANEL_UK_EU,
            Self::Au => PANEL_AU,
        }
    }

    /// Panel row label for a nutrient, honoring regional spelling.
    #[must_use]
    pub const fn panel_label(self, nutrient: Nutrient) -> &'static str {
        match (self, nutrient) {
            (Self::Us, Nutrient::Fiber) => "Dietary Fiber",
            (_, Nutrient::Fiber) => "Dietary Fibre",
            (Self::Us, Nutrient::Carbohydrate) => "Total Carbohydrate",
            (Self::Us, Nutrient::AddedSugars) => "Includes Added Sugars",
            (_, n) => n.key(),
        }
    }

    /// The built-in profile for this market.
    ///
    /// US thresholds follow FDA nutrient content claim rules, UK/EU follow
    /// Regulation 1924/2006, AU follows FSANZ Standard 1.2.7.
    #[must_use]
    pub fn profile(self) -> CountryProfile {
        match self {
            Self::Us => CountryProfile {
                country: self,
                currency: "$".into(),
                price_unit: "per lb".into(),
                extract_price: 4.98,
                water_price: 0.001,
                high_fiber_g: 5.0,
                source_fiber_g: 2.5,
                protein_rule: ProteinRule::Grams {
                    high_g: 10.0,
                    source_g: 5.0,
                },
                fiber_spelling: "Fiber".into(),
            },
            Self::Uk => CountryProfile {
                country: self,
                currency: "£".into(),
                price_unit: "per kg".into(),
                extract_price: 6.00,
                water_price: 0.001,
                high_fiber_g: 6.0,
                source_fiber_g: 3.0,
                protein_rule: ProteinRule::EnergyPercent {
                    high_pct: 20.0,
                    source_pct: 10.0,
                },
                fiber_spelling: "Fibre".into(),
            },
            Self::Eu => CountryProfile {
                country: self,
                currency: "€".into(),
                price_unit: "per kg".into(),
                extract_price: 6.90,
                water_price: 0.001,
                high_fiber_g: 6.0,
                source_fiber_g: 3.0,
                protein_rule: ProteinRule::EnergyPercent {
                    high_pct: 20.0,
                    source_pct: 10.0,
                },
                fiber_spelling: "Fibre".into(),
            },
            Self::Au => CountryProfile {
                country: self,
                currency: "A$".into(),
                price_unit: "per kg".into(),
                extract_price: 7.50,
                water_price: 0.001,
                high_fiber_g: 7.0,
                source_fiber_g: 2.0,
                protein_rule: ProteinRule::Grams {
                    high_g: 10.0,
                    source_g: 5.0,
                },
                fiber_spelling: "Fibre".into(),
            },
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "US" | "USA" => Ok(Self::Us),
            "UK" | "GB" => Ok(Self::Uk),
            "EU" => Ok(Self::Eu),
            "AU" => Ok(Self::Au),
            other => Err(BlendError::invalid_input(format!(
                "Unknown country: '{other}'. Supported: US, UK, EU, AU"
            ))),
        }
    }
}

impl CountryProfile {
    /// Whether vitamin D belongs to this market's nutrition panel. Gates the
    /// vitamin D claim, which only US labels carry.
    #[must_use]
    pub fn panel_has(&self, nutrient: Nutrient) -> bool {
        self.country.panel().contains(&nutrient)
    }
}
