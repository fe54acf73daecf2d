// ABOUTME: Bundled per-market demonstration dataset for the CLI and integration tests
// ABOUTME: Representative trim prices, recipes, nutrition references, and carbon factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! # Bundled Sample Dataset
//!
//! A realistic demonstration dataset per market, used by `mycoblend-cli`
//! when no `--data` file is given and by the integration tests. Values are
//! representative of raw ground beef and shiitake extract, not a substitute
//! for live market data.
//!
//! Regional table conventions are reproduced deliberately: the US stores
//! Calories and sodium, the UK and EU store kJ plus kcal and salt, and AU
//! stores kJ and sodium only, so the kcal and salt/sodium derivations in the
//! engine are all exercised by real table shapes.

use indexmap::IndexMap;

use mycoblend_core::constants::salt;
use mycoblend_core::dataset::{NutrientReference, RecipeTable};
use mycoblend_core::trim::{TrimData, TrimTable};
use mycoblend_core::{BlendRatios, Country, Dataset, Nutrient, ProductFormat, LEAN_ORDER};

/// Carbon intensity of shiitake extract, kg CO₂e per kg
const EXTRACT_CO2: f64 = 2.1;

/// Carbon intensity of beef, kg CO₂e per kg
const BEEF_CO2: f64 = 27.0;

/// Trim prices aligned with [`LEAN_ORDER`] (fatty to lean), per market
/// pricing unit.
const PRICES_US: [f64; 7] = [2.15, 2.35, 2.55, 2.80, 3.05, 3.45, 3.95];
const PRICES_UK: [f64; 7] = [4.15, 4.45, 4.80, 5.20, 5.65, 6.20, 6.90];
const PRICES_EU: [f64; 7] = [4.35, 4.70, 5.05, 5.45, 5.95, 6.55, 7.25];
const PRICES_AU: [f64; 7] = [6.10, 6.50, 6.95, 7.45, 8.05, 8.75, 9.60];

/// Per-100 g beef values aligned with [`LEAN_ORDER`]. Protein follows the
/// raw ground-beef gradient (20.0 g at 90CL down to 11.6 g at 60CL); energy
/// is 9 kcal per fat gram plus 4 kcal per protein gram.
const BEEF_PROTEIN: [f64; 7] = [11.6, 13.0, 14.4, 15.8, 17.2, 18.6, 20.0];
const BEEF_ENERGY_KCAL: [f64; 7] = [406.0, 367.0, 328.0, 288.0, 249.0, 209.0, 170.0];
const BEEF_ENERGY_KJ: [f64; 7] = [1699.0, 1536.0, 1372.0, 1205.0, 1042.0, 874.0, 711.0];
const BEEF_SATURATED_FAT: [f64; 7] = [15.2, 13.3, 11.4, 9.5, 7.6, 5.7, 3.8];
const BEEF_TRANS_FAT: [f64; 7] = [1.6, 1.4, 1.2, 1.0, 0.8, 0.6, 0.4];
const BEEF_SODIUM_MG: [f64; 7] = [63.0, 64.0, 66.0, 67.0, 69.0, 70.0, 72.0];
const BEEF_CHOLESTEROL_MG: [f64; 7] = [80.0, 78.0, 75.0, 73.0, 71.0, 68.0, 65.0];
const BEEF_IRON_MG: [f64; 7] = [1.7, 1.8, 1.9, 2.0, 2.1, 2.2, 2.3];
const BEEF_POTASSIUM_MG: [f64; 7] = [238.0, 252.0, 267.0, 281.0, 295.0, 310.0, 324.0];

/// Per-100 g shiitake extract values. The extract is UV-enriched, so a 30%
/// inclusion clears the 10 µg high-vitamin-D threshold on the US panel.
const EXTRACT_ENERGY_KJ: f64 = 560.0;
const EXTRACT_ENERGY_KCAL: f64 = 134.0;
const EXTRACT_TOTAL_FAT: f64 = 0.9;
const EXTRACT_SATURATED_FAT: f64 = 0.2;
const EXTRACT_CARBOHYDRATE: f64 = 68.0;
const EXTRACT_SUGARS: f64 = 2.4;
const EXTRACT_FIBER: f64 = 24.0;
const EXTRACT_PROTEIN: f64 = 9.6;
const EXTRACT_SODIUM_MG: f64 = 9.0;
const EXTRACT_VITAMIN_D_UG: f64 = 38.0;
const EXTRACT_CALCIUM_MG: f64 = 11.0;
const EXTRACT_IRON_MG: f64 = 1.7;
const EXTRACT_POTASSIUM_MG: f64 = 1530.0;

/// Build the bundled demonstration dataset for a market.
#[must_use]
pub fn dataset(country: Country) -> Dataset {
    Dataset::new(
        trim_table(country),
        recipe_table(),
        nutrient_reference(country),
        EXTRACT_CO2,
        BEEF_CO2,
    )
}

fn trim_table(country: Country) -> TrimTable {
    let prices = match country {
        Country::Us => PRICES_US,
        Country::Uk => PRICES_UK,
        Country::Eu => PRICES_EU,
        Country::Au => PRICES_AU,
    };

    let mut trims = TrimTable::default();
    for (grade, price) in LEAN_ORDER.iter().zip(prices) {
        trims.insert(
            *grade,
            TrimData {
                fat_fraction: grade.fat_fraction(),
                price,
            },
        );
    }
    trims
}

/// The product line is the same in every market. The formed set includes a
/// rehydrated and a half-beef recipe on purpose; enumeration rules them out
/// for burgers and keeps them for mince.
fn recipe_table() -> RecipeTable {
    let mut formed = IndexMap::new();
    formed.insert("75/25, no water".to_owned(), BlendRatios::new(0.75, 0.25, 0.0));
    formed.insert("70/30, no water".to_owned(), BlendRatios::new(0.70, 0.30, 0.0));
    formed.insert("50/50, no water".to_owned(), BlendRatios::new(0.50, 0.50, 0.0));
    formed.insert(
        "55/35 rehydrated".to_owned(),
        BlendRatios::new(0.55, 0.35, 0.10),
    );

    let mut unformed = IndexMap::new();
    unformed.insert("70/30, no water".to_owned(), BlendRatios::new(0.70, 0.30, 0.0));
    unformed.insert("60/40, no water".to_owned(), BlendRatios::new(0.60, 0.40, 0.0));
    unformed.insert(
        "55/35 rehydrated".to_owned(),
        BlendRatios::new(0.55, 0.35, 0.10),
    );

    let mut recipes = RecipeTable::default();
    recipes.insert(ProductFormat::BurgerMeatball, formed);
    recipes.insert(ProductFormat::GroundBeef, unformed);
    recipes
}

fn extract_rows(country: Country) -> IndexMap<Nutrient, f64> {
    let mut rows = IndexMap::new();
    match country {
        Country::Us => {
            rows.insert(Nutrient::EnergyKcal, EXTRACT_ENERGY_KCAL);
        }
        Country::Uk | Country::Eu => {
            rows.insert(Nutrient::EnergyKj, EXTRACT_ENERGY_KJ);
            rows.insert(Nutrient::EnergyKcal, EXTRACT_ENERGY_KCAL);
        }
        Country::Au => {
            rows.insert(Nutrient::EnergyKj, EXTRACT_ENERGY_KJ);
        }
    }

    rows.insert(Nutrient::TotalFat, EXTRACT_TOTAL_FAT);
    rows.insert(Nutrient::SaturatedFat, EXTRACT_SATURATED_FAT);
    rows.insert(Nutrient::Carbohydrate, EXTRACT_CARBOHYDRATE);
    rows.insert(Nutrient::TotalSugars, EXTRACT_SUGARS);
    rows.insert(Nutrient::Fiber, EXTRACT_FIBER);
    rows.insert(Nutrient::Protein, EXTRACT_PROTEIN);

    match country {
        Country::Us => {
            rows.insert(Nutrient::TransFat, 0.0);
            rows.insert(Nutrient::Cholesterol, 0.0);
            rows.insert(Nutrient::Sodium, EXTRACT_SODIUM_MG);
            rows.insert(Nutrient::AddedSugars, 0.0);
            rows.insert(Nutrient::VitaminD, EXTRACT_VITAMIN_D_UG);
            rows.insert(Nutrient::Calcium, EXTRACT_CALCIUM_MG);
            rows.insert(Nutrient::Iron, EXTRACT_IRON_MG);
            rows.insert(Nutrient::Potassium, EXTRACT_POTASSIUM_MG);
        }
        Country::Uk | Country::Eu => {
            rows.insert(
                Nutrient::Salt,
                EXTRACT_SODIUM_MG / salt::SODIUM_MG_PER_SALT_G,
            );
        }
        Country::Au => {
            rows.insert(Nutrient::Sodium, EXTRACT_SODIUM_MG);
        }
    }
    rows
}

fn beef_rows(country: Country, index: usize) -> IndexMap<Nutrient, f64> {
    let fat_g = LEAN_ORDER[index].fat_fraction() * 100.0;

    let mut rows = IndexMap::new();
    match country {
        Country::Us => {
            rows.insert(Nutrient::EnergyKcal, BEEF_ENERGY_KCAL[index]);
        }
        Country::Uk | Country::Eu => {
            rows.insert(Nutrient::EnergyKj, BEEF_ENERGY_KJ[index]);
            rows.insert(Nutrient::EnergyKcal, BEEF_ENERGY_KCAL[index]);
        }
        Country::Au => {
            rows.insert(Nutrient::EnergyKj, BEEF_ENERGY_KJ[index]);
        }
    }

    rows.insert(Nutrient::TotalFat, fat_g);
    rows.insert(Nutrient::SaturatedFat, BEEF_SATURATED_FAT[index]);
    rows.insert(Nutrient::Carbohydrate, 0.0);
    rows.insert(Nutrient::TotalSugars, 0.0);
    rows.insert(Nutrient::Protein, BEEF_PROTEIN[index]);

    match country {
        Country::Us => {
            rows.insert(Nutrient::TransFat, BEEF_TRANS_FAT[index]);
            rows.insert(Nutrient::Cholesterol, BEEF_CHOLESTEROL_MG[index]);
            rows.insert(Nutrient::Sodium, BEEF_SODIUM_MG[index]);
            rows.insert(Nutrient::AddedSugars, 0.0);
            rows.insert(Nutrient::VitaminD, 0.1);
            rows.insert(Nutrient::Calcium, 18.0);
            rows.insert(Nutrient::Iron, BEEF_IRON_MG[index]);
            rows.insert(Nutrient::Potassium, BEEF_POTASSIUM_MG[index]);
        }
        Country::Uk | Country::Eu => {
            rows.insert(
                Nutrient::Salt,
                BEEF_SODIUM_MG[index] / salt::SODIUM_MG_PER_SALT_G,
            );
        }
        Country::Au => {
            rows.insert(Nutrient::Sodium, BEEF_SODIUM_MG[index]);
        }
    }
    rows
}

fn nutrient_reference(country: Country) -> NutrientReference {
    let mut reference = NutrientReference {
        extract: extract_rows(country),
        ..NutrientReference::default()
    };
    for (index, grade) in LEAN_ORDER.iter().enumerate() {
        reference.beef.insert(*grade, beef_rows(country, index));
    }
    reference
}
