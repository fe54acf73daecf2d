// ABOUTME: Beef-trim grades identified by CL (chemical lean) percentage
// ABOUTME: TrimGrade type, the fixed fatty-to-lean order, and the trim price/fat table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Beef-trim grades.
//!
//! A trim grade names a beef-fat specification by its chemical lean
//! percentage: "80CL Beef Trim" is 80% lean, 20% fat. The engine steps
//! through grades along [`LEAN_ORDER`], a fixed fatty-to-lean total order
//! supplied by the domain, never derived from the data.

use crate::errors::BlendError;
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A beef-trim grade, identified by its chemical lean percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrimGrade(u8);

impl TrimGrade {
    /// Create a grade from its chemical lean percentage.
    #[must_use]
    pub const fn new(cl_percent: u8) -> Self {
        Self(cl_percent)
    }

    /// Chemical lean percentage (e.g. 80 for "80CL Beef Trim").
    #[must_use]
    pub const fn cl_percent(self) -> u8 {
        self.0
    }

    /// Nominal fat fraction implied by the grade (80CL -> 0.20).
    #[must_use]
    pub fn fat_fraction(self) -> f64 {
        f64::from(100 - self.0) / 100.0
    }

    /// Grade whose nominal fat fraction is closest to the given value.
    ///
    /// Reproduces the display-name rule `round((1 - fat) * 100)`.
    #[must_use]
    pub fn from_fat_fraction(fat_fraction: f64) -> Self {
        let cl = ((1.0 - fat_fraction) * 100.0).round();
        Self(cl.clamp(0.0, 100.0) as u8)
    }

    /// Short display form without the ingredient suffix, e.g. "80CL".
    #[must_use]
    pub fn short(self) -> String {
        format!("{}CL", self.0)
    }

    /// Position of this grade in [`LEAN_ORDER`], if it is a standard grade.
    #[must_use]
    pub fn lean_order_index(self) -> Option<usize> {
        LEAN_ORDER.iter().position(|grade| *grade == self)
    }
}

impl fmt::Display for TrimGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}CL Beef Trim", self.0)
    }
}

impl FromStr for TrimGrade {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.trim();
        for suffix in ["beef trim", "cl"] {
            if rest.len() >= suffix.len() {
                let (head, tail) = rest.split_at(rest.len() - suffix.len());
                if tail.eq_ignore_ascii_case(suffix) {
                    rest = head.trim_end();
                }
            }
        }
        rest.parse::<u8>().map(Self).map_err(|_| {
            BlendError::invalid_input(format!(
                "Unknown trim grade: '{s}'. Expected a CL percentage such as '80CL Beef Trim', '80CL', or '80'"
            ))
        })
    }
}

impl Serialize for TrimGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TrimGrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Standard trim grades ordered from fattiest to leanest.
///
/// Constraint satisfaction steps through this order: when more protein or
/// less fat is needed the engine moves toward the leaner end.
pub const LEAN_ORDER: [TrimGrade; 7] = [
    TrimGrade::new(60),
    TrimGrade::new(65),
    TrimGrade::new(70),
    TrimGrade::new(75),
    TrimGrade::new(80),
    TrimGrade::new(85),
    TrimGrade::new(90),
];

/// Default trim used for the degenerate no-candidates result.
pub const DEFAULT_TRIM: TrimGrade = TrimGrade::new(80);

/// Price and measured fat content for one trim grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimData {
    /// Measured fat fraction of the trim (0..1); may differ slightly from
    /// the nominal grade fraction
    pub fat_fraction: f64,
    /// Price per the active country's price unit
    pub price: f64,
}

/// Trim grade to price/fat data, iterated in insertion order.
pub type TrimTable = IndexMap<TrimGrade, TrimData>;
