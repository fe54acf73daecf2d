// ABOUTME: Min-max normalization of raw candidate metrics into the 0-1 range
// ABOUTME: Tight and padded variants with direction flip for lower-is-better metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

//! Pool normalization.
//!
//! Raw candidate metrics (grams of fiber, currency, kg CO₂e) are not
//! comparable until rescaled onto a common [0, 1] axis across the candidate
//! pool. The padded variant widens the window first so that small real
//! differences score mid-scale instead of slamming candidates to the
//! extremes.

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// Rescale a metric across the pool into [0, 1].
///
/// The pool's best value maps to 1.0 and the worst to 0.0; for
/// lower-is-better metrics the direction is flipped. A zero-spread pool
/// (every candidate equal) maps to all 1.0.
#[must_use]
pub fn normalize(values: &[f64], lower_is_better: bool) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let (min, max) = bounds(values);
    let spread = max - min;
    if spread == 0.0 {
        return vec![1.0; values.len()];
    }
    values
        .iter()
        .map(|&v| {
            if lower_is_better {
                (max - v) / spread
            } else {
                (v - min) / spread
            }
        })
        .collect()
}

/// Rescale with the window widened by `pad × spread` on each side.
///
/// With `pad = 0` this is exactly [`normalize`]. A zero-spread pool maps to
/// all 1.0.
#[must_use]
pub fn normalize_padded(values: &[f64], lower_is_better: bool, pad: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let (min, max) = bounds(values);
    let spread = max - min;
    if spread == 0.0 {
        return vec![1.0; values.len()];
    }
    let lo = min - spread * pad;
    let hi = max + spread * pad;
    values
        .iter()
        .map(|&v| {
            if lower_is_better {
                (hi - v) / (hi - lo)
            } else {
                (v - lo) / (hi - lo)
            }
        })
        .collect()
}
