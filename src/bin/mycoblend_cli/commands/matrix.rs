// ABOUTME: Matrix command for mycoblend-cli
// ABOUTME: Ranks candidates per product format and prints the analysis matrix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

use anyhow::Result;
use tracing::info;

use mycoblend::{BlendEngine, ClaimConstraints};

use crate::helpers::display;

/// Compute the per-format analysis matrix and print it
pub fn run(
    engine: &BlendEngine,
    fat_ceiling: f64,
    constraints: ClaimConstraints,
    json: bool,
) -> Result<()> {
    info!(fat_ceiling, "Building analysis matrix");
    let matrix = engine.analysis_matrix(fat_ceiling, constraints)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
    } else {
        display::display_matrix(&matrix, engine.profile());
    }

    Ok(())
}
