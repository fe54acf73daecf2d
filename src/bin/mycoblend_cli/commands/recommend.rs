// ABOUTME: Recommend command for mycoblend-cli
// ABOUTME: Builds the full blend report and prints it as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

use anyhow::Result;
use tracing::info;

use mycoblend::{BlendEngine, BlendRequest, ClaimConstraints, Priority, ProductFormat};

use crate::helpers::display;

/// Build the blend report for the requested format, ceiling, and priority,
/// then print it
pub fn run(
    engine: &BlendEngine,
    format: &str,
    fat_ceiling: f64,
    priority: &str,
    constraints: ClaimConstraints,
    json: bool,
) -> Result<()> {
    let format: ProductFormat = format.parse()?;
    let priority: Priority = priority.parse()?;

    let request = BlendRequest {
        format,
        fat_ceiling,
        priority,
        constraints,
    };

    info!(%format, fat_ceiling, %priority, "Building blend report");
    let report = engine.report(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::display_report(&report, engine.profile());
    }

    Ok(())
}
