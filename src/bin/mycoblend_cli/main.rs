// ABOUTME: MycoBlend CLI - blend recommendations, reports, and analysis matrices
// ABOUTME: Loads bundled or file-based datasets and prints reports as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods
//!
//! Usage:
//! ```bash
//! # Recommend a blend for a UK burger at a 20% fat ceiling
//! mycoblend-cli recommend --country UK --format burger --fat-ceiling 0.20
//!
//! # Cost-priority recommendation with a hard high-fiber constraint
//! mycoblend-cli recommend --format mince --fat-ceiling 0.15 --priority cost --must-fiber
//!
//! # Full report as JSON
//! mycoblend-cli recommend --country AU --format burger --fat-ceiling 0.20 --json
//!
//! # Ranked analysis matrix over every product format
//! mycoblend-cli matrix --country EU --fat-ceiling 0.25
//!
//! # Bring your own data and scoring overrides
//! mycoblend-cli recommend --format burger --fat-ceiling 0.20 \
//!     --data data.json --scoring tuning.json
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mycoblend::logging::LoggingConfig;
use mycoblend::{data_file, sample, BlendEngine, ClaimConstraints, Country, ScoringConfig};

#[derive(Parser)]
#[command(
    name = "mycoblend-cli",
    about = "MycoBlend blend recommendation CLI",
    long_about = "Command-line tool for blend recommendations, comparison reports, and per-format analysis matrices over beef and shiitake-extract blends."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Market code (US, UK, EU, AU)
    #[arg(long, global = true, default_value = "US")]
    country: String,

    /// Dataset JSON file (bundled sample data when omitted)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Scoring override JSON file
    #[arg(long, global = true)]
    scoring: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend a blend and print the full report
    Recommend {
        /// Product format ("burger" or "mince")
        #[arg(long)]
        format: String,

        /// Fat ceiling as a fraction, e.g. 0.20 for an 80CL selection
        #[arg(long)]
        fat_ceiling: f64,

        /// Optimization priority (cost, nutrition, balance, sustainability)
        #[arg(long, default_value = "balance")]
        priority: String,

        /// Only consider blends clearing the market's high-fiber threshold
        #[arg(long)]
        must_fiber: bool,

        /// Only consider blends clearing the market's high-protein rule
        #[arg(long)]
        must_protein: bool,
    },

    /// Rank candidates per product format and print the analysis matrix
    Matrix {
        /// Fat ceiling as a fraction, e.g. 0.20 for an 80CL selection
        #[arg(long)]
        fat_ceiling: f64,

        /// Only consider blends clearing the market's high-fiber threshold
        #[arg(long)]
        must_fiber: bool,

        /// Only consider blends clearing the market's high-protein rule
        #[arg(long)]
        must_protein: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::from_env();
    if cli.verbose {
        log_config.level = "debug".into();
    }
    log_config.init()?;

    let country: Country = cli.country.parse()?;

    let dataset = match &cli.data {
        Some(path) => data_file::load_dataset(path)
            .with_context(|| format!("loading dataset from {}", path.display()))?,
        None => sample::dataset(country),
    };

    let config = match &cli.scoring {
        Some(path) => data_file::load_scoring_config(path)
            .with_context(|| format!("loading scoring overrides from {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    let engine = BlendEngine::new(dataset, country.profile(), config);

    match cli.command {
        Command::Recommend {
            format,
            fat_ceiling,
            priority,
            must_fiber,
            must_protein,
        } => {
            commands::recommend::run(
                &engine,
                &format,
                fat_ceiling,
                &priority,
                ClaimConstraints {
                    must_fiber,
                    must_protein,
                },
                cli.json,
            )?;
        }
        Command::Matrix {
            fat_ceiling,
            must_fiber,
            must_protein,
        } => {
            commands::matrix::run(
                &engine,
                fat_ceiling,
                ClaimConstraints {
                    must_fiber,
                    must_protein,
                },
                cli.json,
            )?;
        }
    }

    Ok(())
}
