// ABOUTME: Fitness tracker CLI - prints training summaries for sensor packages
// ABOUTME: Processes the built-in sample packages or a single package given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors
//!
//! Usage:
//! ```bash
//! # Summarize the built-in sample packages
//! fitness-tracker
//!
//! # Summarize one running package
//! fitness-tracker --workout RUN --params 15000,1,75
//!
//! # Emit JSON instead of the text message
//! fitness-tracker --format json
//! ```

use anyhow::Result;
use clap::Parser;
use fitness_tracker::config::{LogLevel, TrackerConfig};
use fitness_tracker::formatters::OutputFormat;
use fitness_tracker::packages::{render_packages, sample_packages, SensorPackage};

#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    about = "Fitness tracker training summaries",
    long_about = "Computes distance, mean speed, and spent calories for running (RUN), \
                  sports walking (WLK), and swimming (SWM) sensor packages."
)]
struct Cli {
    /// Workout code of a single package (RUN, WLK, SWM)
    #[arg(long, requires = "params")]
    workout: Option<String>,

    /// Comma-separated positional readings for the package
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        requires = "workout"
    )]
    params: Option<Vec<f64>>,

    /// Output format, overrides `TRACKER_OUTPUT_FORMAT`
    #[arg(long, value_parser = ["text", "json"])]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env();
    if cli.verbose {
        config.logging = config.logging.with_level(LogLevel::Debug);
    }
    if let Some(format) = cli.format.as_deref() {
        config.output_format = OutputFormat::from_str_param(format);
    }
    config.logging.init()?;

    let packages = match (cli.workout, cli.params) {
        (Some(workout), Some(params)) => vec![SensorPackage::new(workout, params)],
        _ => sample_packages(),
    };

    for line in render_packages(&packages, &config)? {
        println!("{line}");
    }

    Ok(())
}
