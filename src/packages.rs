// ABOUTME: Sensor packages and the per-package processing driver
// ABOUTME: Provides the built-in sample packages and dispatch-report-format for one package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};
use tracker_core::errors::AppResult;
use tracker_intelligence::Training;

use crate::dispatch::create_workout;
use crate::config::TrackerConfig;
use crate::formatters::{format_report, format_unknown_type, OutputFormat};

/// One raw package as sent by the sensor unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout dispatch code (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Positional readings for the workout constructor
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a code and its readings
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Result of processing one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOutcome {
    /// Rendered training report
    Report(String),
    /// The workout code is not in the dispatch table
    UnknownType,
}

/// The sample packages shipped with the tracker
#[must_use]
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Dispatch one package, build its report, and render it
///
/// # Errors
///
/// Returns an error if the readings do not fit the workout (wrong count,
/// fractional counts), if a formula divides by a zero reading, or if
/// rendering fails
pub fn process_package(package: &SensorPackage, format: OutputFormat) -> AppResult<PackageOutcome> {
    let span = info_span!("package", workout_type = %package.workout_type);
    let _guard = span.enter();

    let Some(workout) = create_workout(&package.workout_type, &package.data)? else {
        return Ok(PackageOutcome::UnknownType);
    };
    let report = workout.show_training_info()?;
    debug!(format = %format, "Rendering training report");
    Ok(PackageOutcome::Report(format_report(&report, format)?))
}

/// Render every package to one output line, in order
///
/// A package with an unknown workout code renders the configured fallback
/// message and processing continues with the next package.
///
/// # Errors
///
/// Stops at the first package that fails in [`process_package`]
pub fn render_packages(packages: &[SensorPackage], config: &TrackerConfig) -> AppResult<Vec<String>> {
    info!(
        count = packages.len(),
        format = %config.output_format,
        "Processing packages"
    );
    packages
        .iter()
        .map(|package| match process_package(package, config.output_format)? {
            PackageOutcome::Report(line) => Ok(line),
            PackageOutcome::UnknownType => format_unknown_type(
                &package.workout_type,
                &config.unknown_type_message,
                config.output_format,
            ),
        })
        .collect()
}
