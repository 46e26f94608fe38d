// ABOUTME: Environment-based tracker configuration
// ABOUTME: Reads output format, fallback message, and logging settings from TRACKER_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use std::env;

use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;

/// Message printed for a package whose workout code is not recognized
pub const DEFAULT_UNKNOWN_TYPE_MESSAGE: &str = "Неожиданный тип тренировки";

/// Tracker configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Report output format
    pub output_format: OutputFormat,
    /// Line printed instead of a report for an unknown workout code
    pub unknown_type_message: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            output_format: OutputFormat::default(),
            unknown_type_message: DEFAULT_UNKNOWN_TYPE_MESSAGE.to_owned(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unrecognized values fall back to their defaults:
    /// - `TRACKER_OUTPUT_FORMAT`: `text` (default) or `json`
    /// - `TRACKER_UNKNOWN_TYPE_MESSAGE`: fallback line for unknown codes
    /// - logging variables as read by [`LoggingConfig::from_env`]
    #[must_use]
    pub fn from_env() -> Self {
        let output_format = env::var("TRACKER_OUTPUT_FORMAT")
            .map(|value| OutputFormat::from_str_param(&value))
            .unwrap_or_default();

        let unknown_type_message = env::var("TRACKER_UNKNOWN_TYPE_MESSAGE")
            .ok()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UNKNOWN_TYPE_MESSAGE.to_owned());

        Self {
            logging: LoggingConfig::from_env(),
            output_format,
            unknown_type_message,
        }
    }
}
