// ABOUTME: Output format abstraction for rendering training reports
// ABOUTME: Supports the fixed text message (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

//! Output Format Abstraction Layer
//!
//! The text format is the fixed one-line message existing consumers parse,
//! so it is the default. JSON carries the same five fields unrounded for
//! machine consumers.

use serde_json::json;
use std::fmt;
use tracker_core::errors::AppResult;
use tracker_intelligence::WorkoutReport;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed human-readable message (default)
    #[default]
    Text,
    /// JSON object with the raw report fields
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a training report in the requested format
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn format_report(report: &WorkoutReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(report.message()),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

/// Render the fallback line for a package with an unknown workout code
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn format_unknown_type(
    workout_code: &str,
    message: &str,
    format: OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(message.to_owned()),
        OutputFormat::Json => Ok(serde_json::to_string(&json!({
            "workout_type": workout_code,
            "error": message,
        }))?),
    }
}
