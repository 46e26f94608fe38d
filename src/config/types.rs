// ABOUTME: Log level setting for the tracker crates
// ABOUTME: Quiet by default so stdout carries only training reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Verbosity of the tracker crates
///
/// `Warn` is both the default and the fallback for an unrecognized name, so a
/// misspelled `TRACKER_LOG_LEVEL` behaves like an unset one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Failed packages only
    Error,
    /// Unknown workout codes and failures
    #[default]
    Warn,
    /// Startup line and per-run summary
    Info,
    /// Per-package dispatch and report values
    Debug,
    /// Everything the subscriber receives
    Trace,
}

impl LogLevel {
    /// Filter directive name understood by `EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse a level name, case-insensitively, falling back to the default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::default(),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_name_matches_default() {
        assert_eq!(LogLevel::from_str_or_default("loud"), LogLevel::default());
        assert_eq!(LogLevel::from_str_or_default(""), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default(" Info "), LogLevel::Info);
    }

    #[test]
    fn test_display_is_filter_directive() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::default().to_string(), "warn");
    }
}
