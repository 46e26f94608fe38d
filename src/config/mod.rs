// ABOUTME: Configuration module for tracker output and logging settings
// ABOUTME: Loads TrackerConfig from environment variables with lenient defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors
//! Configuration module for the fitness tracker
//!
//! - **Environment**: `TrackerConfig` loaded from `TRACKER_*` variables
//! - **Types**: strongly typed `LogLevel`

/// Tracker configuration from environment variables
pub mod environment;
/// Core configuration type definitions
pub mod types;

pub use environment::TrackerConfig;
pub use types::LogLevel;
