// ABOUTME: Main library entry point for the fitness tracker
// ABOUTME: Dispatches raw sensor packages to workouts and renders their summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Turns raw workout sensor packages into human-readable training
//! summaries. A package is a short workout code (`RUN`, `WLK`, `SWM`) plus
//! an ordered list of numbers; the dispatcher maps it to a workout variant,
//! the variant computes distance, mean speed, and calories, and the report
//! renders them.
//!
//! ## Architecture
//!
//! - **tracker-core**: errors, constants, and the `WorkoutType` model
//! - **tracker-intelligence**: the `Training` trait, workout variants, and `WorkoutReport`
//! - **dispatch**: code to variant mapping over positional parameters
//! - **packages**: built-in sample packages and the per-package driver
//! - **formatters / config / logging**: output, environment, and tracing setup
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_tracker::dispatch::create_workout;
//! use fitness_tracker::Training;
//!
//! let workout = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?
//!     .ok_or_else(|| fitness_tracker::errors::AppError::not_found("SWM"))?;
//! let report = workout.show_training_info()?;
//! assert!(report.message().starts_with("Тип тренировки: Swimming;"));
//! # Ok::<(), fitness_tracker::errors::AppError>(())
//! ```

/// Environment-based configuration
pub mod config;

/// Mapping from workout codes and positional parameters to workouts
pub mod dispatch;

/// Output format selection for training reports
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Sample sensor packages and the per-package driver
pub mod packages;

/// Unified error types (re-exported from tracker-core)
pub mod errors {
    pub use tracker_core::errors::*;
}

/// Data models (re-exported from tracker-core)
pub mod models {
    pub use tracker_core::models::*;
}

pub use tracker_intelligence::{
    Running, SportsWalking, Swimming, Training, TrainingBase, Workout, WorkoutReport,
};
