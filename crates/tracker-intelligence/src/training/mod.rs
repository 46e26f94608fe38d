// ABOUTME: Training abstraction shared by every workout variant
// ABOUTME: Generic distance and speed formulas with a required per-sport calorie formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

//! # Training Abstraction
//!
//! Every workout owns a [`TrainingBase`] with the three raw inputs common to
//! all sports and implements [`Training`]. The trait supplies the generic
//! step-based distance and mean speed; variants override them where the
//! sport measures movement differently. Calories have no generic formula,
//! so [`Training::spent_calories`] is a required method.
//!
//! Formulas that divide by a recorded field return `AppResult` and fail
//! with `ErrorCode::ValueOutOfRange` instead of producing `inf`/`NaN`.

mod running;
mod sports_walking;
mod swimming;
mod workout;

pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;
pub use workout::Workout;

use serde::{Deserialize, Serialize};
use std::num::FpCategory;
use tracing::debug;
use tracker_core::constants::formulas::STEP_LENGTH_M;
use tracker_core::constants::units::METERS_PER_KM;
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::WorkoutType;

use crate::report::WorkoutReport;

/// Raw sensor inputs shared by every workout type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingBase {
    /// Number of actions performed (steps, or strokes when swimming)
    pub action: i64,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl TrainingBase {
    /// Create the shared inputs of a workout
    #[must_use]
    pub const fn new(action: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }

    /// Distance in kilometers for a given action length in meters
    #[must_use]
    pub fn distance_km_with(&self, action_length_m: f64) -> f64 {
        self.action as f64 * action_length_m / METERS_PER_KM
    }

    /// Duration in hours, rejected when zero so it can be used as a divisor
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if the duration is zero
    pub fn checked_duration_hours(&self) -> AppResult<f64> {
        non_zero(self.duration_hours, "duration")
    }
}

/// Return `value` unchanged unless it is zero
pub(crate) fn non_zero(value: f64, field: &str) -> AppResult<f64> {
    if value.classify() == FpCategory::Zero {
        return Err(AppError::division_by_zero(field));
    }
    Ok(value)
}

/// Common interface of every workout variant
pub trait Training {
    /// Workout type used for the report label
    fn workout_type(&self) -> WorkoutType;

    /// Shared raw inputs of this workout
    fn base(&self) -> &TrainingBase;

    /// Distance covered in kilometers
    ///
    /// Defaults to `action * 0.65 m / 1000`.
    fn distance_km(&self) -> f64 {
        self.base().distance_km_with(STEP_LENGTH_M)
    }

    /// Mean speed in kilometers per hour
    ///
    /// Defaults to `distance_km() / duration`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if the duration is zero
    fn mean_speed_kmh(&self) -> AppResult<f64> {
        let duration_hours = self.base().checked_duration_hours()?;
        Ok(self.distance_km() / duration_hours)
    }

    /// Kilocalories spent during the workout
    ///
    /// # Errors
    ///
    /// Returns an error if an input needed as a divisor is zero
    fn spent_calories(&self) -> AppResult<f64>;

    /// Build the immutable report for this workout
    ///
    /// # Errors
    ///
    /// Propagates any error from the speed or calorie formulas
    fn show_training_info(&self) -> AppResult<WorkoutReport> {
        let workout_type = self.workout_type();
        let report = WorkoutReport::new(
            workout_type.label(),
            self.base().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh()?,
            self.spent_calories()?,
        );
        debug!(
            workout_type = %workout_type,
            distance_km = report.distance,
            calories = report.calories,
            "Built training report"
        );
        Ok(report)
    }
}
