// ABOUTME: Running workout with the speed-based calorie formula
// ABOUTME: Uses the generic step distance and mean speed unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use serde::{Deserialize, Serialize};
use tracker_core::constants::formulas::running::{
    CALORIE_SPEED_MULTIPLIER, CALORIE_SPEED_SHIFT,
};
use tracker_core::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use tracker_core::errors::AppResult;
use tracker_core::models::WorkoutType;

use super::{Training, TrainingBase};

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    /// Create a running workout from step count, duration in hours, and weight in kg
    #[must_use]
    pub const fn new(action: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// `(18 * speed - 20) * weight / 1000 * duration_minutes`
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok(
            (CALORIE_SPEED_MULTIPLIER * speed - CALORIE_SPEED_SHIFT) * self.base.weight_kg
                / METERS_PER_KM
                * (self.base.duration_hours * MINUTES_PER_HOUR),
        )
    }
}
