// ABOUTME: Sports walking workout with the height-dependent calorie formula
// ABOUTME: Squared speed is floor-divided by height before it is scaled by weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use serde::{Deserialize, Serialize};
use tracker_core::constants::formulas::sports_walking::{
    CALORIE_SPEED_HEIGHT_MULTIPLIER, CALORIE_WEIGHT_MULTIPLIER,
};
use tracker_core::constants::units::MINUTES_PER_HOUR;
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::WorkoutType;

use super::{Training, TrainingBase};
use crate::algorithms::floor_div;

/// Sports walking (walking with poles) workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    base: TrainingBase,
    /// Athlete height, in the unit the sensor reports
    pub height: f64,
}

impl SportsWalking {
    /// Create a walking workout from step count, duration in hours, weight in kg, and height
    #[must_use]
    pub const fn new(action: i64, duration_hours: f64, weight_kg: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration_hours, weight_kg),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * duration_minutes`
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        let speed_height_ratio = floor_div(speed.powi(2), self.height)
            .ok_or_else(|| AppError::division_by_zero("height"))?;
        Ok((CALORIE_WEIGHT_MULTIPLIER * self.base.weight_kg
            + speed_height_ratio * CALORIE_SPEED_HEIGHT_MULTIPLIER * self.base.weight_kg)
            * (self.base.duration_hours * MINUTES_PER_HOUR))
    }
}
