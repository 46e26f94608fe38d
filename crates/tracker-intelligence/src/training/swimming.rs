// ABOUTME: Pool swimming workout with stroke-based distance and lap-based speed
// ABOUTME: Mean speed depends only on pool length, lap count, and duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use serde::{Deserialize, Serialize};
use tracker_core::constants::formulas::swimming::{
    CALORIE_SPEED_SHIFT, CALORIE_WEIGHT_MULTIPLIER, STROKE_LENGTH_M,
};
use tracker_core::constants::units::METERS_PER_KM;
use tracker_core::errors::AppResult;
use tracker_core::models::WorkoutType;

use super::{Training, TrainingBase};

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    base: TrainingBase,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub lap_count: i64,
}

impl Swimming {
    /// Create a swimming workout
    ///
    /// `action` is the stroke count; speed is derived from `pool_length_m`
    /// and `lap_count` instead.
    #[must_use]
    pub const fn new(
        action: i64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: i64,
    ) -> Self {
        Self {
            base: TrainingBase::new(action, duration_hours, weight_kg),
            pool_length_m,
            lap_count,
        }
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// `action * 1.38 m / 1000`
    fn distance_km(&self) -> f64 {
        self.base.distance_km_with(STROKE_LENGTH_M)
    }

    /// `pool_length * lap_count / 1000 / duration`
    fn mean_speed_kmh(&self) -> AppResult<f64> {
        let duration_hours = self.base.checked_duration_hours()?;
        Ok(self.pool_length_m * self.lap_count as f64 / METERS_PER_KM / duration_hours)
    }

    /// `(speed + 1.1) * 2 * weight`
    fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + CALORIE_SPEED_SHIFT) * CALORIE_WEIGHT_MULTIPLIER * self.base.weight_kg)
    }
}
