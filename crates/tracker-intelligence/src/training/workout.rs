// ABOUTME: Closed set of workout variants produced by the dispatcher
// ABOUTME: Forwards every Training method to the wrapped variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use serde::{Deserialize, Serialize};
use tracker_core::errors::AppResult;
use tracker_core::models::WorkoutType;

use super::{Running, SportsWalking, Swimming, Training, TrainingBase};

/// Any supported workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Swimming workout
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(running) => running,
            Self::SportsWalking(walking) => walking,
            Self::Swimming(swimming) => swimming,
        }
    }
}

impl Training for Workout {
    fn workout_type(&self) -> WorkoutType {
        self.as_training().workout_type()
    }

    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> AppResult<f64> {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> AppResult<f64> {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for Workout {
    fn from(walking: SportsWalking) -> Self {
        Self::SportsWalking(walking)
    }
}

impl From<Swimming> for Workout {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwards_overridden_formulas() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        let workout = Workout::from(swimming);

        assert_eq!(workout.workout_type(), WorkoutType::Swimming);
        assert_eq!(workout.distance_km(), swimming.distance_km());
        assert_eq!(
            workout.mean_speed_kmh().unwrap(),
            swimming.mean_speed_kmh().unwrap()
        );
        assert_eq!(workout.base().action, 720);
    }

    #[test]
    fn test_report_uses_variant_label() {
        let workout = Workout::from(SportsWalking::new(9000, 1.0, 75.0, 180.0));
        let report = workout.show_training_info().unwrap();
        assert_eq!(report.training_type, "SportsWalking");
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let workout = Workout::from(Running::new(15000, 1.0, 75.0));
        let json = serde_json::to_value(workout).unwrap();
        assert_eq!(json["type"], "running");
        assert_eq!(json["base"]["action"], 15000);
    }
}
