// ABOUTME: Workout type enumeration for sensor packages
// ABOUTME: Maps dispatch codes to report labels and positional parameter counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::workout_codes;
use crate::errors::AppError;

/// Enumeration of supported workout types
///
/// Each variant corresponds to one short dispatch code sent by the sensor
/// unit and to one calculation variant in the intelligence crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running (`RUN`)
    Running,
    /// Sports walking with poles (`WLK`)
    SportsWalking,
    /// Pool swimming (`SWM`)
    Swimming,
}

impl WorkoutType {
    /// All supported workout types, in dispatch-table order
    pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

    /// Look up a workout type by its dispatch code
    ///
    /// Codes are matched exactly; an unrecognized code yields `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            workout_codes::RUNNING => Some(Self::Running),
            workout_codes::SPORTS_WALKING => Some(Self::SportsWalking),
            workout_codes::SWIMMING => Some(Self::Swimming),
            _ => None,
        }
    }

    /// Dispatch code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => workout_codes::RUNNING,
            Self::SportsWalking => workout_codes::SPORTS_WALKING,
            Self::Swimming => workout_codes::SWIMMING,
        }
    }

    /// Label shown in the training report
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters the workout constructor takes
    ///
    /// Running takes `(action, duration, weight)`, walking adds `height`,
    /// swimming adds `pool_length` and `lap_count`.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AppError::not_found(format!("Workout type '{s}'")))
    }
}
