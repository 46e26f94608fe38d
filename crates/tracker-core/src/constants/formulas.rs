// ABOUTME: Step lengths and calorie coefficients for running, walking, and swimming
// ABOUTME: Published report values depend on these exact numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

/// Length of one step in meters, used by running and walking
pub const STEP_LENGTH_M: f64 = 0.65;

/// Running calorie formula coefficients
pub mod running {
    /// Multiplier applied to mean speed
    pub const CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset subtracted from the scaled speed
    pub const CALORIE_SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie formula coefficients
pub mod sports_walking {
    /// Weight multiplier for the base term
    pub const CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight multiplier for the speed/height term
    pub const CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming distance and calorie formula coefficients
pub mod swimming {
    /// Length of one stroke in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Offset added to mean speed
    pub const CALORIE_SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the shifted speed
    pub const CALORIE_WEIGHT_MULTIPLIER: f64 = 2.0;
}
