// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions and per-workout calorie formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

//! Constants module
//!
//! Constants are grouped by domain: generic unit conversions live in
//! [`units`], formula coefficients for each workout live in [`formulas`].

/// Unit conversion and measurement constants
pub mod units;

/// Calorie and distance coefficients for each workout type
pub mod formulas;

/// Dispatch codes recognized by the workout dispatcher
pub mod workout_codes {
    /// Running
    pub const RUNNING: &str = "RUN";
    /// Sports walking (walking with poles)
    pub const SPORTS_WALKING: &str = "WLK";
    /// Pool swimming
    pub const SWIMMING: &str = "SWM";
}
