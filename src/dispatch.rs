// ABOUTME: Maps a workout code and positional sensor parameters to a workout variant
// ABOUTME: Unknown codes yield Ok(None); parameter count mismatches are errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

//! # Workout Dispatch
//!
//! The dispatch table is fixed: `RUN` builds [`Running`] from
//! `(action, duration, weight)`, `WLK` builds [`SportsWalking`] from
//! `(action, duration, weight, height)`, and `SWM` builds [`Swimming`] from
//! `(action, duration, weight, pool_length, lap_count)`.
//!
//! Parameters are positional only. Their count must equal the variant's
//! arity and the counted fields (`action`, `lap_count`) must hold whole
//! numbers. Values are otherwise taken as recorded, negative ones included.

use tracing::{debug, warn};
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::WorkoutType;
use tracker_intelligence::{Running, SportsWalking, Swimming, Workout};

/// Build the workout selected by `workout_code` from positional `params`
///
/// Returns `Ok(None)` when the code is not in the dispatch table so the
/// caller can report it and continue.
///
/// # Errors
///
/// Returns an error if `params` does not have exactly the variant's arity,
/// or if a counted field holds a fractional or non-finite value
pub fn create_workout(workout_code: &str, params: &[f64]) -> AppResult<Option<Workout>> {
    let Some(workout_type) = WorkoutType::from_code(workout_code) else {
        warn!(workout_code, "Unknown workout type");
        return Ok(None);
    };

    debug!(
        workout_type = %workout_type,
        param_count = params.len(),
        "Dispatching sensor package"
    );

    let workout = match workout_type {
        WorkoutType::Running => build_running(params)?,
        WorkoutType::SportsWalking => build_sports_walking(params)?,
        WorkoutType::Swimming => build_swimming(params)?,
    };
    Ok(Some(workout))
}

fn build_running(params: &[f64]) -> AppResult<Workout> {
    let [action, duration, weight] = *params else {
        return Err(arity_error(WorkoutType::Running, params));
    };
    Ok(Running::new(whole_count(action, "action")?, duration, weight).into())
}

fn build_sports_walking(params: &[f64]) -> AppResult<Workout> {
    let [action, duration, weight, height] = *params else {
        return Err(arity_error(WorkoutType::SportsWalking, params));
    };
    Ok(SportsWalking::new(whole_count(action, "action")?, duration, weight, height).into())
}

fn build_swimming(params: &[f64]) -> AppResult<Workout> {
    let [action, duration, weight, pool_length, lap_count] = *params else {
        return Err(arity_error(WorkoutType::Swimming, params));
    };
    Ok(Swimming::new(
        whole_count(action, "action")?,
        duration,
        weight,
        pool_length,
        whole_count(lap_count, "lap_count")?,
    )
    .into())
}

fn arity_error(workout_type: WorkoutType, params: &[f64]) -> AppError {
    AppError::arity_mismatch(workout_type.code(), workout_type.arity(), params.len())
}

/// Convert a sensor value that must be a whole count
///
/// The sign is kept; a count outside the `i64` range has no whole
/// representation and is rejected with the fractional ones.
fn whole_count(value: f64, field: &str) -> AppResult<i64> {
    if !value.is_finite()
        || value.fract() != 0.0
        || value < i64::MIN as f64
        || value >= i64::MAX as f64
    {
        return Err(AppError::invalid_format(format!(
            "{field} must be a whole number, got {value}"
        )));
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::errors::ErrorCode;

    #[test]
    fn test_whole_count_accepts_integers() {
        assert_eq!(whole_count(15000.0, "action").unwrap(), 15000);
        assert_eq!(whole_count(0.0, "action").unwrap(), 0);
        assert_eq!(whole_count(-0.0, "action").unwrap(), 0);
        assert_eq!(whole_count(-15000.0, "action").unwrap(), -15000);
        assert_eq!(whole_count(5e9, "action").unwrap(), 5_000_000_000);
    }

    #[test]
    fn test_whole_count_rejects_other_values() {
        for value in [1.5, -0.25, f64::NAN, f64::NEG_INFINITY, 1e19] {
            let error = whole_count(value, "lap_count").unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidFormat);
            assert!(error.message.starts_with("lap_count"));
        }
    }
}
