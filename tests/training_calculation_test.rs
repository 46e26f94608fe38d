// ABOUTME: Integration tests for the distance, speed, and calorie formulas
// ABOUTME: Checks per-variant step lengths and properties that hold across inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::{Running, SportsWalking, Swimming, Training, Workout};

const EPSILON: f64 = 1e-9;

fn sample_workouts(action: i64) -> Vec<(Workout, f64)> {
    vec![
        (Running::new(action, 1.25, 70.0).into(), 0.65),
        (SportsWalking::new(action, 1.25, 70.0, 175.0).into(), 0.65),
        (Swimming::new(action, 1.25, 70.0, 25.0, 30).into(), 1.38),
    ]
}

#[test]
fn test_distance_uses_variant_action_length() {
    for action in [0, 1, 720, 9000, 15000] {
        for (workout, action_length_m) in sample_workouts(action) {
            let expected = action as f64 * action_length_m / 1000.0;
            assert!(
                (workout.distance_km() - expected).abs() < EPSILON,
                "{} distance for {action} actions",
                workout.workout_type()
            );
        }
    }
}

#[test]
fn test_step_based_speed_is_distance_over_duration() {
    let running = Running::new(12000, 1.5, 70.0);
    let expected = running.distance_km() / 1.5;
    assert!((running.mean_speed_kmh().unwrap() - expected).abs() < EPSILON);

    let walking = SportsWalking::new(12000, 1.5, 70.0, 175.0);
    assert!((walking.mean_speed_kmh().unwrap() - expected).abs() < EPSILON);
}

#[test]
fn test_swimming_speed_depends_only_on_pool_and_laps() {
    let speeds: Vec<f64> = [0, 500, 720, 100_000]
        .into_iter()
        .map(|action| {
            Swimming::new(action, 0.75, 65.0, 50.0, 24)
                .mean_speed_kmh()
                .unwrap()
        })
        .collect();

    // 50 m * 24 laps / 1000 / 0.75 h
    for speed in speeds {
        assert!((speed - 1.6).abs() < EPSILON);
    }
}

#[test]
fn test_calories_non_negative_for_plausible_workouts() {
    let workouts: Vec<Workout> = vec![
        Running::new(15000, 1.0, 75.0).into(),
        Running::new(8000, 0.75, 62.0).into(),
        SportsWalking::new(9000, 1.0, 75.0, 180.0).into(),
        SportsWalking::new(20000, 2.0, 90.0, 165.0).into(),
        Swimming::new(720, 1.0, 80.0, 25.0, 40).into(),
        Swimming::new(1500, 1.5, 55.0, 50.0, 60).into(),
    ];
    for workout in workouts {
        let calories = workout.spent_calories().unwrap();
        assert!(
            calories >= 0.0,
            "{} produced {calories}",
            workout.workout_type()
        );
    }
}

#[test]
fn test_walking_floor_division_is_stepwise() {
    // speed^2 / height is 1.97 for the first package and 2.01 for the second
    let height = 100.0;
    let below = SportsWalking::new(21600, 1.0, 80.0, height);
    let above = SportsWalking::new(21800, 1.0, 80.0, height);

    let base_term = 0.035 * 80.0 * 60.0;
    let step = 0.029 * 80.0 * 60.0;
    assert!((below.spent_calories().unwrap() - (base_term + step)).abs() < EPSILON);
    assert!((above.spent_calories().unwrap() - (base_term + 2.0 * step)).abs() < EPSILON);
}

#[test]
fn test_report_snapshot_matches_formulas() {
    let workout: Workout = Swimming::new(1000, 0.5, 70.0, 25.0, 20).into();
    let report = workout.show_training_info().unwrap();

    assert_eq!(report.training_type, "Swimming");
    assert!((report.duration - 0.5).abs() < EPSILON);
    assert!((report.distance - 1.38).abs() < EPSILON);
    assert!((report.speed - 1.0).abs() < EPSILON);
    assert!((report.calories - 294.0).abs() < EPSILON);
}
