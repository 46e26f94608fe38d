// ABOUTME: End-to-end tests for the fitness-tracker binary
// ABOUTME: Covers sample output, single packages from --params, unknown codes, and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use assert_cmd::Command;
use predicates::prelude::*;

fn tracker() -> Command {
    let mut cmd = Command::cargo_bin("fitness-tracker").unwrap();
    for var in [
        "TRACKER_OUTPUT_FORMAT",
        "TRACKER_UNKNOWN_TYPE_MESSAGE",
        "TRACKER_LOG_LEVEL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_sample_packages_are_printed() {
    let output = tracker().assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
    assert!(lines[1].starts_with("Тип тренировки: Running;"));
    assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
}

#[test]
fn test_single_package_from_params() {
    tracker()
        .args(["--workout", "RUN", "--params", "15000,1,75"])
        .assert()
        .success()
        .stdout(
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.\n",
        );
}

#[test]
fn test_negative_step_count_is_reported() {
    tracker()
        .args(["--workout", "RUN", "--params", "-15000,1,75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Дистанция: -9.750 км"));
}

#[test]
fn test_unknown_code_prints_fallback_line() {
    tracker()
        .args(["--workout", "XYZ", "--params", "1,2,3"])
        .assert()
        .success()
        .stdout("Неожиданный тип тренировки\n");
}

#[test]
fn test_fallback_line_follows_environment() {
    tracker()
        .env("TRACKER_UNKNOWN_TYPE_MESSAGE", "Unexpected workout type")
        .args(["--workout", "XYZ", "--params", "1"])
        .assert()
        .success()
        .stdout("Unexpected workout type\n");
}

#[test]
fn test_json_format_flag() {
    tracker()
        .args(["--format", "json", "--workout", "XYZ", "--params", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"workout_type\":\"XYZ\""));
}

#[test]
fn test_wrong_parameter_count_fails() {
    tracker()
        .args(["--workout", "WLK", "--params", "9000,1,75"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("takes 4 parameters, got 3"));
}
