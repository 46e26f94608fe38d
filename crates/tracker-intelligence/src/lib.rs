// ABOUTME: Workout calculation engine for running, sports walking, and swimming
// ABOUTME: Derives distance, mean speed, and calories from raw sensor inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

#![deny(unsafe_code)]

//! # Tracker Intelligence
//!
//! Calculation layer of the fitness tracker. Every workout shares the raw
//! inputs in [`training::TrainingBase`] and implements the
//! [`training::Training`] trait, overriding the formulas that differ per
//! sport. [`training::Workout`] is the closed set of variants produced by
//! the dispatcher.

/// Numeric helpers used by the workout formulas
pub mod algorithms;

/// Immutable training summary rendered for the user
pub mod report;

/// Training trait and the running, walking, and swimming variants
pub mod training;

pub use report::WorkoutReport;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
