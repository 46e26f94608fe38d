// ABOUTME: Core data models shared by the calculation and reporting layers
// ABOUTME: Re-exports the workout type enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

/// Workout type enumeration with dispatch codes and report labels
pub mod workout_type;

pub use workout_type::WorkoutType;
