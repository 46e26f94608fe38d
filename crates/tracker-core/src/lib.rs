// ABOUTME: Core types and constants for the fitness tracker workspace
// ABOUTME: Foundation crate with error handling, formula constants, and workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

#![deny(unsafe_code)]

//! # Tracker Core
//!
//! Foundation crate providing shared types and constants for the fitness
//! tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and calorie formula coefficients
//! - **models**: Workout type codes, labels, and parameter arity

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and calorie formula coefficients organized by workout
pub mod constants;

/// Core data models (`WorkoutType`)
pub mod models;
