// ABOUTME: Numeric algorithms shared by the workout formulas
// ABOUTME: Contains floored float division
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

/// Floored division for `f64` operands
pub mod floor_div;

pub use floor_div::floor_div;
