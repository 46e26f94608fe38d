// ABOUTME: Floored division for f64 operands with exact remainder-based semantics
// ABOUTME: Quotient rounds toward negative infinity, remainder takes the divisor's sign
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Contributors

use std::num::FpCategory;

#[inline]
fn is_zero(value: f64) -> bool {
    value.classify() == FpCategory::Zero
}

/// Floored quotient of `dividend / divisor`
///
/// The quotient is derived from the exact `fmod` remainder rather than from
/// `(dividend / divisor).floor()`, so rounding in the intermediate division
/// cannot push the result across an integer boundary (`1.0 / 0.1` rounds to
/// `10.0`, but the floored quotient is `9.0`). Negative operands round toward
/// negative infinity, not toward zero.
///
/// Returns `None` when `divisor` is zero.
///
/// # Example
///
/// ```rust
/// use tracker_intelligence::algorithms::floor_div;
///
/// assert_eq!(floor_div(7.0, 2.0), Some(3.0));
/// assert_eq!(floor_div(-7.0, 2.0), Some(-4.0));
/// assert_eq!(floor_div(1.0, 0.0), None);
/// ```
#[must_use]
pub fn floor_div(dividend: f64, divisor: f64) -> Option<f64> {
    if is_zero(divisor) {
        return None;
    }

    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if !is_zero(remainder) && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if is_zero(quotient) {
        return Some(0.0_f64.copysign(dividend / divisor));
    }

    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        Some(floored + 1.0)
    } else {
        Some(floored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_operands() {
        assert_eq!(floor_div(34.2225, 180.0), Some(0.0));
        assert_eq!(floor_div(400.0, 180.0), Some(2.0));
        assert_eq!(floor_div(360.0, 180.0), Some(2.0));
    }

    #[test]
    fn test_negative_operands_round_down() {
        assert_eq!(floor_div(-7.0, 2.0), Some(-4.0));
        assert_eq!(floor_div(7.0, -2.0), Some(-4.0));
        assert_eq!(floor_div(-7.0, -2.0), Some(3.0));
        assert_eq!(floor_div(34.2225, -180.0), Some(-1.0));
    }

    #[test]
    fn test_uses_exact_remainder() {
        assert!((1.0_f64 / 0.1).floor() > 9.0);
        assert_eq!(floor_div(1.0, 0.1), Some(9.0));
    }

    #[test]
    fn test_zero_quotient_keeps_sign() {
        let negative_zero = floor_div(0.0, -5.0).unwrap();
        assert!(is_zero(negative_zero));
        assert!(negative_zero.is_sign_negative());
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(floor_div(1.0, 0.0), None);
        assert_eq!(floor_div(1.0, -0.0), None);
    }
}
