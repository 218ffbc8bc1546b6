// SPDX-License-Identifier: Apache-2.0
//! Elementary scalar functions: comparisons, powers, rounding, square root and
//! angle reduction.
//!
//! Contract shared by every function here:
//! - pure and allocation-free;
//! - total: no input panics, domain edge cases map to a fixed fallback value;
//! - no calls into the platform math runtime.

use super::{EPSILON, PI, TWO_PI};

/// Newton iterations performed by [`sqrt`].
pub const SQRT_ITERATIONS: usize = 15;

/// Absolute value.
#[inline]
pub fn abs(value: f32) -> f32 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

/// Returns `true` when `a` and `b` differ by strictly less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    abs(a - b) < EPSILON
}

/// Larger of `a` and `b`; ties (and unordered NaN comparisons) return `b`.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of `a` and `b`; ties (and unordered NaN comparisons) return `b`.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Raises `base` to an integer exponent by repeated multiplication.
///
/// - `exp == 0` returns `1.0` for every base, including zero.
/// - A base within [`EPSILON`] of zero returns `0.0` for any other exponent
///   (no division by zero for negative exponents).
/// - Negative exponents return the reciprocal of the positive power.
pub fn power(base: f32, exp: i32) -> f32 {
    if exp == 0 {
        return 1.0;
    }
    if approx_eq(base, 0.0) {
        return 0.0;
    }
    let mut result = 1.0;
    for _ in 0..exp.unsigned_abs() {
        result *= base;
    }
    if exp < 0 {
        1.0 / result
    } else {
        result
    }
}

/// `n!` accumulated in an `i64`.
///
/// `0!` and `1!` are `1`. Results are exact up to `20!`; larger `n` wraps
/// silently, keeping inputs in range is the caller's job.
pub fn factorial(n: u32) -> i64 {
    let mut acc: i64 = 1;
    for i in 2..=i64::from(n) {
        acc = acc.wrapping_mul(i);
    }
    acc
}

/// Largest integer not greater than `value`.
///
/// Truncates through `i64` and corrects negative non-integers downward.
/// Magnitudes beyond the `i64` range saturate; NaN maps to `0.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn floor(value: f32) -> f32 {
    let truncated = value as i64;
    if value < 0.0 && value != truncated as f32 {
        return truncated.saturating_sub(1) as f32;
    }
    truncated as f32
}

/// Smallest integer not less than `value`.
///
/// Truncates through `i64` and corrects positive non-integers upward.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn ceil(value: f32) -> f32 {
    let truncated = value as i64;
    if value > 0.0 && value != truncated as f32 {
        return truncated.saturating_add(1) as f32;
    }
    truncated as f32
}

/// Rounds to the nearest integer as `floor(value + 0.5)`.
///
/// Halves always go toward +∞: `round(2.5) == 3.0`, `round(-2.5) == -2.0`.
pub fn round(value: f32) -> f32 {
    floor(value + 0.5)
}

/// Square root by the Babylonian (Newton) method.
///
/// Runs exactly [`SQRT_ITERATIONS`] steps seeded at `x₀ = value`. Negative
/// inputs and inputs within [`EPSILON`] of zero return `0.0`.
///
/// Every step at least halves the distance to the root while the guess is
/// far above it, then converges quadratically, so the result is accurate to
/// `f32` precision for inputs up to about `1e6`. Larger inputs come back
/// under-converged (too large).
///
/// ```
/// use engine_math::math::{approx_eq, sqrt};
/// assert!(approx_eq(sqrt(25.0), 5.0));
/// assert_eq!(sqrt(-1.0), 0.0);
/// ```
pub fn sqrt(value: f32) -> f32 {
    if value < 0.0 || approx_eq(value, 0.0) {
        return 0.0;
    }
    let mut x = value;
    for _ in 0..SQRT_ITERATIONS {
        x = 0.5 * (x + value / x);
    }
    x
}

/// Largest magnitude reduced directly in `f32` by [`normalize_angle`].
///
/// Past this point the rounding error of `2π·k` grows toward a whole turn, so
/// larger angles take the exact binary reduction instead.
pub const DIRECT_REDUCTION_LIMIT: f32 = 65_536.0;

/// Reduces an angle in radians into `(-PI, PI]`.
///
/// Magnitudes up to [`DIRECT_REDUCTION_LIMIT`] use the floor-based modulo
/// `θ − 2π·floor(θ / 2π)` followed by a boundary correction, so `PI` maps to
/// `PI` and `-PI` maps to `PI`. Larger finite magnitudes are reduced exactly
/// against the `f64` value of `2π`, one binary digit at a time, so the result
/// stays in range all the way to `f32::MAX`. NaN and infinities return `0.0`.
///
/// ```
/// use engine_math::math::{normalize_angle, PI};
/// assert_eq!(normalize_angle(PI), PI);
/// assert_eq!(normalize_angle(-PI), PI);
/// assert!(normalize_angle(1.0e20) <= PI);
/// assert_eq!(normalize_angle(f32::NAN), 0.0);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut reduced = if abs(angle) <= DIRECT_REDUCTION_LIMIT {
        angle - TWO_PI * floor(angle / TWO_PI)
    } else {
        let turn = wide_turn_remainder(abs(angle));
        (if angle < 0.0 { -turn } else { turn }) as f32
    };
    if reduced > PI {
        reduced -= TWO_PI;
    }
    if reduced <= -PI {
        reduced += TWO_PI;
    }
    reduced
}

/// `magnitude mod 2π` in `[0, 2π)`, with 2π taken as the `f64` constant.
///
/// A finite `f32` is `m·2^e` with a 24-bit integer `m`. `m` is reduced once,
/// then each of the `e` doublings is reduced again. Doubling is exact in `f64`
/// and each subtraction has operands within a factor of two of each other, so
/// the error that grows with `e` is only that of the constant. At most 104
/// doublings run.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn wide_turn_remainder(magnitude: f32) -> f64 {
    const TAU: f64 = core::f64::consts::TAU;
    let bits = magnitude.to_bits();
    // Masking yields a value in 0..=255.
    let exp_u8 = ((bits >> 23) & 0xff) as u8;
    // magnitude = mantissa * 2^exponent for normal values.
    let exponent = i32::from(exp_u8) - 127 - 23;
    let mantissa = (1_u32 << 23) | (bits & 0x7fffff);
    let (base, doublings) = if exponent > 0 {
        (f64::from(mantissa), exponent.unsigned_abs())
    } else {
        (f64::from(magnitude), 0)
    };

    let mut rem = base - TAU * ((base / TAU) as i64) as f64;
    if rem >= TAU {
        rem -= TAU;
    }
    if rem < 0.0 {
        rem += TAU;
    }
    for _ in 0..doublings {
        rem += rem;
        if rem >= TAU {
            rem -= TAU;
        }
    }
    rem
}
