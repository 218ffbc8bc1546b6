// SPDX-License-Identifier: Apache-2.0
//! Bounded-cost trigonometry for `f32` radians.
//!
//! Nothing here calls `f32::{sin,cos,atan}`. Every function sums a fixed
//! number of series terms, so its cost is bounded and its result depends only
//! on the input bits.
//!
//! Strategy:
//! - `sin`/`cos`: reduce into `(-PI, PI]` with [`normalize_angle`], then sum a
//!   fixed [`SIN_COS_TERMS`]-term alternating Taylor series. The first
//!   omitted term bounds the truncation error at the edge of the range:
//!   `PI^15/15! ≈ 2.2e-5` for `sin`, `PI^14/14! ≈ 1.05e-4` for `cos`.
//!   Non-finite angles reduce to `0.0`, giving `sin = 0` and `cos = 1`.
//! - `atan`: map `|x| > 1` through `atan(x) = ±PI/2 − atan(1/x)`, fold
//!   `tan(PI/8) < |x| ≤ 1` through `atan(x) = ±PI/4 + atan((|x|−1)/(|x|+1))`,
//!   then sum a fixed [`ATAN_TERMS`]-term series. The series argument never
//!   exceeds `tan(PI/8)`, which keeps the error below `1e-6`.
//! - `asin`/`acos`: derived from `atan` and [`sqrt`], clamped to exact values
//!   near `±1`.
//!
//! Term counts are compile-time constants; there is no convergence loop.

use super::scalar::{approx_eq, factorial, normalize_angle, sqrt};
use super::{EPSILON, HALF_PI, PI};

/// Taylor terms summed by [`sin`] and [`cos`].
pub const SIN_COS_TERMS: u32 = 7;

/// Taylor terms summed by [`atan`] after range reduction.
pub const ATAN_TERMS: u32 = 13;

const QUARTER_PI: f32 = PI * 0.25;

/// `tan(PI/8) = sqrt(2) − 1`.
const TAN_EIGHTH_PI: f32 = 0.41421356;

/// Sine of `angle` (radians).
///
/// ```
/// use engine_math::math::{radians, sin};
/// assert!((sin(radians(30.0)) - 0.5).abs() < 1e-3);
/// ```
pub fn sin(angle: f32) -> f32 {
    sin_series(normalize_angle(angle))
}

/// Cosine of `angle` (radians).
pub fn cos(angle: f32) -> f32 {
    cos_series(normalize_angle(angle))
}

/// Sine and cosine of `angle` sharing one range reduction.
pub fn sin_cos(angle: f32) -> (f32, f32) {
    let reduced = normalize_angle(angle);
    (sin_series(reduced), cos_series(reduced))
}

/// Odd powers `x^1 .. x^13`.
#[allow(clippy::cast_precision_loss)]
fn sin_series(x: f32) -> f32 {
    let x2 = x * x;
    let mut pow = x;
    let mut sign = 1.0;
    let mut sum = 0.0;
    for k in 0..SIN_COS_TERMS {
        sum += sign * pow / factorial(2 * k + 1) as f32;
        pow *= x2;
        sign = -sign;
    }
    sum
}

/// Even powers `x^0 .. x^12`.
#[allow(clippy::cast_precision_loss)]
fn cos_series(x: f32) -> f32 {
    let x2 = x * x;
    let mut pow = 1.0;
    let mut sign = 1.0;
    let mut sum = 0.0;
    for k in 0..SIN_COS_TERMS {
        sum += sign * pow / factorial(2 * k) as f32;
        pow *= x2;
        sign = -sign;
    }
    sum
}

/// Odd powers `x^1 .. x^25` over odd denominators.
#[allow(clippy::cast_precision_loss)]
fn atan_series(x: f32) -> f32 {
    let x2 = x * x;
    let mut pow = x;
    let mut sign = 1.0;
    let mut sum = 0.0;
    for k in 0..ATAN_TERMS {
        sum += sign * pow / (2 * k + 1) as f32;
        pow *= x2;
        sign = -sign;
    }
    sum
}

/// `atan` for `|x| ≤ 1`.
fn atan_unit(x: f32) -> f32 {
    if x > TAN_EIGHTH_PI {
        return QUARTER_PI + atan_series((x - 1.0) / (x + 1.0));
    }
    if x < -TAN_EIGHTH_PI {
        return -QUARTER_PI + atan_series((x + 1.0) / (1.0 - x));
    }
    atan_series(x)
}

/// Arctangent in radians, result in `[-PI/2, PI/2]`.
///
/// `±∞` maps to `±PI/2`.
pub fn atan(x: f32) -> f32 {
    if x > 1.0 {
        return HALF_PI - atan_unit(1.0 / x);
    }
    if x < -1.0 {
        return -HALF_PI - atan_unit(1.0 / x);
    }
    atan_unit(x)
}

/// Quadrant-aware arctangent of `y / x`, result in `[-PI, PI]`.
///
/// - `x ≈ 0`: `±PI/2` by the sign of `y`, or `0` when `y ≈ 0` too.
/// - `x < 0`: `atan(y/x) + PI` when `y ≥ 0`, `atan(y/x) − PI` otherwise.
///
/// ```
/// use engine_math::math::{atan2, degrees};
/// assert!((degrees(atan2(1.0, -1.0)) - 135.0).abs() < 1e-3);
/// assert!((degrees(atan2(1.0, 0.0)) - 90.0).abs() < 1e-3);
/// ```
pub fn atan2(y: f32, x: f32) -> f32 {
    if approx_eq(x, 0.0) {
        if approx_eq(y, 0.0) {
            return 0.0;
        }
        return if y > 0.0 { HALF_PI } else { -HALF_PI };
    }
    let angle = atan(y / x);
    if x < 0.0 {
        if y >= 0.0 {
            return angle + PI;
        }
        return angle - PI;
    }
    angle
}

/// Arcsine in radians.
///
/// Inputs above `1 − EPSILON` return exactly `PI/2`, inputs below
/// `−1 + EPSILON` exactly `−PI/2`; out-of-domain values clamp the same way.
/// Everything else goes through `atan(x / sqrt(1 − x²))`.
pub fn asin(x: f32) -> f32 {
    if x > 1.0 - EPSILON {
        return HALF_PI;
    }
    if x < -1.0 + EPSILON {
        return -HALF_PI;
    }
    let denom_sq = 1.0 - x * x;
    if approx_eq(denom_sq, 0.0) {
        return if x > 0.0 { HALF_PI } else { -HALF_PI };
    }
    atan(x / sqrt(denom_sq))
}

/// Arccosine in radians, `PI/2 − asin(x)`.
///
/// Inputs above `1 − EPSILON` return exactly `0`, inputs below `−1 + EPSILON`
/// exactly `PI`.
pub fn acos(x: f32) -> f32 {
    if x > 1.0 - EPSILON {
        return 0.0;
    }
    if x < -1.0 + EPSILON {
        return PI;
    }
    HALF_PI - asin(x)
}
