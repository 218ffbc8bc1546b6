// SPDX-License-Identifier: Apache-2.0
//! Scalar kernel, trigonometry, and the rotation algebra built on them.
//!
//! All operations work in `f32`. None of them call the platform math runtime:
//! transcendental functions use statically fixed term counts so cost and
//! results are identical on every target. Every function is total; see each
//! function for its fallback on degenerate input.
//!
//! The free functions are re-exported here so callers can write
//! `math::sin(x)` / `math::sqrt(v)` without naming the submodule.

mod mat4;
mod quat;
pub mod scalar;
pub mod trig;
mod vec3;

pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{
    abs, approx_eq, ceil, factorial, floor, max, min, normalize_angle, power, round, sqrt,
};
pub use trig::{acos, asin, atan, atan2, cos, sin, sin_cos};
pub use vec3::Vec3;

/// Ratio of a circle's circumference to its diameter.
pub const PI: f32 = core::f32::consts::PI;

/// `PI / 2`.
pub const HALF_PI: f32 = PI * 0.5;

/// `PI * 2`.
pub const TWO_PI: f32 = PI * 2.0;

/// Base of the natural logarithm.
pub const E: f32 = core::f32::consts::E;

/// Comparison tolerance shared by every approximate-equality and near-zero
/// check in the crate.
pub const EPSILON: f32 = 1e-5;

/// Converts degrees to radians.
pub fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
pub fn degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}
