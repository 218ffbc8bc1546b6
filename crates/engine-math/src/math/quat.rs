// SPDX-License-Identifier: Apache-2.0
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use tracing::trace;

use crate::error::{finite_array, MathError};
use crate::math::{scalar, trig, Mat4, Vec3, EPSILON, PI};

/// Quaternion stored as `(x, y, z, w)`, `w` being the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotation use assumes a unit quaternion. Raw construction may produce
///   non-unit values; [`Quat::from_axis_angle`] and [`Quat::slerp`]
///   re-normalise their output.
/// * `q` and `-q` describe the same rotation (double cover); compare rotations
///   with [`Quat::approx_eq_rotation`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components. No normalisation is applied.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// X component of the vector part.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is scaled by `sin(angle/2)`, `w` is set to `cos(angle/2)`, and
    /// the result is normalised, so a non-unit axis still yields a unit
    /// quaternion. A zero axis gives `(0, 0, 0, cos(angle/2))` normalised.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin_half, cos_half) = trig::sin_cos(angle * 0.5);
        let scaled = axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half).normalized()
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: the composite applies `other` first, then
    /// `self`, i.e. `(a * b).rotate(v) == a.rotate(b.rotate(v))`.
    /// Quaternion multiplication is non‑commutative.
    ///
    /// # Examples
    /// ```
    /// use engine_math::math::{self, Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, math::HALF_PI);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, math::HALF_PI);
    /// let composed = yaw.multiply(&pitch); // pitch, then yaw
    /// let other = pitch.multiply(&yaw);
    /// assert!(!composed.approx_eq(&other));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `v` as `q · (v, 0) · conj(q)`.
    ///
    /// The conjugate stands in for the inverse, so `self` must be a unit
    /// quaternion. A non-unit `self` scales the result by `|q|²`; this is not
    /// checked.
    ///
    /// ```
    /// use engine_math::math::{self, Quat, Vec3};
    /// let q = Quat::from_axis_angle(Vec3::UNIT_Y, math::HALF_PI);
    /// let v = q.rotate(&Vec3::UNIT_X);
    /// assert!(v.approx_eq(&Vec3::new(0.0, 0.0, -1.0)));
    /// ```
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let p = Self::new(v.x(), v.y(), v.z(), 0.0);
        let rotated = self.multiply(&p).multiply(&self.conjugate());
        Vec3::new(rotated.x(), rotated.y(), rotated.z())
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Squared magnitude.
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Magnitude, via the kernel's [`scalar::sqrt`].
    pub fn magnitude(&self) -> f32 {
        scalar::sqrt(self.magnitude_squared())
    }

    /// Normalises in place.
    ///
    /// When the magnitude is ≤ `EPSILON` the quaternion is left as it was
    /// (not zeroed, not reset to identity).
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag > EPSILON {
            for value in &mut self.data {
                *value /= mag;
            }
        } else {
            trace!(magnitude = mag, "quaternion too small to normalise; left unchanged");
        }
        self
    }

    /// Returns a normalised copy; see [`Quat::normalize`] for the degenerate case.
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Conjugate `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        Self::new(
            -self.component(0),
            -self.component(1),
            -self.component(2),
            self.component(3),
        )
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    ///
    /// Returns the all-zero quaternion when `|q|²` is below `EPSILON`.
    pub fn inverse(&self) -> Self {
        let sq_mag = self.magnitude_squared();
        if scalar::abs(sq_mag) < EPSILON {
            trace!(magnitude_squared = sq_mag, "inverse of zero quaternion");
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }
        self.conjugate() * (1.0 / sq_mag)
    }

    /// Spherical linear interpolation from `from` (at `t = 0`) to `to`
    /// (at `t = 1`).
    ///
    /// - Takes the shorter arc: when `from · to < 0` the target is negated, so
    ///   `t = 1` may return `-to` (the same rotation).
    /// - Near-parallel inputs (`dot > 1 − EPSILON`) fall back to a normalised
    ///   component-wise lerp.
    /// - `t` is not clamped; values outside `[0, 1]` extrapolate along the arc.
    /// - Every branch re-normalises, so slightly non-unit inputs still give a
    ///   unit result.
    pub fn slerp(from: &Self, to: &Self, t: f32) -> Self {
        let mut cos_theta = from.dot(to);
        let mut target = *to;
        if cos_theta < 0.0 {
            target = -target;
            cos_theta = -cos_theta;
        }

        if cos_theta > 1.0 - EPSILON {
            trace!(cos_theta, "slerp endpoints near-parallel; using normalised lerp");
            return Self::nlerp(from, &target, t);
        }

        let angle = trig::acos(cos_theta);
        let sin_angle = trig::sin(angle);
        if scalar::abs(sin_angle) < EPSILON {
            return Self::nlerp(from, &target, t);
        }

        let ratio_from = trig::sin((1.0 - t) * angle) / sin_angle;
        let ratio_to = trig::sin(t * angle) / sin_angle;
        (*from * ratio_from + target * ratio_to).normalized()
    }

    fn nlerp(from: &Self, to: &Self, t: f32) -> Self {
        (*from * (1.0 - t) + *to * t).normalized()
    }

    /// Converts the quaternion to a rotation matrix (column-major 4×4).
    ///
    /// Element `(row, col)` follows the standard formula, e.g.
    /// `(1, 0) = 2(xy + wz)` and `(0, 1) = 2(xy − wz)`. The input is used
    /// as-is: a non-unit quaternion yields a scaled, non-orthonormal matrix.
    pub fn to_mat4(&self) -> Mat4 {
        let x = self.component(0);
        let y = self.component(1);
        let z = self.component(2);
        let w = self.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Extracts the rotation stored in the upper-left 3×3 block of `m`.
    ///
    /// Uses the trace when it is positive (w-dominant); otherwise picks the
    /// branch of the largest diagonal element so the divisor stays away from
    /// zero. The result is normalised. `m` is expected to hold a rotation;
    /// other matrices produce an unspecified (possibly non-finite) quaternion.
    pub fn from_mat4(m: &Mat4) -> Self {
        let m00 = m.get(0, 0);
        let m11 = m.get(1, 1);
        let m22 = m.get(2, 2);
        let m01 = m.get(0, 1);
        let m10 = m.get(1, 0);
        let m02 = m.get(0, 2);
        let m20 = m.get(2, 0);
        let m12 = m.get(1, 2);
        let m21 = m.get(2, 1);

        let trace_sum = m00 + m11 + m22;

        let q = if trace_sum > EPSILON {
            trace!(trace = trace_sum, branch = "w", "quaternion from matrix");
            let s = 0.5 / scalar::sqrt(trace_sum + 1.0);
            Self::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, 0.25 / s)
        } else if m00 > m11 && m00 > m22 {
            trace!(trace = trace_sum, branch = "x", "quaternion from matrix");
            let s = 2.0 * scalar::sqrt(1.0 + m00 - m11 - m22);
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            trace!(trace = trace_sum, branch = "y", "quaternion from matrix");
            let s = 2.0 * scalar::sqrt(1.0 + m11 - m00 - m22);
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            trace!(trace = trace_sum, branch = "z", "quaternion from matrix");
            let s = 2.0 * scalar::sqrt(1.0 + m22 - m00 - m11);
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        };
        q.normalized()
    }

    /// Splits the rotation into a unit axis and an angle in radians.
    ///
    /// The quaternion is normalised first. Rotations without a unique axis
    /// return the fixed axis [`Vec3::UNIT_X`]:
    /// - `w > 1 − EPSILON`: `(UNIT_X, 0)`;
    /// - `w < −1 + EPSILON`: `(UNIT_X, PI)`.
    ///
    /// Otherwise the angle is `2·acos(w)` (so `w < 0` yields angles above
    /// `PI`) and the axis is `(x, y, z) / sin(angle/2)`, re-normalised.
    pub fn to_axis_angle(&self) -> (Vec3, f32) {
        let q = self.normalized();
        let w = q.w();

        if w > 1.0 - EPSILON {
            trace!(w, "axis-angle of identity rotation; axis is arbitrary");
            return (Vec3::UNIT_X, 0.0);
        }
        if w < -1.0 + EPSILON {
            trace!(w, "axis-angle of negated identity; axis is arbitrary");
            return (Vec3::UNIT_X, PI);
        }

        let angle = 2.0 * trig::acos(w);
        let sin_half = scalar::sqrt(1.0 - w * w);
        if sin_half <= EPSILON {
            return (Vec3::UNIT_X, angle);
        }
        let axis = Vec3::new(q.x(), q.y(), q.z()).scale(1.0 / sin_half);
        (axis.normalize(), angle)
    }

    /// Component-wise approximate equality using [`scalar::approx_eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| scalar::approx_eq(*a, *b))
    }

    /// Approximate equality up to sign: `true` when `self ≈ other` or
    /// `self ≈ -other`, i.e. both describe the same rotation.
    pub fn approx_eq_rotation(&self, other: &Self) -> bool {
        self.approx_eq(other) || self.approx_eq(&-*other)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(&rhs)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(
            self.component(0) * rhs,
            self.component(1) * rhs,
            self.component(2) * rhs,
            self.component(3) * rhs,
        )
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;
    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
            self.component(3) + rhs.component(3),
        )
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) - rhs.component(0),
            self.component(1) - rhs.component(1),
            self.component(2) - rhs.component(2),
            self.component(3) - rhs.component(3),
        )
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quat(x: {}, y: {}, z: {}, w: {})",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalisation is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

/// Builds a `Quat` from exactly four finite `(x, y, z, w)` components.
impl TryFrom<&[f32]> for Quat {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        finite_array::<4>(value).map(Self::from)
    }
}
