// SPDX-License-Identifier: Apache-2.0
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{finite_array, MathError};
use crate::math::{scalar, EPSILON};

/// 3D vector consumed by the rotation algebra.
///
/// * Components may represent points or directions depending on context.
/// * Length and normalisation go through the kernel's [`scalar::sqrt`], never
///   the platform runtime.
/// * Use [`crate::math::Mat4::transform_point`] for points (homogeneous
///   `w = 1`) and [`crate::math::Mat4::transform_direction`] for directions
///   (homogeneous `w = 0`).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `+X`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// `+Y`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// `+Z`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Builds `(x, y, z)`.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// `[x, y, z]`.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Three-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// `x² + y² + z²`, no square root.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit vector in the same direction, or [`Vec3::ZERO`] when the length is
    /// ≤ `EPSILON`.
    ///
    /// Unlike [`crate::math::Quat::normalized`], which leaves a degenerate
    /// quaternion untouched.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Component-wise approximate equality using [`scalar::approx_eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| scalar::approx_eq(*a, *b))
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) - rhs.component(0),
            self.component(1) - rhs.component(1),
            self.component(2) - rhs.component(2),
        )
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3(x: {}, y: {}, z: {})", self.x(), self.y(), self.z())
    }
}

/// Takes `[x, y, z]` verbatim.
///
/// # Examples
/// ```
/// use engine_math::math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

/// Builds a `Vec3` from exactly three finite components.
impl TryFrom<&[f32]> for Vec3 {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        finite_array::<3>(value).map(Self::from)
    }
}
