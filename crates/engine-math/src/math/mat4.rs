// SPDX-License-Identifier: Apache-2.0
use crate::error::{finite_array, MathError};
use crate::math::{trig, Quat, Vec3};

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order: element `(row, col)` lives at
///   `data[col * 4 + row]`.
/// - The rotation algebra reads and writes only the upper-left 3×3 block;
///   the homogeneous row and column are carried through unchanged.
///
/// # Examples
/// ```
/// use engine_math::math::{Mat4, Vec3};
/// let m = Mat4::from_rows([
///     [1.0, 0.0, 0.0, 5.0],
///     [0.0, 1.0, 0.0, -3.0],
///     [0.0, 0.0, 1.0, 2.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ]);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(m.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// The 4×4 identity.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Wraps sixteen column-major values.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major nested arrays (`rows[r][c]`).
    ///
    /// Convenient for writing matrices the way they read on paper; storage is
    /// still column-major.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut data = [0.0; 16];
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                data[col * 4 + row] = *value;
            }
        }
        Self::new(data)
    }

    /// Column-major storage, copied out.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Element at `(row, col)`. Both indices must be `< 4`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Rotation matrix around the X axis by `angle` radians (kernel trig).
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = trig::sin_cos(angle);
        Self::new([
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, c, s, 0.0, // col 1
            0.0, -s, c, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation matrix around the Y axis by `angle` radians (kernel trig).
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = trig::sin_cos(angle);
        Self::new([
            c, 0.0, -s, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            s, 0.0, c, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation matrix around the Z axis by `angle` radians (kernel trig).
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = trig::sin_cos(angle);
        Self::new([
            c, s, 0.0, 0.0, // col 0
            -s, c, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation by `angle` radians about `axis`.
    ///
    /// Goes through [`Quat::from_axis_angle`]; pass a unit axis to get
    /// exactly `angle`.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Same as [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Matrix product `self * rhs`.
    ///
    /// Column‑major semantics: applying the product to a vector applies `rhs`
    /// first, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.get(row, k) * rhs.get(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Applies rotation then translation (`w = 1`); the bottom row is ignored.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let moved = self.transform_direction(point);
        Vec3::new(
            moved.x() + self.get(0, 3),
            moved.y() + self.get(1, 3),
            moved.z() + self.get(2, 3),
        )
    }

    /// Applies the upper-left 3×3 block only (`w = 0`).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.get(0, 0) * x + self.get(0, 1) * y + self.get(0, 2) * z;
        let ny = self.get(1, 0) * x + self.get(1, 1) * y + self.get(1, 2) * z;
        let nz = self.get(2, 0) * x + self.get(2, 1) * y + self.get(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

/// Builds a `Mat4` from exactly sixteen finite column-major components.
impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        finite_array::<16>(value).map(Self::from)
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
