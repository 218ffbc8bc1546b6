// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Errors raised when building math value types from untyped data.
///
/// The numeric operations themselves never fail; these only surface at the
/// boundary where a slice is converted into a [`crate::Vec3`],
/// [`crate::Quat`], or [`crate::Mat4`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The slice does not have the number of components the type stores.
    #[error("expected {expected} components, got {actual}")]
    LengthMismatch {
        /// Components required by the target type.
        expected: usize,
        /// Components supplied.
        actual: usize,
    },
    /// A component is NaN or infinite.
    #[error("component {index} is not finite")]
    NonFinite {
        /// Position of the first offending component.
        index: usize,
    },
}

/// Validates `values` and copies them into a fixed-size array.
pub(crate) fn finite_array<const N: usize>(values: &[f32]) -> Result<[f32; N], MathError> {
    if values.len() != N {
        return Err(MathError::LengthMismatch {
            expected: N,
            actual: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(MathError::NonFinite { index });
    }
    let mut out = [0.0; N];
    out.copy_from_slice(values);
    Ok(out)
}
