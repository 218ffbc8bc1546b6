// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

use engine_math::math::{Mat4, Quat, Vec3};

pub fn assert_close(actual: f32, expected: f32, tol: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "expected {expected}, got {actual} (diff {diff}, tol {tol})"
    );
}

pub fn assert_vec_close(actual: Vec3, expected: Vec3, tol: f32) {
    let a = actual.to_array();
    let b = expected.to_array();
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

pub fn assert_quat_close(actual: Quat, expected: Quat, tol: f32) {
    let a = actual.to_array();
    let b = expected.to_array();
    for i in 0..4 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

/// `q` and `-q` are the same rotation; accept either sign.
pub fn same_rotation(actual: Quat, expected: Quat, tol: f32) -> bool {
    let a = actual.to_array();
    let b = expected.to_array();
    let direct = (0..4).all(|i| (a[i] - b[i]).abs() <= tol);
    let flipped = (0..4).all(|i| (a[i] + b[i]).abs() <= tol);
    direct || flipped
}

pub fn assert_same_rotation(actual: Quat, expected: Quat, tol: f32) {
    assert!(
        same_rotation(actual, expected, tol),
        "{actual} is not the rotation {expected} (tol {tol})"
    );
}

pub fn assert_mat_close(actual: Mat4, expected: Mat4, tol: f32) {
    let a = actual.to_array();
    let b = expected.to_array();
    for i in 0..16 {
        let diff = (a[i] - b[i]).abs();
        assert!(
            diff <= tol,
            "element {i} (row {}, col {}): {} vs {}, diff={diff}",
            i % 4,
            i / 4,
            a[i],
            b[i]
        );
    }
}
