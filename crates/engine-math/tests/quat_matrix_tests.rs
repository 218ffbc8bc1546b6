// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use engine_math::math::{self, Mat4, Quat, Vec3, HALF_PI, PI};

mod common;
use common::{assert_mat_close, assert_quat_close, assert_same_rotation, assert_vec_close};

#[test]
fn identity_quaternion_gives_identity_matrix() {
    assert_eq!(Quat::identity().to_mat4(), Mat4::identity());
}

#[test]
fn to_mat4_layout_is_column_major_standard_formula() {
    // Integer components keep every entry exact.
    let m = Quat::new(1.0, 2.0, 3.0, 4.0).to_mat4();
    assert_eq!(
        m,
        Mat4::from_rows([
            [-25.0, -20.0, 22.0, 0.0],
            [28.0, -19.0, 4.0, 0.0],
            [-10.0, 20.0, -9.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    );
    // (row 1, col 0) is the second stored element.
    assert_eq!(m.to_array()[1], 28.0);
    assert_eq!(m.get(1, 0), 28.0);
    assert_eq!(m.get(0, 1), -20.0);
}

#[test]
fn matrix_transform_matches_quaternion_rotation() {
    let rotations = [
        Quat::from_axis_angle(Vec3::UNIT_Y, HALF_PI),
        Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 2.5),
        Quat::from_axis_angle(Vec3::new(-0.3, 0.0, 1.0), -1.1),
    ];
    let v = Vec3::new(0.7, -1.3, 2.2);
    for q in rotations {
        assert_vec_close(q.to_mat4().transform_direction(&v), q * v, 1e-5);
        assert_eq!(Mat4::from_quat(&q), q.to_mat4());
    }
}

#[test]
fn axis_rotations_agree_with_quaternion_matrices() {
    for angle in [0.3_f32, 1.0, 2.0, -2.5] {
        assert_mat_close(
            Quat::from_axis_angle(Vec3::UNIT_X, angle).to_mat4(),
            Mat4::rotation_x(angle),
            1e-5,
        );
        assert_mat_close(
            Quat::from_axis_angle(Vec3::UNIT_Y, angle).to_mat4(),
            Mat4::rotation_y(angle),
            1e-5,
        );
        assert_mat_close(
            Quat::from_axis_angle(Vec3::UNIT_Z, angle).to_mat4(),
            Mat4::rotation_z(angle),
            1e-5,
        );
    }
}

#[test]
fn from_mat4_trace_branch() {
    assert_quat_close(Quat::from_mat4(&Mat4::identity()), Quat::identity(), 1e-6);

    let q = Quat::from_axis_angle(Vec3::new(0.2, -0.4, 1.0), 0.9);
    assert_same_rotation(Quat::from_mat4(&q.to_mat4()), q, 1e-5);
}

#[test]
fn from_mat4_x_dominant_branch() {
    let flip_x = Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, -1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_same_rotation(Quat::from_mat4(&flip_x), Quat::new(1.0, 0.0, 0.0, 0.0), 1e-6);

    let q = Quat::from_axis_angle(Vec3::new(3.0, 1.0, 0.5), 2.9);
    assert_same_rotation(Quat::from_mat4(&q.to_mat4()), q, 1e-4);
}

#[test]
fn from_mat4_y_dominant_branch() {
    let flip_y = Mat4::from_rows([
        [-1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_same_rotation(Quat::from_mat4(&flip_y), Quat::new(0.0, 1.0, 0.0, 0.0), 1e-6);

    let q = Quat::from_axis_angle(Vec3::new(0.5, 3.0, 1.0), 2.9);
    assert_same_rotation(Quat::from_mat4(&q.to_mat4()), q, 1e-4);
}

#[test]
fn from_mat4_z_dominant_branch() {
    let flip_z = Mat4::from_rows([
        [-1.0, 0.0, 0.0, 0.0],
        [0.0, -1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_same_rotation(Quat::from_mat4(&flip_z), Quat::new(0.0, 0.0, 1.0, 0.0), 1e-6);

    let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 2.8);
    assert_same_rotation(Quat::from_mat4(&q.to_mat4()), q, 1e-4);
}

#[test]
fn from_mat4_zero_trace_rotation() {
    // 120° about the main diagonal has trace 0 and equal diagonal entries.
    let axis = Vec3::new(1.0, 1.0, 1.0).normalize();
    let q = Quat::from_axis_angle(axis, 2.0 * PI / 3.0);
    assert_same_rotation(Quat::from_mat4(&q.to_mat4()), q, 1e-4);
}

#[test]
fn from_mat4_round_trip_diagonal_axis_quarter_turn() {
    let axis = Vec3::new(1.0, 1.0, 0.0).scale(1.0 / math::sqrt(2.0));
    let q = Quat::from_axis_angle(axis, math::radians(90.0));
    assert_same_rotation(Quat::from_mat4(&q.to_mat4()), q, 1e-3);
}

#[test]
fn from_mat4_ignores_translation_column() {
    let q = Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0), 1.3);
    let mut data = q.to_mat4().to_array();
    data[12] = 10.0;
    data[13] = -4.0;
    data[14] = 2.5;
    assert_eq!(Quat::from_mat4(&Mat4::new(data)), Quat::from_mat4(&q.to_mat4()));
}

#[test]
fn from_mat4_result_is_normalized() {
    for angle in [0.1_f32, 1.7, 3.1] {
        let q = Quat::from_axis_angle(Vec3::new(-2.0, 0.3, 0.9), angle);
        let back = Quat::from_mat4(&q.to_mat4());
        common::assert_close(back.magnitude(), 1.0, 1e-5);
    }
}

#[test]
fn rotation_axis_angle_matches_quaternion_path() {
    let axis = Vec3::new(0.0, 2.0, 0.0);
    assert_eq!(
        Mat4::rotation_axis_angle(axis, 0.8),
        Quat::from_axis_angle(axis, 0.8).to_mat4()
    );
}
