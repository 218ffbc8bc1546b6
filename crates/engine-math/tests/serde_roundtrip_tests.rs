// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
#![cfg(feature = "serde")]
use engine_math::math::{Mat4, Quat, Vec3};

#[test]
fn quat_serializes_as_component_array() {
    let q = Quat::new(0.5, -0.5, 0.25, 0.75);
    let json = serde_json::to_string(&q).expect("serialize quat");
    assert_eq!(json, r#"{"data":[0.5,-0.5,0.25,0.75]}"#);
    let back: Quat = serde_json::from_str(&json).expect("deserialize quat");
    assert_eq!(back, q);
}

#[test]
fn vec3_and_mat4_survive_json() {
    let v = Vec3::new(1.0, -2.5, 3.0);
    let back: Vec3 = serde_json::from_str(&serde_json::to_string(&v).expect("serialize vec3"))
        .expect("deserialize vec3");
    assert_eq!(back, v);

    let m = Mat4::rotation_z(0.5);
    let back: Mat4 = serde_json::from_str(&serde_json::to_string(&m).expect("serialize mat4"))
        .expect("deserialize mat4");
    assert_eq!(back, m);
}

#[test]
fn wrong_component_count_is_rejected() {
    let err = serde_json::from_str::<Quat>(r#"{"data":[0.0,0.0,1.0]}"#);
    assert!(err.is_err());
}
