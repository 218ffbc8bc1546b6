// SPDX-License-Identifier: Apache-2.0
//! engine-math: bounded-cost numeric kernel and quaternion rotation algebra.
//!
//! The kernel replaces the platform math runtime with fixed-length series and
//! fixed-iteration Newton steps so every call has a predictable cost and the
//! same result on every target. The rotation algebra ([`math::Quat`]) is built
//! only on that kernel and on the [`math::Vec3`] / [`math::Mat4`] value types.
//!
//! Nothing in the numeric surface returns `Result`: degenerate inputs resolve
//! to documented fallback values. [`MathError`] is reserved for boundary
//! conversions from untyped slices.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::float_cmp
)]

/// Scalar kernel, trigonometry, and rotation algebra (Vec3, Mat4, Quat).
pub mod math;

mod error;

pub use error::MathError;
pub use math::{Mat4, Quat, Vec3, EPSILON};
