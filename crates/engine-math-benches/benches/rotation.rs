// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use engine_math::math::{Quat, Vec3};
use std::{hint::black_box, time::Duration};

fn build_rotations(n: usize) -> Vec<Quat> {
    (0..n)
        .map(|i| {
            let t = i as f32;
            let axis = Vec3::new(1.0 + t * 0.01, (t * 0.37).fract() - 0.5, 0.25);
            Quat::from_axis_angle(axis, t * 0.013)
        })
        .collect()
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat_compose_rotate");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.noise_threshold(0.02);
    let v = Vec3::new(0.3, -1.2, 2.0);
    for &n in &[16usize, 256, 4_096] {
        let rotations = build_rotations(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("compose", n), &rotations, |b, rotations| {
            b.iter(|| {
                let composed = rotations
                    .iter()
                    .fold(Quat::identity(), |acc, q| (acc * *q).normalized());
                black_box(composed)
            });
        });
        group.bench_with_input(BenchmarkId::new("rotate", n), &rotations, |b, rotations| {
            b.iter(|| {
                for q in rotations {
                    black_box(*q * black_box(v));
                }
            });
        });
    }
    group.finish();
}

fn bench_slerp_and_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat_slerp_matrix");
    group.sample_size(50);
    let n = 1_024usize;
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("slerp", |b| {
        // Inputs are rebuilt per batch so the timed loop is interpolation only.
        b.iter_batched(
            || (build_rotations(n), build_rotations(n + 7)),
            |(from, to)| {
                for (i, (start, end)) in from.iter().zip(&to).enumerate() {
                    let t = i as f32 / n as f32;
                    black_box(Quat::slerp(start, end, t));
                }
            },
            BatchSize::LargeInput,
        );
    });

    let rotations = build_rotations(n);
    group.bench_function("matrix_round_trip", |b| {
        b.iter(|| {
            for q in &rotations {
                black_box(Quat::from_mat4(&q.to_mat4()));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_rotation, bench_slerp_and_matrix);
criterion_main!(benches);
