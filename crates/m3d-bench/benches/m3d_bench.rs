//! Benchmarks for m3d kernel operations.
//!
//! Run with: `cargo bench -p m3d-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use m3d_geom::{CubicBezier2D, Curve2D, QuadBezier2D};
use m3d_math::{Mat3, Mat4, Quat, Vec2, Vec3};

fn sample_mat4() -> Mat4 {
    Mat4::from_rows([
        [5.0, 2.0, 6.0, 1.0],
        [0.0, 6.0, 2.0, 0.0],
        [3.0, 8.0, 1.0, 4.0],
        [1.0, 8.0, 5.0, 6.0],
    ])
}

/// Benchmark determinants (triple product vs cofactor expansion).
fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    let m3 = Mat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    let m4 = sample_mat4();

    group.bench_function("mat3", |b| b.iter(|| black_box(m3).determinant()));
    group.bench_function("mat4", |b| b.iter(|| black_box(m4).determinant()));
    group.bench_function("mat4_glam", |b| {
        let g = m4.to_glam();
        b.iter(|| black_box(g).determinant())
    });

    group.finish();
}

/// Benchmark adjugate inverse.
fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    let m3 = Mat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    let m4 = sample_mat4();

    group.bench_function("mat3", |b| b.iter(|| black_box(m3).try_inverse()));
    group.bench_function("mat4", |b| b.iter(|| black_box(m4).try_inverse()));
    group.bench_function("mat4_glam", |b| {
        let g = m4.to_glam();
        b.iter(|| black_box(g).inverse())
    });

    group.finish();
}

/// Benchmark matrix products.
fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("product");

    let a = sample_mat4();
    let b4 = Mat4::rotation_y(30.0) * Mat4::scale(2.0);
    let v = Vec3::new(1.0, 2.0, 3.0);

    group.bench_function("mat4_mat4", |b| b.iter(|| black_box(a) * black_box(b4)));
    group.bench_function("mat4_point", |b| {
        b.iter(|| black_box(a).transform_point(black_box(v)))
    });

    group.finish();
}

/// Benchmark quaternion rotation over batches of vectors.
fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    for size in [100, 10000].iter() {
        let vectors: Vec<Vec3> = (0..*size)
            .map(|i| {
                let f = i as f32;
                Vec3::new(f.sin(), f.cos(), f * 0.01)
            })
            .collect();
        let axis = Vec3::new(1.0, 1.0, 0.5);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("quat", size), &vectors, |b, vs| {
            b.iter(|| {
                vs.iter()
                    .map(|&v| Quat::rotate_vector(black_box(v), axis, 37.0))
                    .collect::<Vec<_>>()
            })
        });

        let m = Mat4::rotation_z(37.0);
        group.bench_with_input(BenchmarkId::new("mat4", size), &vectors, |b, vs| {
            b.iter(|| {
                vs.iter()
                    .map(|&v| m.transform_point(black_box(v)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark Bezier sampling.
fn bench_bezier(c: &mut Criterion) {
    let mut group = c.benchmark_group("bezier");

    let quad = QuadBezier2D::new(Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
    let cubic = CubicBezier2D::new(
        Vec2::ZERO,
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
    );

    for segments in [16, 256].iter() {
        group.throughput(Throughput::Elements(*segments as u64 + 1));
        group.bench_with_input(BenchmarkId::new("quad", segments), segments, |b, &n| {
            b.iter(|| quad.sample(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("cubic", segments), segments, |b, &n| {
            b.iter(|| cubic.sample(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_determinant,
    bench_inverse,
    bench_product,
    bench_rotation,
    bench_bezier,
);
criterion_main!(benches);
