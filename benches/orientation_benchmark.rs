use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use laue_orientation::batch::{generate_ipf_colors, PhaseArrays};
use laue_orientation::coloring::generate_ipf_color;
use laue_orientation::fundamental_zone::{determine_random_euler_angles, odf_fz_rodrigues};
use laue_orientation::misorientation::misorientation;
use laue_orientation::orientation::euler_to_quaternion;
use laue_orientation::parallel::ParallelMode;
use laue_orientation::pole_figures::{generate_pole_figures, PoleFigureConfig};
use laue_orientation::symmetries::CrystalClass;

/// Per-orientation kernels for the largest (cubic m-3m) and a small (orthorhombic) group,
/// plus the whole-buffer drivers in both execution modes.
/// - cargo bench (parallel feature on)
/// - cargo bench --no-default-features (sequential fallback)
fn bench_orientation_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation_kernels");

    let mut rng = StdRng::seed_from_u64(1);
    let ref_dir = Vector3::new(0.0, 0.0, 1.0);

    for class in [CrystalClass::CubicHigh, CrystalClass::OrthoRhombic] {
        let sym = class.group();
        let e1 = determine_random_euler_angles(sym, &mut rng);
        let e2 = determine_random_euler_angles(sym, &mut rng);
        let (q1, q2) = (euler_to_quaternion(&e1), euler_to_quaternion(&e2));

        group.bench_function(format!("misorientation_{}", class), |b| {
            b.iter(|| misorientation(black_box(sym), black_box(&q1), black_box(&q2)))
        });

        group.bench_function(format!("fz_reduce_{}", class), |b| {
            b.iter(|| odf_fz_rodrigues(black_box(sym), black_box(&q1)))
        });

        group.bench_function(format!("ipf_color_{}", class), |b| {
            b.iter(|| generate_ipf_color(black_box(sym), black_box(&e1), black_box(&ref_dir)))
        });
    }

    group.finish();
}

fn bench_batch_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_drivers");
    group.sample_size(20);

    let n = 100_000;
    let mut rng = StdRng::seed_from_u64(2);
    let sym = CrystalClass::CubicHigh.group();
    let eulers: Vec<f32> = (0..n)
        .flat_map(|_| {
            let e = determine_random_euler_angles(sym, &mut rng);
            [e.x as f32, e.y as f32, e.z as f32]
        })
        .collect();
    let phases = vec![1i32; n];
    let structures = [999u32, CrystalClass::CubicHigh.id()];
    let arrays = PhaseArrays::new(&phases, &structures);
    let ref_dir = Vector3::new(0.0, 0.0, 1.0);

    for mode in [ParallelMode::Sequential, ParallelMode::Parallel] {
        let mut out = vec![0u8; 3 * n];
        group.bench_function(format!("ipf_colors_100k_{:?}", mode), |b| {
            b.iter(|| generate_ipf_colors(black_box(&eulers), &arrays, &ref_dir, &mut out, mode))
        });
    }

    group.finish();
}

fn bench_pole_figures(c: &mut Criterion) {
    let mut group = c.benchmark_group("pole_figures");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(3);
    let sym = CrystalClass::CubicHigh.group();
    let eulers: Vec<_> = (0..5_000)
        .map(|_| determine_random_euler_angles(sym, &mut rng))
        .collect();
    let config = PoleFigureConfig::default();

    group.bench_function("cubic_5k_default_config", |b| {
        b.iter(|| generate_pole_figures(black_box(sym), black_box(&eulers), &config, ParallelMode::Parallel))
    });

    group.finish();
}

criterion_group!(benches, bench_orientation_kernels, bench_batch_drivers, bench_pole_figures);
criterion_main!(benches);
