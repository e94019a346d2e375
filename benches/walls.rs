//! Criterion benchmarks for per-particle wall evaluation and trial moves.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hardmc::core::{
    make_wall_params, move_rotate, move_translate, BoxDim, CounterRng, CylinderWall, Dimensions,
    EvaluatorWalls, LennardJones, LjParams, PlaneWall, Quat, SphereWall, Vec3, WallField,
    WallPotential,
};
use std::hint::black_box;

fn full_field() -> WallField {
    let mut field = WallField::new();
    for k in 0..20 {
        let r = 10.0 + k as f64 * 0.25;
        let sphere = SphereWall::new(r, Vec3::zero(), true).expect("valid sphere");
        field.add_sphere(sphere).expect("within capacity");
        let cylinder = CylinderWall::new(r, Vec3::zero(), Vec3::new(0.0, 0.0, 1.0), true)
            .expect("valid cylinder");
        field.add_cylinder(cylinder).expect("within capacity");
    }
    for k in 0..40 {
        let z = -15.0 + k as f64 * 0.5;
        let plane = PlaneWall::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, z))
            .expect("valid plane");
        field.add_plane(plane).expect("within capacity");
    }
    field
}

fn bench_single_particle(c: &mut Criterion) {
    let field = full_field();
    let b = BoxDim::cube(60.0).expect("valid box");
    let params = make_wall_params::<LennardJones>(
        LjParams::new(1.0, 1.0).expect("valid lj"),
        2.5 * 2.5,
        0.0,
    );
    let pos = Vec3::new(11.0, 3.0, 2.0);
    c.bench_function("walls_lj_full_field", |bench| {
        bench.iter(|| {
            EvaluatorWalls::<LennardJones>::new(black_box(pos), 0, &b, &params, &field)
                .eval_force_energy_and_virial()
        })
    });
}

fn bench_parallel(c: &mut Criterion) {
    let b = BoxDim::cube(60.0).expect("valid box");
    let params = make_wall_params::<LennardJones>(
        LjParams::new(1.0, 1.0).expect("valid lj"),
        2.5 * 2.5,
        0.0,
    );
    let pot = WallPotential::<LennardJones>::new(full_field(), params);
    let mut group = c.benchmark_group("wall_potential_compute");
    for n in [1_000usize, 10_000, 100_000] {
        let mut rng = CounterRng::new(1, 2, 3);
        let positions: Vec<Vec3> = (0..n)
            .map(|_| {
                Vec3::new(
                    rng.uniform(-20.0, 20.0),
                    rng.uniform(-20.0, 20.0),
                    rng.uniform(-20.0, 20.0),
                )
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &positions, |bench, pos| {
            bench.iter(|| pot.compute(pos, &b))
        });
    }
    group.finish();
}

fn bench_moves(c: &mut Criterion) {
    c.bench_function("move_rotate_3d", |bench| {
        let mut q = Quat::identity();
        let mut i = 0u32;
        bench.iter(|| {
            let mut rng = CounterRng::new(i, 0, 42);
            i = i.wrapping_add(1);
            move_rotate(&mut q, &mut rng, 0.1, Dimensions::Three);
        })
    });
    c.bench_function("move_translate_3d", |bench| {
        let mut r = Vec3::zero();
        let mut i = 0u32;
        bench.iter(|| {
            let mut rng = CounterRng::new(i, 0, 42);
            i = i.wrapping_add(1);
            move_translate(&mut r, &mut rng, 0.1, Dimensions::Three);
        })
    });
}

criterion_group!(benches, bench_single_particle, bench_parallel, bench_moves);
criterion_main!(benches);
