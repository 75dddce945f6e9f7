extern crate orbiters;

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use orbiters::{Integrator, SymplecticEuler, Yoshida8};

fn create_universe() -> orbiters::Universe {
    orbiters::Case::cygnus_x1().universe()
}

fn criterion_benchmark_force(c: &mut Criterion) {
    let universe = create_universe();
    let orbiter = universe.orbiters[0];
    c.bench_function("power_law_acceleration", |b| b.iter(|| universe.gravity.acceleration(&orbiter, &universe.body)));
}

fn criterion_benchmark_integrators(c: &mut Criterion) {
    let time_step = orbiters::Case::cygnus_x1().time_step;
    let mut group = c.benchmark_group("step");

    let mut universe = create_universe();
    let integrator = SymplecticEuler::new();
    group.bench_function("symplectic_euler", |b| b.iter(|| integrator.step(&mut universe, time_step)));

    let mut universe = create_universe();
    let integrator = Yoshida8::new();
    group.bench_function("yoshida8", |b| b.iter(|| integrator.step(&mut universe, time_step)));

    group.finish();
}

fn criterion_benchmark_run(c: &mut Criterion) {
    let mut case = orbiters::Case::cygnus_x1();
    case.time_limit = 1e9;
    let mut group = c.benchmark_group("run");
    group.sample_size(10);
    group.bench_function("cygnus_x1_yoshida8", |b| b.iter(|| case.run(true)));
    group.finish();
}

criterion_group!(benches, criterion_benchmark_force, criterion_benchmark_integrators, criterion_benchmark_run);
criterion_main!(benches);
