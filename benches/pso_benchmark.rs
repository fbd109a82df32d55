use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use omnipso::{
    algorithms::particles::PSOConfig,
    core::{BoundaryMethod, Target},
    optimize,
    test_functions::{Ackley, Rastrigin},
};

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("PSO");
    for n in [2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("Rastrigin", n), &n, |b, ndim| {
            let config = PSOConfig::new((-5.12, 5.12), Target::Minimize).with_convergence(0.0);
            b.iter_batched(
                || (Rastrigin { n: *ndim }, config.clone()),
                |(problem, config)| {
                    let result = optimize(&problem, config).unwrap();
                    black_box(result);
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("Ackley (clip)", n), &n, |b, ndim| {
            let config = PSOConfig::new((-5.0, 5.0), Target::Minimize)
                .with_convergence(0.0)
                .with_boundary_method(BoundaryMethod::Clip);
            b.iter_batched(
                || (Ackley { n: *ndim }, config.clone()),
                |(problem, config)| {
                    let result = optimize(&problem, config).unwrap();
                    black_box(result);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
