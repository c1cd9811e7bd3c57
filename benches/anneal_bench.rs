//! Criterion benchmarks for the annealing optimizer.
//!
//! Measures the per-iteration cost of the swap/evaluate/accept loop on
//! uniformly random instances, to keep the incremental length update honest:
//! run time should scale with the iteration budget, not with tour size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tour::instance::Instance;
use u_tour::sa::{AnnealConfig, Annealer};

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");

    for size in [100usize, 1000, 10_000] {
        let mut rng = StdRng::seed_from_u64(2024);
        let instance =
            Instance::random(size, size, 10_000, &mut rng).expect("valid instance arguments");

        group.bench_with_input(BenchmarkId::new("10k_iterations", size), &instance, |b, instance| {
            let config = AnnealConfig::default().with_seed(7).with_iterations(10_000);
            b.iter(|| {
                let mut annealer = Annealer::from_config(config.clone()).expect("valid config");
                let mut tour = instance.clone().into_tour();
                let stats = annealer.optimize(&mut tour).expect("valid tour");
                black_box(stats.final_length)
            });
        });
    }

    group.finish();
}

fn bench_path_length(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2024);
    let instance = Instance::random(10_000, 10_000, 10_000, &mut rng)
        .expect("valid instance arguments");
    let tour = instance.into_tour();

    c.bench_function("path_length/10k_points", |b| {
        b.iter(|| black_box(tour.length()))
    });
}

criterion_group!(benches, bench_optimize, bench_path_length);
criterion_main!(benches);
