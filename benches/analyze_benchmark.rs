use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::DMatrix;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sensitivity_stats::sensitivity_density::{gaussian_kde, Bandwidth};
use sensitivity_stats::sensitivity_core::utils::linspace;
use sensitivity_stats::{analyze, AnalysisConfig, ExecutionStrategy, ProblemDescriptor};

/// Ishigami inputs and outputs on `[-π, π]³`
fn generate_ishigami(n: usize, seed: u64) -> (DMatrix<f64>, Vec<f64>) {
    use std::f64::consts::PI;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let x = DMatrix::from_fn(n, 3, |_, _| rng.gen_range(-PI..PI));
    let y = x
        .row_iter()
        .map(|r| r[0].sin() + 7.0 * r[1].sin().powi(2) + 0.1 * r[2].powi(4) * r[0].sin())
        .collect();
    (x, y)
}

fn bench_kde(c: &mut Criterion) {
    let mut group = c.benchmark_group("GaussianKde");
    let grid = linspace(-5.0, 5.0, 100);

    for &size in &[100, 1_000, 10_000] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sample: Vec<f64> = (0..size).map(|_| rng.gen_range(-3.0..3.0)).collect();
        let h = Bandwidth::Silverman.resolve(&sample).unwrap();

        group.bench_with_input(BenchmarkId::new("silverman", size), &sample, |b, sample| {
            b.iter(|| gaussian_kde(black_box(sample), h, &grid))
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("DeltaAnalysis");
    group.sample_size(10);
    let problem = ProblemDescriptor::new(["x1", "x2", "x3"]);

    for &size in &[500, 2_000] {
        let (x, y) = generate_ishigami(size, 7);

        for strategy in [ExecutionStrategy::Sequential, ExecutionStrategy::Parallel] {
            let config = AnalysisConfig::default().with_seed(1).with_strategy(strategy);
            let id = BenchmarkId::new(format!("{strategy:?}").to_lowercase(), size);
            group.bench_with_input(id, &(&x, &y), |b, (x, y)| {
                b.iter(|| analyze(&problem, black_box(x), black_box(y), &config))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kde, bench_analyze);
criterion_main!(benches);
