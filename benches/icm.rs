use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use icm_poker::icm::{calculate_icm, simulate_tournament_equity};

fn bench_recursive_icm(c: &mut Criterion) {
    let payouts = vec![5000.0, 3000.0, 2000.0, 1000.0];
    let mut group = c.benchmark_group("recursive_icm");
    for players in [3usize, 5, 7, 9] {
        let stacks: Vec<f64> = (1..=players).map(|i| (i * 500) as f64).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(players),
            &stacks,
            |b, stacks| b.iter(|| calculate_icm(black_box(stacks), black_box(&payouts), 0)),
        );
    }
    group.finish();
}

fn bench_simulated_icm(c: &mut Criterion) {
    let payouts = vec![10_000.0, 6_000.0, 4_000.0, 1_000.0, 800.0];
    let mut group = c.benchmark_group("simulated_icm");
    for players in [4usize, 16, 128] {
        let stacks: Vec<f64> = (1..=players).map(|i| ((i % 37 + 1) * 100) as f64).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(players),
            &stacks,
            |b, stacks| {
                b.iter(|| simulate_tournament_equity(black_box(stacks), black_box(&payouts), 100))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_recursive_icm, bench_simulated_icm);
criterion_main!(benches);
