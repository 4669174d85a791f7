//! Criterion benchmarks for pricer_models analytics.
//!
//! Measures single-contract pricing and Greeks, and sequential versus
//! parallel sweeps across different sizes to characterise scaling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::grid::linspace;
use pricer_models::instruments::{OptionContract, OptionType};
use pricer_models::payoff::payoff_curve;
use pricer_models::sensitivity::{sweep, SweepField};
use pricer_models::{greeks, price};

fn atm_call() -> OptionContract {
    OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
}

/// Benchmark price and Greeks of one contract.
fn bench_single_contract(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_contract");
    let call = atm_call();
    let put = call.with_option_type(OptionType::Put);

    group.bench_function("price_call", |b| b.iter(|| price(black_box(&call)).unwrap()));
    group.bench_function("price_put", |b| b.iter(|| price(black_box(&put)).unwrap()));
    group.bench_function("greeks_call", |b| b.iter(|| greeks(black_box(&call)).unwrap()));

    group.finish();
}

/// Benchmark sequential and rayon sweeps over spot.
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_sweep");
    let base = atm_call();

    for size in [100, 1000, 10000] {
        let values = linspace(50.0, 150.0, size).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", size), &values, |b, values| {
            b.iter(|| {
                sweep(black_box(&base), SweepField::Spot, values)
                    .unwrap()
                    .collect_points()
                    .unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &values, |b, values| {
            b.iter(|| {
                sweep(black_box(&base), SweepField::Spot, values)
                    .unwrap()
                    .par_collect()
            });
        });
    }

    group.finish();
}

/// Benchmark payoff curve evaluation.
fn bench_payoff_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("payoff_curve");
    let call = atm_call();

    for size in [100, 10000] {
        let range = linspace(50.0, 150.0, size).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &range, |b, range| {
            b.iter(|| {
                payoff_curve(black_box(&call), range, 10.0)
                    .unwrap()
                    .map(|p| p.payoff)
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_contract, bench_sweep, bench_payoff_curve);
criterion_main!(benches);
