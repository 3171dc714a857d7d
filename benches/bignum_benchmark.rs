// ============================================================================
// Idle Bignum Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - add/subtract at equal and distant scales
// 2. Normalization - single-step and multi-step corrections
// 3. Display - mantissa formatting and name lookup
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use idle_bignum::prelude::*;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    // Alignment cost varies with the exponent gap between operands.
    for gap in [0, 6, 12, 15].iter() {
        let lhs = BigNum::from_parts(1.5, 60).unwrap();
        let rhs = BigNum::from_parts(500.0, 60 - gap).unwrap();

        group.bench_with_input(BenchmarkId::new("exponent_gap", gap), &rhs, |b, rhs| {
            b.iter(|| {
                let mut acc = black_box(lhs);
                acc.add(black_box(rhs));
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn benchmark_scalar_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_ops");

    group.bench_function("multiply_small_factor", |b| {
        b.iter(|| {
            let mut n = black_box(BigNum::from_parts(2.0, 9).unwrap());
            n.multiply(black_box(1.07)).unwrap();
            black_box(n)
        });
    });

    group.bench_function("multiply_large_factor", |b| {
        b.iter(|| {
            let mut n = black_box(BigNum::from_parts(2.0, 9).unwrap());
            n.multiply(black_box(1e9)).unwrap();
            black_box(n)
        });
    });

    group.bench_function("divide_large_divisor", |b| {
        b.iter(|| {
            let mut n = black_box(BigNum::from_parts(5.0, 12).unwrap());
            n.divide(black_box(1e9)).unwrap();
            black_box(n)
        });
    });

    group.finish();
}

// ============================================================================
// Normalization Benchmarks
// ============================================================================

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    // Number of loop iterations grows with how far the mantissa drifted.
    for steps in [1, 4, 8].iter() {
        let mantissa = 1.5 * 1000f64.powi(*steps);

        group.bench_with_input(
            BenchmarkId::new("rollover_steps", steps),
            &mantissa,
            |b, &mantissa| {
                b.iter(|| {
                    let mut n = BigNum::new(black_box(mantissa), Magnitude::ZERO);
                    n.normalize();
                    black_box(n)
                });
            },
        );
    }

    group.bench_function("already_normalized", |b| {
        b.iter(|| {
            let mut n = BigNum::new(black_box(1.5), Magnitude::ZERO);
            n.normalize();
            black_box(n)
        });
    });

    group.finish();
}

// ============================================================================
// Display Benchmarks
// ============================================================================

fn benchmark_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    let n = BigNum::from_parts(123.456, 63).unwrap();

    group.bench_function("value_string", |b| {
        b.iter(|| black_box(black_box(&n).value_string(3)));
    });

    group.bench_function("name_lookup", |b| {
        b.iter(|| black_box(black_box(&n).name()));
    });

    group.bench_function("to_display_string", |b| {
        b.iter(|| black_box(black_box(&n).to_string()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_scalar_ops,
    benchmark_normalize,
    benchmark_display
);
criterion_main!(benches);
