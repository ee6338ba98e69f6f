//! Benchmarks for the elementary functions

extern crate criterion;
extern crate bigdecimal;
extern crate bigdecimal_math;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bigdecimal::BigDecimal;
use bigdecimal_math::{cbrt, exp, ln, modulo, pow, sqrt};

criterion_main!(
    roots,
    transcendental,
);

criterion_group!(
    name = roots;
    config = Criterion::default()
                       .sample_size(200);
    targets =
        bench_sqrt,
        bench_cbrt,
        bench_modulo,
);

criterion_group!(
    name = transcendental;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(50);
    targets =
        bench_ln,
        bench_exp,
        bench_pow,
);


/// Random positive decimals with up to 12 digits and scales from -6 to 12
fn make_random_decimals(count: usize, seed: u64) -> Vec<BigDecimal> {
    let mut rng = oorandom::Rand64::new(seed.into());
    (0..count)
        .map(|_| {
            let mantissa = rng.rand_range(1..1_000_000_000_000);
            let scale = rng.rand_range(0..19) as i64 - 6;
            BigDecimal::new(mantissa.into(), scale)
        })
        .collect()
}

fn bench_sqrt(c: &mut Criterion) {
    let decs = make_random_decimals(64, 7);
    let mut group = c.benchmark_group("sqrt");
    for scale in [10i64, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| {
                for x in decs.iter() {
                    black_box(sqrt(x, scale));
                }
            })
        });
    }
    group.finish();
}

fn bench_cbrt(c: &mut Criterion) {
    let decs = make_random_decimals(64, 11);
    let mut group = c.benchmark_group("cbrt");
    for scale in [10i64, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| {
                for x in decs.iter() {
                    black_box(cbrt(x, scale));
                }
            })
        });
    }
    group.finish();
}

fn bench_modulo(c: &mut Criterion) {
    let decs = make_random_decimals(64, 13);
    c.bench_function("modulo", |b| {
        b.iter(|| {
            for pair in decs.chunks_exact(2) {
                black_box(modulo(&pair[0], &pair[1]));
            }
        })
    });
}

fn bench_ln(c: &mut Criterion) {
    let decs = make_random_decimals(16, 17);
    let mut group = c.benchmark_group("ln");
    for scale in [10i64, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| {
                for x in decs.iter() {
                    black_box(ln(x, scale).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_exp(c: &mut Criterion) {
    let mut rng = oorandom::Rand64::new(19);
    let exponents: Vec<BigDecimal> = (0..16)
        .map(|_| BigDecimal::new((rng.rand_range(0..100_000) as i64 - 50_000).into(), 3))
        .collect();

    let mut group = c.benchmark_group("exp");
    for scale in [10i64, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| {
                for n in exponents.iter() {
                    black_box(exp(n, scale));
                }
            })
        });
    }
    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let bases = make_random_decimals(16, 23);
    let exponent: BigDecimal = "2.5".parse().unwrap();
    c.bench_function("pow/2.5", |b| {
        b.iter(|| {
            for x in bases.iter() {
                black_box(pow(x, &exponent, 10).ok());
            }
        })
    });
}
