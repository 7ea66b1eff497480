//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate decimal_bigint;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_bigint::BigInt;

mod common;
use common::*;

criterion_main!(
    arithmetic,
    multiplication,
);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        criterion_benchmark,
);

criterion_group!(
    name = multiplication;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7));
    targets =
        multiplication_by_size,
        fibonacci_by_addition,
);


fn make_random_pairs(values: &[BigInt], seed: u64) -> Vec<(&BigInt, &BigInt)> {
    let mut cartesian_pairs = values
                            .iter()
                            .enumerate()
                            .flat_map(|(i, x)| {
                                values.iter().skip(i+1).map(move |y| (x, y))
                            }).collect::<Vec<(&BigInt, &BigInt)>>();

    // random number generator from random seed
    let mut rng = oorandom::Rand32::new(seed);

    for i in (1..cartesian_pairs.len()).rev() {
        let j = rng.rand_u32() as usize % i;
        cartesian_pairs.swap(i, j);
    }

    cartesian_pairs
}


pub fn criterion_benchmark(c: &mut Criterion) {
    let values = random_bigints(7238269155957952517, 60, 120);
    let divisors = random_bigints(1059392837210048123, 60, 45);

    let pairs = make_random_pairs(&values, 7238269155957952517_u64);
    let mut random_pairs = RandomIterator::new(&pairs);

    let division_pairs: Vec<(&BigInt, &BigInt)> = values.iter().zip(divisors.iter()).collect();
    let mut random_division_pairs = RandomIterator::new(&division_pairs);

    let mut random_value = RandomIterator::new(&pairs);

    c.bench_function(
        "addition",
        |b| b.iter_batched(
            || {
                random_pairs.next()
            },
            |(a, b)| {
                black_box(a + b);
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "subtraction",
        |b| b.iter_batched(
            || {
                random_pairs.next()
            },
            |(a, b)| {
                black_box(a - b);
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "multiplication",
        |b| b.iter_batched(
            || {
                random_pairs.next()
            },
            |(a, b)| {
                black_box(a * b);
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "division",
        |b| b.iter_batched(
            || {
                random_division_pairs.next()
            },
            |(a, b)| {
                black_box(a.divmod(b).unwrap());
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "multiplication-i32",
        |b| b.iter_batched(
            || {
                random_value.next().0
            },
            |a| {
                black_box(a * 999_999_937);
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "to_string",
        |b| b.iter_batched(
            || {
                random_value.next().0
            },
            |a| {
                black_box(a.to_string());
            },
            criterion::BatchSize::SmallInput));
}


/// Multiply operands of increasing size, crossing the Karatsuba cutoff
pub fn multiplication_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication-by-size");

    for &digit_count in &[50usize, 300, 600, 1200, 5000, 20000] {
        let values = random_bigints(digit_count as u64, 2, digit_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(digit_count),
            &values,
            |b, values| b.iter(|| black_box(&values[0] * &values[1])));
    }

    group.finish();
}


/// Repeated addition, the workload of computing a Fibonacci number
pub fn fibonacci_by_addition(c: &mut Criterion) {
    c.bench_function(
        "fibonacci-2000",
        |b| b.iter(|| {
            let mut x = BigInt::from(0);
            let mut y = BigInt::from(1);
            for _ in 0..2000 {
                let next = &x + &y;
                x = std::mem::replace(&mut y, next);
            }
            black_box(x)
        }));
}
