//! Scalar evaluation ladder throughput

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rowcast::evaluate;
use rowcast_bench::SCALAR_SAMPLES;
use std::hint::black_box;

fn bench_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_eval");
    group.throughput(Throughput::Elements(SCALAR_SAMPLES.len() as u64));
    group.bench_function("mixed_tokens", |b| {
        b.iter(|| {
            for sample in SCALAR_SAMPLES {
                black_box(evaluate(black_box(sample)));
            }
        })
    });
    group.finish();
}

fn bench_integer_fast_path(c: &mut Criterion) {
    let tokens: Vec<String> = (0..64u64).map(|i| (i * 998_877_665_544).to_string()).collect();
    let mut group = c.benchmark_group("scalar_int");
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("chunked_digits", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(evaluate(black_box(token)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_ladder, bench_integer_fast_path);
criterion_main!(benches);
