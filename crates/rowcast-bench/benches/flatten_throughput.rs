//! Flattening and schema inference over generated documents

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rowcast::{AvroSchemaHandler, JsonFlattener};
use rowcast_bench::{generate_event_log, generate_schema_documents};
use std::hint::black_box;

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for rows in [10usize, 100, 1_000] {
        let document = generate_event_log(rows);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &document, |b, doc| {
            let flattener = JsonFlattener::new();
            b.iter(|| black_box(flattener.flatten(black_box(doc.as_bytes()))))
        });
    }
    group.finish();
}

fn bench_schema_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_inference");
    for rows in [10usize, 100, 1_000] {
        let document = generate_event_log(rows);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &document, |b, doc| {
            b.iter(|| {
                let mut handler = AvroSchemaHandler::new();
                black_box(handler.create_schema(black_box(doc.as_bytes())))
            })
        });
    }
    group.finish();
}

fn bench_schema_merging(c: &mut Criterion) {
    let documents = generate_schema_documents(50);
    let mut group = c.benchmark_group("schema_merge");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("ragged_documents", |b| {
        b.iter(|| {
            let mut handler = AvroSchemaHandler::new();
            for document in &documents {
                black_box(handler.create_schema(document.as_bytes()).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_flatten,
    bench_schema_inference,
    bench_schema_merging
);
criterion_main!(benches);
