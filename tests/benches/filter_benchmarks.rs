//! # Bloom Filter Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | insert | O(k) hash + bit set |
//! | contains | O(k), short-circuits on the first clear bit |
//! | dispatch | parse + O(k) per line |

use std::io::Cursor;
use std::time::Duration;

use bloom_filters::{BatchSource, BloomFilter, Dispatcher, OperationGenerator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tokens(count: usize, seed: u64) -> Vec<String> {
    let mut generator = OperationGenerator::new(StdRng::seed_from_u64(seed));
    (0..count).map(|_| generator.random_token()).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-insert");
    group.measurement_time(Duration::from_secs(5));

    for fpr in [0.1, 0.01, 0.001] {
        let batch = tokens(1_000, 1);
        group.throughput(Throughput::Elements(batch.len() as u64));
        group.bench_with_input(BenchmarkId::new("fpr", fpr), &batch, |b, batch| {
            let mut filter = BloomFilter::new(100_000, fpr).unwrap();
            b.iter(|| {
                for token in batch {
                    filter.insert(black_box(token));
                }
            })
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-contains");

    let mut filter = BloomFilter::new(100_000, 0.01).unwrap();
    let present = tokens(100_000, 2);
    for token in &present {
        filter.insert(token);
    }
    let absent = tokens(1_000, 3);

    group.throughput(Throughput::Elements(1_000));
    group.bench_function("present", |b| {
        b.iter(|| {
            present[..1_000]
                .iter()
                .filter(|t| filter.contains(black_box(t)))
                .count()
        })
    });
    group.bench_function("absent", |b| {
        b.iter(|| absent.iter().filter(|t| filter.contains(black_box(t))).count())
    });
    group.finish();
}

fn bench_dispatch_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-dispatch");

    let mut stream = Vec::new();
    OperationGenerator::new(StdRng::seed_from_u64(4))
        .generate(10_000, &mut stream)
        .unwrap();

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("batch_10k", |b| {
        b.iter(|| {
            let filter = BloomFilter::new(10_000, 0.01).unwrap();
            let mut dispatcher = Dispatcher::new(filter, std::io::sink());
            let mut source = BatchSource::from_reader(Cursor::new(stream.as_slice()));
            dispatcher.run(&mut source).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_dispatch_stream);
criterion_main!(benches);
