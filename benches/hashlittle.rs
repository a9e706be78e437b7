//! Throughput of lookup3 hashlittle over a few key sizes.
//!
//! Run with: cargo bench --bench hashlittle

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lookup3::{Hash32, HashLittle};

fn key_of(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

fn bench_kb(c: &mut Criterion) {
    let data = key_of(1024);
    let mut h = HashLittle::new();

    let mut group = c.benchmark_group("hashlittle_kb");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("write_sum", |b| {
        b.iter(|| {
            h.reset();
            h.write(black_box(&data)).unwrap();
            black_box(h.sum(&[]))
        })
    });
    group.finish();
}

fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashlittle_sizes");
    for len in [3usize, 12, 13, 64, 4096] {
        let data = key_of(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| lookup3::hash32(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kb, bench_sizes);
criterion_main!(benches);
