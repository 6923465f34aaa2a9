//! Criterion benchmarks for container encode/decode.
//!
//! Run with: cargo bench -p bfast-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use bfast_core::prelude::*;

fn make_buffers(count: usize, len: usize) -> Vec<NamedBuffer> {
    (0..count)
        .map(|i| NamedBuffer::new(format!("array_{i}"), vec![(i % 251) as u8; len]))
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for (count, len) in [(4usize, 1 << 10), (16, 64 << 10), (64, 256 << 10)] {
        let buffers = make_buffers(count, len);
        group.throughput(Throughput::Bytes((count * len) as u64));

        group.bench_with_input(
            BenchmarkId::new("single_threaded", format!("{count}x{len}")),
            &buffers,
            |b, buffers| {
                let config = PackConfig::single_threaded();
                b.iter(|| pack_with(black_box(buffers), &config));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dynamic", format!("{count}x{len}")),
            &buffers,
            |b, buffers| {
                let config = PackConfig::default();
                b.iter(|| pack_with(black_box(buffers), &config));
            },
        );

        // Reused destination, no allocation per iteration
        group.bench_with_input(
            BenchmarkId::new("pack_into", format!("{count}x{len}")),
            &buffers,
            |b, buffers| {
                let config = PackConfig::default();
                let mut dst = vec![0u8; plan_layout(buffers).unwrap().needed_size() as usize];
                b.iter(|| pack_into(black_box(buffers), &mut dst, &config));
            },
        );
    }

    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");

    for count in [4usize, 64, 1024] {
        let wire = pack(&make_buffers(count, 512));
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("views_{count}"), |b| {
            b.iter(|| unpack(black_box(&wire)));
        });

        group.bench_function(format!("parse_{count}"), |b| {
            b.iter(|| BfastContainer::parse(black_box(&wire)).map(|c| c.buffer(count / 2).map(<[u8]>::len)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack);
criterion_main!(benches);
