//! Criterion micro-benchmarks for the traxel codec.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use traxel_bench::reference_store;
use traxel_codec::codec::{decode_traxel, encode_traxel};
use traxel_codec::{read_store, write_store};
use traxel_store::StoreConfig;
use traxel_test_utils::{com_traxel, with_extras};

/// Benchmark: Encode a single traxel with extra features.
fn bench_encode_traxel(c: &mut Criterion) {
    let traxel = with_extras(com_traxel(7, 3, [1.0, 2.0, 3.0]));

    c.bench_function("codec_encode_traxel", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(256);
            encode_traxel(&mut buf, &traxel).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: Decode the same traxel.
fn bench_decode_traxel(c: &mut Criterion) {
    let traxel = with_extras(com_traxel(7, 3, [1.0, 2.0, 3.0]));
    let mut encoded = Vec::with_capacity(256);
    encode_traxel(&mut encoded, &traxel).unwrap();

    c.bench_function("codec_decode_traxel", |b| {
        b.iter(|| {
            let mut cursor = encoded.as_slice();
            let decoded = decode_traxel(&mut cursor).unwrap().unwrap();
            black_box(&decoded);
        });
    });
}

/// Benchmark: Write a 10K-traxel store to memory.
fn bench_write_store_10k(c: &mut Criterion) {
    let store = reference_store(42).unwrap();

    c.bench_function("codec_write_store_10k", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1 << 20);
            write_store(&mut buf, &store).unwrap();
            black_box(buf.len());
        });
    });
}

/// Benchmark: Read a 10K-traxel store back, rebuilding both indices.
fn bench_read_store_10k(c: &mut Criterion) {
    let store = reference_store(42).unwrap();
    let mut encoded = Vec::new();
    write_store(&mut encoded, &store).unwrap();

    c.bench_function("codec_read_store_10k", |b| {
        b.iter(|| {
            let restored = read_store(encoded.as_slice(), StoreConfig::default()).unwrap();
            black_box(restored.len());
        });
    });
}

criterion_group!(
    benches,
    bench_encode_traxel,
    bench_decode_traxel,
    bench_write_store_10k,
    bench_read_store_10k
);
criterion_main!(benches);
