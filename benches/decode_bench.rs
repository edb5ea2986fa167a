//! Benchmarks for reply decoding

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use onewire_client::decode_temperature;

fn decode_benchmarks(c: &mut Criterion) {
    // Full 9-byte scratchpad reply; only the first two bytes matter
    let reply = [0x91u8, 0x01, 0x4B, 0x46, 0x7F, 0xFF, 0x0F, 0x10, 0xD0];

    c.bench_function("decode_temperature", |b| {
        b.iter(|| decode_temperature(black_box(&reply)).unwrap())
    });
}

criterion_group!(benches, decode_benchmarks);
criterion_main!(benches);
