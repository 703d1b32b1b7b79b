use blk_tools::keystream::derive_xorpad;
use blk_tools::scramble::{scramble, transform_key};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn key_transform_benchmark(c: &mut Criterion) {
    let raw = *b"0123456789abcdef";
    c.bench_function("transform_key", |b| {
        b.iter(|| transform_key(black_box(&raw)))
    });
}

fn xorpad_benchmark(c: &mut Criterion) {
    let key = transform_key(b"0123456789abcdef");
    let body: Vec<u8> = (0..0x1000).map(|i| (i * 31 + 7) as u8).collect();
    c.bench_function("derive_xorpad", |b| {
        b.iter(|| derive_xorpad(black_box(&key), black_box(&body), 0x1000))
    });
}

fn header_scramble_benchmark(c: &mut Criterion) {
    let header: Vec<u8> = (0..0x200).map(|i| (i * 17 + 5) as u8).collect();
    c.bench_function("scramble_header", |b| {
        b.iter(|| {
            let mut buf = header.clone();
            scramble(black_box(&mut buf), 0x39, 0x1C);
            buf
        })
    });
}

criterion_group!(
    benches,
    key_transform_benchmark,
    xorpad_benchmark,
    header_scramble_benchmark
);
criterion_main!(benches);
