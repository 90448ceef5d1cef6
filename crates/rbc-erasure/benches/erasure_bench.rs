use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rbc_erasure::ReedSolomonCoder;

fn bench_encode(c: &mut Criterion) {
    let coder = ReedSolomonCoder::new(10, 16).unwrap();
    let data = vec![7u8; 10 * 4096];

    c.bench_function("encode_10_of_16_40kb", |b| {
        b.iter(|| coder.encode(black_box(&data)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let coder = ReedSolomonCoder::new(10, 16).unwrap();
    let data = vec![7u8; 10 * 4096];
    let shards = coder.encode(&data).unwrap();
    let mut options: Vec<Option<Vec<u8>>> = shards.into_iter().map(Some).collect();
    for slot in options.iter_mut().take(6) {
        *slot = None;
    }

    c.bench_function("decode_6_erasures_of_16", |b| {
        b.iter(|| coder.decode(black_box(&options)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
