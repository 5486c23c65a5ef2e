use std::io::{self, Read, Write};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use revhex::{Decoder, Encoder, encode_to_string};

const SIZES: [usize; 4] = [256, 1024, 4096, 16384];

fn bench_encoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoder");
    for size in SIZES {
        let src: Vec<u8> = [2, 3, 5, 7, 9, 11, 13, 17].repeat(size / 8);
        let mut encoder = Encoder::new(io::sink());
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
            b.iter(|| encoder.write_all(src).unwrap());
        });
    }
    group.finish();
}

fn bench_decoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoder");
    for size in SIZES {
        let text = encode_to_string(&[2u8, 3, 5, 7, 9, 11, 13, 17].repeat(size / 16));
        let mut out = Vec::with_capacity(size / 2);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                out.clear();
                Decoder::new(text.as_bytes()).read_to_end(&mut out).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encoder, bench_decoder);
criterion_main!(benches);
