use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use revhex::{decode, decode_to_vec, decoded_len};

const SIZES: [usize; 4] = [256, 1024, 4096, 16384];

fn source(size: usize) -> Vec<u8> {
    b"zyxwvuts".repeat(size / 8)
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in SIZES {
        let src = source(size);
        let mut sink = vec![0; decoded_len(size)];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
            b.iter(|| decode(&mut sink, src).unwrap());
        });
    }
    group.finish();
}

fn bench_decode_to_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_to_vec");
    for size in SIZES {
        let src = source(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
            b.iter(|| decode_to_vec(src).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_decode_to_vec);
criterion_main!(benches);
