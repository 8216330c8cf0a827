use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huffpack::{EncoderConfig, ForestKind, HuffmanEncoder};

/// Generates a vector of highly compressible data.
fn generate_low_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = b"abcdefgABCDEFG12345";
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

/// Every byte value, repeated; the worst case for tree size.
fn generate_high_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern: Vec<u8> = (0..=255u8).collect();
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_encode(c: &mut Criterion) {
    let low_entropy_data = generate_low_entropy_bytes(BENCH_DATA_SIZE);
    let high_entropy_data = generate_high_entropy_bytes(BENCH_DATA_SIZE);

    let sorted = HuffmanEncoder::new(EncoderConfig {
        forest: ForestKind::Sorted,
        ..EncoderConfig::default()
    });
    let heap = HuffmanEncoder::new(EncoderConfig {
        forest: ForestKind::Heap,
        ..EncoderConfig::default()
    });

    let mut group = c.benchmark_group("Huffman Encode");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("Sorted forest (Low Entropy)", |b| {
        b.iter(|| black_box(sorted.encode(black_box(&low_entropy_data))))
    });
    group.bench_function("Heap forest (Low Entropy)", |b| {
        b.iter(|| black_box(heap.encode(black_box(&low_entropy_data))))
    });
    group.bench_function("Sorted forest (High Entropy)", |b| {
        b.iter(|| black_box(sorted.encode(black_box(&high_entropy_data))))
    });
    group.bench_function("Heap forest (High Entropy)", |b| {
        b.iter(|| black_box(heap.encode(black_box(&high_entropy_data))))
    });

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
