//! Benchmarks for tokenizer throughput.
//!
//! Run with: cargo bench -p vtinput-core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use vtinput_core::Tokenizer;

fn plain_text_script(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn sgr_heavy_script(repeats: usize) -> Vec<u8> {
    let mut script = Vec::new();
    for i in 0..repeats {
        script.extend_from_slice(format!("\x1b[1;38;5;{}m", i % 256).as_bytes());
        script.extend_from_slice(b"word ");
        script.extend_from_slice(b"\x1b[0m");
    }
    script
}

fn mouse_heavy_script(repeats: usize) -> Vec<u8> {
    let mut script = Vec::new();
    for i in 0..repeats {
        script.extend_from_slice(format!("\x1b[<32;{};{}M", 1 + i % 200, 1 + i % 50).as_bytes());
    }
    script
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer/throughput");

    let scripts = [
        ("plain-text", plain_text_script(4096)),
        ("sgr-heavy", sgr_heavy_script(256)),
        ("mouse-heavy", mouse_heavy_script(256)),
    ];

    for (name, script) in &scripts {
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::new("whole", name), script, |b, script| {
            let mut tokenizer = Tokenizer::new();
            b.iter(|| {
                let items = tokenizer.feed(black_box(script));
                black_box(items);
            })
        });
        group.bench_with_input(BenchmarkId::new("chunked-16", name), script, |b, script| {
            let mut tokenizer = Tokenizer::new();
            b.iter(|| {
                for chunk in script.chunks(16) {
                    let items = tokenizer.feed(chunk);
                    black_box(items);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
