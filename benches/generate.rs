use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use idfill::{Algorithm, IdGenerator};

fn bench_generate(c: &mut Criterion) {
    let mut generator = IdGenerator::new();

    c.bench_function("generate_random_uuid", |b| {
        b.iter(|| black_box(generator.generate(Algorithm::RandomUuid).unwrap()))
    });

    c.bench_function("generate_fallback", |b| {
        b.iter(|| black_box(generator.generate(Algorithm::Fallback).unwrap()))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
