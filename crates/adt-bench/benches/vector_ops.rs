//! Criterion micro-benchmarks for DynamicVector push, insert, and remove.

use adt_bench::{filled_vector, insert_positions, random_values};
use adt_vector::DynamicVector;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_push_10k(c: &mut Criterion) {
    let values = random_values(10_000, 1);
    c.bench_function("vector_push_10k", |b| {
        b.iter(|| {
            let mut v = DynamicVector::new();
            for &x in &values {
                v.push(x);
            }
            black_box(v.len());
        });
    });
}

fn bench_insert_1k(c: &mut Criterion) {
    let positions = insert_positions(1_000, 2);
    c.bench_function("vector_insert_random_1k", |b| {
        b.iter(|| {
            let mut v = DynamicVector::new();
            for (i, &pos) in positions.iter().enumerate() {
                v.insert(pos, i).unwrap();
            }
            black_box(v.len());
        });
    });
}

fn bench_drain_front_1k(c: &mut Criterion) {
    let filled = filled_vector(1_000, 3);
    c.bench_function("vector_remove_front_1k", |b| {
        b.iter(|| {
            let mut v = filled.clone();
            while !v.is_empty() {
                black_box(v.remove(0).unwrap());
            }
            black_box(v.capacity());
        });
    });
}

fn bench_pop_10k(c: &mut Criterion) {
    let filled = filled_vector(10_000, 4);
    c.bench_function("vector_pop_10k", |b| {
        b.iter(|| {
            let mut v = filled.clone();
            while let Ok(x) = v.pop() {
                black_box(x);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_insert_1k,
    bench_drain_front_1k,
    bench_pop_10k
);
criterion_main!(benches);
