//! Criterion micro-benchmarks for FixedArray fills and Matrix arithmetic.

use adt_array::FixedArray;
use adt_bench::random_matrix;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_fixed_fill(c: &mut Criterion) {
    let mut array = FixedArray::new(10_000).unwrap();
    c.bench_function("fixed_fill_10k", |b| {
        b.iter(|| {
            array.fill(black_box(1.5f64));
        });
    });
}

fn bench_fixed_set_get(c: &mut Criterion) {
    let mut array = FixedArray::new(10_000).unwrap();
    c.bench_function("fixed_set_get_10k", |b| {
        b.iter(|| {
            for i in 0..array.len() {
                array.set(i, i).unwrap();
            }
            let mut sum = 0usize;
            for i in 0..array.len() {
                sum += array.get(i).unwrap().copied().unwrap_or(0);
            }
            black_box(sum);
        });
    });
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let a = random_matrix(32, 30);
    let b_mat = random_matrix(32, 31);
    c.bench_function("matrix_multiply_32", |b| {
        b.iter(|| black_box(a.multiply(&b_mat).unwrap()));
    });
}

fn bench_matrix_transpose(c: &mut Criterion) {
    let a = random_matrix(64, 32);
    c.bench_function("matrix_transpose_64", |b| b.iter(|| black_box(a.transpose())));
}

criterion_group!(
    benches,
    bench_fixed_fill,
    bench_fixed_set_get,
    bench_matrix_multiply,
    bench_matrix_transpose
);
criterion_main!(benches);
