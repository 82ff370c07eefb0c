//! Seeded workloads for benchmarking the adt containers.
//!
//! Every generator takes a `seed` and draws from a ChaCha8 stream, so a
//! benchmark run sees the same inputs on every machine:
//!
//! - [`random_values`]: payloads for pushes and inserts
//! - [`insert_positions`]: indices that are always valid at the time of use
//! - [`filled_vector`], [`filled_map`], [`filled_set`]: pre-populated containers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use adt_array::Matrix;
use adt_assoc::{AssociativeMap, UniqueSet};
use adt_vector::DynamicVector;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `n` uniformly random `i32` values.
pub fn random_values(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// `n` insertion indices where the `i`-th index lies in `0..=i`.
///
/// Applying them in order to an initially empty vector never goes out of
/// range.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|i| rng.random_range(0..=i)).collect()
}

/// `n` keys drawn from `0..domain`; duplicates are expected.
pub fn random_keys(n: usize, domain: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..domain.max(1))).collect()
}

/// A vector holding `n` random values.
pub fn filled_vector(n: usize, seed: u64) -> DynamicVector<i32> {
    random_values(n, seed).into_iter().collect()
}

/// A map with exactly `n` distinct keys `0..n`, added in shuffled order.
pub fn filled_map(n: usize, seed: u64) -> AssociativeMap<u32, i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<u32> = (0..n as u32).collect();
    keys.shuffle(&mut rng);
    keys.into_iter().map(|k| (k, rng.random())).collect()
}

/// A set with exactly `n` distinct elements taken from `0..2n`.
pub fn filled_set(n: usize, seed: u64) -> UniqueSet<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pool: Vec<u32> = (0..2 * n as u32).collect();
    pool.shuffle(&mut rng);
    pool.truncate(n);
    pool.into_iter().collect()
}

/// A `size x size` matrix of small random integers.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn random_matrix(size: usize, seed: u64) -> Matrix<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<i64>> = (0..size)
        .map(|_| (0..size).map(|_| rng.random_range(-100..100)).collect())
        .collect();
    Matrix::from_rows(&rows).unwrap()
}
