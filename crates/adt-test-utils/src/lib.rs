//! Test utilities and reference models for adt development.
//!
//! Provides std-backed oracles that the containers are checked against in
//! model-based property tests:
//!
//! - [`VecModel`]: a plain `Vec` with the same index contract as
//!   `DynamicVector`.
//! - [`MapModel`]: an insertion-ordered `IndexMap` with the same
//!   add/remove contract as `AssociativeMap`.
//!
//! Operation strategies live in [`strategies`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod strategies;

use std::hash::Hash;

use adt_core::{ArrayError, MapError};
use indexmap::IndexMap;

pub use strategies::{MapOp, VectorOp};

/// Reference model for `DynamicVector`.
///
/// Mirrors the vector's index contract (bounds against length, insertion
/// allowed at `len`) on top of `Vec`. Capacity is not modelled.
#[derive(Clone, Debug, Default)]
pub struct VecModel<T> {
    items: Vec<T>,
}

impl<T: Clone> VecModel<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.items.len() {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.items.len() {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.items
            .pop()
            .ok_or(ArrayError::OutOfRange { index: 0, len: 0 })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value))
    }
}

/// Reference model for `AssociativeMap`.
///
/// Uses `IndexMap::shift_remove` so removal preserves the relative order
/// of the remaining keys, matching the linear-scan map.
#[derive(Clone, Debug)]
pub struct MapModel<K, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq + Clone, V: Clone> MapModel<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` was not already present.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.entries.insert(key, value).is_none()
    }

    pub fn remove(&mut self, key: &K) -> Result<V, MapError> {
        self.entries.shift_remove(key).ok_or(MapError::KeyNotFound)
    }

    pub fn value_of(&self, key: &K) -> Result<&V, MapError> {
        self.entries.get(key).ok_or(MapError::KeyNotFound)
    }

    pub fn keys(&self) -> Vec<K> {
        self.entries.keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Default for MapModel<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
