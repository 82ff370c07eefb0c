//! Proptest strategies for container operation sequences.
//!
//! Index and key domains are deliberately small so that generated
//! sequences hit out-of-range indices, duplicate keys, and overlapping
//! sets often.

use proptest::prelude::*;

/// Largest index generated for vector operations.
pub const MAX_INDEX: usize = 24;

/// Key domain for map operations and set elements: `0..KEY_DOMAIN`.
pub const KEY_DOMAIN: u8 = 16;

/// A single mutation of a `DynamicVector`.
#[derive(Clone, Debug)]
pub enum VectorOp {
    Push(i32),
    Insert(usize, i32),
    Remove(usize),
    Pop,
    Set(usize, i32),
}

/// A single mutation of an `AssociativeMap`.
#[derive(Clone, Debug)]
pub enum MapOp {
    Add(u8, i32),
    Remove(u8),
}

pub fn arb_vector_op() -> impl Strategy<Value = VectorOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(VectorOp::Push),
        2 => (0..=MAX_INDEX, any::<i32>()).prop_map(|(i, v)| VectorOp::Insert(i, v)),
        2 => (0..=MAX_INDEX).prop_map(VectorOp::Remove),
        1 => Just(VectorOp::Pop),
        1 => (0..=MAX_INDEX, any::<i32>()).prop_map(|(i, v)| VectorOp::Set(i, v)),
    ]
}

pub fn arb_vector_ops(max_len: usize) -> impl Strategy<Value = Vec<VectorOp>> {
    prop::collection::vec(arb_vector_op(), 0..max_len)
}

pub fn arb_map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        3 => (0..KEY_DOMAIN, any::<i32>()).prop_map(|(k, v)| MapOp::Add(k, v)),
        1 => (0..KEY_DOMAIN).prop_map(MapOp::Remove),
    ]
}

pub fn arb_map_ops(max_len: usize) -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(arb_map_op(), 0..max_len)
}

/// Raw element lists for building sets; duplicates are expected.
pub fn arb_elements() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0..KEY_DOMAIN, 0..12)
}
