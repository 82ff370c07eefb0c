//! Auto-resizing vector built on [`FixedArray`](adt_array::FixedArray).
//!
//! [`DynamicVector`] keeps its elements contiguous in the leading slots of
//! an exclusively-owned backing array. When a push or insert finds the
//! array full it allocates a larger one and moves every element across;
//! when occupancy drops below the configured threshold it does the same
//! in the other direction. The old array is dropped, never aliased.
//!
//! Resize policy is described by [`VectorConfig`]. Reallocations are
//! reported as `trace`-level `tracing` events.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod vector;

pub use adt_core::{ArrayError, ConfigError, VectorConfig};
pub use vector::DynamicVector;
