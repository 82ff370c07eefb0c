//! Linear-scan associative containers.
//!
//! [`AssociativeMap`] and [`UniqueSet`] require only `PartialEq` on their
//! keys and elements. Every lookup is an O(n) scan over an
//! insertion-ordered sequence. Storage is a `SmallVec`; collections of up
//! to [`INLINE_CAPACITY`] entries stay inline.
//!
//! The two containers are independent siblings; neither depends on the
//! other.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod map;
pub mod set;

pub use adt_core::{MapError, SetError};
pub use map::{AssociativeMap, Entry};
pub use set::UniqueSet;

/// Number of entries or elements held inline before spilling to the heap.
pub const INLINE_CAPACITY: usize = 8;
