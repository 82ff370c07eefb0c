//! adt: a small family of generic containers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all adt sub-crates. For most users, adding `adt` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use adt::prelude::*;
//!
//! let mut v = DynamicVector::with_capacity(2).unwrap();
//! for c in ['a', 'b', 'c'] {
//!     v.push(c);
//! }
//! assert_eq!(v.capacity(), 4);
//! v.insert(1, 'x').unwrap();
//! assert_eq!(v.to_string(), "Vector([a, x, b, c])");
//!
//! let mut credits = AssociativeMap::new();
//! credits.add("CS101", 3);
//! credits.add("CS102", 4);
//! assert_eq!(credits.value_of(&"CS102"), Ok(&4));
//! assert_eq!(credits.remove(&"MA100"), Err(MapError::KeyNotFound));
//!
//! let a = UniqueSet::from([1, 2, 3]);
//! let b = UniqueSet::from([3, 4, 5]);
//! assert_eq!(&a & &b, UniqueSet::from([3]));
//! assert_eq!((&a - &b).len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `adt-core` | Error types and resize configuration |
//! | [`array`] | `adt-array` | `FixedArray`, `Array2D`, `Matrix` |
//! | [`vector`] | `adt-vector` | `DynamicVector` |
//! | [`assoc`] | `adt-assoc` | `AssociativeMap`, `UniqueSet` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error types and resize configuration (`adt-core`).
pub use adt_core as types;

/// Fixed-capacity storage (`adt-array`).
///
/// [`array::FixedArray`] is the primitive; [`array::Array2D`] and
/// [`array::Matrix`] layer a row-major grid and scalar arithmetic on top.
pub use adt_array as array;

/// The auto-resizing vector (`adt-vector`).
pub use adt_vector as vector;

/// Linear-scan map and set (`adt-assoc`).
///
/// Keys and elements need only `PartialEq`.
pub use adt_assoc as assoc;

/// Common imports for typical adt usage.
///
/// ```rust
/// use adt::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use adt_array::{Array2D, FixedArray, Matrix};
    pub use adt_assoc::{AssociativeMap, UniqueSet};
    pub use adt_vector::DynamicVector;

    // Configuration
    pub use adt_core::VectorConfig;

    // Errors
    pub use adt_core::{ArrayError, ConfigError, MapError, SetError};
}
