//! Fixed-capacity indexed storage.
//!
//! [`FixedArray`] is the storage primitive every other indexed container
//! builds on. Its size is fixed at construction and every slot holds an
//! `Option<T>`, with `None` as the empty sentinel.
//!
//! ```text
//! FixedArray<T>        Box<[Option<T>]>, bounds-checked get/set
//! └── Array2D<T>       row-major rows x cols over one FixedArray
//!     └── Matrix<T>    zero-filled Array2D with scalar arithmetic
//! ```
//!
//! The growable `DynamicVector` lives in `adt-vector` and owns a
//! `FixedArray` that it replaces wholesale on resize.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixed;
pub mod grid;
pub mod matrix;

pub use adt_core::ArrayError;
pub use fixed::FixedArray;
pub use grid::Array2D;
pub use matrix::{Matrix, Scalar};
