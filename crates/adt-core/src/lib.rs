//! Core types for the adt container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy every container reports through and the resize
//! configuration consumed by the growable sequence types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::VectorConfig;
pub use error::{ArrayError, ConfigError, MapError, SetError};
