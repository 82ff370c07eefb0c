//! Error types for the adt containers.
//!
//! Organised by container family: indexed storage (arrays, grids, vectors),
//! associative maps, unique sets, and configuration. Every error is a
//! contract violation raised synchronously at the point of misuse; no
//! container retries or recovers internally.

use std::error::Error;
use std::fmt;

/// Errors from index-addressed storage: `FixedArray`, `Array2D`, `Matrix`
/// and `DynamicVector`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Construction with a zero size or dimension, or with dimensions whose
    /// product overflows `usize`.
    InvalidArgument {
        /// The rejected size, saturated at `usize::MAX` on overflow.
        size: usize,
    },
    /// A linear index outside `[0, len)` (or `[0, len]` for insertion).
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The bound the index was checked against.
        len: usize,
    },
    /// A `(row, col)` pair outside the grid.
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// Two matrices whose shapes are incompatible for the operation.
    ShapeMismatch {
        /// `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// `(rows, cols)` of the right operand.
        right: (usize, usize),
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { size: usize::MAX } => {
                write!(f, "array size overflows usize")
            }
            Self::InvalidArgument { size } => {
                write!(f, "array size must be > 0, got {size}")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell ({row}, {col}) out of range for {rows}x{cols} grid"
                )
            }
            Self::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "shape mismatch: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors from `AssociativeMap` lookups and removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The key is not present in the map.
    KeyNotFound,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "invalid map key"),
        }
    }
}

impl Error for MapError {}

/// Errors from `UniqueSet` removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError {
    /// The element is not a member of the set.
    ElementNotFound,
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound => write!(f, "the element must be in the set"),
        }
    }
}

impl Error for SetError {}

/// Errors detected by [`VectorConfig::validate()`](crate::VectorConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The initial backing array could not be created.
    Array(ArrayError),
    /// `growth_factor` below 2 would fail to make room on a full push.
    InvalidGrowthFactor {
        /// The configured factor.
        value: usize,
    },
    /// `shrink_threshold` is NaN, infinite, or outside `(0, 1)`.
    InvalidShrinkThreshold {
        /// The configured threshold.
        value: f64,
    },
    /// `shrink_divisor` below 2 would never reduce capacity.
    InvalidShrinkDivisor {
        /// The configured divisor.
        value: usize,
    },
    /// `min_capacity` is zero.
    InvalidMinCapacity,
    /// `min_capacity` above `initial_capacity` would make a shrink raise
    /// the capacity of a freshly created vector.
    MinCapacityExceedsInitial {
        /// The configured floor.
        min_capacity: usize,
        /// The configured initial capacity.
        initial_capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(e) => write!(f, "array: {e}"),
            Self::InvalidGrowthFactor { value } => {
                write!(f, "growth_factor must be at least 2, got {value}")
            }
            Self::InvalidShrinkThreshold { value } => {
                write!(f, "shrink_threshold must be finite and in (0, 1), got {value}")
            }
            Self::InvalidShrinkDivisor { value } => {
                write!(f, "shrink_divisor must be at least 2, got {value}")
            }
            Self::InvalidMinCapacity => write!(f, "min_capacity must be at least 1"),
            Self::MinCapacityExceedsInitial {
                min_capacity,
                initial_capacity,
            } => {
                write!(
                    f,
                    "min_capacity {min_capacity} exceeds initial_capacity {initial_capacity}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Array(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArrayError> for ConfigError {
    fn from(e: ArrayError) -> Self {
        Self::Array(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_names_index_and_len() {
        let e = ArrayError::OutOfRange { index: 7, len: 3 };
        assert_eq!(e.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    fn cell_out_of_range_display() {
        let e = ArrayError::CellOutOfRange {
            row: 3,
            col: 0,
            rows: 3,
            cols: 4,
        };
        assert_eq!(e.to_string(), "cell (3, 0) out of range for 3x4 grid");
    }

    #[test]
    fn config_error_wraps_array_error_as_source() {
        let e: ConfigError = ArrayError::InvalidArgument { size: 0 }.into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "array: array size must be > 0, got 0");
    }

    #[test]
    fn overflowing_size_display() {
        let e = ArrayError::InvalidArgument { size: usize::MAX };
        assert_eq!(e.to_string(), "array size overflows usize");
    }

    #[test]
    fn min_capacity_display_names_both_fields() {
        let e = ConfigError::MinCapacityExceedsInitial {
            min_capacity: 10,
            initial_capacity: 2,
        };
        assert_eq!(e.to_string(), "min_capacity 10 exceeds initial_capacity 2");
        assert!(e.source().is_none());
    }

    #[test]
    fn lookup_errors_have_no_source() {
        assert!(MapError::KeyNotFound.source().is_none());
        assert!(SetError::ElementNotFound.source().is_none());
    }
}
