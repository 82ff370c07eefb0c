//! Two-dimensional fixed grid over a single [`FixedArray`].

use std::ops::{Index, IndexMut};

use adt_core::ArrayError;

use crate::fixed::FixedArray;

/// A `rows x cols` grid of optional cells, stored row-major.
///
/// Cell `(r, c)` lives at slot `r * cols + c` of the backing array. Both
/// dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Array2D<T> {
    cells: FixedArray<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Create an empty grid.
    ///
    /// Returns [`ArrayError::InvalidArgument`] if either dimension is zero
    /// or `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ArrayError> {
        let size = rows
            .checked_mul(cols)
            .ok_or(ArrayError::InvalidArgument { size: usize::MAX })?;
        if size == 0 {
            return Err(ArrayError::InvalidArgument { size });
        }
        Ok(Self {
            cells: FixedArray::new(size)?,
            rows,
            cols,
        })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Contents of cell `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&T>, ArrayError> {
        let idx = self.flat_index(row, col)?;
        self.cells.get(idx)
    }

    /// Mutable contents of cell `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<Option<&mut T>, ArrayError> {
        let idx = self.flat_index(row, col)?;
        self.cells.get_mut(idx)
    }

    /// Store `value` in cell `(row, col)`, returning the previous contents.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<Option<T>, ArrayError> {
        let idx = self.flat_index(row, col)?;
        self.cells.set(idx, value)
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Overwrite every cell with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Iterate over the rows, each as a slice of `num_cols()` cells.
    pub fn rows(&self) -> std::slice::Chunks<'_, Option<T>> {
        self.cells.as_slice().chunks(self.cols)
    }

    fn flat_index(&self, row: usize, col: usize) -> Result<usize, ArrayError> {
        if row >= self.rows || col >= self.cols {
            return Err(ArrayError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = Option<T>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.flat_index(row, col) {
            Ok(idx) => &self.cells[idx],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.flat_index(row, col) {
            Ok(idx) => &mut self.cells[idx],
            Err(e) => panic!("{e}"),
        }
    }
}
