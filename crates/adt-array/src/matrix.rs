//! Numeric matrices over [`Array2D`].

use std::fmt;
use std::ops::{Add, Mul, Sub};

use adt_core::ArrayError;

use crate::grid::Array2D;

/// Element type of a [`Matrix`].
///
/// `Default` must be the additive identity (zero).
pub trait Scalar:
    Copy + Default + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy + Default + PartialEq + Add<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}

/// A `rows x cols` matrix of scalars, zero-initialised.
///
/// Every cell of the backing grid is populated at construction, so reads
/// never observe the empty sentinel.
#[derive(Clone, Debug)]
pub struct Matrix<T: Scalar> {
    grid: Array2D<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero matrix.
    ///
    /// Returns [`ArrayError::InvalidArgument`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ArrayError> {
        let mut grid = Array2D::new(rows, cols)?;
        grid.fill(T::default());
        Ok(Self { grid })
    }

    /// Build a matrix from row-major nested rows.
    ///
    /// All rows must have the same length as the first.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, ArrayError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut m = Self::new(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ArrayError::ShapeMismatch {
                    left: (rows.len(), cols),
                    right: (1, row.len()),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                m.set(r, c, value)?;
            }
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.grid.num_cols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, ArrayError> {
        Ok(self.grid.get(row, col)?.copied().unwrap_or_default())
    }

    /// Overwrite the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), ArrayError> {
        self.grid.set(row, col, value)?;
        Ok(())
    }

    /// Multiply every element by `scalar` in place.
    pub fn scale_by(&mut self, scalar: T) {
        for r in 0..self.num_rows() {
            for c in 0..self.num_cols() {
                if let Ok(Some(v)) = self.grid.get_mut(r, c) {
                    *v = *v * scalar;
                }
            }
        }
    }

    /// A new matrix with every element multiplied by `scalar`.
    pub fn scaled(&self, scalar: T) -> Self {
        let mut out = self.clone();
        out.scale_by(scalar);
        out
    }

    /// A new `cols x rows` matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        self.build(cols, rows, |r, c| self.at(c, r))
    }

    /// Element-wise sum. Shapes must match.
    pub fn add(&self, rhs: &Self) -> Result<Self, ArrayError> {
        self.require_same_shape(rhs)?;
        let (rows, cols) = self.shape();
        Ok(self.build(rows, cols, |r, c| self.at(r, c) + rhs.at(r, c)))
    }

    /// Element-wise difference. Shapes must match.
    pub fn subtract(&self, rhs: &Self) -> Result<Self, ArrayError> {
        self.require_same_shape(rhs)?;
        let (rows, cols) = self.shape();
        Ok(self.build(rows, cols, |r, c| self.at(r, c) - rhs.at(r, c)))
    }

    /// Matrix product. `self.num_cols()` must equal `rhs.num_rows()`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, ArrayError> {
        if self.num_cols() != rhs.num_rows() {
            return Err(ArrayError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let inner = self.num_cols();
        Ok(self.build(self.num_rows(), rhs.num_cols(), |r, c| {
            (0..inner).fold(T::default(), |acc, i| acc + self.at(r, i) * rhs.at(i, c))
        }))
    }

    fn require_same_shape(&self, rhs: &Self) -> Result<(), ArrayError> {
        if self.shape() != rhs.shape() {
            return Err(ArrayError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }

    // Callers only pass coordinates inside the shape.
    fn at(&self, row: usize, col: usize) -> T {
        self.get(row, col).unwrap_or_default()
    }

    // Dimensions come from an existing matrix, so both are non-zero.
    fn build(&self, rows: usize, cols: usize, cell: impl Fn(usize, usize) -> T) -> Self {
        let mut grid = Array2D::new(rows, cols).expect("dimensions of an existing matrix");
        for r in 0..rows {
            for c in 0..cols {
                grid[(r, c)] = Some(cell(r, c));
            }
        }
        Self { grid }
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.grid == other.grid
    }
}

/// `&a + &b` is [`Matrix::add`].
impl<T: Scalar> Add for &Matrix<T> {
    type Output = Result<Matrix<T>, ArrayError>;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

/// `&a - &b` is [`Matrix::subtract`].
impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Result<Matrix<T>, ArrayError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

/// `&a * &b` is [`Matrix::multiply`].
impl<T: Scalar> Mul for &Matrix<T> {
    type Output = Result<Matrix<T>, ArrayError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

/// `&a * s` is [`Matrix::scaled`].
impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Self::Output {
        self.scaled(scalar)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);
        for row in &cells {
            let line: Vec<String> = row.iter().map(|s| format!("{s:>width$}")).collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
