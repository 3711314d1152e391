//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{CalcularError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D matrix of floating-point values (row-major storage).
///
/// Row and column counts are set at creation and never change; every row has
/// identical length. Transforms that change the shape (transpose, column
/// insertion) produce a new matrix and leave the source unmodified.
///
/// # Examples
///
/// ```
/// use calcular::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(CalcularError::ShapeMismatch {
                expected: format!("{rows}x{cols} = {} elements", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying row-major data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of zeros, surfacing allocator exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`CalcularError::InvalidArgument`] if `rows * cols` overflows
    /// and [`CalcularError::AllocationFailed`] if the elements cannot be
    /// reserved.
    pub fn try_zeros(rows: usize, cols: usize) -> Result<Self> {
        let elements = rows
            .checked_mul(cols)
            .ok_or_else(|| CalcularError::InvalidArgument {
                message: format!("matrix shape {rows}x{cols} overflows usize"),
            })?;
        let mut data = Vec::new();
        data.try_reserve_exact(elements)
            .map_err(|_| CalcularError::AllocationFailed { elements })?;
        data.resize(elements, 0.0);
        Ok(Self { data, rows, cols })
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Creates a matrix with every cell drawn uniformly from `[0, 1)`.
    ///
    /// The generator is seeded and local to this call: the same `seed` and
    /// shape always reproduce the same contents. Cells are filled in
    /// row-major order, so a matrix shares its prefix with the vector drawn
    /// from the same seed.
    #[must_use]
    pub fn random_uniform(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let data: Vec<f64> = (0..rows * cols).map(|_| rng.gen_range(0.0..1.0)).collect();
        Self { data, rows, cols }
    }

    /// Transposes the matrix, returning a new one.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Returns a new matrix with `column` inserted at `index`.
    ///
    /// Columns `[0, index)` are copied verbatim, the new column lands at
    /// `index`, and the remaining columns shift right by one. `index` may
    /// range over `[0, cols]` inclusive: 0 prepends, `cols` appends.
    ///
    /// # Errors
    ///
    /// Returns [`CalcularError::InvalidArgument`] if `index > cols`, and
    /// [`CalcularError::ShapeMismatch`] if the column length doesn't equal
    /// the number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcular::primitives::{Matrix, Vector};
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
    ///     .expect("data length matches rows * cols");
    /// let col = Vector::from_slice(&[9.0, 9.0]);
    /// let wider = m.insert_column(0, &col).expect("index 0 is in range");
    /// assert_eq!(wider.as_slice(), &[9.0, 1.0, 2.0, 9.0, 3.0, 4.0]);
    /// ```
    pub fn insert_column(&self, index: usize, column: &Vector<f64>) -> Result<Self> {
        if index > self.cols {
            return Err(CalcularError::index_out_of_bounds(index, self.cols));
        }
        if column.len() != self.rows {
            return Err(CalcularError::length_mismatch(
                "column",
                self.rows,
                column.len(),
            ));
        }

        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for i in 0..self.rows {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            data.extend_from_slice(&row[..index]);
            data.push(column[i]);
            data.extend_from_slice(&row[index..]);
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: new_cols,
        })
    }

    /// Matrix-matrix multiplication, `self` (m×n) by `other` (n×p).
    ///
    /// # Errors
    ///
    /// Returns an error if the inner dimensions don't match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(CalcularError::ShapeMismatch {
                expected: format!("{} rows in right operand", self.cols),
                actual: format!("{} rows", other.rows),
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Adds another matrix elementwise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies by another matrix elementwise (Hadamard product),
    /// returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes differ.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Computes `self + factor * other` elementwise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if shapes differ.
    pub fn add_scaled(&self, other: &Self, factor: f64) -> Result<Self> {
        self.check_same_shape(other)?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + factor * b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies every cell by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for x in &mut self.data {
            *x *= factor;
        }
    }

    /// Adds `scalar` to every cell in place.
    pub fn add_scalar(&mut self, scalar: f64) {
        for x in &mut self.data {
            *x += scalar;
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(CalcularError::ShapeMismatch {
                expected: format!("{}x{}", self.rows, self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix<f64> {
    /// Renders one bracketed row per line, wrapped in an outer `[ ... ]`
    /// block, with six decimal places per element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.rows {
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.6}", self.data[i * self.cols + j])?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
