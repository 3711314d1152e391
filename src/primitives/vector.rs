//! Vector type for 1D numeric data.

use crate::error::{CalcularError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed-length vector of floating-point values.
///
/// The length is set at creation and never changes; elements are mutable in
/// place. Each vector owns its storage exclusively.
///
/// # Examples
///
/// ```
/// use calcular::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector that takes ownership of existing data.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl Vector<f64> {
    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Creates a vector of `len` zeros, surfacing allocator exhaustion.
    ///
    /// [`Vector::zeros`] aborts the process if the allocator cannot satisfy
    /// the request, which is the right default for ordinary sizes. Callers
    /// that must observe and handle exhaustion (huge or untrusted lengths)
    /// use this variant instead.
    ///
    /// # Errors
    ///
    /// Returns [`CalcularError::AllocationFailed`] if `len` elements cannot
    /// be reserved.
    pub fn try_zeros(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| CalcularError::AllocationFailed { elements: len })?;
        data.resize(len, 0.0);
        Ok(Self { data })
    }

    /// Creates a vector of `n_points` equally spaced values between `start`
    /// and `end`, endpoints included.
    ///
    /// The i-th value is `start + i * (end - start) / (n_points - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcularError::InvalidArgument`] if `n_points < 2`; the
    /// spacing formula needs both endpoints, and allowing a single point
    /// would divide by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcular::primitives::Vector;
    ///
    /// let x = Vector::linspace(0.0, 10.0, 5).expect("at least two points");
    /// assert_eq!(x.as_slice(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    /// ```
    pub fn linspace(start: f64, end: f64, n_points: usize) -> Result<Self> {
        if n_points < 2 {
            return Err(CalcularError::InvalidArgument {
                message: format!("linspace needs at least 2 points, got {n_points}"),
            });
        }

        let step = (end - start) / (n_points - 1) as f64;
        let data: Vec<f64> = (0..n_points).map(|i| i as f64 * step + start).collect();
        Ok(Self { data })
    }

    /// Creates a vector of `len` values drawn uniformly from `[0, 1)`.
    ///
    /// The generator is seeded and local to this call: the same `seed` and
    /// `len` always reproduce the same contents, and no generator state is
    /// shared between calls.
    #[must_use]
    pub fn random_uniform(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let data: Vec<f64> = (0..len).map(|_| rng.gen_range(0.0..1.0)).collect();
        Self { data }
    }

    /// Overwrites this vector's first `len` elements with `source`'s.
    ///
    /// # Errors
    ///
    /// Returns [`CalcularError::InvalidArgument`] if `len` exceeds either
    /// vector's length.
    pub fn copy_from(&mut self, source: &Self, len: usize) -> Result<()> {
        if len > self.data.len() || len > source.data.len() {
            return Err(CalcularError::InvalidArgument {
                message: format!(
                    "copy of {len} elements exceeds a vector length (destination {}, source {})",
                    self.data.len(),
                    source.data.len()
                ),
            });
        }
        self.data[..len].copy_from_slice(&source.data[..len]);
        Ok(())
    }

    /// Adds another vector elementwise, returning a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error if lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(CalcularError::length_mismatch(
                "vector",
                self.len(),
                other.len(),
            ));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self { data })
    }

    /// Multiplies by another vector elementwise, returning a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error if lengths differ.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(CalcularError::length_mismatch(
                "vector",
                self.len(),
                other.len(),
            ));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Self { data })
    }

    /// Multiplies every element by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for x in &mut self.data {
            *x *= factor;
        }
    }

    /// Adds `scalar` to every element in place.
    pub fn add_scalar(&mut self, scalar: f64) {
        for x in &mut self.data {
            *x += scalar;
        }
    }

    /// Applies a scalar function to every element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use calcular::primitives::Vector;
    ///
    /// let x = Vector::from_slice(&[0.0, 1.0, 4.0]);
    /// let y = x.map(f64::sqrt);
    /// assert_eq!(y.as_slice(), &[0.0, 1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Computes the dot product with another vector.
    ///
    /// # Errors
    ///
    /// Returns an error if lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        if self.len() != other.len() {
            return Err(CalcularError::length_mismatch(
                "vector",
                self.len(),
                other.len(),
            ));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Computes the Euclidean (2-) norm.
    ///
    /// The norm of an empty vector is 0.0.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Scales the vector in place so its norm is 1.
    ///
    /// # Errors
    ///
    /// Returns [`CalcularError::DegenerateInput`] if the norm is zero; the
    /// vector is left untouched rather than filled with Inf/NaN. A vector
    /// already containing NaN has NaN norm and propagates it.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(CalcularError::DegenerateInput {
                context: "cannot normalize a vector with zero norm".to_string(),
            });
        }
        self.scale(1.0 / norm);
        Ok(())
    }

    /// Computes the Euclidean distance to another vector.
    ///
    /// # Errors
    ///
    /// Returns an error if lengths differ.
    pub fn distance(&self, other: &Self) -> Result<f64> {
        if self.len() != other.len() {
            return Err(CalcularError::length_mismatch(
                "vector",
                self.len(),
                other.len(),
            ));
        }
        let sum_squared: f64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Ok(sum_squared.sqrt())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl fmt::Display for Vector<f64> {
    /// Renders as `[v0, v1, ..., vN]` with six decimal places per element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:.6}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
