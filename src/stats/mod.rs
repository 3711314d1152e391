//! Descriptive statistics for vector data.
//!
//! All statistics here are *population* statistics: variance and standard
//! deviation divide by `n`, not `n - 1`. That divisor is intentional and
//! relied on by downstream consumers; use a different crate if you need the
//! sample estimator.
//!
//! # Examples
//!
//! ```
//! use calcular::stats::{mean, variance, std_dev};
//! use calcular::primitives::Vector;
//!
//! let v = Vector::from_slice(&[2.0, 4.0, 6.0]);
//!
//! assert!((mean(&v).expect("non-empty") - 4.0).abs() < 1e-12);
//! assert!((variance(&v).expect("non-empty") - 8.0 / 3.0).abs() < 1e-12);
//! assert!((std_dev(&v).expect("non-empty") - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
//! ```

use crate::error::{CalcularError, Result};
use crate::primitives::Vector;

/// Computes the arithmetic mean of a vector.
///
/// # Errors
///
/// Returns [`CalcularError::EmptyInput`] for a zero-length vector.
pub fn mean(v: &Vector<f64>) -> Result<f64> {
    if v.is_empty() {
        return Err(CalcularError::empty_input("mean"));
    }
    Ok(v.iter().sum::<f64>() / v.len() as f64)
}

/// Computes the population variance: `(1/n) Σ (x_i - x̄)²`.
///
/// The divisor is `n`, not `n - 1` — this is the population estimator.
///
/// # Errors
///
/// Returns [`CalcularError::EmptyInput`] for a zero-length vector.
pub fn variance(v: &Vector<f64>) -> Result<f64> {
    let mu = mean(v)?;
    let sum: f64 = v
        .iter()
        .map(|&x| {
            let diff = x - mu;
            diff * diff
        })
        .sum();
    Ok(sum / v.len() as f64)
}

/// Computes the population standard deviation, `sqrt(variance)`.
///
/// # Errors
///
/// Returns [`CalcularError::EmptyInput`] for a zero-length vector.
pub fn std_dev(v: &Vector<f64>) -> Result<f64> {
    Ok(variance(v)?.sqrt())
}

/// Returns the largest element of a vector.
///
/// Comparison is the plain `>` of IEEE-754, so NaN elements are never
/// selected unless every element is NaN (the first is then returned).
///
/// # Errors
///
/// Returns [`CalcularError::EmptyInput`] for a zero-length vector.
pub fn max(v: &Vector<f64>) -> Result<f64> {
    if v.is_empty() {
        return Err(CalcularError::empty_input("max"));
    }
    let mut best = v[0];
    for &x in v.iter().skip(1) {
        if x > best {
            best = x;
        }
    }
    Ok(best)
}

#[cfg(test)]
#[path = "descriptive_tests.rs"]
mod tests;
