//! Calcular: small linear-algebra utilities in pure Rust.
//!
//! Calcular provides dynamically sized `f64` vector and matrix containers
//! with the basic algebra a numeric program needs, without pulling in a
//! heavyweight array dependency.
//!
//! # Quick Start
//!
//! ```
//! use calcular::prelude::*;
//!
//! // Five equally spaced points on [0, 10]
//! let x = Vector::linspace(0.0, 10.0, 5).expect("linspace needs at least two points");
//! assert_eq!(x.as_slice(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
//!
//! // Matrix product against the identity leaves the input unchanged
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])
//!     .expect("data length matches rows * cols");
//! let product = a.matmul(&Matrix::eye(2)).expect("inner dimensions match");
//! assert_eq!(product, a);
//!
//! // Population statistics
//! let v = Vector::from_slice(&[2.0, 4.0, 6.0]);
//! let mu = mean(&v).expect("vector is non-empty");
//! assert!((mu - 4.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core `Vector` and `Matrix` types with their algebra
//! - [`stats`]: Descriptive statistics (mean, population variance, max)
//! - [`export`]: CSV writers for vectors, matrices, and ragged column sets
//! - [`error`]: Error taxonomy and the crate-wide `Result` alias
//!
//! # Error policy
//!
//! Every precondition (matching shapes, non-empty input, in-range indices,
//! nonzero norm) is validated and surfaced as a typed [`CalcularError`];
//! mismatched operands never cause out-of-bounds access or silent NaN/Inf.
//! Arithmetic on values that are already NaN or infinite propagates them as
//! IEEE-754 naturally does.

pub mod error;
pub mod export;
pub mod prelude;
pub mod primitives;
pub mod stats;

pub use error::{CalcularError, Result};
pub use primitives::{Matrix, Vector};
