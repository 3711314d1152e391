//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use calcular::prelude::*;
//! ```

pub use crate::error::{CalcularError, Result};
pub use crate::export::{write_columns, write_matrix, write_vector};
pub use crate::primitives::{Matrix, Vector};
pub use crate::stats::{max, mean, std_dev, variance};
