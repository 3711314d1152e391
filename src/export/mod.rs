//! CSV export for vectors and matrices.
//!
//! Files are overwritten, start with a caller-supplied header line, and use
//! 8-digit scientific notation for every value (e.g. `1.00000000e+00`).
//! Write failures surface as [`CalcularError::Io`](crate::CalcularError).

mod csv;

pub use csv::{write_columns, write_matrix, write_vector};
