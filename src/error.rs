//! Error types for Calcular operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Calcular operations.
///
/// Every precondition violation in the crate surfaces as one of these
/// variants; no operation corrects or ignores invalid input silently.
///
/// # Examples
///
/// ```
/// use calcular::error::CalcularError;
///
/// let err = CalcularError::ShapeMismatch {
///     expected: "length 3".to_string(),
///     actual: "length 5".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum CalcularError {
    /// Allocator could not satisfy a container request.
    AllocationFailed {
        /// Number of elements requested
        elements: usize,
    },

    /// Argument outside its valid range (index, point count, copy length).
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Vector/matrix dimensions don't match for the operation.
    ShapeMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requiring at least one element was given zero.
    EmptyInput {
        /// Operation that was attempted
        operation: String,
    },

    /// Input is numerically degenerate (e.g. normalizing a zero vector).
    DegenerateInput {
        /// What made the input degenerate
        context: String,
    },

    /// I/O error (file cannot be created, write failed, etc.).
    Io(std::io::Error),
}

impl fmt::Display for CalcularError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcularError::AllocationFailed { elements } => {
                write!(f, "Allocation failed: could not reserve {elements} elements")
            }
            CalcularError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {message}")
            }
            CalcularError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, got {actual}")
            }
            CalcularError::EmptyInput { operation } => {
                write!(f, "empty input: {operation} requires at least one element")
            }
            CalcularError::DegenerateInput { context } => {
                write!(f, "degenerate input: {context}")
            }
            CalcularError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CalcularError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcularError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CalcularError {
    fn from(err: std::io::Error) -> Self {
        CalcularError::Io(err)
    }
}

impl CalcularError {
    /// Create a shape mismatch error from two length descriptions
    #[must_use]
    pub fn length_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            expected: format!("{context} of length {expected}"),
            actual: format!("length {actual}"),
        }
    }

    /// Create an index out of bounds error
    #[must_use]
    pub fn index_out_of_bounds(index: usize, bound: usize) -> Self {
        Self::InvalidArgument {
            message: format!("index {index} out of bounds (valid range 0..={bound})"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput {
            operation: operation.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CalcularError>;
