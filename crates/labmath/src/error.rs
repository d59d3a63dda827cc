use std::error::Error;
use std::fmt;

/// Failure kinds reported by the vector and complex operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Non-positive dimension or empty coordinate sequence.
    InvalidArgument { reason: &'static str },
    /// A required argument was absent.
    NullInput { argument: &'static str },
    DimensionMismatch { expected: usize, found: usize },
    IndexOutOfRange { index: usize, dimension: usize },
    DivisionByZero,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            MathError::NullInput { argument } => write!(f, "missing required argument `{}`", argument),
            MathError::DimensionMismatch { expected, found } => write!(
                f,
                "vectors must have the same dimension (expected {}, found {})",
                expected, found
            ),
            MathError::IndexOutOfRange { index, dimension } => write!(
                f,
                "index {} is out of range for a vector of dimension {}",
                index, dimension
            ),
            MathError::DivisionByZero => write!(f, "division by a complex number of zero magnitude"),
        }
    }
}

impl Error for MathError {}
