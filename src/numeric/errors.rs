// ============================================================================
// Numeric Errors
// Error types for engineering-notation arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or operating on big numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Scalar operand outside the supported domain (negative factor,
    /// non-positive divisor)
    UnsupportedOperand,
    /// Exponent is not a multiple of 3
    InvalidMagnitude,
    /// Input value is NaN or infinite
    NotFinite,
    /// Scale table entries are not sorted by ascending magnitude
    TableOrder,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::UnsupportedOperand => {
                write!(f, "unsupported operand: negative arithmetic is not defined")
            },
            NumericError::InvalidMagnitude => {
                write!(f, "invalid magnitude: exponent must be a multiple of 3")
            },
            NumericError::NotFinite => write!(f, "invalid input: value is NaN or infinite"),
            NumericError::TableOrder => {
                write!(f, "scale table entries must be sorted by ascending magnitude")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
