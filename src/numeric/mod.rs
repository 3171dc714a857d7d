// ============================================================================
// Numeric Module
// Engineering-notation arithmetic for very large positive quantities
// ============================================================================
//
// This module provides:
// - BigNum: mantissa-and-magnitude value type, mutated in place
// - Magnitude: typed multiple-of-3 exponent
// - NumericError: error types for construction and scalar operations
//
// Design principles:
// - Lossy by design: the mantissa is an f64, precision past ~15 digits and
//   operands more than 12 orders of magnitude apart are dropped
// - Positive quantities only; subtraction undershoot clamps to zero
// - Operands are never mutated through a shared reference

mod big_num;
mod errors;
mod magnitude;

pub use big_num::BigNum;
pub use errors::{NumericError, NumericResult};
pub use magnitude::Magnitude;
