// ============================================================================
// Idle Bignum Library
// Engineering-notation big numbers with Conway-Wechsler scale names
// ============================================================================

//! # Idle Bignum
//!
//! Big numbers for incremental/idle games, stored in engineering notation:
//! a mantissa in `[1, 1000)` paired with a power-of-ten exponent that is
//! always a multiple of 3, and rendered with Conway-Wechsler scale names
//! (thousand, million, ... centillion).
//!
//! ## Features
//!
//! - **In-place arithmetic** on a plain `Copy` value type
//! - **Deliberate precision-loss policy**: operands more than 12 orders of
//!   magnitude below the larger operand vanish instead of polluting sums
//!   with denormalized garbage digits
//! - **Positive-only domain**: subtraction that undershoots zero clamps to
//!   zero and raises a flag
//! - **Extensible name table**: scale names are pure data, keyed by typed
//!   magnitude
//!
//! ## Example
//!
//! ```rust
//! use idle_bignum::prelude::*;
//!
//! let mut gold = BigNum::ZERO;
//! let income = BigNum::from_parts(250.0, 3).unwrap();
//!
//! for _ in 0..8 {
//!     gold.add(&income);
//! }
//! assert_eq!(gold.to_string(), "2 million");
//!
//! gold.subtract(&BigNum::from_parts(1.5, 6).unwrap());
//! assert_eq!(gold.to_string(), "500 thousand");
//! ```

pub mod naming;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::naming::{ScaleTable, CONWAY_WECHSLER};
    pub use crate::numeric::{BigNum, Magnitude, NumericError, NumericResult};
}
