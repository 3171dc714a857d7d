// ============================================================================
// Magnitude
// Typed power-of-ten exponent constrained to multiples of 3
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A power-of-ten exponent in engineering notation.
///
/// Engineering notation only uses exponents that are multiples of 3, so the
/// raw `i32` is wrapped and the domain constraint enforced at construction.
/// This replaces string-keyed exponent handling with a typed, ordered key
/// that the scale-name table can index on directly.
///
/// # Example
/// ```
/// use idle_bignum::numeric::Magnitude;
///
/// let million = Magnitude::new(6).unwrap();
/// assert_eq!(million.get(), 6);
/// assert!(Magnitude::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Magnitude(i32);

impl Magnitude {
    /// The zero exponent (plain units, no scale name).
    pub const ZERO: Self = Self(0);

    /// One engineering step: the exponent distance between adjacent scales.
    pub const STEP: i32 = 3;

    /// Create a magnitude from a raw exponent.
    ///
    /// # Errors
    /// Returns `InvalidMagnitude` if `exponent` is not a multiple of 3.
    #[inline]
    pub const fn new(exponent: i32) -> NumericResult<Self> {
        if exponent % Self::STEP == 0 {
            Ok(Self(exponent))
        } else {
            Err(NumericError::InvalidMagnitude)
        }
    }

    /// Get the raw exponent.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Offset by `steps` engineering steps (each step is 3 orders of
    /// magnitude), preserving the multiple-of-3 domain.
    #[inline]
    pub(crate) const fn stepped(self, steps: i32) -> Self {
        Self(self.0 + steps * Self::STEP)
    }

    /// Exponent distance to `target`, in orders of magnitude.
    #[inline]
    pub(crate) const fn distance_to(self, target: Self) -> i32 {
        target.0 - self.0
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Magnitude {
    type Error = NumericError;

    #[inline]
    fn try_from(exponent: i32) -> NumericResult<Self> {
        Self::new(exponent)
    }
}

impl From<Magnitude> for i32 {
    #[inline]
    fn from(magnitude: Magnitude) -> i32 {
        magnitude.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_multiples_of_three() {
        assert_eq!(Magnitude::new(0).unwrap().get(), 0);
        assert_eq!(Magnitude::new(303).unwrap().get(), 303);
        assert_eq!(Magnitude::new(-6).unwrap().get(), -6);
    }

    #[test]
    fn test_new_rejects_other_exponents() {
        assert_eq!(Magnitude::new(1), Err(NumericError::InvalidMagnitude));
        assert_eq!(Magnitude::new(-2), Err(NumericError::InvalidMagnitude));
        assert_eq!(Magnitude::new(100), Err(NumericError::InvalidMagnitude));
    }

    #[test]
    fn test_stepped() {
        let m = Magnitude::new(6).unwrap();
        assert_eq!(m.stepped(1).get(), 9);
        assert_eq!(m.stepped(-2).get(), 0);
    }

    #[test]
    fn test_distance_to() {
        let lo = Magnitude::new(3).unwrap();
        let hi = Magnitude::new(12).unwrap();
        assert_eq!(lo.distance_to(hi), 9);
        assert_eq!(hi.distance_to(lo), -9);
    }

    #[test]
    fn test_conversions() {
        let m = Magnitude::try_from(9).unwrap();
        assert_eq!(i32::from(m), 9);
        assert!(Magnitude::try_from(10).is_err());
    }

    #[test]
    fn test_ordering_and_display() {
        let a = Magnitude::new(3).unwrap();
        let b = Magnitude::new(6).unwrap();
        assert!(a < b);
        assert_eq!(b.to_string(), "6");
    }
}
