// ============================================================================
// Big Number
// Engineering-notation value type for idle-game quantities
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::magnitude::Magnitude;
use crate::naming::{ScaleTable, CONWAY_WECHSLER};
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One engineering step of scale (10^3).
const TEN_CUBED: f64 = 1e3;

/// A large positive quantity in engineering notation.
///
/// Stores `mantissa × 10^magnitude` where the magnitude is always a multiple
/// of 3 and, after normalization, the mantissa is either exactly `0` or in
/// `[1, 1000)`. A mantissa in `(0, 1)` is tolerated at magnitude 0, so small
/// fractions of a unit survive division without losing the zero exponent.
///
/// Arithmetic mutates the value in place. Operands passed to [`add`] and
/// [`subtract`] are read-only; alignment of the lesser-scaled operand happens
/// in a local temporary.
///
/// Negative quantities are not supported. A subtraction that undershoots zero
/// clamps to zero and records the undershoot in a flag readable through
/// [`is_negative`].
///
/// # Example
/// ```
/// use idle_bignum::prelude::*;
///
/// let mut gold = BigNum::from_parts(1.5, 6).unwrap();
/// gold.add(&BigNum::from_parts(500.0, 3).unwrap());
/// assert_eq!(gold.mantissa(), 2.0);
/// assert_eq!(gold.exponent(), 6);
/// assert_eq!(gold.to_string(), "2 million");
/// ```
///
/// [`add`]: BigNum::add
/// [`subtract`]: BigNum::subtract
/// [`is_negative`]: BigNum::is_negative
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BigNum {
    mantissa: f64,
    magnitude: Magnitude,
    negative: bool,
}

impl BigNum {
    /// Largest exponent distance carried through alignment. Operands more
    /// than this many orders of magnitude below the target scale are
    /// clamped to zero instead of kept as denormalized fractions.
    pub const MAX_MAGNITUDE: i32 = 12;

    /// Fractional digits used by [`Display`](fmt::Display) formatting.
    pub const DEFAULT_PRECISION: usize = 3;

    /// Zero.
    pub const ZERO: Self = Self {
        mantissa: 0.0,
        magnitude: Magnitude::ZERO,
        negative: false,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a mantissa and magnitude, verbatim.
    ///
    /// No validation or normalization is performed. Pass already-normalized
    /// parts or call [`normalize`](BigNum::normalize) before using the value.
    #[inline]
    pub const fn new(mantissa: f64, magnitude: Magnitude) -> Self {
        Self {
            mantissa,
            magnitude,
            negative: false,
        }
    }

    /// Create from a mantissa and raw exponent, normalized.
    ///
    /// # Errors
    /// - `InvalidMagnitude` if `exponent` is not a multiple of 3
    /// - `NotFinite` if `mantissa` is NaN or infinite
    pub fn from_parts(mantissa: f64, exponent: i32) -> NumericResult<Self> {
        if !mantissa.is_finite() {
            return Err(NumericError::NotFinite);
        }
        let mut num = Self::new(mantissa, Magnitude::new(exponent)?);
        num.normalize();
        Ok(num)
    }

    /// Absorb a plain `f64` into engineering notation.
    ///
    /// The whole value lands in the mantissa and normalization resolves the
    /// scale, so `from_f64(1.5e7)` yields mantissa 15 at magnitude 6. A
    /// negative input clamps to zero with the negative flag set.
    ///
    /// # Errors
    /// Returns `NotFinite` for NaN or infinite input.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        let mut num = Self::new(value, Magnitude::ZERO);
        num.normalize();
        Ok(num)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The mantissa. Either `0` or in `[1, 1000)` after normalization, with
    /// the small-fraction relaxation at magnitude 0.
    #[inline]
    pub const fn mantissa(&self) -> f64 {
        self.mantissa
    }

    /// The typed magnitude.
    #[inline]
    pub const fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    /// The raw power-of-ten exponent.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.magnitude.get()
    }

    /// Check if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// Whether an operation clamped a negative result to zero.
    ///
    /// Distinguishes "true zero" from "a subtraction undershot zero". The
    /// flag is only rewritten by the zero-clamp branch of normalization.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Approximate native value, `mantissa × 10^exponent`.
    ///
    /// Intended for host-side convenience (progress bars, ratios); large
    /// magnitudes overflow to infinity like any `f64` computation would.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.mantissa * 10f64.powi(self.magnitude.get())
    }

    // ========================================================================
    // Normalization & Alignment
    // ========================================================================

    /// Restore the engineering-notation invariants after a mutation.
    ///
    /// Exclusive three-way branch:
    /// - a positive mantissa below 1 at a non-zero magnitude is shifted up
    ///   by steps of 1000 until it re-enters `[1, 1000)` or the magnitude
    ///   reaches 0 (where a small fraction is left as-is)
    /// - a mantissa at or above 1000 is shifted down by steps of 1000
    /// - a non-positive mantissa clamps to zero at magnitude 0, recording
    ///   whether it was genuinely negative
    ///
    /// Both shift branches loop, so a single operation that moves the
    /// mantissa by several steps (say dividing by 1e9 in one call) is still
    /// fully corrected. Idempotent: a normalized value is left unchanged.
    pub fn normalize(&mut self) {
        // A non-finite mantissa has no normal form; checked constructors
        // and scalar guards keep one from arising.
        if !self.mantissa.is_finite() {
            return;
        }

        if self.mantissa > 0.0 && self.mantissa < 1.0 && self.magnitude != Magnitude::ZERO {
            // e.g. 0.1e6 becomes 100e3
            while self.mantissa < 1.0 && self.magnitude != Magnitude::ZERO {
                self.mantissa *= TEN_CUBED;
                self.magnitude = self.magnitude.stepped(-1);
            }
        } else if self.mantissa >= TEN_CUBED {
            // e.g. 10000e3 becomes 10e6
            while self.mantissa >= TEN_CUBED {
                self.mantissa /= TEN_CUBED;
                self.magnitude = self.magnitude.stepped(1);
            }
        } else if self.mantissa <= 0.0 {
            self.negative = self.mantissa < 0.0;
            if self.negative {
                trace!(mantissa = self.mantissa, "negative result clamped to zero");
            }
            self.magnitude = Magnitude::ZERO;
            self.mantissa = 0.0;
        }
    }

    /// Re-express the mantissa at `target`, assuming `target` is not below
    /// the current magnitude (a smaller target is a no-op).
    ///
    /// An operand more than [`MAX_MAGNITUDE`](Self::MAX_MAGNITUDE) orders of
    /// magnitude below the target is negligible at that scale and clamps to
    /// zero rather than being carried as a denormalized fraction.
    ///
    /// The result is intentionally left denormalized; callers follow up with
    /// arithmetic and [`normalize`](BigNum::normalize).
    pub fn align(&mut self, target: Magnitude) {
        let d = self.magnitude.distance_to(target);
        if d > 0 {
            if d <= Self::MAX_MAGNITUDE {
                self.mantissa /= 10f64.powi(d);
            } else {
                trace!(
                    distance = d,
                    "operand negligible at target scale, clamped to zero"
                );
                self.mantissa = 0.0;
            }
            self.magnitude = target;
        }
    }

    /// Mantissa of `other` re-expressed at whichever magnitude is larger,
    /// aligning `self` in place when it is the lesser-scaled operand.
    fn aligned_operand(&mut self, other: &BigNum) -> f64 {
        if other.magnitude < self.magnitude {
            let mut rhs = *other;
            rhs.align(self.magnitude);
            rhs.mantissa
        } else {
            self.align(other.magnitude);
            other.mantissa
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Add `other` to this value. `other` is not modified.
    pub fn add(&mut self, other: &BigNum) {
        let rhs = self.aligned_operand(other);
        self.mantissa += rhs;
        self.normalize();
    }

    /// Subtract `other` from this value. `other` is not modified.
    ///
    /// A result below zero clamps to zero and sets the negative flag; check
    /// [`is_negative`](BigNum::is_negative) to tell the two apart.
    pub fn subtract(&mut self, other: &BigNum) {
        let rhs = self.aligned_operand(other);
        self.mantissa -= rhs;
        self.normalize();
    }

    /// Multiply by a non-negative scalar.
    ///
    /// Scale carried by the factor is absorbed into the mantissa and
    /// resolved by normalization, so multiplying by 1e9 raises the exponent
    /// by 9.
    ///
    /// # Errors
    /// - `UnsupportedOperand` for a negative factor (value unchanged)
    /// - `NotFinite` for a NaN/infinite factor, or when the product
    ///   overflows `f64` (value unchanged)
    pub fn multiply(&mut self, factor: f64) -> NumericResult<()> {
        if !factor.is_finite() {
            return Err(NumericError::NotFinite);
        }
        if factor < 0.0 {
            return Err(NumericError::UnsupportedOperand);
        }
        let product = self.mantissa * factor;
        if !product.is_finite() {
            return Err(NumericError::NotFinite);
        }
        self.mantissa = product;
        self.normalize();
        Ok(())
    }

    /// Divide by a positive scalar.
    ///
    /// A quotient driven below 1 is corrected by the looping fractional
    /// branch of normalization, so dividing by a large divisor in a single
    /// call still yields a normalized result.
    ///
    /// # Errors
    /// - `UnsupportedOperand` for a zero or negative divisor (value
    ///   unchanged)
    /// - `NotFinite` for a NaN/infinite divisor (value unchanged)
    pub fn divide(&mut self, divisor: f64) -> NumericResult<()> {
        if !divisor.is_finite() {
            return Err(NumericError::NotFinite);
        }
        if divisor <= 0.0 {
            return Err(NumericError::UnsupportedOperand);
        }
        self.mantissa /= divisor;
        self.normalize();
        Ok(())
    }

    // ========================================================================
    // Display accessors
    // ========================================================================

    /// The mantissa at `precision` fractional digits, trailing zeros and
    /// trailing decimal point trimmed.
    ///
    /// # Example
    /// ```
    /// use idle_bignum::prelude::*;
    ///
    /// let n = BigNum::from_parts(2.5, 6).unwrap();
    /// assert_eq!(n.value_string(3), "2.5");
    /// assert_eq!(n.value_string(0), "2");
    /// ```
    pub fn value_string(&self, precision: usize) -> String {
        let fixed = format!("{:.prec$}", self.mantissa, prec = precision);
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }

    /// The Conway-Wechsler name for the current magnitude, from the shipped
    /// table: `Some("")` at magnitude 0, `None` when the magnitude has no
    /// entry (past centillion, or negative).
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name_in(&CONWAY_WECHSLER)
    }

    /// Like [`name`](BigNum::name), against a caller-supplied table.
    #[inline]
    pub fn name_in(&self, table: &ScaleTable) -> Option<&'static str> {
        table.lookup(self.magnitude)
    }
}

// ============================================================================
// Operator sugar
// ============================================================================

// Assign-operator forms of the named methods. The scalar forms panic on an
// unsupported operand; use multiply/divide where the operand is untrusted.

impl AddAssign<&BigNum> for BigNum {
    #[inline]
    fn add_assign(&mut self, rhs: &BigNum) {
        self.add(rhs);
    }
}

impl AddAssign for BigNum {
    #[inline]
    fn add_assign(&mut self, rhs: BigNum) {
        self.add(&rhs);
    }
}

impl SubAssign<&BigNum> for BigNum {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigNum) {
        self.subtract(rhs);
    }
}

impl SubAssign for BigNum {
    #[inline]
    fn sub_assign(&mut self, rhs: BigNum) {
        self.subtract(&rhs);
    }
}

impl MulAssign<f64> for BigNum {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply(rhs).expect("BigNum multiplication by unsupported factor");
    }
}

impl DivAssign<f64> for BigNum {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.divide(rhs).expect("BigNum division by unsupported divisor");
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for BigNum {
    /// Mantissa text plus the scale name, e.g. `2.5 million`. A bare
    /// mantissa at magnitude 0; a `<mantissa>e<exp>` fallback when the
    /// magnitude has no table entry. Not intended to round-trip through a
    /// parser.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value_string(Self::DEFAULT_PRECISION);
        match self.name() {
            Some("") => write!(f, "{}", value),
            Some(name) => write!(f, "{} {}", value, name),
            None => write!(f, "{}e{}", value, self.magnitude),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
