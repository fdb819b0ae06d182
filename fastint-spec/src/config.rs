//! # Fastint Range Configuration
//!
//! A fastint is a number held in a signed integer slot of `bits + 1`
//! bits instead of a full double. The default width matches runtimes
//! that pack the integer into the 48-bit payload of a tagged value.

use crate::error::{Result, SpecError};
use crate::double::MANTISSA_BITS;
use std::fmt;

/// Signed range `[-2^bits, 2^bits)` accepted as fastint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FastintRange {
    /// Magnitude bits, excluding the sign. Only `new` and `DEFAULT`
    /// set it, so `1 <= bits <= MAX_BITS` holds.
    bits: u8,
}

impl FastintRange {
    /// Default range: `[-2^47, 2^47)`
    pub const DEFAULT: Self = Self { bits: 47 };

    /// Widest range whose every member is an exact double
    pub const MAX_BITS: u8 = MANTISSA_BITS as u8 + 1;

    /// Create a new range with validation
    pub const fn new(bits: u8) -> Result<Self> {
        if bits < 1 || bits > Self::MAX_BITS {
            return Err(SpecError::InvalidRangeBits(bits));
        }
        Ok(Self { bits })
    }

    /// Magnitude bits, excluding the sign
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Inclusive lower bound, `-2^bits`
    #[inline]
    pub const fn min(&self) -> i64 {
        -(1i64 << self.bits)
    }

    /// Exclusive upper bound, `2^bits`
    #[inline]
    pub const fn max_exclusive(&self) -> i64 {
        1i64 << self.bits
    }

    /// Range check on an integer
    #[inline]
    pub const fn contains_i64(&self, x: i64) -> bool {
        x >= self.min() && x < self.max_exclusive()
    }

    /// Range check on a double.
    ///
    /// Both bounds are exact doubles, so the comparison is exact. `-0.0`
    /// compares equal to `0.0` and is accepted.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min() as f64 && x < self.max_exclusive() as f64
    }
}

impl Default for FastintRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FastintRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[-2^{}, 2^{})", self.bits, self.bits)
    }
}
