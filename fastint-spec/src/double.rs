//! # IEEE-754 binary64 Bit Layout
//!
//! ```text
//! bit:  63  62........52  51..................0
//!       [s] [exponent:11] [mantissa:52]
//!
//! hex:  d0 d1 d2 | d3 .................... d15
//!       sign+exp | mantissa (13 digits)
//! ```
//!
//! The top 16 bits (`sgnexp`) hold the sign, the exponent and the upper
//! nibble of the mantissa.

use crate::error::{Result, SpecError};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Field Constants
// ============================================================================

/// Sign field: bit 63
pub const SIGN_SHIFT: u32 = 63;

/// Exponent field: bits 52-62 (11 bits)
pub const EXPONENT_SHIFT: u32 = 52;

/// Width of the stored mantissa
pub const MANTISSA_BITS: u32 = 52;

/// Exponent mask (11 bits)
pub const EXPONENT_MASK: u16 = 0x7FF;

/// Mantissa mask (52 bits)
pub const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;

/// Exponent bits inside the 16-bit `sgnexp` word
pub const SGNEXP_EXPONENT_MASK: u16 = 0x7FF0;

/// Exponent bias
pub const EXPONENT_BIAS: u16 = 1023;

/// Digits in the full hex encoding
pub const HEX_DIGITS: usize = 16;

/// Leading hex digits covering sign and exponent
pub const SGNEXP_HEX_DIGITS: usize = 3;

// ============================================================================
// DoubleBits
// ============================================================================

/// Raw binary64 bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoubleBits(pub u64);

impl DoubleBits {
    /// Bits of `x`
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        Self(x.to_bits())
    }

    /// Bits of `x as f64`. Values beyond ±2^53 round to the nearest double.
    #[inline]
    pub fn from_i64(x: i64) -> Self {
        Self::from_f64(x as f64)
    }

    /// Assemble from separate fields
    pub fn from_parts(sign: u8, exponent: u16, mantissa: u64) -> Result<Self> {
        if sign > 1 {
            return Err(SpecError::SignOutOfRange(sign));
        }
        if exponent > EXPONENT_MASK {
            return Err(SpecError::ExponentOutOfRange(exponent));
        }
        if mantissa > MANTISSA_MASK {
            return Err(SpecError::MantissaOutOfRange(mantissa));
        }

        Ok(Self(
            ((sign as u64) << SIGN_SHIFT) | ((exponent as u64) << EXPONENT_SHIFT) | mantissa,
        ))
    }

    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Big-endian encoding, most significant byte first
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Top 16 bits, `(b0 << 8) | b1`
    #[inline]
    pub const fn sign_exponent(self) -> u16 {
        let bytes = self.to_be_bytes();
        ((bytes[0] as u16) << 8) | bytes[1] as u16
    }

    /// Sign bit (0 or 1)
    #[inline]
    pub const fn sign(self) -> u8 {
        (self.sign_exponent() >> 15) as u8
    }

    /// Biased 11-bit exponent
    #[inline]
    pub const fn exponent(self) -> u16 {
        (self.sign_exponent() & SGNEXP_EXPONENT_MASK) >> 4
    }

    /// Stored 52-bit mantissa, without the implicit leading one
    #[inline]
    pub const fn mantissa(self) -> u64 {
        self.0 & MANTISSA_MASK
    }

    /// 16 lowercase hex digits of the big-endian bytes
    pub fn to_hex(self) -> String {
        format!("{:016x}", self.0)
    }

    /// Mantissa as 13 zero-padded hex digits, i.e. the hex encoding with
    /// the sign/exponent digits stripped
    pub fn mantissa_hex(self) -> String {
        self.to_hex()[SGNEXP_HEX_DIGITS..].to_string()
    }
}

impl From<f64> for DoubleBits {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

impl fmt::LowerHex for DoubleBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for DoubleBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Parse exactly 16 hex digits, either case
impl FromStr for DoubleBits {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != HEX_DIGITS {
            return Err(SpecError::InvalidHexLength {
                expected: HEX_DIGITS,
                found,
            });
        }

        let mut bits = 0u64;
        for (position, digit) in s.chars().enumerate() {
            let nibble = digit
                .to_digit(16)
                .ok_or(SpecError::InvalidHexDigit { position, digit })?;
            bits = (bits << 4) | nibble as u64;
        }

        Ok(Self(bits))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_fields_rebuild_value(x in -(1i64 << 53)..=(1i64 << 53)) {
            let bits = DoubleBits::from_i64(x);
            let rebuilt = DoubleBits::from_parts(bits.sign(), bits.exponent(), bits.mantissa()).unwrap();
            prop_assert_eq!(rebuilt.to_f64(), x as f64);
        }

        #[test]
        fn test_hex_parses_back(raw in any::<u64>()) {
            let bits = DoubleBits(raw);
            prop_assert_eq!(bits.to_hex().parse::<DoubleBits>().unwrap(), bits);
        }
    }
}
