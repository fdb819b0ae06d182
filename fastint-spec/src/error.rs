//! # Error Types for fastint-spec

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    // Hex decoding errors
    #[error("Invalid hex length: expected {expected} digits, found {found}")]
    InvalidHexLength { expected: usize, found: usize },

    #[error("Invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit { position: usize, digit: char },

    // Range configuration errors
    #[error("Invalid fastint range width: {0} bits (valid range: 1-53)")]
    InvalidRangeBits(u8),

    // Field construction errors
    #[error("Sign bit out of range: {0} (expected 0 or 1)")]
    SignOutOfRange(u8),

    #[error("Exponent out of range: {0:#x} (max 0x7ff)")]
    ExponentOutOfRange(u16),

    #[error("Mantissa out of range: {0:#x} (max 52 bits)")]
    MantissaOutOfRange(u64),
}

pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::InvalidHexLength {
            expected: 16,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid hex length: expected 16 digits, found 3"
        );

        let err = SpecError::InvalidRangeBits(60);
        assert_eq!(
            err.to_string(),
            "Invalid fastint range width: 60 bits (valid range: 1-53)"
        );

        let err = SpecError::ExponentOutOfRange(0x800);
        assert_eq!(err.to_string(), "Exponent out of range: 0x800 (max 0x7ff)");
    }

    #[test]
    fn test_hex_digit_display() {
        let err = SpecError::InvalidHexDigit {
            position: 4,
            digit: 'g',
        };
        assert_eq!(err.to_string(), "Invalid hex digit 'g' at position 4");
    }
}
