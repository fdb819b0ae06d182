//! Bit-pattern formatting

use fastint_spec::DoubleBits;

/// Format a bit pattern as
/// `<16-hex> sgn=<d> exp=<d> sgnexp=<hex> manthex=<hex>`
pub fn format_bits(bits: &DoubleBits) -> String {
    format!(
        "{} sgn={} exp={} sgnexp={:x} manthex={}",
        bits.to_hex(),
        bits.sign(),
        bits.exponent(),
        bits.sign_exponent(),
        bits.mantissa_hex()
    )
}

/// Format the bit pattern of `x as f64`
pub fn render(x: i64) -> String {
    format_bits(&DoubleBits::from_i64(x))
}

/// Capitalized boolean for the fastint column
pub(crate) fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nine() {
        assert_eq!(
            render(9),
            "4022000000000000 sgn=0 exp=1026 sgnexp=4022 manthex=2000000000000"
        );
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(
            render(0),
            "0000000000000000 sgn=0 exp=0 sgnexp=0 manthex=0000000000000"
        );
    }

    #[test]
    fn test_render_minus_one() {
        assert_eq!(
            render(-1),
            "bff0000000000000 sgn=1 exp=1023 sgnexp=bff0 manthex=0000000000000"
        );
    }

    #[test]
    fn test_render_below_range() {
        assert_eq!(
            render(-(1 << 47) - 1),
            "c2e0000000000020 sgn=1 exp=1070 sgnexp=c2e0 manthex=0000000000020"
        );
    }

    #[test]
    fn test_format_negative_zero_double() {
        let bits = DoubleBits::from_f64(-0.0);
        assert_eq!(
            format_bits(&bits),
            "8000000000000000 sgn=1 exp=0 sgnexp=8000 manthex=0000000000000"
        );
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(true), "True");
        assert_eq!(format_bool(false), "False");
    }
}
