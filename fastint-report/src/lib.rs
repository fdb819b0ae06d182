//! # fastint-report
//!
//! Renders the binary64 layout of integers next to their fastint
//! classification, one line per value:
//!
//! ```text
//! <decimal> <hex> (fastint=<True|False>): <16-hex> sgn=<d> exp=<d> sgnexp=<hex> manthex=<hex>
//! ```
//!
//! Negative values print their hex column as 64-bit two's complement.
//!
//! ## Example
//!
//! ```rust
//! use fastint_report::{write_report, ReportLine};
//!
//! let line = ReportLine::new(9);
//! assert_eq!(
//!     line.to_string(),
//!     "9 9 (fastint=True): 4022000000000000 sgn=0 exp=1026 sgnexp=4022 manthex=2000000000000"
//! );
//!
//! let mut out: Vec<u8> = Vec::new();
//! write_report(&mut out, &[-1, 0, 1]).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! ```

pub mod error;
pub mod formatter;
pub mod logging;
pub mod report;

pub use error::{ReportError, Result};
pub use formatter::{format_bits, render};
pub use report::{report, write_report, ReportLine, SAMPLE_VALUES};

#[cfg(test)]
mod tests {
    use super::*;
    use fastint_spec::DoubleBits;

    #[test]
    fn test_render_matches_format_bits() {
        assert_eq!(render(-1), format_bits(&DoubleBits::from_f64(-1.0)));
        assert_eq!(
            format_bits(&DoubleBits(0)),
            "0000000000000000 sgn=0 exp=0 sgnexp=0 manthex=0000000000000"
        );
    }

    #[test]
    fn test_report_over_samples() {
        let lines = report(&SAMPLE_VALUES);
        assert_eq!(lines.len(), SAMPLE_VALUES.len());
        assert_eq!(lines[27], ReportLine::new(9));
        assert!(lines[27].to_string().ends_with(&render(9)));
    }

    #[test]
    fn test_io_error_converts() {
        let err = ReportError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert_eq!(err.to_string(), "I/O error: closed");
    }

    #[test]
    fn test_write_failure_propagates() {
        struct Closed;

        impl std::io::Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result: Result<()> = write_report(&mut Closed, &SAMPLE_VALUES);
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
