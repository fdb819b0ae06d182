//! Report driver over the sample values

use crate::error::Result;
use crate::formatter::{format_bits, format_bool};
use fastint_spec::{is_exact_f64, is_fastint_i64, DoubleBits};
use std::fmt;
use std::io::Write;

const P47: i64 = 1 << 47;
const P32: i64 = 1 << 32;

/// Values reported by the `fastint-reps` binary, in output order.
///
/// `-8` is listed twice and `-0` collapses to `0` in integer space.
#[rustfmt::skip]
pub const SAMPLE_VALUES: [i64; 34] = [
    -P47 - 1,
    -P47,
    -P47 + 1,
    -P32 - 1,
    -P32,
    -P32 + 1,
    -0xdeadbeef,
    -9, -8, -8, -7, -6, -5, -4, -3, -2, -1,
    -0,
    0,
    1, 2, 3, 4, 5, 6, 7, 8, 9,
    0xdeadbeef,
    P32 - 1,
    P32,
    P32 + 1,
    P47 - 1,
    P47,
];

/// One report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLine {
    pub value: i64,
    pub fastint: bool,
    pub bits: DoubleBits,
}

impl ReportLine {
    pub fn new(value: i64) -> Self {
        if !is_exact_f64(value) {
            tracing::warn!(value, "value does not convert exactly to f64");
        }

        Self {
            value,
            fastint: is_fastint_i64(value),
            bits: DoubleBits::from_i64(value),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:x} (fastint={}): {}",
            self.value,
            self.value,
            format_bool(self.fastint),
            format_bits(&self.bits)
        )
    }
}

/// Build report lines for `values`, preserving order and duplicates
pub fn report(values: &[i64]) -> Vec<ReportLine> {
    values.iter().copied().map(ReportLine::new).collect()
}

/// Write one newline-terminated line per value
pub fn write_report<W: Write>(out: &mut W, values: &[i64]) -> Result<()> {
    tracing::info!(count = values.len(), "writing fastint report");

    for line in report(values) {
        tracing::debug!(value = line.value, fastint = line.fastint, "rendered");
        writeln!(out, "{}", line)?;
    }

    out.flush()?;
    tracing::info!("report complete");
    Ok(())
}
