//! # fastint-spec
//!
//! Classification of numbers against the fastint range and access to
//! the fields of their IEEE-754 binary64 encoding.
//!
//! ## Fastints
//!
//! Some dynamic-language runtimes store numbers as doubles but keep a
//! fast path for integers that fit a narrower signed slot. A value is a
//! fastint when it is integral and lies in `[-2^47, 2^47)`.
//!
//! ## Example
//!
//! ```rust
//! use fastint_spec::{is_fastint_i64, DoubleBits};
//!
//! let bits = DoubleBits::from_i64(-1);
//! assert_eq!(bits.sign(), 1);
//! assert_eq!(bits.exponent(), 1023);
//! assert!(is_fastint_i64(-1));
//! assert!(!is_fastint_i64(1 << 47));
//! ```

pub mod config;
pub mod double;
pub mod error;
pub mod fastint;

pub use config::FastintRange;
pub use double::DoubleBits;
pub use error::{Result, SpecError};
pub use fastint::{is_exact_f64, is_fastint, is_fastint_i64, is_fastint_in};
