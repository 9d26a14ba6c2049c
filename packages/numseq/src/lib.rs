#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Parsing and encoding of compact textual descriptions of number sequences, such as
//! `5-30/5,100` for the numbers `5, 10, 15, 20, 25, 30, 100`.
//!
//! The parsers are meant to be embedded in command-line or configuration handling: given a
//! user-supplied string and optional inclusive limits, they either return the numbers or a
//! [`ParseError`] that names the offending part of the input and the rule it violated.
//!
//! # Format
//!
//! A sequence is a comma-separated list of one or more subsequences, where each subsequence is:
//!
//! * a single number (e.g. `5`)
//! * a range of numbers (e.g. `8-10` which is equivalent to `8,9,10`)
//! * an increment from a number (e.g. `10+3` which is equivalent to `10,11,12,13`)
//! * a range or increment with a step (e.g. `5-30/5` or `5+25/5`)
//!
//! Numbers may be negative (`-3--1` is the range from -3 to -1) and, for floating-point parsers,
//! use exponential notation (`1e-5-1.001e-5/1e-8`). The step must be positive. A step that does
//! not evenly divide a range omits the values beyond the last one that fits.
//!
//! The values are returned in textual order. Nothing is sorted or deduplicated.
//!
//! # Example
//!
//! ```
//! use numseq::SequenceParser;
//!
//! let parser = SequenceParser::<i64>::unbounded();
//!
//! let numbers = parser.parse("5-30/5,100-102,110").unwrap();
//! assert_eq!(numbers, vec![5, 10, 15, 20, 25, 30, 100, 101, 102, 110]);
//!
//! println!("As sequence: {}", numseq::encode(numbers));
//! ```
//!
//! Membership can be tested without expanding the ranges:
//!
//! ```
//! use numseq::SequenceParser;
//!
//! let parser = SequenceParser::<f64>::unbounded();
//!
//! assert!(parser.contains("0-1000000/0.5", 250000.5));
//! assert!(!parser.contains("0-1000000/0.5", 250000.25));
//! ```
//!
//! Single numbers with limits are handled by [`ScalarParser`]:
//!
//! ```
//! use numseq::{ErrorTag, Limits, ScalarParser};
//!
//! let parser = ScalarParser::new(Limits::<i64>::between(1, 10));
//!
//! assert_eq!(parser.parse("7").unwrap(), 7);
//! assert_eq!(parser.parse("11").unwrap_err().tag(), ErrorTag::ValueTooHigh);
//! ```

mod encode;
mod error;
mod lazy;
mod limits;
mod numeric;
mod scalar;
mod sequence;
mod subsequence;

pub use encode::*;
pub use error::*;
pub use lazy::*;
pub use limits::*;
pub use numeric::*;
pub use scalar::*;
pub use sequence::*;
pub use subsequence::*;
