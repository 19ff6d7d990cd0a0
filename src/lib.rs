//! Compare two backend-ops performance logs.
//!
//! The perf harness prints one line per test configuration, ending with the
//! measured throughput:
//!
//! ```text
//! MUL_MAT(type_a=f16,...): 744 runs - 1660.11 us/run - 134.48 MFLOP/run - 81.01 GFLOPS
//! ```
//!
//! This crate extracts those measurements from two captured logs, normalizes
//! them to GFLOPS or GB/s, and renders a fixed-width table with the
//! percentage change of every configuration.
//!
//! ## Example
//!
//! ```
//! use perfcmp::{ResultSet, TextReporter, ComparisonReporter, ReportLabels, compare};
//!
//! let baseline = ResultSet::from_reader("ADD(f32): 10 runs - 4.00 GB/s\n".as_bytes()).unwrap();
//! let current = ResultSet::from_reader("ADD(f32): 10 runs - 5.00 GB/s\n".as_bytes()).unwrap();
//!
//! let cmp = compare(&baseline, &current);
//! assert_eq!(cmp.entries[0].change_percent, 25.0);
//!
//! let mut out = Vec::new();
//! TextReporter.print(&mut out, &cmp, &ReportLabels::default()).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("+25.00%"));
//! ```
#![deny(missing_docs)]

mod commit;
mod compare;
mod error;
mod parser;
mod results;
mod unit;

pub mod cli;
pub mod reporter;

pub use crate::{
    commit::extract_commit_id,
    compare::{Comparison, ComparisonEntry, NOISE_THRESHOLD, RowStatus, compare},
    error::{CompareError, CompareResult},
    parser::{ParsedLine, parse_line, strip_ansi},
    reporter::{ComparisonReporter, JsonReporter, ReportLabels, TextReporter, format_change},
    results::{BenchmarkResult, ResultSet, load_file},
    unit::{Scale, Unit, UnitToken},
};
