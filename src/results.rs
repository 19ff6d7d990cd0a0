//! Loading benchmark logs into result sets.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::{CompareError, CompareResult};
use crate::parser::{ParsedLine, parse_line};
use crate::unit::Unit;

/// A single normalized throughput measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    /// Test configuration label.
    pub key: String,
    /// Normalized value.
    pub value: f64,
    /// Normalized unit.
    pub unit: Unit,
}

/// All results of one benchmark log, keyed by test configuration.
///
/// A key appearing more than once keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet(BTreeMap<String, BenchmarkResult>);

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every line of `reader`, skipping the ones that are not results.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut results = Self::new();
        for line in reader.lines() {
            if let ParsedLine::Matched { key, value, unit } = parse_line(&line?) {
                results.insert(BenchmarkResult { key, value, unit });
            }
        }
        Ok(results)
    }

    /// Insert a result, replacing any previous result with the same key.
    pub fn insert(&mut self, result: BenchmarkResult) -> Option<BenchmarkResult> {
        self.0.insert(result.key.clone(), result)
    }

    /// Look up the result for `key`.
    pub fn get(&self, key: &str) -> Option<&BenchmarkResult> {
        self.0.get(key)
    }

    /// Iterate over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no results.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<BenchmarkResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = BenchmarkResult>>(iter: I) -> Self {
        let mut results = Self::new();
        iter.into_iter().for_each(|r| {
            results.insert(r);
        });
        results
    }
}

/// Load all benchmark results from the log at `path`.
pub fn load_file(path: &Path) -> CompareResult<ResultSet> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CompareError::NotFound { path: path.to_path_buf() },
        _ => CompareError::Open { path: path.to_path_buf(), source: e },
    })?;

    let results = ResultSet::from_reader(BufReader::new(file))
        .map_err(|e| CompareError::Read { path: path.to_path_buf(), source: e })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), results = results.len(), "parsed benchmark log");

    Ok(results)
}
