//! Comparison of two result sets.

use itertools::Itertools;
use serde::Serialize;

use crate::results::ResultSet;
use crate::unit::Unit;

/// Changes within this many percent either way are considered noise.
pub const NOISE_THRESHOLD: f64 = 0.1;

/// Classification of a comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RowStatus {
    /// Throughput went up by more than the noise threshold.
    Improved,
    /// Throughput went down by more than the noise threshold.
    Regressed,
    /// Within noise threshold.
    Unchanged,
    /// One of the logs has no result for this key.
    Missing,
}

/// Comparison result for a single test configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    /// Test configuration label.
    pub key: String,
    /// Baseline value, if the baseline log has this key.
    pub baseline: Option<f64>,
    /// Compare value, if the compare log has this key.
    pub compare: Option<f64>,
    /// `(compare - baseline) / baseline * 100`, or 0 when a side is missing.
    pub change_percent: f64,
}

impl ComparisonEntry {
    fn new(key: String, baseline: Option<f64>, compare: Option<f64>) -> Self {
        let change_percent = match (baseline, compare) {
            (Some(b), Some(c)) => (c - b) / b * 100.0,
            _ => 0.0,
        };
        Self { key, baseline, compare, change_percent }
    }

    /// Classify the row against [`NOISE_THRESHOLD`].
    pub fn status(&self) -> RowStatus {
        if self.baseline.is_none() || self.compare.is_none() {
            RowStatus::Missing
        } else if self.change_percent > NOISE_THRESHOLD {
            RowStatus::Improved
        } else if self.change_percent < -NOISE_THRESHOLD {
            RowStatus::Regressed
        } else {
            RowStatus::Unchanged
        }
    }
}

/// Overall comparison result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Unit label applied to every value of the report.
    pub unit: Unit,
    /// One entry per key of either log, sorted by key.
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Number of entries with the given status.
    pub fn count(&self, status: RowStatus) -> usize {
        self.entries.iter().filter(|e| e.status() == status).count()
    }

    /// Length in characters of the longest key, 0 if there are no entries.
    pub fn max_key_len(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.key.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Compare `current` against `baseline` over the union of their keys.
///
/// The report unit comes from the first key in sorted order, looking at the
/// baseline before the compare set. Logs mixing unit families still get a
/// single label.
pub fn compare(baseline: &ResultSet, current: &ResultSet) -> Comparison {
    let keys = baseline.keys().merge(current.keys()).dedup().collect_vec();

    let unit = keys
        .first()
        .and_then(|k| baseline.get(k).or_else(|| current.get(k)))
        .map_or(Unit::Gflops, |r| r.unit);

    let entries = keys
        .into_iter()
        .map(|k| {
            ComparisonEntry::new(
                k.to_string(),
                baseline.get(k).map(|r| r.value),
                current.get(k).map(|r| r.value),
            )
        })
        .collect();

    Comparison { unit, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::BenchmarkResult;

    fn set(items: &[(&str, f64, Unit)]) -> ResultSet {
        items
            .iter()
            .map(|&(key, value, unit)| BenchmarkResult { key: key.to_string(), value, unit })
            .collect()
    }

    #[test]
    fn test_compare_union_of_keys_sorted() {
        let baseline = set(&[("b", 1.0, Unit::Gflops), ("d", 1.0, Unit::Gflops), ("a", 1.0, Unit::Gflops)]);
        let current = set(&[("c", 1.0, Unit::Gflops), ("a", 1.0, Unit::Gflops)]);
        let cmp = compare(&baseline, &current);
        let keys = cmp.entries.iter().map(|e| e.key.as_str()).collect_vec();
        assert_eq!(keys, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_compare_change_percent() {
        let baseline = set(&[("up", 100.0, Unit::Gflops), ("down", 100.0, Unit::Gflops)]);
        let current = set(&[("up", 110.0, Unit::Gflops), ("down", 90.0, Unit::Gflops)]);
        let cmp = compare(&baseline, &current);

        let down = &cmp.entries[0];
        assert_eq!(down.key, "down");
        assert!((down.change_percent + 10.0).abs() < 1e-9);
        assert_eq!(down.status(), RowStatus::Regressed);

        let up = &cmp.entries[1];
        assert!((up.change_percent - 10.0).abs() < 1e-9);
        assert_eq!(up.status(), RowStatus::Improved);
    }

    #[test]
    fn test_compare_missing_side() {
        let baseline = set(&[("a", 5.0, Unit::GbPerSec)]);
        let current = set(&[("b", 7.0, Unit::GbPerSec)]);
        let cmp = compare(&baseline, &current);

        assert_eq!(cmp.entries[0], ComparisonEntry {
            key: "a".to_string(),
            baseline: Some(5.0),
            compare: None,
            change_percent: 0.0,
        });
        assert_eq!(cmp.entries[1].baseline, None);
        assert_eq!(cmp.entries[1].compare, Some(7.0));
        assert_eq!(cmp.entries[1].change_percent, 0.0);
        assert_eq!(cmp.count(RowStatus::Missing), 2);
    }

    #[test]
    fn test_compare_within_noise() {
        let baseline = set(&[("a", 100.0, Unit::Gflops)]);
        let current = set(&[("a", 100.05, Unit::Gflops)]);
        let cmp = compare(&baseline, &current);
        assert_eq!(cmp.entries[0].status(), RowStatus::Unchanged);
    }

    #[test]
    fn test_compare_unit_from_first_key() {
        let baseline = set(&[("b", 1.0, Unit::Gflops)]);
        let current = set(&[("a", 1.0, Unit::GbPerSec), ("b", 1.0, Unit::GbPerSec)]);
        assert_eq!(compare(&baseline, &current).unit, Unit::GbPerSec);

        let baseline = set(&[("a", 1.0, Unit::Gflops)]);
        assert_eq!(compare(&baseline, &current).unit, Unit::Gflops);
    }

    #[test]
    fn test_compare_empty() {
        let cmp = compare(&ResultSet::new(), &ResultSet::new());
        assert_eq!(cmp.unit, Unit::Gflops);
        assert!(cmp.entries.is_empty());
        assert_eq!(cmp.max_key_len(), 0);
    }
}
