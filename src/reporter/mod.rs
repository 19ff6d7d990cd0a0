//! This module defines a trait for rendering comparison reports.
mod json;
mod text;

pub use json::JsonReporter;
pub use text::{TextReporter, format_change};

use std::path::Path;

use crate::commit::extract_commit_id;
use crate::compare::Comparison;

/// A trait for reporting comparison results.
pub trait ComparisonReporter {
    /// Print the report to the given writer.
    fn print(&self, w: &mut dyn std::io::Write, cmp: &Comparison, labels: &ReportLabels) -> anyhow::Result<()>;
}

/// Commit ids used to label the baseline and compare columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportLabels {
    /// Commit id of the baseline log.
    pub baseline_commit: Option<String>,
    /// Commit id of the compare log.
    pub compare_commit: Option<String>,
}

impl ReportLabels {
    /// Derive labels from the names of the two input logs.
    pub fn from_paths(baseline: &Path, compare: &Path) -> Self {
        Self {
            baseline_commit: extract_commit_id(baseline),
            compare_commit: extract_commit_id(compare),
        }
    }
}
