use std::io::Write;

use serde::Serialize;

use super::{ComparisonReporter, ReportLabels};
use crate::compare::{Comparison, ComparisonEntry};
use crate::unit::Unit;

/// Machine readable JSON report.
pub struct JsonReporter;

impl ComparisonReporter for JsonReporter {
    fn print(&self, w: &mut dyn Write, cmp: &Comparison, labels: &ReportLabels) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(
            &mut *w,
            &Report {
                unit: cmp.unit,
                baseline_commit: labels.baseline_commit.as_deref(),
                compare_commit: labels.compare_commit.as_deref(),
                entries: &cmp.entries,
            },
        )?;

        writeln!(w)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Report<'a> {
    unit: Unit,
    baseline_commit: Option<&'a str>,
    compare_commit: Option<&'a str>,
    entries: &'a [ComparisonEntry],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report() {
        let cmp = Comparison {
            unit: Unit::GbPerSec,
            entries: vec![ComparisonEntry {
                key: "ADD".to_string(),
                baseline: None,
                compare: Some(4.21),
                change_percent: 0.0,
            }],
        };
        let labels = ReportLabels { baseline_commit: None, compare_commit: Some("abc1234".to_string()) };

        let mut out = Vec::new();
        JsonReporter.print(&mut out, &cmp, &labels).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(v["unit"], "GB/s");
        assert!(v["baseline_commit"].is_null());
        assert_eq!(v["compare_commit"], "abc1234");
        assert_eq!(v["entries"][0]["key"], "ADD");
        assert!(v["entries"][0]["baseline"].is_null());
        assert_eq!(v["entries"][0]["compare"], 4.21);
        assert_eq!(v["entries"][0]["change_percent"], 0.0);
    }
}
