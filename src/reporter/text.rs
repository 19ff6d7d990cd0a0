use std::io::Write;

use super::{ComparisonReporter, ReportLabels};
use crate::compare::{Comparison, NOISE_THRESHOLD};
use crate::unit::Unit;

const KEY_HEADER: &str = "Test Configuration";
const CHANGE_HEADER: &str = "Change (%)";
const VALUE_WIDTH: usize = 25;
const CHANGE_WIDTH: usize = 15;

/// Fixed-width plain text table.
pub struct TextReporter;

impl ComparisonReporter for TextReporter {
    fn print(&self, w: &mut dyn Write, cmp: &Comparison, labels: &ReportLabels) -> anyhow::Result<()> {
        let key_width = cmp.max_key_len() + 2;
        let baseline = column_header("Baseline", labels.baseline_commit.as_deref(), cmp.unit);
        let compare = column_header("Compare", labels.compare_commit.as_deref(), cmp.unit);

        let header = format!(
            "{KEY_HEADER:<key_width$} {baseline:>VALUE_WIDTH$} {compare:>VALUE_WIDTH$} {CHANGE_HEADER:>CHANGE_WIDTH$}"
        );
        writeln!(w, "{header}")?;
        writeln!(w, "{}", "-".repeat(header.chars().count()))?;

        for entry in &cmp.entries {
            writeln!(
                w,
                "{:<key_width$} {:>VALUE_WIDTH$} {:>VALUE_WIDTH$} {:>CHANGE_WIDTH$}",
                entry.key,
                render_value(entry.baseline),
                render_value(entry.compare),
                format_change(entry.change_percent),
            )?;
        }

        Ok(())
    }
}

fn column_header(role: &str, commit: Option<&str>, unit: Unit) -> String {
    match commit {
        Some(commit) => format!("{role} ({commit}) {unit}"),
        None => format!("{role} {unit}"),
    }
}

fn render_value(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

/// Format a percentage change for the report.
///
/// Changes within the noise threshold render as ` ~0.00%`.
pub fn format_change(change: f64) -> String {
    if change > NOISE_THRESHOLD {
        format!("+{change:.2}%")
    } else if change < -NOISE_THRESHOLD {
        format!("{change:.2}%")
    } else {
        " ~0.00%".to_string()
    }
}
