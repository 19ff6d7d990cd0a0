//! This module provides the command line interface of the comparison tool.
//!
//! ```shell
//! $ perfcmp --help
//! Usage: perfcmp [OPTIONS] --baseline <BASELINE> --compare <COMPARE>
//!
//! Options:
//!   -b, --baseline <BASELINE>  Path to the baseline benchmark results file
//!   -c, --compare <COMPARE>    Path to the benchmark results file to compare against the baseline
//!   -o, --output <OUTPUT>      Path to the output report file [default: comparison_backend_ops_perf.txt]
//!   -f, --format <FORMAT>      Format of the output report [default: text]
//!   -q, --quiet                Do not print the summary line
//!   -v, --verbose              Enable debug logging (or set PERFCMP_LOG)
//!   -h, --help                 Print help
//! ```
use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{
    Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use crossterm::{style::Stylize, tty::IsTty};

use crate::{
    compare::{Comparison, RowStatus, compare},
    error::CompareError,
    reporter::{ComparisonReporter, JsonReporter, ReportLabels, TextReporter},
    results::{ResultSet, load_file},
};

/// Default path of the generated report.
pub const DEFAULT_OUTPUT: &str = "comparison_backend_ops_perf.txt";

#[derive(Parser, Clone, Debug)]
#[clap(
    name = "perfcmp",
    about = "Compare two benchmark result files and generate a report.",
    styles(Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Cyan.on_default())
    )
)]
#[allow(missing_docs)]
pub struct CompareCli {
    /// Path to the baseline benchmark results file
    #[clap(long, short = 'b')]
    pub baseline: PathBuf,

    /// Path to the benchmark results file to compare against the baseline
    #[clap(long, short = 'c')]
    pub compare: PathBuf,

    /// Path to the output report file
    #[clap(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Format of the output report
    #[clap(long, short = 'f', value_enum, default_value_t = ReportFormat::Text, ignore_case = true)]
    pub format: ReportFormat,

    /// Do not print the summary line
    #[clap(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging (or set PERFCMP_LOG)
    #[clap(long, short = 'v')]
    pub verbose: bool,
}

/// Comparison report format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width plain text table. See [`TextReporter`].
    Text,

    /// JSON document. See [`JsonReporter`].
    Json,
}

/// Load both logs, compare them and write the report.
///
/// Nothing is written if either log is missing or both hold no results.
pub fn run(cli: &CompareCli) -> anyhow::Result<Comparison> {
    let baseline = load("baseline", &cli.baseline)?;
    let current = load("compare", &cli.compare)?;

    if baseline.is_empty() && current.is_empty() {
        return Err(CompareError::NoResults {
            baseline: cli.baseline.clone(),
            compare: cli.compare.clone(),
        }
        .into());
    }

    let cmp = compare(&baseline, &current);
    let labels = ReportLabels::from_paths(&cli.baseline, &cli.compare);

    let reporter: &dyn ComparisonReporter = match cli.format {
        ReportFormat::Text => &TextReporter,
        ReportFormat::Json => &JsonReporter,
    };
    write_report(reporter, &cli.output, &cmp, &labels)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Comparison report successfully generated at: {}", cli.output.display());

    if !cli.quiet {
        print_summary(&mut stdout(), &cmp)?;
    }

    Ok(cmp)
}

fn load(role: &str, path: &Path) -> anyhow::Result<ResultSet> {
    #[cfg(feature = "tracing")]
    tracing::info!("Loading {role} results from: {}", path.display());

    load_file(path).with_context(|| format!("could not load {role} results"))
}

fn write_report(
    reporter: &dyn ComparisonReporter,
    path: &Path,
    cmp: &Comparison,
    labels: &ReportLabels,
) -> anyhow::Result<()> {
    let file = File::create(path).map_err(|e| CompareError::Write { path: path.to_path_buf(), source: e })?;
    let mut w = BufWriter::new(file);
    reporter.print(&mut w, cmp, labels)?;
    w.flush()
        .map_err(|e| CompareError::Write { path: path.to_path_buf(), source: e })?;
    Ok(())
}

fn print_summary(w: &mut dyn Write, cmp: &Comparison) -> anyhow::Result<()> {
    let colored = stdout().is_tty();
    let part = |status: RowStatus| {
        let text = format!("{} {}", cmp.count(status), status);
        if !colored {
            return text;
        }
        match status {
            RowStatus::Improved => text.green().bold().to_string(),
            RowStatus::Regressed => text.red().bold().to_string(),
            RowStatus::Unchanged => text,
            RowStatus::Missing => text.yellow().to_string(),
        }
    };

    writeln!(
        w,
        "{} tests ({}): {}, {}, {}, {}",
        cmp.entries.len(),
        cmp.unit,
        part(RowStatus::Improved),
        part(RowStatus::Regressed),
        part(RowStatus::Unchanged),
        part(RowStatus::Missing),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = CompareCli::parse_from(["perfcmp", "-b", "base.log", "-c", "new.log"]);
        assert_eq!(cli.baseline, PathBuf::from("base.log"));
        assert_eq!(cli.compare, PathBuf::from("new.log"));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.format, ReportFormat::Text);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_long_options() {
        let cli = CompareCli::parse_from([
            "perfcmp",
            "--baseline",
            "a.log",
            "--compare",
            "b.log",
            "--output",
            "out.json",
            "--format",
            "JSON",
            "--quiet",
        ]);
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(cli.format, ReportFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_requires_inputs() {
        assert!(CompareCli::try_parse_from(["perfcmp", "-b", "a.log"]).is_err());
        assert!(CompareCli::try_parse_from(["perfcmp", "-c", "b.log"]).is_err());
    }
}
