//! Parsing of single benchmark log lines.
//!
//! A benchmark line looks like
//!
//! ```text
//! MUL_MAT(type_a=f16,...): 744 runs - 1660.11 us/run - 134.48 MFLOP/run - 81.01 GFLOPS
//! ADD(type=f32,...):     98280 runs -   10.87 us/run -       48 kB/run -  4.21 GB/s
//! ```
//!
//! Everything before the first colon is the test configuration key. The line
//! must end with a number followed by a throughput unit; anything else is
//! treated as log noise.

use crate::unit::{Unit, UnitToken};

/// Outcome of parsing a single log line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// The line carries a throughput measurement.
    Matched {
        /// Test configuration label, trimmed.
        key: String,
        /// Value normalized to [`Unit`].
        value: f64,
        /// Normalized unit of `value`.
        unit: Unit,
    },
    /// The line is not a benchmark result (header, blank line, log noise...).
    NoMatch,
}

impl ParsedLine {
    /// Returns true if the line carried a measurement.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// Parse a raw log line.
pub fn parse_line(line: &str) -> ParsedLine {
    let Some((key, data)) = line.trim().split_once(':') else {
        return ParsedLine::NoMatch;
    };
    let key = key.trim();
    if key.is_empty() {
        return ParsedLine::NoMatch;
    }

    match match_throughput(strip_ansi(data).trim()) {
        Some((value, token)) => ParsedLine::Matched {
            key: key.to_string(),
            value: token.normalize(value),
            unit: token.unit,
        },
        None => ParsedLine::NoMatch,
    }
}

/// Match `<number> <unit>` anchored at the end of `s`.
///
/// The number is the trailing run of ASCII digits and dots of the
/// second-to-last token.
fn match_throughput(s: &str) -> Option<(f64, UnitToken)> {
    let mut tokens = s.split_whitespace().rev();
    let token: UnitToken = tokens.next()?.parse().ok()?;
    let number = numeric_suffix(tokens.next()?)?;
    let value = number.parse::<f64>().ok()?;
    Some((value, token))
}

fn numeric_suffix(token: &str) -> Option<&str> {
    token
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_ascii_digit() || c == '.')
        .last()
        .map(|(i, _)| &token[i..])
}

/// Remove ANSI SGR sequences (`ESC [ <digits and ;> m`) from `s`.
///
/// Incomplete escape sequences are kept verbatim.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('\x1b') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match sgr_len(tail) {
            Some(len) => rest = &tail[len..],
            None => {
                out.push('\x1b');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length in bytes of the SGR sequence at the start of `s`, if any.
fn sgr_len(s: &str) -> Option<usize> {
    let params = s.strip_prefix("\x1b[")?;
    let n = params
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b';')
        .count();
    (params.as_bytes().get(n) == Some(&b'm')).then_some(2 + n + 1)
}
