//! Throughput units and their normalization.

use std::str::FromStr;

use serde::Serialize;

/// The normalized unit of a benchmark result.
///
/// Every compute throughput is reported in GFLOPS and every bandwidth
/// throughput in GB/s, regardless of the prefix used in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Unit {
    /// Billions of floating-point operations per second.
    #[strum(to_string = "GFLOPS")]
    #[serde(rename = "GFLOPS")]
    Gflops,
    /// Gigabytes per second.
    #[strum(to_string = "GB/s")]
    #[serde(rename = "GB/s")]
    GbPerSec,
}

/// Metric prefix of a unit token, relative to the normalized unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// `M` prefix, a thousandth of the normalized unit.
    Mega,
    /// `G` prefix, the normalized unit itself.
    Giga,
    /// `T` prefix, a thousand times the normalized unit.
    Tera,
}

impl Scale {
    /// Convert a value expressed with this prefix into the normalized unit.
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            Self::Mega => value / 1000.0,
            Self::Giga => value,
            Self::Tera => value * 1000.0,
        }
    }
}

/// A unit token as it appears at the end of a benchmark line,
/// e.g. `MFLOPS` or `TB/s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitToken {
    /// The unit family the token belongs to.
    pub unit: Unit,
    /// The prefix of the token.
    pub scale: Scale,
}

impl UnitToken {
    /// Normalize `value`, expressed in this token, into [`Self::unit`].
    pub fn normalize(&self, value: f64) -> f64 {
        self.scale.normalize(value)
    }

    fn flops(s: &str) -> Option<Self> {
        let scale = match s {
            "MFLOPS" => Scale::Mega,
            "GFLOPS" => Scale::Giga,
            "TFLOPS" => Scale::Tera,
            _ => return None,
        };
        Some(Self { unit: Unit::Gflops, scale })
    }

    fn bandwidth(s: &str) -> Option<Self> {
        let scale = match s {
            "MB/s" => Scale::Mega,
            "GB/s" => Scale::Giga,
            "TB/s" => Scale::Tera,
            _ => return None,
        };
        Some(Self { unit: Unit::GbPerSec, scale })
    }
}

impl FromStr for UnitToken {
    type Err = String;

    /// FLOPS tokens are tried before bandwidth tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::flops(s)
            .or_else(|| Self::bandwidth(s))
            .ok_or_else(|| format!("unknown throughput unit '{}'", s))
    }
}
