//! Contract fields that a sweep can vary.

use std::fmt;
use std::str::FromStr;

/// Input parameter varied by a sensitivity sweep.
///
/// Strike and option type are fixed by the contract and cannot be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SweepField {
    /// Spot price S
    Spot,
    /// Time to maturity T in years
    Expiry,
    /// Volatility σ
    Volatility,
    /// Risk-free rate r
    Rate,
}

impl SweepField {
    /// All sweepable fields.
    pub const ALL: [SweepField; 4] = [
        SweepField::Spot,
        SweepField::Expiry,
        SweepField::Volatility,
        SweepField::Rate,
    ];

    /// Lowercase field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepField::Spot => "spot",
            SweepField::Expiry => "expiry",
            SweepField::Volatility => "volatility",
            SweepField::Rate => "rate",
        }
    }
}

impl fmt::Display for SweepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown sweep field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sweep field: {0}. Supported: spot, expiry, volatility, rate")]
pub struct ParseSweepFieldError(pub String);

impl FromStr for SweepField {
    type Err = ParseSweepFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spot" | "s" => Ok(SweepField::Spot),
            "expiry" | "t" => Ok(SweepField::Expiry),
            "volatility" | "vol" | "sigma" => Ok(SweepField::Volatility),
            "rate" | "r" => Ok(SweepField::Rate),
            _ => Err(ParseSweepFieldError(s.to_string())),
        }
    }
}
