//! Year fraction calculation for option expiries.
//!
//! Option models take time to maturity in years. This module converts a
//! valuation date and a maturity date into that figure.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::error::DateError;

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `Actual365Fixed`: Actual days / 365 (standard for equity derivatives)
/// - `Actual360`: Actual days / 360 (money market instruments)
///
/// # Usage
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
///
/// let yf = DayCountConvention::Actual365Fixed.year_fraction(start, end);
/// // 182 days / 365.0 ≈ 0.4986
/// assert!((yf - 0.4986).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ACT/365"))]
    Actual365Fixed,

    /// Actual/360: actual_days / 360.0
    #[cfg_attr(feature = "serde", serde(rename = "ACT/360"))]
    Actual360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Actual360.name(), "ACT/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365",
            DayCountConvention::Actual360 => "ACT/360",
        }
    }

    /// Number of days in the convention's year.
    #[inline]
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => 365.0,
            DayCountConvention::Actual360 => 360.0,
        }
    }

    /// Calculate year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    pub fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let days = (end - start).num_days() as f64;
        days / self.days_per_year()
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACT/365" | "ACT/365F" | "ACT365" => Ok(DayCountConvention::Actual365Fixed),
            "ACT/360" | "ACT360" => Ok(DayCountConvention::Actual360),
            _ => Err(DateError::ParseError(format!(
                "Unknown day count convention: {}",
                s
            ))),
        }
    }
}

/// Parses an ISO 8601 date (YYYY-MM-DD).
///
/// # Examples
/// ```
/// use pricer_core::types::time::parse_date;
///
/// assert!(parse_date("2025-03-21").is_ok());
/// assert!(parse_date("21/03/2025").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
}

/// Time to maturity in years between a valuation and a maturity date.
///
/// A maturity equal to the valuation date gives `0.0` (an option at expiry).
///
/// # Errors
/// `DateError::MaturityBeforeValuation` if `maturity < valuation`.
///
/// # Examples
/// ```
/// use pricer_core::types::time::{time_to_maturity, DayCountConvention};
/// use chrono::NaiveDate;
///
/// let valuation = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let maturity = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
///
/// let t = time_to_maturity(valuation, maturity, DayCountConvention::Actual365Fixed).unwrap();
/// assert_eq!(t, 1.0);
/// ```
pub fn time_to_maturity(
    valuation: NaiveDate,
    maturity: NaiveDate,
    convention: DayCountConvention,
) -> Result<f64, DateError> {
    if maturity < valuation {
        return Err(DateError::MaturityBeforeValuation {
            valuation: valuation.format("%Y-%m-%d").to_string(),
            maturity: maturity.format("%Y-%m-%d").to_string(),
        });
    }
    Ok(convention.year_fraction(valuation, maturity))
}
