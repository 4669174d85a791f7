//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The two error classes surfaced by every public pricing operation
//! - `GridError`: Errors from sampling grid construction and validation
//! - `DateError`: Errors from date parsing and year fraction calculation

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure of a pricing, Greeks, payoff or sweep operation falls in
/// one of two classes, so callers can translate them without inspecting the
/// detailed model error.
///
/// # Variants
/// - `InvalidParameter`: A contract field or scalar input violates its domain
/// - `InvalidRange`: A sampling range is empty, non-finite or out of order
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid parameter: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid contract parameter or scalar input
    InvalidParameter(String),

    /// Invalid sampling range
    InvalidRange(String),
}

impl PricingError {
    /// Returns true for the `InvalidParameter` class.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, PricingError::InvalidParameter(_))
    }

    /// Returns true for the `InvalidRange` class.
    #[inline]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, PricingError::InvalidRange(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PricingError::InvalidRange(msg) => write!(f, "Invalid range: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Sampling grid errors.
///
/// # Variants
/// - `Empty`: No samples were given
/// - `InsufficientPoints`: Too few points requested for a grid
/// - `NonFinite`: A sample is NaN or infinite
/// - `NonMonotonic`: Samples are not strictly increasing
/// - `InvalidBounds`: Grid bounds are inverted or out of domain
///
/// # Examples
/// ```
/// use pricer_core::types::GridError;
///
/// let err = GridError::NonMonotonic { index: 3 };
/// assert_eq!(format!("{}", err), "Samples are not strictly increasing at index 3");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GridError {
    /// No samples were given.
    #[error("Sampling range is empty")]
    Empty,

    /// Too few points requested.
    #[error("Insufficient grid points: got {got}, need at least {need}")]
    InsufficientPoints {
        /// Number of points requested
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// A sample is NaN or infinite.
    #[error("Sample at index {index} is not finite")]
    NonFinite {
        /// Index of the offending sample
        index: usize,
    },

    /// Samples are not strictly increasing.
    #[error("Samples are not strictly increasing at index {index}")]
    NonMonotonic {
        /// Index of the first sample not greater than its predecessor
        index: usize,
    },

    /// Grid bounds are inverted or out of domain.
    #[error("Invalid grid bounds: [{lower}, {upper}]")]
    InvalidBounds {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },
}

impl From<GridError> for PricingError {
    fn from(err: GridError) -> Self {
        PricingError::InvalidRange(err.to_string())
    }
}

/// Date-related errors.
///
/// # Variants
/// - `ParseError`: Failed to parse date string
/// - `MaturityBeforeValuation`: Maturity falls before the valuation date
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Maturity falls before the valuation date.
    #[error("Maturity {maturity} is before valuation date {valuation}")]
    MaturityBeforeValuation {
        /// Valuation date (ISO 8601)
        valuation: String,
        /// Maturity date (ISO 8601)
        maturity: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidRange("empty".to_string());
        assert_eq!(format!("{}", err), "Invalid range: empty");
    }

    #[test]
    fn test_pricing_error_classification() {
        assert!(PricingError::InvalidParameter(String::new()).is_invalid_parameter());
        assert!(!PricingError::InvalidParameter(String::new()).is_invalid_range());
        assert!(PricingError::InvalidRange(String::new()).is_invalid_range());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidParameter("test".to_string());
        let _: &dyn std::error::Error = &err;
        let grid: &dyn std::error::Error = &GridError::Empty;
        assert_eq!(grid.to_string(), "Sampling range is empty");
    }

    #[test]
    fn test_grid_error_to_pricing_error() {
        let err: PricingError = GridError::NonFinite { index: 4 }.into();
        match err {
            PricingError::InvalidRange(msg) => assert!(msg.contains("index 4")),
            _ => panic!("Expected InvalidRange variant"),
        }
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::MaturityBeforeValuation {
            valuation: "2025-01-01".to_string(),
            maturity: "2024-06-30".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Maturity 2024-06-30 is before valuation date 2025-01-01"
        );
    }
}
