//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from pricing, Greeks, payoff and sweep operations

use pricer_core::types::{GridError, PricingError};
use thiserror::Error;

use crate::instruments::InstrumentError;

/// Analytical pricing errors.
///
/// Detailed failure modes of the public operations. Each variant belongs to
/// one of the two classes of [`PricingError`]:
///
/// | Variant | Class |
/// |---------|-------|
/// | `Instrument` | invalid parameter |
/// | `SingularGreeks` | invalid parameter |
/// | `InvalidPremium` | invalid parameter |
/// | `Range` | invalid range |
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::SingularGreeks { expiry: 0.0, volatility: 0.2 };
/// assert!(err.is_invalid_parameter());
/// assert!(format!("{}", err).contains("singular"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum AnalyticalError {
    /// A contract field is outside its domain.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Gamma, vega and theta divide by σ√T, which is zero.
    #[error("Greeks are singular for degenerate contract: T = {expiry}, σ = {volatility}")]
    SingularGreeks {
        /// Time to maturity of the contract
        expiry: f64,
        /// Volatility of the contract
        volatility: f64,
    },

    /// Premium is not a finite number.
    #[error("Invalid premium: {premium}")]
    InvalidPremium {
        /// The invalid premium value
        premium: f64,
    },

    /// Sampling range is empty, non-finite or not strictly increasing.
    #[error("Invalid sampling range: {0}")]
    Range(#[from] GridError),
}

impl AnalyticalError {
    /// Returns true for invalid-parameter failures.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        !self.is_invalid_range()
    }

    /// Returns true for invalid-range failures.
    #[inline]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, AnalyticalError::Range(_))
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        if err.is_invalid_range() {
            PricingError::InvalidRange(err.to_string())
        } else {
            PricingError::InvalidParameter(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_error_is_transparent() {
        let err: AnalyticalError = InstrumentError::InvalidSpot { spot: -100.0 }.into();
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_singular_greeks_display() {
        let err = AnalyticalError::SingularGreeks {
            expiry: 0.0,
            volatility: 0.2,
        };
        assert_eq!(
            format!("{}", err),
            "Greeks are singular for degenerate contract: T = 0, σ = 0.2"
        );
    }

    #[test]
    fn test_range_display() {
        let err: AnalyticalError = GridError::NonMonotonic { index: 2 }.into();
        assert_eq!(
            format!("{}", err),
            "Invalid sampling range: Samples are not strictly increasing at index 2"
        );
    }

    #[test]
    fn test_classification() {
        let range: AnalyticalError = GridError::Empty.into();
        assert!(range.is_invalid_range());
        assert!(!range.is_invalid_parameter());

        let premium = AnalyticalError::InvalidPremium { premium: f64::NAN };
        assert!(premium.is_invalid_parameter());
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = AnalyticalError::Range(GridError::Empty).into();
        assert!(err.is_invalid_range());

        let err: PricingError =
            AnalyticalError::from(InstrumentError::InvalidStrike { strike: 0.0 }).into();
        match err {
            PricingError::InvalidParameter(msg) => assert!(msg.contains("strike")),
            _ => panic!("Expected InvalidParameter variant"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidPremium { premium: f64::INFINITY };
        let _: &dyn std::error::Error = &err;
    }
}
