//! Closed-form Black-Scholes sensitivities.
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | Delta | N(d₁) | N(d₁) - 1 |
//! | Gamma | n(d₁) / (Sσ√T) | same |
//! | Vega  | S·n(d₁)·√T | same |
//! | Theta | -S·n(d₁)σ/(2√T) - rK·e^(-rT)·N(d₂) | -S·n(d₁)σ/(2√T) + rK·e^(-rT)·N(-d₂) |
//! | Rho   | K·T·e^(-rT)·N(d₂) | -K·T·e^(-rT)·N(-d₂) |
//!
//! Vega is per unit of volatility and theta is per year. Use
//! [`GreeksResult::vega_per_percent`] and [`GreeksResult::theta_per_day`]
//! for quoting conventions.

use pricer_core::math::distributions::{norm_cdf, norm_pdf};

use super::black_scholes::d1_d2;
use super::error::AnalyticalError;
use crate::instruments::{OptionContract, OptionType};

/// First and second order sensitivities of one contract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per unit of volatility (1.0 = 100 vol points)
    pub vega: f64,
    /// -∂V/∂T per year
    pub theta: f64,
    /// ∂V/∂r per unit of rate
    pub rho: f64,
}

impl GreeksResult {
    /// Vega per one volatility point (σ moving by 0.01).
    #[inline]
    pub fn vega_per_percent(&self) -> f64 {
        self.vega / 100.0
    }

    /// Theta per calendar day for a given day-count basis.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::GreeksResult;
    ///
    /// let g = GreeksResult { delta: 0.5, gamma: 0.02, vega: 37.5, theta: -7.3, rho: 50.0 };
    /// assert!((g.theta_per_day(365.0) + 0.02).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn theta_per_day(&self, days_per_year: f64) -> f64 {
        self.theta / days_per_year
    }
}

/// Computes delta, gamma, vega, theta and rho.
///
/// # Errors
/// - `AnalyticalError::Instrument` if the contract fails validation
/// - `AnalyticalError::SingularGreeks` if `T == 0` or `σ == 0`
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let g = greeks(&call).unwrap();
/// assert!((g.delta - 0.6368).abs() < 1e-4);
///
/// let expired = OptionContract::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert!(greeks(&expired).is_err());
/// ```
pub fn greeks(contract: &OptionContract) -> Result<GreeksResult, AnalyticalError> {
    contract.validate()?;
    let (d1, d2) = d1_d2(contract);
    greeks_with_terms(contract, d1, d2)
}

/// Greeks from precomputed d₁/d₂; the contract must already be validated.
pub(crate) fn greeks_with_terms(
    contract: &OptionContract,
    d1: f64,
    d2: f64,
) -> Result<GreeksResult, AnalyticalError> {
    if contract.is_degenerate() {
        return Err(AnalyticalError::SingularGreeks {
            expiry: contract.expiry(),
            volatility: contract.volatility(),
        });
    }

    let spot = contract.spot();
    let strike = contract.strike();
    let expiry = contract.expiry();
    let rate = contract.rate();
    let volatility = contract.volatility();

    let sqrt_t = expiry.sqrt();
    let df = contract.discount_factor();
    let pdf_d1 = norm_pdf(d1);
    let cdf_d1 = norm_cdf(d1);

    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;
    let time_decay = -(spot * pdf_d1 * volatility) / (2.0 * sqrt_t);

    let (delta, theta, rho) = match contract.option_type() {
        OptionType::Call => {
            let cdf_d2 = norm_cdf(d2);
            (
                cdf_d1,
                time_decay - rate * strike * df * cdf_d2,
                strike * expiry * df * cdf_d2,
            )
        }
        OptionType::Put => {
            let cdf_neg_d2 = norm_cdf(-d2);
            (
                cdf_d1 - 1.0,
                time_decay + rate * strike * df * cdf_neg_d2,
                -strike * expiry * df * cdf_neg_d2,
            )
        }
    };

    Ok(GreeksResult {
        delta,
        gamma,
        vega,
        theta,
        rho,
    })
}
