//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate contracts
//!
//! When `T == 0` or `σ == 0` the terms above divide by zero. The price is
//! then the discounted intrinsic value `max(S - K·e^(-rT), 0)` for a call
//! and `max(K·e^(-rT) - S, 0)` for a put, which is the σ → 0⁺ limit of the
//! formula and equals `max(S - K, 0)` / `max(K - S, 0)` at expiry. d₁ and d₂
//! are reported as their limits: `+∞` when `S > K·e^(-rT)`, `-∞` when
//! `S < K·e^(-rT)`, and `0` exactly at the forward.

use pricer_core::math::distributions::norm_cdf;
use tracing::trace;

use super::error::AnalyticalError;
use crate::instruments::{OptionContract, OptionType};

/// Result of pricing one contract.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let result = price(&call).unwrap();
/// assert!((result.price - 10.4506).abs() < 1e-4);
/// assert!(!result.degenerate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// The d₁ term (±∞ or 0 for degenerate contracts)
    pub d1: f64,
    /// The d₂ term (equal to d₁ for degenerate contracts)
    pub d2: f64,
    /// Theoretical option value, never negative
    pub price: f64,
    /// True when the contract has `T == 0` or `σ == 0`
    pub degenerate: bool,
}

/// Computes the d₁ and d₂ terms of the Black-Scholes formula.
///
/// Shared by [`price`] and the Greeks so both use identical terms. For
/// degenerate contracts returns the sign-consistent limits described in the
/// module documentation; the result is never NaN for a valid contract.
///
/// # Examples
/// ```
/// use pricer_models::analytical::d1_d2;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let c = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let (d1, d2) = d1_d2(&c);
/// assert!((d1 - 0.35).abs() < 1e-12);
/// assert!((d2 - 0.15).abs() < 1e-12);
///
/// let expired = OptionContract::new(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(d1_d2(&expired), (f64::INFINITY, f64::INFINITY));
/// ```
pub fn d1_d2(contract: &OptionContract) -> (f64, f64) {
    if contract.is_degenerate() {
        let limit = degenerate_limit(contract);
        return (limit, limit);
    }

    let vol_sqrt_t = contract.total_volatility();
    let volatility = contract.volatility();

    // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    let log_moneyness = (contract.spot() / contract.strike()).ln();
    let drift = (contract.rate() + 0.5 * volatility * volatility) * contract.expiry();
    let d1 = (log_moneyness + drift) / vol_sqrt_t;

    (d1, d1 - vol_sqrt_t)
}

/// Limit of d₁ (and d₂) as σ√T → 0⁺.
fn degenerate_limit(contract: &OptionContract) -> f64 {
    let forward_moneyness = contract.spot() - contract.discounted_strike();
    if forward_moneyness > 0.0 {
        f64::INFINITY
    } else if forward_moneyness < 0.0 {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}

/// Prices a European option.
///
/// # Errors
/// `AnalyticalError::Instrument` if the contract fails validation.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// // At expiry the price is the intrinsic value
/// let call = OptionContract::new(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(price(&call).unwrap().price, 10.0);
/// ```
pub fn price(contract: &OptionContract) -> Result<PricingResult, AnalyticalError> {
    contract.validate()?;

    let (d1, d2) = d1_d2(contract);

    if contract.is_degenerate() {
        let value = contract
            .option_type()
            .intrinsic(contract.spot(), contract.discounted_strike());
        trace!(
            expiry = contract.expiry(),
            volatility = contract.volatility(),
            price = value,
            "degenerate contract priced at discounted intrinsic value"
        );
        return Ok(PricingResult {
            d1,
            d2,
            price: value,
            degenerate: true,
        });
    }

    let spot = contract.spot();
    let discounted_strike = contract.discounted_strike();

    let value = match contract.option_type() {
        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        OptionType::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        OptionType::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    Ok(PricingResult {
        d1,
        d2,
        // rounding can leave deep out-of-the-money values a few ulps below zero
        price: value.max(0.0),
        degenerate: false,
    })
}

/// Prices the call on the same terms as `contract`.
pub fn price_call(contract: &OptionContract) -> Result<PricingResult, AnalyticalError> {
    price(&contract.with_option_type(OptionType::Call))
}

/// Prices the put on the same terms as `contract`.
pub fn price_put(contract: &OptionContract) -> Result<PricingResult, AnalyticalError> {
    price(&contract.with_option_type(OptionType::Put))
}
