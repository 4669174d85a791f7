//! Payoff-at-maturity curves.
//!
//! A payoff curve is the intrinsic value at expiry net of the premium paid,
//! sampled over a range of hypothetical underlying prices S':
//!
//! - Call: max(S' - K, 0) - premium
//! - Put: max(K - S', 0) - premium
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionContract, OptionType};
//! use pricer_models::payoff::payoff_curve;
//!
//! let call = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let range = [80.0, 100.0, 120.0];
//! let payoffs: Vec<f64> = payoff_curve(&call, &range, 5.0)
//!     .unwrap()
//!     .map(|p| p.payoff)
//!     .collect();
//! assert_eq!(payoffs, vec![-5.0, -5.0, 15.0]);
//! ```

use std::iter::FusedIterator;
use std::slice;

use pricer_core::math::grid::validate_strictly_increasing;

use crate::analytical::{price, AnalyticalError};
use crate::instruments::{OptionContract, OptionType};

/// One sample of a payoff curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint {
    /// Hypothetical underlying price at maturity
    pub underlying: f64,
    /// Intrinsic value at that price minus the premium
    pub payoff: f64,
}

/// Lazy payoff curve over a validated price range.
///
/// Yields one [`PayoffPoint`] per input sample, in input order. Cloning
/// restarts the curve from the current position.
#[derive(Debug, Clone)]
pub struct PayoffCurve<'a> {
    option_type: OptionType,
    strike: f64,
    premium: f64,
    prices: slice::Iter<'a, f64>,
}

impl PayoffCurve<'_> {
    /// Premium subtracted from every sample.
    pub fn premium(&self) -> f64 {
        self.premium
    }

    fn point(&self, underlying: f64) -> PayoffPoint {
        PayoffPoint {
            underlying,
            payoff: self.option_type.intrinsic(underlying, self.strike) - self.premium,
        }
    }
}

impl Iterator for PayoffCurve<'_> {
    type Item = PayoffPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let underlying = *self.prices.next()?;
        Some(self.point(underlying))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.prices.size_hint()
    }
}

impl DoubleEndedIterator for PayoffCurve<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let underlying = *self.prices.next_back()?;
        Some(self.point(underlying))
    }
}

impl ExactSizeIterator for PayoffCurve<'_> {}

impl FusedIterator for PayoffCurve<'_> {}

/// Builds the payoff curve of `contract` over `price_range`.
///
/// # Errors
/// - `AnalyticalError::Instrument` if the contract fails validation
/// - `AnalyticalError::InvalidPremium` if `premium` is not finite
/// - `AnalyticalError::Range` if `price_range` is empty, contains a
///   non-finite value or is not strictly increasing
pub fn payoff_curve<'a>(
    contract: &OptionContract,
    price_range: &'a [f64],
    premium: f64,
) -> Result<PayoffCurve<'a>, AnalyticalError> {
    contract.validate()?;
    if !premium.is_finite() {
        return Err(AnalyticalError::InvalidPremium { premium });
    }
    validate_strictly_increasing(price_range)?;

    Ok(PayoffCurve {
        option_type: contract.option_type(),
        strike: contract.strike(),
        premium,
        prices: price_range.iter(),
    })
}

/// Profit/loss at maturity for a buyer who paid the model price.
///
/// Same as [`payoff_curve`] with the Black-Scholes price of `contract` as the
/// premium.
pub fn net_profit_curve<'a>(
    contract: &OptionContract,
    price_range: &'a [f64],
) -> Result<PayoffCurve<'a>, AnalyticalError> {
    let premium = price(contract)?.price;
    payoff_curve(contract, price_range, premium)
}

/// Underlying price at maturity where the position breaks even.
///
/// `K + premium` for a call, `K - premium` for a put. A put breakeven below
/// zero means the position cannot recover its premium.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_models::payoff::breakeven;
///
/// let put = OptionContract::new(200.0, 200.0, 0.5, 0.02, 0.2, OptionType::Put).unwrap();
/// assert_eq!(breakeven(&put, 10.0).unwrap(), 190.0);
/// ```
pub fn breakeven(contract: &OptionContract, premium: f64) -> Result<f64, AnalyticalError> {
    if !premium.is_finite() {
        return Err(AnalyticalError::InvalidPremium { premium });
    }
    Ok(match contract.option_type() {
        OptionType::Call => contract.strike() + premium,
        OptionType::Put => contract.strike() - premium,
    })
}
