//! European option contract.

use super::error::InstrumentError;
use super::option_type::OptionType;
use crate::sensitivity::SweepField;

/// Raw, unvalidated contract fields.
///
/// Deserialisation goes through this type so that an `OptionContract` can
/// never be constructed without validation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractParams {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
}

/// A European option under Black-Scholes assumptions.
///
/// Immutable value: every field is validated on construction and there are
/// no setters. Derived contracts (one field changed) are built with
/// [`OptionContract::with_field`], which validates again.
///
/// # Invariants
/// - `spot > 0`, `strike > 0`
/// - `expiry >= 0`, `volatility >= 0`
/// - all fields finite (`rate` may have any sign)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(call.spot(), 100.0);
/// assert!(!call.is_degenerate());
///
/// // Zero strike is rejected
/// assert!(OptionContract::new(100.0, 0.0, 1.0, 0.05, 0.2, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ContractParams"))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to maturity in years (must be non-negative)
    /// * `rate` - Risk-free rate, annualised (any finite value)
    /// * `volatility` - Annualised volatility (must be non-negative)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// The `InstrumentError` variant naming the first offending field,
    /// checked in the order spot, strike, expiry, rate, volatility.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        let contract = Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Creates a validated contract from raw parameters.
    pub fn from_params(params: ContractParams) -> Result<Self, InstrumentError> {
        Self::new(
            params.spot,
            params.strike,
            params.expiry,
            params.rate,
            params.volatility,
            params.option_type,
        )
    }

    /// Checks the contract invariants.
    ///
    /// Always succeeds for a contract obtained from a constructor; public
    /// operations call it on entry so that a failure is reported before any
    /// computation starts.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        if !is_positive(self.spot) {
            return Err(InstrumentError::InvalidSpot { spot: self.spot });
        }
        if !is_positive(self.strike) {
            return Err(InstrumentError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !is_non_negative(self.expiry) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: self.expiry,
            });
        }
        if !self.rate.is_finite() {
            return Err(InstrumentError::InvalidRate { rate: self.rate });
        }
        if !is_non_negative(self.volatility) {
            return Err(InstrumentError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        Ok(())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the raw parameters of this contract.
    pub fn params(&self) -> ContractParams {
        ContractParams {
            spot: self.spot,
            strike: self.strike,
            expiry: self.expiry,
            rate: self.rate,
            volatility: self.volatility,
            option_type: self.option_type,
        }
    }

    /// True when the closed-form d1/d2 are undefined, i.e. σ·√T is zero.
    ///
    /// Covers `T == 0`, `σ == 0`, and positive inputs whose product
    /// underflows.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.total_volatility() == 0.0
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Present value of the strike, K·e^(-rT).
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.discount_factor()
    }

    /// σ·√T, the total standard deviation of log-returns to maturity.
    #[inline]
    pub fn total_volatility(&self) -> f64 {
        self.volatility * self.expiry.sqrt()
    }

    /// Returns a copy with one field replaced.
    ///
    /// # Errors
    /// The `InstrumentError` for the replaced field if `value` is outside its
    /// domain.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{OptionContract, OptionType};
    /// use pricer_models::sensitivity::SweepField;
    ///
    /// let base = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    /// let bumped = base.with_field(SweepField::Volatility, 0.3).unwrap();
    /// assert_eq!(bumped.volatility(), 0.3);
    /// assert_eq!(bumped.spot(), base.spot());
    ///
    /// assert!(base.with_field(SweepField::Spot, -1.0).is_err());
    /// ```
    pub fn with_field(&self, field: SweepField, value: f64) -> Result<Self, InstrumentError> {
        let mut derived = *self;
        match field {
            SweepField::Spot => derived.spot = value,
            SweepField::Expiry => derived.expiry = value,
            SweepField::Volatility => derived.volatility = value,
            SweepField::Rate => derived.rate = value,
        }
        derived.validate()?;
        Ok(derived)
    }

    /// Returns the value of one field.
    #[inline]
    pub fn field(&self, field: SweepField) -> f64 {
        match field {
            SweepField::Spot => self.spot,
            SweepField::Expiry => self.expiry,
            SweepField::Volatility => self.volatility,
            SweepField::Rate => self.rate,
        }
    }

    /// Returns the same contract with a different option type.
    ///
    /// `with_option_type(self.option_type().opposite())` gives the matched
    /// contract used for put-call parity.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

fn is_non_negative(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

impl TryFrom<ContractParams> for OptionContract {
    type Error = InstrumentError;

    fn try_from(params: ContractParams) -> Result<Self, Self::Error> {
        Self::from_params(params)
    }
}
