//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands return their
//! rendered output; `main` prints it.

pub mod greeks;
pub mod payoff;
pub mod price;
pub mod sweep;

use chrono::{Local, NaiveDate};
use clap::Args;
use pricer_core::types::{parse_date, time_to_maturity, DayCountConvention};
use pricer_models::instruments::{OptionContract, OptionType};
use tracing::debug;

use crate::{CliError, Result};

/// Contract parameters shared by every command
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying (S)
    #[arg(long, allow_negative_numbers = true)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, allow_negative_numbers = true)]
    pub strike: f64,

    /// Time to maturity in years (T)
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "maturity_date",
        conflicts_with = "maturity_date"
    )]
    pub expiry: Option<f64>,

    /// Maturity date (YYYY-MM-DD), alternative to --expiry
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub maturity_date: Option<String>,

    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "YYYY-MM-DD", requires = "maturity_date")]
    pub valuation_date: Option<String>,

    /// Day count convention for date-based maturities (ACT/365, ACT/360)
    #[arg(long, default_value = "ACT/365")]
    pub day_count: DayCountConvention,

    /// Continuously compounded risk-free rate (r), e.g. 0.05
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility (σ), e.g. 0.2
    #[arg(long = "vol", visible_alias = "volatility", allow_negative_numbers = true)]
    pub volatility: f64,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

impl ContractArgs {
    /// Time to maturity in years, from --expiry or the maturity dates
    pub fn expiry_years(&self) -> Result<f64> {
        self.expiry_years_from(Local::now().date_naive())
    }

    fn expiry_years_from(&self, today: NaiveDate) -> Result<f64> {
        match (self.expiry, &self.maturity_date) {
            (Some(expiry), _) => Ok(expiry),
            (None, Some(maturity)) => {
                let maturity = parse_date(maturity)?;
                let valuation = match &self.valuation_date {
                    Some(date) => parse_date(date)?,
                    None => today,
                };
                Ok(time_to_maturity(valuation, maturity, self.day_count)?)
            }
            (None, None) => Err(CliError::InvalidArgument(
                "Either --expiry or --maturity-date is required".to_string(),
            )),
        }
    }

    /// Builds the validated contract
    pub fn to_contract(&self) -> Result<OptionContract> {
        let expiry = self.expiry_years()?;
        let contract = OptionContract::new(
            self.spot,
            self.strike,
            expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )?;
        debug!(?contract, "contract built");
        Ok(contract)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::atm_call_args;
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expiry_from_years() {
        assert_eq!(atm_call_args().expiry_years().unwrap(), 1.0);
    }

    #[test]
    fn test_expiry_from_dates() {
        let args = ContractArgs {
            expiry: None,
            maturity_date: Some("2026-01-01".to_string()),
            valuation_date: Some("2025-01-01".to_string()),
            ..atm_call_args()
        };
        assert_eq!(args.expiry_years().unwrap(), 1.0);
    }

    #[test]
    fn test_expiry_defaults_valuation_to_today() {
        let args = ContractArgs {
            expiry: None,
            maturity_date: Some("2025-07-01".to_string()),
            day_count: DayCountConvention::Actual360,
            ..atm_call_args()
        };
        let t = args.expiry_years_from(date(2025, 1, 1)).unwrap();
        assert_eq!(t, 181.0 / 360.0);
    }

    #[test]
    fn test_maturity_before_valuation_is_invalid_argument() {
        let args = ContractArgs {
            expiry: None,
            maturity_date: Some("2024-01-01".to_string()),
            valuation_date: Some("2025-01-01".to_string()),
            ..atm_call_args()
        };
        match args.to_contract().unwrap_err() {
            CliError::InvalidArgument(msg) => assert!(msg.contains("before")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_contract_is_pricing_error() {
        let args = ContractArgs {
            strike: -5.0,
            ..atm_call_args()
        };
        assert!(matches!(args.to_contract(), Err(CliError::Pricing(_))));
    }
}
