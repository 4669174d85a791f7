//! Price command implementation
//!
//! Prices a single European option with the Black-Scholes formula.

use pricer_models::instruments::{OptionContract, OptionType};
use pricer_models::{price, PricingResult};
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::output::{fmt_num, to_csv, to_json, Table};
use crate::Result;

/// Flat record of one priced contract
#[derive(Debug, Clone, Serialize)]
struct PriceRecord {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    d1: f64,
    d2: f64,
    price: f64,
    degenerate: bool,
}

impl PriceRecord {
    fn new(contract: &OptionContract, pricing: &PricingResult) -> Self {
        Self {
            option_type: contract.option_type(),
            spot: contract.spot(),
            strike: contract.strike(),
            expiry: contract.expiry(),
            rate: contract.rate(),
            volatility: contract.volatility(),
            d1: pricing.d1,
            d2: pricing.d2,
            price: pricing.price,
            degenerate: pricing.degenerate,
        }
    }
}

/// Run the price command
pub fn execute(args: &ContractArgs, config: &CliConfig) -> Result<String> {
    let contract = args.to_contract()?;
    let pricing = price(&contract)?;
    info!(
        option_type = %contract.option_type(),
        price = pricing.price,
        degenerate = pricing.degenerate,
        "Pricing complete"
    );

    let record = PriceRecord::new(&contract, &pricing);
    match config.format {
        OutputFormat::Json => to_json(&record),
        OutputFormat::Csv => to_csv(&[record]),
        OutputFormat::Table => {
            let mut table = Table::key_value([
                ("Type", record.option_type.to_string()),
                ("Spot (S)", fmt_num(record.spot)),
                ("Strike (K)", fmt_num(record.strike)),
                ("Expiry (T)", fmt_num(record.expiry)),
                ("Rate (r)", fmt_num(record.rate)),
                ("Volatility (σ)", fmt_num(record.volatility)),
                ("d1", fmt_num(record.d1)),
                ("d2", fmt_num(record.d2)),
                ("Price", fmt_num(record.price)),
            ]);
            if record.degenerate {
                table.push_row(vec![
                    "Note".to_string(),
                    "degenerate contract, discounted intrinsic value".to_string(),
                ]);
            }
            Ok(table.render())
        }
    }
}
