//! Greeks command implementation

use pricer_models::instruments::OptionType;
use pricer_models::{greeks, GreeksResult};
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::output::{fmt_num, to_csv, to_json, Table};
use crate::Result;

/// Greeks in the units selected by the configuration
#[derive(Debug, Clone, Serialize)]
struct GreeksRecord {
    option_type: OptionType,
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
    theta_per_day: f64,
    rho: f64,
}

impl GreeksRecord {
    fn new(option_type: OptionType, g: &GreeksResult, config: &CliConfig) -> Self {
        Self {
            option_type,
            delta: g.delta,
            gamma: g.gamma,
            vega: if config.vega_per_percent {
                g.vega_per_percent()
            } else {
                g.vega
            },
            theta: g.theta,
            theta_per_day: g.theta_per_day(config.days_per_year),
            rho: g.rho,
        }
    }
}

/// Run the greeks command
pub fn execute(args: &ContractArgs, config: &CliConfig) -> Result<String> {
    let contract = args.to_contract()?;
    let g = greeks(&contract)?;
    info!(option_type = %contract.option_type(), delta = g.delta, "Greeks complete");

    let record = GreeksRecord::new(contract.option_type(), &g, config);
    match config.format {
        OutputFormat::Json => to_json(&record),
        OutputFormat::Csv => to_csv(&[record]),
        OutputFormat::Table => {
            let vega_label = if config.vega_per_percent {
                "Vega (per 1% vol)"
            } else {
                "Vega (per unit vol)"
            };
            let table = Table::key_value([
                ("Type", record.option_type.to_string()),
                ("Delta", fmt_num(record.delta)),
                ("Gamma", fmt_num(record.gamma)),
                (vega_label, fmt_num(record.vega)),
                ("Theta (per year)", fmt_num(record.theta)),
                ("Theta (per day)", fmt_num(record.theta_per_day)),
                ("Rho", fmt_num(record.rho)),
            ]);
            Ok(table.render())
        }
    }
}
