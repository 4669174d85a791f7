//! Payoff command implementation
//!
//! Samples the payoff at maturity over a grid of underlying prices centred
//! on spot.

use clap::Args;
use pricer_core::math::grid::spot_grid;
use pricer_models::payoff::{breakeven, net_profit_curve, payoff_curve, PayoffPoint};
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::output::{fmt_num, to_csv, to_json, Table};
use crate::Result;

/// Arguments of the payoff command
#[derive(Debug, Clone, Args)]
pub struct PayoffArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Premium paid for the option
    #[arg(long, conflicts_with = "net")]
    pub premium: Option<f64>,

    /// Use the Black-Scholes price as the premium
    #[arg(long)]
    pub net: bool,

    /// Number of grid points (defaults to the configured grid size)
    #[arg(long)]
    pub points: Option<usize>,

    /// Lower end of the grid as a multiple of spot
    #[arg(long)]
    pub lower: Option<f64>,

    /// Upper end of the grid as a multiple of spot
    #[arg(long)]
    pub upper: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PayoffReport<'a> {
    premium: f64,
    breakeven: f64,
    points: &'a [PayoffPoint],
}

/// Run the payoff command
pub fn execute(args: &PayoffArgs, config: &CliConfig) -> Result<String> {
    let contract = args.contract.to_contract()?;
    let grid = spot_grid(
        contract.spot(),
        args.lower.unwrap_or(config.spot_range_lower),
        args.upper.unwrap_or(config.spot_range_upper),
        args.points.unwrap_or(config.grid_points),
    )?;

    let curve = if args.net {
        net_profit_curve(&contract, &grid)?
    } else {
        payoff_curve(&contract, &grid, args.premium.unwrap_or(0.0))?
    };
    let premium = curve.premium();
    let breakeven = breakeven(&contract, premium)?;
    let points: Vec<PayoffPoint> = curve.collect();
    info!(points = points.len(), premium, breakeven, "Payoff curve complete");

    match config.format {
        OutputFormat::Json => to_json(&PayoffReport {
            premium,
            breakeven,
            points: &points,
        }),
        OutputFormat::Csv => to_csv(&points),
        OutputFormat::Table => {
            let mut table = Table::new(&["Underlying", "Payoff"]);
            for point in &points {
                table.push_row(vec![fmt_num(point.underlying), fmt_num(point.payoff)]);
            }
            Ok(format!(
                "Premium: {}  Breakeven: {}\n{}",
                fmt_num(premium),
                fmt_num(breakeven),
                table.render()
            ))
        }
    }
}
