//! Sweep command implementation
//!
//! Reprices a contract while varying one input and reports price and Greeks
//! at each value.

use clap::Args;
use pricer_core::math::grid::linspace;
use pricer_models::{sweep, SweepField, SweepPoint};
use serde::Serialize;
use tracing::{debug, info};

use super::ContractArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::output::{fmt_num, to_csv, to_json, Table};
use crate::{CliError, Result};

/// Arguments of the sweep command
#[derive(Debug, Clone, Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Field to vary (spot, expiry, volatility, rate)
    #[arg(long)]
    pub field: SweepField,

    /// Explicit comma-separated values, e.g. 0.1,0.2,0.3
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["from", "to"]
    )]
    pub values: Vec<f64>,

    /// Start of an evenly spaced range
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// End of an evenly spaced range
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Number of points in the range (defaults to the configured grid size)
    #[arg(long, requires = "from")]
    pub points: Option<usize>,

    /// Drop invalid points instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Evaluate points in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl SweepArgs {
    fn sweep_values(&self, config: &CliConfig) -> Result<Vec<f64>> {
        if !self.values.is_empty() {
            return Ok(self.values.clone());
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                Ok(linspace(from, to, self.points.unwrap_or(config.grid_points))?)
            }
            _ => Err(CliError::InvalidArgument(
                "Provide --values or both --from and --to".to_string(),
            )),
        }
    }
}

/// Flat record of one sweep point
#[derive(Debug, Clone, Serialize)]
struct SweepRecord {
    field: SweepField,
    value: f64,
    price: f64,
    d1: f64,
    d2: f64,
    delta: f64,
    gamma: f64,
    vega: f64,
    theta: f64,
    rho: f64,
}

impl SweepRecord {
    fn new(field: SweepField, point: &SweepPoint, config: &CliConfig) -> Self {
        let g = &point.greeks;
        Self {
            field,
            value: point.parameter_value,
            price: point.pricing.price,
            d1: point.pricing.d1,
            d2: point.pricing.d2,
            delta: g.delta,
            gamma: g.gamma,
            vega: if config.vega_per_percent {
                g.vega_per_percent()
            } else {
                g.vega
            },
            theta: g.theta,
            rho: g.rho,
        }
    }
}

/// Run the sweep command
pub fn execute(args: &SweepArgs, config: &CliConfig) -> Result<String> {
    let contract = args.contract.to_contract()?;
    let values = args.sweep_values(config)?;
    let analysis = sweep(&contract, args.field, &values)?;

    let points: Vec<SweepPoint> = match (args.parallel, args.skip_invalid) {
        (false, false) => analysis.collect_points()?,
        (false, true) => analysis.skip_invalid().collect(),
        (true, skip_invalid) => {
            let mut points = Vec::with_capacity(values.len());
            for (result, value) in analysis.par_collect().into_iter().zip(&values) {
                match result {
                    Ok(point) => points.push(point),
                    Err(err) if skip_invalid => {
                        debug!(value, error = %err, "skipping invalid sweep point");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            points
        }
    };
    info!(
        field = %args.field,
        requested = values.len(),
        evaluated = points.len(),
        "Sweep complete"
    );

    let records: Vec<SweepRecord> = points
        .iter()
        .map(|point| SweepRecord::new(args.field, point, config))
        .collect();

    match config.format {
        OutputFormat::Json => to_json(&records),
        OutputFormat::Csv => to_csv(&records),
        OutputFormat::Table => {
            let field = args.field.to_string();
            let mut table = Table::new(&[
                field.as_str(),
                "Price",
                "Delta",
                "Gamma",
                "Vega",
                "Theta",
                "Rho",
            ]);
            for r in &records {
                table.push_row(
                    [r.value, r.price, r.delta, r.gamma, r.vega, r.theta, r.rho]
                        .into_iter()
                        .map(fmt_num)
                        .collect(),
                );
            }
            Ok(table.render())
        }
    }
}
