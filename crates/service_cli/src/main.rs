//! bsprice - Black-Scholes option pricer CLI
//!
//! Operational entry point for the bsprice pricing library.
//!
//! # Commands
//!
//! - `bsprice price` - Price a European call or put
//! - `bsprice greeks` - Delta, gamma, vega, theta and rho
//! - `bsprice payoff` - Payoff at maturity over a grid of underlying prices
//! - `bsprice sweep` - Price and Greeks while varying one input
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate parses arguments, loads
//! configuration and renders results from `pricer_models`. Results go to
//! stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::payoff::PayoffArgs;
use commands::sweep::SweepArgs;
use commands::ContractArgs;
use config::{build_config, CliArgs, OutputFormat};
pub use error::{CliError, Result};

/// Black-Scholes European option pricer
#[derive(Parser)]
#[command(name = "bsprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            format: self.format,
            log_level: self.log_level.clone(),
            verbose: self.verbose,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option
    Price(ContractArgs),

    /// Compute the Greeks of a European option
    Greeks(ContractArgs),

    /// Payoff at maturity over a range of underlying prices
    Payoff(PayoffArgs),

    /// Price and Greeks while varying one input
    Sweep(SweepArgs),
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.config_args())?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    let output = match &cli.command {
        Commands::Price(args) => commands::price::execute(args, &config)?,
        Commands::Greeks(args) => commands::greeks::execute(args, &config)?,
        Commands::Payoff(args) => commands::payoff::execute(args, &config)?,
        Commands::Sweep(args) => commands::sweep::execute(args, &config)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
