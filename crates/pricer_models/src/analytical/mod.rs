//! Analytical Black-Scholes pricing for European options.
//!
//! This module provides:
//! - [`price`]: Theoretical value with the d₁/d₂ terms it was computed from
//! - [`greeks`]: Delta, gamma, vega, theta and rho
//! - [`d1_d2`]: The shared d-terms, with limits for degenerate contracts
//!
//! ## Conventions
//!
//! - Vega is per unit of volatility; [`GreeksResult::vega_per_percent`] scales by 1/100
//! - Theta is per year; [`GreeksResult::theta_per_day`] divides by a day-count basis
//! - Contracts with `T == 0` or `σ == 0` price at discounted intrinsic value and
//!   their Greeks fail with [`AnalyticalError::SingularGreeks`]

mod black_scholes;
mod error;
mod greeks;

pub use black_scholes::{d1_d2, price, price_call, price_put, PricingResult};
pub use error::AnalyticalError;
pub use greeks::{greeks, GreeksResult};

pub(crate) use greeks::greeks_with_terms;
