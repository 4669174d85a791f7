//! Core time and error types.
//!
//! This module provides:
//! - `time`: Day count conventions and time-to-maturity calculation
//! - `error`: Structured error types for pricing, grids, and dates
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DayCountConvention`], [`parse_date`], [`time_to_maturity`] from `time`
//! - [`PricingError`], [`GridError`], [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, GridError, PricingError};
pub use time::{parse_date, time_to_maturity, DayCountConvention};
