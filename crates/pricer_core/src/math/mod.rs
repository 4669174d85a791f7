//! Numerical building blocks.
//!
//! - `distributions`: Standard normal CDF and PDF
//! - `grid`: Evenly spaced sampling grids and monotonicity checks

pub mod distributions;
pub mod grid;

pub use distributions::{norm_cdf, norm_pdf, StandardNormal};
pub use grid::{linspace, spot_grid, validate_strictly_increasing};
