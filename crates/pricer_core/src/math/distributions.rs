//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ(x)
//! - `norm_pdf`: Probability density function φ(x)
//! - `StandardNormal`: Unit struct exposing both as methods
//!
//! The CDF is evaluated through the complementary error function from
//! `statrs`, which is accurate to double precision over the whole real line
//! and avoids the cancellation of `1 - erf` in the lower tail.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
/// assert!(norm_cdf(-3.0) < 0.01);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// The standard normal distribution N(0, 1).
///
/// Thin adapter over [`norm_cdf`] and [`norm_pdf`] for callers that prefer
/// passing the distribution around as a value.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::StandardNormal;
///
/// let n = StandardNormal;
/// assert!((n.cdf(1.0) + n.cdf(-1.0) - 1.0).abs() < 1e-15);
/// assert!(n.pdf(1.0) > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNormal;

impl StandardNormal {
    /// Cumulative distribution function Φ(x).
    #[inline]
    pub fn cdf(&self, x: f64) -> f64 {
        norm_cdf(x)
    }

    /// Probability density function φ(x).
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        norm_pdf(x)
    }
}
