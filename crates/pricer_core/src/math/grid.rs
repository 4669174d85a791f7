//! Sampling grids for curve generation.
//!
//! Payoff diagrams and sensitivity sweeps are evaluated on ordered samples of
//! one input. This module builds those samples and checks the ordering
//! requirements callers rely on for plotting.

use crate::types::error::GridError;

/// Returns `n` evenly spaced samples over `[start, end]`.
///
/// Both endpoints are included exactly; interior points are computed as
/// `start + i * step` so the grid does not accumulate rounding drift.
///
/// # Errors
/// - `GridError::InsufficientPoints` if `n < 2`
/// - `GridError::NonFinite` if either bound is NaN or infinite
///
/// # Examples
/// ```
/// use pricer_core::math::grid::linspace;
///
/// let xs = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, GridError> {
    if n < 2 {
        return Err(GridError::InsufficientPoints { got: n, need: 2 });
    }
    if !start.is_finite() {
        return Err(GridError::NonFinite { index: 0 });
    }
    if !end.is_finite() {
        return Err(GridError::NonFinite { index: n - 1 });
    }

    let step = (end - start) / (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    xs[n - 1] = end;
    Ok(xs)
}

/// Returns a grid of underlying prices centred on `spot`.
///
/// Samples `n` points over `[spot * lower_factor, spot * upper_factor]`,
/// the usual x-axis for a payoff-at-maturity diagram.
///
/// # Errors
/// - `GridError::InvalidBounds` if the factors are not `0 <= lower < upper`
///   or `spot` is not positive
/// - Any error from [`linspace`]
///
/// # Examples
/// ```
/// use pricer_core::math::grid::spot_grid;
///
/// let xs = spot_grid(100.0, 0.5, 1.5, 101).unwrap();
/// assert_eq!(xs[0], 50.0);
/// assert_eq!(xs[100], 150.0);
/// ```
pub fn spot_grid(
    spot: f64,
    lower_factor: f64,
    upper_factor: f64,
    n: usize,
) -> Result<Vec<f64>, GridError> {
    if !(spot > 0.0) || !(lower_factor >= 0.0) || !(upper_factor > lower_factor) {
        return Err(GridError::InvalidBounds {
            lower: spot * lower_factor,
            upper: spot * upper_factor,
        });
    }
    linspace(spot * lower_factor, spot * upper_factor, n)
}

/// Checks that `xs` is non-empty, finite and strictly increasing.
///
/// # Errors
/// - `GridError::Empty` for an empty slice
/// - `GridError::NonFinite { index }` at the first NaN or infinite sample
/// - `GridError::NonMonotonic { index }` at the first sample that is not
///   greater than its predecessor
///
/// # Examples
/// ```
/// use pricer_core::math::grid::validate_strictly_increasing;
///
/// assert!(validate_strictly_increasing(&[1.0, 2.0, 3.0]).is_ok());
/// assert!(validate_strictly_increasing(&[1.0, 1.0]).is_err());
/// assert!(validate_strictly_increasing(&[]).is_err());
/// ```
pub fn validate_strictly_increasing(xs: &[f64]) -> Result<(), GridError> {
    if xs.is_empty() {
        return Err(GridError::Empty);
    }

    for (index, &x) in xs.iter().enumerate() {
        if !x.is_finite() {
            return Err(GridError::NonFinite { index });
        }
        if index > 0 && x <= xs[index - 1] {
            return Err(GridError::NonMonotonic { index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints_exact() {
        let xs = linspace(50.0, 150.0, 100).unwrap();
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 50.0);
        assert_eq!(xs[99], 150.0);
    }

    #[test]
    fn test_linspace_even_spacing() {
        let xs = linspace(-1.0, 1.0, 21).unwrap();
        for pair in xs.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linspace_two_points() {
        assert_eq!(linspace(3.0, 4.0, 2).unwrap(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_linspace_insufficient_points() {
        assert_eq!(
            linspace(0.0, 1.0, 1),
            Err(GridError::InsufficientPoints { got: 1, need: 2 })
        );
        assert!(linspace(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_linspace_non_finite_bound() {
        assert_eq!(
            linspace(f64::NAN, 1.0, 3),
            Err(GridError::NonFinite { index: 0 })
        );
        assert_eq!(
            linspace(0.0, f64::INFINITY, 3),
            Err(GridError::NonFinite { index: 2 })
        );
    }

    #[test]
    fn test_spot_grid_bounds() {
        let xs = spot_grid(200.0, 0.5, 1.5, 11).unwrap();
        assert_eq!(xs[0], 100.0);
        assert_eq!(xs[10], 300.0);
        assert_relative_eq!(xs[5], 200.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spot_grid_rejects_inverted_factors() {
        assert!(matches!(
            spot_grid(100.0, 1.5, 0.5, 10),
            Err(GridError::InvalidBounds { .. })
        ));
        assert!(spot_grid(-100.0, 0.5, 1.5, 10).is_err());
    }

    #[test]
    fn test_validate_strictly_increasing_ok() {
        assert!(validate_strictly_increasing(&[42.0]).is_ok());
        assert!(validate_strictly_increasing(&[-1.0, 0.0, 1e-12, 7.0]).is_ok());
    }

    #[test]
    fn test_validate_strictly_increasing_reports_index() {
        assert_eq!(
            validate_strictly_increasing(&[1.0, 2.0, 2.0, 3.0]),
            Err(GridError::NonMonotonic { index: 2 })
        );
        assert_eq!(
            validate_strictly_increasing(&[3.0, 2.0]),
            Err(GridError::NonMonotonic { index: 1 })
        );
        assert_eq!(
            validate_strictly_increasing(&[1.0, f64::NAN]),
            Err(GridError::NonFinite { index: 1 })
        );
        assert_eq!(validate_strictly_increasing(&[]), Err(GridError::Empty));
    }

    #[test]
    fn test_linspace_output_is_strictly_increasing() {
        let xs = linspace(0.01, 5.0, 1000).unwrap();
        assert!(validate_strictly_increasing(&xs).is_ok());
    }
}
