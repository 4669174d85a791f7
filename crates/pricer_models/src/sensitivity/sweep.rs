//! Single-parameter sensitivity sweeps.

use std::iter::FusedIterator;
use std::slice;

use pricer_core::math::grid::validate_strictly_increasing;
use rayon::prelude::*;
use tracing::debug;

use super::field::SweepField;
use crate::analytical::{greeks_with_terms, price, AnalyticalError, GreeksResult, PricingResult};
use crate::instruments::OptionContract;

/// Price and Greeks at one sweep value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    /// Value the swept field was set to
    pub parameter_value: f64,
    /// Pricing result at that value
    pub pricing: PricingResult,
    /// Greeks at that value
    pub greeks: GreeksResult,
}

/// Lazy sweep of one contract field over a list of values.
///
/// Yields one `Result` per value, in input order. A value that produces an
/// invalid contract (or a degenerate one, whose Greeks are singular) yields
/// `Err` for that point only and iteration continues.
#[derive(Debug, Clone)]
pub struct Sweep<'a> {
    base: OptionContract,
    field: SweepField,
    values: slice::Iter<'a, f64>,
}

impl<'a> Sweep<'a> {
    /// The field being varied.
    pub fn field(&self) -> SweepField {
        self.field
    }

    /// The unmodified contract.
    pub fn base(&self) -> &OptionContract {
        &self.base
    }

    /// Collects all points, stopping at the first invalid one.
    ///
    /// # Errors
    /// The error of the first value that fails.
    pub fn collect_points(self) -> Result<Vec<SweepPoint>, AnalyticalError> {
        self.collect()
    }

    /// Drops invalid points, logging each one at debug level.
    pub fn skip_invalid(self) -> impl Iterator<Item = SweepPoint> + 'a {
        let field = self.field;
        let values = self.values.clone();
        self.zip(values).filter_map(move |(result, value)| match result {
            Ok(point) => Some(point),
            Err(err) => {
                debug!(%field, value, error = %err, "skipping invalid sweep point");
                None
            }
        })
    }

    /// Evaluates the remaining points in parallel.
    ///
    /// Results keep the order of the input values.
    pub fn par_collect(&self) -> Vec<Result<SweepPoint, AnalyticalError>> {
        let base = &self.base;
        let field = self.field;
        self.values
            .as_slice()
            .par_iter()
            .map(|&value| evaluate_point(base, field, value))
            .collect()
    }
}

impl Iterator for Sweep<'_> {
    type Item = Result<SweepPoint, AnalyticalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.values.next()?;
        Some(evaluate_point(&self.base, self.field, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for Sweep<'_> {}

impl FusedIterator for Sweep<'_> {}

fn evaluate_point(
    base: &OptionContract,
    field: SweepField,
    value: f64,
) -> Result<SweepPoint, AnalyticalError> {
    let contract = base.with_field(field, value)?;
    let pricing = price(&contract)?;
    let greeks = greeks_with_terms(&contract, pricing.d1, pricing.d2)?;
    Ok(SweepPoint {
        parameter_value: value,
        pricing,
        greeks,
    })
}

/// Sweeps `field` of `base` over `values`.
///
/// # Errors
/// - `AnalyticalError::Instrument` if `base` fails validation
/// - `AnalyticalError::Range` if `values` is empty, non-finite or not
///   strictly increasing
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_models::sensitivity::{sweep, SweepField};
///
/// let base = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let values = [0.1, 0.2, 0.3];
/// let points = sweep(&base, SweepField::Volatility, &values)
///     .unwrap()
///     .collect_points()
///     .unwrap();
/// assert_eq!(points.len(), 3);
/// assert!(points[0].pricing.price < points[2].pricing.price);
/// ```
pub fn sweep<'a>(
    base: &OptionContract,
    field: SweepField,
    values: &'a [f64],
) -> Result<Sweep<'a>, AnalyticalError> {
    base.validate()?;
    validate_strictly_increasing(values)?;

    debug!(%field, points = values.len(), "starting sensitivity sweep");

    Ok(Sweep {
        base: *base,
        field,
        values: values.iter(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{InstrumentError, OptionType};
    use pricer_core::types::{GridError, PricingError};
    use approx::assert_relative_eq;

    fn base() -> OptionContract {
        OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    // ==========================================================
    // Sweep Value Tests
    // ==========================================================

    #[test]
    fn test_volatility_sweep_three_points() {
        let values = [0.1, 0.2, 0.3];
        let points = sweep(&base(), SweepField::Volatility, &values)
            .unwrap()
            .collect_points()
            .unwrap();

        assert_eq!(points.len(), 3);
        let expected = [6.804957708822158, 10.450583572185565, 14.231254785985819];
        for (point, (value, price)) in points.iter().zip(values.iter().zip(expected)) {
            assert_eq!(point.parameter_value, *value);
            assert_relative_eq!(point.pricing.price, price, epsilon = 1e-9);
        }
        assert!(points.windows(2).all(|w| w[0].pricing.price < w[1].pricing.price));
    }

    #[test]
    fn test_sweep_point_matches_direct_evaluation() {
        let values = [90.0];
        let point = sweep(&base(), SweepField::Spot, &values)
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        let direct = base().with_field(SweepField::Spot, 90.0).unwrap();
        assert_eq!(point.pricing, price(&direct).unwrap());
        assert_eq!(point.greeks, crate::analytical::greeks(&direct).unwrap());
    }

    #[test]
    fn test_sweep_exact_size_and_clone() {
        let values = [0.01, 0.02, 0.03, 0.04];
        let mut s = sweep(&base(), SweepField::Rate, &values).unwrap();
        assert_eq!(s.len(), 4);
        s.next();
        let restarted = s.clone();
        assert_eq!(s.len(), 3);
        assert_eq!(restarted.collect_points().unwrap(), s.collect_points().unwrap());
    }

    // ==========================================================
    // Invalid Point Tests
    // ==========================================================

    #[test]
    fn test_empty_values_rejected() {
        match sweep(&base(), SweepField::Spot, &[]).unwrap_err() {
            AnalyticalError::Range(GridError::Empty) => {}
            _ => panic!("Expected empty range error"),
        }
    }

    #[test]
    fn test_unordered_values_rejected() {
        let descending = [0.3, 0.2, 0.1];
        let shuffled = [0.3, 0.1, 0.2];
        let duplicated = [0.1, 0.2, 0.2];

        for values in [&descending[..], &shuffled[..], &duplicated[..]] {
            let err = sweep(&base(), SweepField::Volatility, values).unwrap_err();
            assert!(err.is_invalid_range());
            assert!(PricingError::from(err).is_invalid_range());
        }
        assert_eq!(
            sweep(&base(), SweepField::Volatility, &shuffled).unwrap_err(),
            AnalyticalError::Range(GridError::NonMonotonic { index: 1 })
        );
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let values = [0.1, f64::NAN];
        assert_eq!(
            sweep(&base(), SweepField::Volatility, &values).unwrap_err(),
            AnalyticalError::Range(GridError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_invalid_point_does_not_abort_iteration() {
        let values = [-1.0, 90.0, 110.0];
        let results: Vec<_> = sweep(&base(), SweepField::Spot, &values).unwrap().collect();

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0],
            Err(AnalyticalError::Instrument(InstrumentError::InvalidSpot { spot: -1.0 }))
        );
        assert!(results[1].is_ok());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_collect_points_propagates_first_error() {
        let values = [-0.2, -0.1, 0.2];
        let err = sweep(&base(), SweepField::Volatility, &values)
            .unwrap()
            .collect_points()
            .unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::Instrument(InstrumentError::InvalidVolatility { volatility: -0.2 })
        );
    }

    #[test]
    fn test_skip_invalid_drops_failures() {
        let values = [-2.0, 0.0, 0.5, 1.0];
        let points: Vec<SweepPoint> = sweep(&base(), SweepField::Expiry, &values)
            .unwrap()
            .skip_invalid()
            .collect();
        // T = 0 has singular Greeks, T = -2 is invalid
        let kept: Vec<f64> = points.iter().map(|p| p.parameter_value).collect();
        assert_eq!(kept, vec![0.5, 1.0]);
    }

    // ==========================================================
    // Parallel Tests
    // ==========================================================

    #[test]
    fn test_par_collect_matches_sequential_order() {
        let values: Vec<f64> = (1..=64).map(|i| 50.0 + i as f64).collect();
        let s = sweep(&base(), SweepField::Spot, &values).unwrap();
        let parallel = s.par_collect();
        let sequential: Vec<_> = s.collect();
        assert_eq!(parallel, sequential);
    }
}
