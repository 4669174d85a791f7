//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use chrono::NaiveDate;

/// Test that distribution functions are accessible via absolute path.
#[test]
fn test_distributions_module_exports() {
    use pricer_core::math::distributions::norm_cdf;
    use pricer_core::math::distributions::norm_pdf;
    use pricer_core::math::StandardNormal;

    let _ = norm_cdf(0.3);
    let _ = norm_pdf(0.3);
    assert_eq!(StandardNormal.cdf(0.3), norm_cdf(0.3));
}

/// Test that grid helpers are accessible via absolute path.
#[test]
fn test_grid_module_exports() {
    use pricer_core::math::grid::{linspace, spot_grid, validate_strictly_increasing};

    let xs = linspace(1.0, 2.0, 3).unwrap();
    assert!(validate_strictly_increasing(&xs).is_ok());
    assert_eq!(spot_grid(10.0, 0.5, 1.5, 3).unwrap(), vec![5.0, 10.0, 15.0]);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{DateError, GridError, PricingError};
    use pricer_core::types::time::{time_to_maturity, DayCountConvention};

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let ttm = time_to_maturity(start, end, DayCountConvention::Actual365Fixed).unwrap();
    assert!((ttm - 0.4986).abs() < 0.001);

    let err: PricingError = GridError::Empty.into();
    assert!(err.is_invalid_range());
    let _ = DateError::ParseError("x".to_string());
}

/// Test that re-exports at module level work.
#[test]
fn test_reexports() {
    use pricer_core::types::{parse_date, DayCountConvention, PricingError};

    let d = parse_date("2024-02-29").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(DayCountConvention::default(), DayCountConvention::Actual365Fixed);
    let _ = PricingError::InvalidParameter("x".to_string());
}
