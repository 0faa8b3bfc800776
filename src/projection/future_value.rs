//! Future value projection
//!
//! Compounds a present amount forward at a fixed per-period rate:
//! `FV = PV * (1 + r)^n`. Leaf component of the pipeline.

use crate::error::{check_amount, check_periods, check_rate, InvalidArgument};

/// Project a present amount forward by compounding `rate` over `periods`.
///
/// `periods` may be fractional (partial years compound pro rata).
/// A zero rate or zero period count returns `present_value` unchanged.
///
/// # Example
/// A $5,000/month budget inflated 30 years at 3%:
/// `future_value(5000.0, 0.03, 30.0)` ≈ 12,136.
pub fn future_value(
    present_value: f64,
    rate: f64,
    periods: f64,
) -> Result<f64, InvalidArgument> {
    check_amount("present_value", present_value)?;
    check_rate("rate", rate)?;
    check_periods("periods", periods)?;

    Ok(present_value * (1.0 + rate).powf(periods))
}

/// Project a monthly amount forward and annualize it.
///
/// Compounds the monthly figure first, then multiplies by 12. The order
/// matters to callers that round the monthly figure, so it is fixed here.
pub fn future_annual_value(
    monthly_amount: f64,
    rate: f64,
    years: f64,
) -> Result<f64, InvalidArgument> {
    Ok(future_value(monthly_amount, rate, years)? * 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_is_identity() {
        for pv in [0.0, 1.0, 5000.0, 123456.78] {
            for n in [0.0, 1.0, 10.0, 30.0] {
                assert_eq!(future_value(pv, 0.0, n).unwrap(), pv);
            }
        }
    }

    #[test]
    fn test_zero_periods_is_identity() {
        for r in [0.0, 0.03, 0.07, 0.25] {
            assert_eq!(future_value(2500.0, r, 0.0).unwrap(), 2500.0);
        }
    }

    #[test]
    fn test_zero_present_value_stays_zero() {
        assert_eq!(future_value(0.0, 0.07, 30.0).unwrap(), 0.0);
    }

    #[test]
    fn test_monthly_budget_inflated_30_years() {
        // $5,000/month at 3% inflation over 30 years
        let fv = future_value(5000.0, 0.03, 30.0).unwrap();
        approx::assert_relative_eq!(fv, 12136.31, max_relative = 1e-4);
    }

    #[test]
    fn test_monotonic_in_rate_and_periods() {
        let base = future_value(1000.0, 0.05, 10.0).unwrap();
        assert!(future_value(1000.0, 0.06, 10.0).unwrap() > base);
        assert!(future_value(1000.0, 0.05, 11.0).unwrap() > base);
        // Zero growth in either dimension never decreases the value
        assert!(future_value(1000.0, 0.0, 50.0).unwrap() >= 1000.0);
    }

    #[test]
    fn test_fractional_periods() {
        let half_year = future_value(1000.0, 0.04, 0.5).unwrap();
        let expected = 1000.0 * 1.04_f64.powf(0.5);
        assert!((half_year - expected).abs() < 1e-9);
    }

    #[test]
    fn test_future_annual_value_compounds_before_annualizing() {
        // FV(monthly) * 12, not FV(monthly * 12)... the two only agree
        // because multiplication distributes, so pin the exact composition
        let monthly = future_value(5000.0, 0.03, 30.0).unwrap();
        let annual = future_annual_value(5000.0, 0.03, 30.0).unwrap();
        assert_eq!(annual, monthly * 12.0);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(matches!(
            future_value(-1.0, 0.05, 10.0),
            Err(InvalidArgument::NegativeAmount { param: "present_value", .. })
        ));
        assert!(matches!(
            future_value(100.0, -0.05, 10.0),
            Err(InvalidArgument::NegativeRate { param: "rate", .. })
        ));
        assert!(matches!(
            future_value(100.0, 0.05, -1.0),
            Err(InvalidArgument::NegativePeriods { param: "periods", .. })
        ));
    }
}
