//! Savings-goal solving
//!
//! Two-stage design: grow current savings to retirement first, fold the
//! result into a shortfall ("gap"), then solve a level payment against a
//! zero starting balance. Collapsing the stages into one annuity formula
//! would count the growth of current savings twice.

use serde::{Deserialize, Serialize};

use crate::error::{check_amount, check_positive_periods, check_rate, InvalidArgument};
use crate::projection::future_value;

/// Output of the savings-goal solver. All fields are non-negative and
/// derived together; `monthly_savings_goal` is exactly
/// `annual_savings_goal / 12`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalResult {
    /// Projected value of current investments at retirement.
    pub fv_current_investments: f64,

    /// Shortfall after current investments have grown, clamped to zero
    /// when the target is already covered.
    pub savings_gap: f64,

    /// Level annual contribution that closes the gap by retirement.
    pub annual_savings_goal: f64,

    /// `annual_savings_goal / 12`.
    pub monthly_savings_goal: f64,
}

impl SavingsGoalResult {
    /// All-zero goals with the projected value carried through; returned
    /// when current investments already cover the target.
    fn on_track(fv_current_investments: f64) -> Self {
        Self {
            fv_current_investments,
            savings_gap: 0.0,
            annual_savings_goal: 0.0,
            monthly_savings_goal: 0.0,
        }
    }
}

/// Level periodic payment that accumulates to `future_value_target` over
/// `periods` at `rate`, on top of `present_value` already invested.
///
/// `PMT = (FV - PV*(1+r)^n) * r / ((1+r)^n - 1)`, or a straight division
/// when `rate` is zero.
pub fn payment_for_future_value(
    rate: f64,
    periods: f64,
    present_value: f64,
    future_value_target: f64,
) -> Result<f64, InvalidArgument> {
    check_rate("rate", rate)?;
    check_positive_periods("periods", periods)?;
    check_amount("present_value", present_value)?;
    check_amount("future_value_target", future_value_target)?;

    if rate == 0.0 {
        return Ok((future_value_target - present_value) / periods);
    }

    let factor = (1.0 + rate).powf(periods);
    let gap = future_value_target - present_value * factor;
    Ok(gap * rate / (factor - 1.0))
}

/// Solve the annual and monthly contributions needed to reach
/// `total_needed` by retirement.
///
/// Current investments are grown to retirement first and netted out of the
/// target; the payment formula then runs against a zero starting balance so
/// their growth is not counted twice. A target already covered by the
/// projected investments yields all-zero goals rather than a negative
/// contribution.
pub fn solve_savings_goal(
    total_needed: f64,
    current_investments: f64,
    years_until_retirement: f64,
    expected_return: f64,
) -> Result<SavingsGoalResult, InvalidArgument> {
    check_amount("total_needed", total_needed)?;
    check_amount("current_investments", current_investments)?;
    check_positive_periods("years_until_retirement", years_until_retirement)?;
    check_rate("expected_return", expected_return)?;

    let fv_current_investments =
        future_value(current_investments, expected_return, years_until_retirement)?;

    let savings_gap = total_needed - fv_current_investments;
    if savings_gap <= 0.0 {
        return Ok(SavingsGoalResult::on_track(fv_current_investments));
    }

    // Growth of current investments is already in the gap, so the payment
    // runs against a zero starting balance
    let annual_savings_goal =
        payment_for_future_value(expected_return, years_until_retirement, 0.0, savings_gap)?;

    Ok(SavingsGoalResult {
        fv_current_investments,
        savings_gap,
        annual_savings_goal,
        monthly_savings_goal: annual_savings_goal / 12.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pmt_reference_scenario() {
        // $1M in 30 years, $50k already saved, 7% return: the $50k grows to
        // ~$380.6k, leaving a ~$619.4k gap to fund
        let pmt = payment_for_future_value(0.07, 30.0, 50000.0, 1_000_000.0).unwrap();
        assert!((pmt - 6557.1).abs() < 1.0, "got {}", pmt);
    }

    #[test]
    fn test_pmt_zero_rate_is_straight_division() {
        let pmt = payment_for_future_value(0.0, 20.0, 10000.0, 50000.0).unwrap();
        assert_eq!(pmt, 2000.0);
    }

    #[test]
    fn test_pmt_rejects_zero_periods() {
        assert!(matches!(
            payment_for_future_value(0.07, 0.0, 0.0, 1000.0),
            Err(InvalidArgument::NonPositivePeriods { .. })
        ));
    }

    #[test]
    fn test_goal_already_met_yields_zero_goals() {
        // $50k at 7% for 30 years is ~$380k, well past a $200k target
        let result = solve_savings_goal(200_000.0, 50000.0, 30.0, 0.07).unwrap();
        assert!(result.fv_current_investments > 200_000.0);
        assert_eq!(result.savings_gap, 0.0);
        assert_eq!(result.annual_savings_goal, 0.0);
        assert_eq!(result.monthly_savings_goal, 0.0);
    }

    #[test]
    fn test_goal_exactly_met_yields_zero_goals() {
        let fv = future_value(50000.0, 0.07, 30.0).unwrap();
        let result = solve_savings_goal(fv, 50000.0, 30.0, 0.07).unwrap();
        assert_eq!(result.savings_gap, 0.0);
        assert_eq!(result.annual_savings_goal, 0.0);
    }

    #[test]
    fn test_monthly_is_annual_over_twelve() {
        let result = solve_savings_goal(1_174_896.0, 50000.0, 30.0, 0.07).unwrap();
        assert!(result.annual_savings_goal > 0.0);
        assert_eq!(
            result.monthly_savings_goal,
            result.annual_savings_goal / 12.0
        );
    }

    #[test]
    fn test_gap_equals_target_minus_projected_investments() {
        let result = solve_savings_goal(1_000_000.0, 50000.0, 30.0, 0.07).unwrap();
        let fv = future_value(50000.0, 0.07, 30.0).unwrap();
        assert!((result.savings_gap - (1_000_000.0 - fv)).abs() < 1e-9);
    }

    #[test]
    fn test_current_growth_not_double_counted() {
        // Solving via the gap with pv=0 must match the generic PMT with the
        // starting balance passed in directly
        let via_solver = solve_savings_goal(1_000_000.0, 50000.0, 30.0, 0.07).unwrap();
        let via_pmt = payment_for_future_value(0.07, 30.0, 50000.0, 1_000_000.0).unwrap();
        assert!((via_solver.annual_savings_goal - via_pmt).abs() < 1e-6);
    }

    #[test]
    fn test_zero_return_splits_gap_evenly() {
        let result = solve_savings_goal(120_000.0, 20000.0, 10.0, 0.0).unwrap();
        assert_eq!(result.fv_current_investments, 20000.0);
        assert_eq!(result.savings_gap, 100_000.0);
        assert_eq!(result.annual_savings_goal, 10_000.0);
    }

    #[test]
    fn test_preconditions() {
        assert!(solve_savings_goal(-1.0, 0.0, 10.0, 0.05).is_err());
        assert!(solve_savings_goal(1000.0, -1.0, 10.0, 0.05).is_err());
        assert!(solve_savings_goal(1000.0, 0.0, 0.0, 0.05).is_err());
        assert!(solve_savings_goal(1000.0, 0.0, 10.0, -0.05).is_err());
    }
}
