//! Plan inputs and the projected plan record
//!
//! `PlanInputs` is the full set of scalars a planning session accumulates;
//! `PlanProjection` bundles everything derived from them. Both are plain
//! serde records so the persistence and export collaborators can treat them
//! as opaque snapshots.

use serde::{Deserialize, Serialize};

use crate::error::{check_amount, check_rate, InvalidArgument};
use crate::projection::{SavingsGoalResult, ScheduleSummary, YearlyContribution};

/// Scalar assumptions for one retirement plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    /// Monthly expenses in today's dollars.
    pub monthly_budget: f64,

    /// Current age in years.
    pub current_age: u8,

    /// Planned retirement age in years.
    pub retirement_age: u8,

    /// Planning horizon end; retirement spans
    /// `life_expectancy - retirement_age` years.
    pub life_expectancy: u8,

    /// Annual expense inflation rate (decimal, e.g. 0.03 for 3%).
    pub inflation_rate: f64,

    /// Expected annual return before retirement (decimal).
    pub expected_return: f64,

    /// Expected annual return during retirement (decimal).
    pub retirement_return: f64,

    /// Investments already accumulated.
    pub current_investments: f64,
}

impl PlanInputs {
    /// Years from now until retirement.
    pub fn years_until_retirement(&self) -> u32 {
        u32::from(self.retirement_age.saturating_sub(self.current_age))
    }

    /// Years the nest egg must fund.
    pub fn years_in_retirement(&self) -> u32 {
        u32::from(self.life_expectancy.saturating_sub(self.retirement_age))
    }

    /// Validate the mathematical domain preconditions.
    ///
    /// Range checks for plausibility (e.g. ages within 18-100) are the
    /// caller's concern; this only rejects inputs the formulas cannot
    /// accept.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        check_amount("monthly_budget", self.monthly_budget)?;
        check_amount("current_investments", self.current_investments)?;
        check_rate("inflation_rate", self.inflation_rate)?;
        check_rate("expected_return", self.expected_return)?;
        check_rate("retirement_return", self.retirement_return)?;

        if self.retirement_age <= self.current_age {
            return Err(InvalidArgument::RetirementAgeNotAfterCurrentAge {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }
        if self.life_expectancy <= self.retirement_age {
            return Err(InvalidArgument::LifeExpectancyNotAfterRetirementAge {
                retirement_age: self.retirement_age,
                life_expectancy: self.life_expectancy,
            });
        }

        Ok(())
    }
}

/// Everything derived from a plan's inputs, in pipeline order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanProjection {
    /// The inputs the projection was computed from.
    pub inputs: PlanInputs,

    /// Monthly budget inflated to the retirement date.
    pub future_monthly_expenses: f64,

    /// Annualized inflated budget (monthly figure compounded, then x12).
    pub future_annual_expenses: f64,

    /// Lump sum needed at retirement to fund the inflating expense stream.
    pub nest_egg: f64,

    /// Savings gap and contribution goals.
    pub savings_goal: SavingsGoalResult,

    /// Year-by-year accumulation path at the solved annual contribution.
    pub schedule: Vec<YearlyContribution>,

    /// Totals over the schedule.
    pub summary: ScheduleSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> PlanInputs {
        PlanInputs {
            monthly_budget: 5000.0,
            current_age: 35,
            retirement_age: 65,
            life_expectancy: 90,
            inflation_rate: 0.03,
            expected_return: 0.07,
            retirement_return: 0.07,
            current_investments: 50000.0,
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(sample_inputs().validate().is_ok());
    }

    #[test]
    fn test_horizon_helpers() {
        let inputs = sample_inputs();
        assert_eq!(inputs.years_until_retirement(), 30);
        assert_eq!(inputs.years_in_retirement(), 25);
    }

    #[test]
    fn test_age_ordering_enforced() {
        let mut inputs = sample_inputs();
        inputs.retirement_age = 35;
        assert!(matches!(
            inputs.validate(),
            Err(InvalidArgument::RetirementAgeNotAfterCurrentAge { .. })
        ));

        let mut inputs = sample_inputs();
        inputs.life_expectancy = 65;
        assert!(matches!(
            inputs.validate(),
            Err(InvalidArgument::LifeExpectancyNotAfterRetirementAge { .. })
        ));
    }

    #[test]
    fn test_negative_scalars_rejected() {
        let mut inputs = sample_inputs();
        inputs.monthly_budget = -1.0;
        assert!(inputs.validate().is_err());

        let mut inputs = sample_inputs();
        inputs.inflation_rate = -0.01;
        assert!(inputs.validate().is_err());

        let mut inputs = sample_inputs();
        inputs.current_investments = -500.0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_inputs_round_trip_json() {
        let inputs = sample_inputs();
        let json = serde_json::to_string(&inputs).unwrap();
        let back: PlanInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
