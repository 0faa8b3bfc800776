//! End-to-end plan projection
//!
//! Wires the four projection components into the strict downstream
//! pipeline: budget -> future expenses -> nest egg -> savings goal ->
//! contribution schedule. Stateless; every call computes a fresh
//! projection, so the planner is freely shareable across threads.

use log::debug;
use rayon::prelude::*;

use crate::error::InvalidArgument;
use crate::plan::{PlanInputs, PlanProjection};
use crate::projection::{
    future_annual_value, future_value, generate_schedule, retirement_nest_egg, schedule_summary,
    solve_savings_goal,
};

/// Stateless runner for full plan projections.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetirementPlanner;

impl RetirementPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Project a plan end to end.
    ///
    /// Each stage consumes only upstream outputs; the savings goal is
    /// solved before the schedule is generated because the schedule takes
    /// the solved annual contribution as an input.
    pub fn project(&self, inputs: &PlanInputs) -> Result<PlanProjection, InvalidArgument> {
        inputs.validate()?;

        let years_until_retirement = f64::from(inputs.years_until_retirement());
        let years_in_retirement = f64::from(inputs.years_in_retirement());

        let future_monthly_expenses = future_value(
            inputs.monthly_budget,
            inputs.inflation_rate,
            years_until_retirement,
        )?;
        let future_annual_expenses = future_annual_value(
            inputs.monthly_budget,
            inputs.inflation_rate,
            years_until_retirement,
        )?;
        debug!(
            "expenses at retirement: {:.2}/month, {:.2}/year",
            future_monthly_expenses, future_annual_expenses
        );

        let nest_egg = retirement_nest_egg(
            future_annual_expenses,
            years_in_retirement,
            inputs.retirement_return,
            inputs.inflation_rate,
        )?;
        debug!("nest egg needed at retirement: {:.2}", nest_egg);

        let savings_goal = solve_savings_goal(
            nest_egg,
            inputs.current_investments,
            years_until_retirement,
            inputs.expected_return,
        )?;
        debug!(
            "savings gap {:.2}, annual goal {:.2}",
            savings_goal.savings_gap, savings_goal.annual_savings_goal
        );

        let schedule = generate_schedule(
            inputs.current_age,
            inputs.retirement_age,
            inputs.current_investments,
            savings_goal.annual_savings_goal,
            inputs.expected_return,
        )?;
        let summary = schedule_summary(&schedule);

        Ok(PlanProjection {
            inputs: inputs.clone(),
            future_monthly_expenses,
            future_annual_expenses,
            nest_egg,
            savings_goal,
            schedule,
            summary,
        })
    }

    /// Project the same plan under a sweep of pre-retirement return
    /// assumptions, in parallel. Results come back in the order of
    /// `expected_returns`.
    pub fn project_scenarios(
        &self,
        inputs: &PlanInputs,
        expected_returns: &[f64],
    ) -> Vec<Result<PlanProjection, InvalidArgument>> {
        expected_returns
            .par_iter()
            .map(|&rate| {
                let scenario = PlanInputs {
                    expected_return: rate,
                    ..inputs.clone()
                };
                self.project(&scenario)
            })
            .collect()
    }
}
