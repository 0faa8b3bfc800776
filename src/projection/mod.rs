//! Core time-value-of-money projections
//!
//! Four pure components composed in a strict pipeline by the planner:
//! future value, growing-annuity present value, savings-goal solving, and
//! the year-by-year contribution schedule. Every function is a synchronous,
//! side-effect-free computation over scalars and small sequences.

mod annuity;
mod future_value;
mod savings_goal;
mod schedule;

pub use annuity::{net_present_value, present_value_growing_annuity, retirement_nest_egg};
pub use future_value::{future_annual_value, future_value};
pub use savings_goal::{payment_for_future_value, solve_savings_goal, SavingsGoalResult};
pub use schedule::{generate_schedule, schedule_summary, ScheduleSummary, YearlyContribution};
