//! Retirement Engine - Deterministic retirement-planning projections
//!
//! This library provides:
//! - Future-value projection of today's expenses under inflation
//! - Nest egg sizing via growing-annuity present value
//! - Savings-gap solving with level annual/monthly contribution goals
//! - Year-by-year contribution schedules for the accumulation phase
//! - A stateless planner composing the full pipeline, with parallel
//!   scenario sweeps
//!
//! Every computation is pure and synchronous; invalid inputs fail fast
//! with a structured [`InvalidArgument`] error.

pub mod error;
pub mod export;
pub mod plan;
pub mod planner;
pub mod projection;

// Re-export commonly used types
pub use error::InvalidArgument;
pub use plan::{PlanInputs, PlanProjection};
pub use planner::RetirementPlanner;
pub use projection::{SavingsGoalResult, ScheduleSummary, YearlyContribution};
