//! Year-by-year contribution schedule
//!
//! Simulates account growth from the current age to retirement under a
//! fixed annual contribution. Contributions land at the beginning of each
//! year, so they earn growth in the year they are made; reversing that
//! order changes every figure in the schedule.

use serde::{Deserialize, Serialize};

use crate::error::{check_amount, check_rate, InvalidArgument};

/// One year of the accumulation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyContribution {
    /// Year number within the schedule, starting at 1.
    pub year: u32,

    /// Age attained during this year.
    pub age: u8,

    /// Balance at the start of the year; equals the prior year's
    /// `ending_balance` (or the initial investments for year 1).
    pub starting_balance: f64,

    /// Contribution made at the beginning of the year.
    pub contribution: f64,

    /// Growth earned on the post-contribution balance.
    pub investment_growth: f64,

    /// Balance after contribution and growth.
    pub ending_balance: f64,
}

/// Summary statistics over a contribution schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_contributions: f64,
    pub total_growth: f64,
    pub final_balance: f64,
    pub years: u32,
}

/// Generate the year-by-year accumulation schedule from `current_age` to
/// `retirement_age`.
///
/// Each year the contribution is added first, then growth is computed on
/// the combined balance:
///
/// ```text
/// starting_balance = balance
/// balance += annual_contribution
/// investment_growth = balance * expected_return
/// balance += investment_growth
/// ```
///
/// Returns exactly `retirement_age - current_age` rows. Freshly computed on
/// every call; no state is retained.
pub fn generate_schedule(
    current_age: u8,
    retirement_age: u8,
    current_investments: f64,
    annual_contribution: f64,
    expected_return: f64,
) -> Result<Vec<YearlyContribution>, InvalidArgument> {
    if retirement_age <= current_age {
        return Err(InvalidArgument::RetirementAgeNotAfterCurrentAge {
            current_age,
            retirement_age,
        });
    }
    check_amount("current_investments", current_investments)?;
    check_amount("annual_contribution", annual_contribution)?;
    check_rate("expected_return", expected_return)?;

    let years = u32::from(retirement_age - current_age);
    let mut schedule = Vec::with_capacity(years as usize);
    let mut balance = current_investments;

    for year in 1..=years {
        let starting_balance = balance;

        // Contribution lands at the beginning of the year
        balance += annual_contribution;

        let investment_growth = balance * expected_return;
        balance += investment_growth;

        schedule.push(YearlyContribution {
            year,
            age: current_age + year as u8,
            starting_balance,
            contribution: annual_contribution,
            investment_growth,
            ending_balance: balance,
        });
    }

    Ok(schedule)
}

/// Totals across a schedule. An empty schedule yields all-zero fields.
pub fn schedule_summary(schedule: &[YearlyContribution]) -> ScheduleSummary {
    let total_contributions = schedule.iter().map(|y| y.contribution).sum();
    let total_growth = schedule.iter().map(|y| y.investment_growth).sum();
    let final_balance = schedule.last().map(|y| y.ending_balance).unwrap_or(0.0);

    ScheduleSummary {
        total_contributions,
        total_growth,
        final_balance,
        years: schedule.len() as u32,
    }
}
