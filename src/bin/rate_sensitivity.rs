//! Savings-goal sensitivity to the expected pre-retirement return
//!
//! Projects the same plan across a sweep of expected-return assumptions and
//! reports how the nest egg gap and contribution goals move.
//! Supports JSON output for API integration via --json flag.
//! Accepts plan config via environment variables:
//!   MONTHLY_BUDGET, CURRENT_AGE, RETIREMENT_AGE, LIFE_EXPECTANCY,
//!   INFLATION_RATE, RETIREMENT_RETURN, CURRENT_INVESTMENTS,
//!   RETURN_MIN, RETURN_MAX, RETURN_STEPS

use retirement_engine::{PlanInputs, RetirementPlanner};
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct SensitivityResponse {
    inputs: PlanInputs,
    scenarios: Vec<ScenarioRow>,
    execution_time_ms: u64,
}

#[derive(Serialize)]
struct ScenarioRow {
    expected_return: f64,
    nest_egg: f64,
    fv_current_investments: f64,
    savings_gap: f64,
    annual_savings_goal: f64,
    monthly_savings_goal: f64,
    final_balance: f64,
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u8(key: &str, default: u8) -> u8 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|a| a == "--json");

    let inputs = PlanInputs {
        monthly_budget: env_f64("MONTHLY_BUDGET", 5000.0),
        current_age: env_u8("CURRENT_AGE", 35),
        retirement_age: env_u8("RETIREMENT_AGE", 65),
        life_expectancy: env_u8("LIFE_EXPECTANCY", 90),
        inflation_rate: env_f64("INFLATION_RATE", 0.03),
        expected_return: 0.0, // overridden per scenario
        retirement_return: env_f64("RETIREMENT_RETURN", 0.05),
        current_investments: env_f64("CURRENT_INVESTMENTS", 50000.0),
    };

    let return_min = env_f64("RETURN_MIN", 0.03);
    let return_max = env_f64("RETURN_MAX", 0.10);
    let steps = env_f64("RETURN_STEPS", 8.0).max(2.0) as usize;

    let rates: Vec<f64> = (0..steps)
        .map(|i| return_min + (return_max - return_min) * i as f64 / (steps - 1) as f64)
        .collect();

    let start = Instant::now();
    let planner = RetirementPlanner::new();
    let results = planner.project_scenarios(&inputs, &rates);
    let elapsed = start.elapsed();

    let mut scenarios = Vec::with_capacity(results.len());
    for (rate, result) in rates.iter().zip(results) {
        let projection = result?;
        scenarios.push(ScenarioRow {
            expected_return: *rate,
            nest_egg: projection.nest_egg,
            fv_current_investments: projection.savings_goal.fv_current_investments,
            savings_gap: projection.savings_goal.savings_gap,
            annual_savings_goal: projection.savings_goal.annual_savings_goal,
            monthly_savings_goal: projection.savings_goal.monthly_savings_goal,
            final_balance: projection.summary.final_balance,
        });
    }

    if json_output {
        let response = SensitivityResponse {
            inputs,
            scenarios,
            execution_time_ms: elapsed.as_millis() as u64,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Rate Sensitivity ({} scenarios, {:?})", scenarios.len(), elapsed);
    println!(
        "{:>8} {:>14} {:>14} {:>12} {:>12} {:>14}",
        "Return", "Nest Egg", "Gap", "Annual", "Monthly", "Final Balance"
    );
    println!("{}", "-".repeat(80));
    for row in &scenarios {
        println!(
            "{:>7.2}% {:>14.2} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
            row.expected_return * 100.0,
            row.nest_egg,
            row.savings_gap,
            row.annual_savings_goal,
            row.monthly_savings_goal,
            row.final_balance
        );
    }

    Ok(())
}
