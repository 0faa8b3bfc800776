//! Retirement Engine CLI
//!
//! Command-line interface for projecting a retirement plan: inflated
//! expenses, nest egg, savings goals, and the year-by-year schedule.

use anyhow::Context;
use clap::Parser;
use retirement_engine::{export, PlanInputs, RetirementPlanner};
use std::fs::File;
use std::path::PathBuf;

/// Project a retirement plan from scalar assumptions
#[derive(Debug, Parser)]
#[command(name = "retirement_engine", version, about)]
struct Args {
    /// Monthly expenses in today's dollars
    #[arg(long, default_value_t = 5000.0)]
    monthly_budget: f64,

    /// Current age in years
    #[arg(long, default_value_t = 35)]
    current_age: u8,

    /// Planned retirement age in years
    #[arg(long, default_value_t = 65)]
    retirement_age: u8,

    /// Planning horizon end age
    #[arg(long, default_value_t = 90)]
    life_expectancy: u8,

    /// Annual expense inflation rate (decimal, e.g. 0.03)
    #[arg(long, default_value_t = 0.03)]
    inflation_rate: f64,

    /// Expected annual return before retirement (decimal)
    #[arg(long, default_value_t = 0.07)]
    expected_return: f64,

    /// Expected annual return during retirement (decimal)
    #[arg(long, default_value_t = 0.05)]
    retirement_return: f64,

    /// Investments already accumulated
    #[arg(long, default_value_t = 50000.0)]
    current_investments: f64,

    /// Write the contribution schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full projection to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn into_inputs(self) -> (PlanInputs, Option<PathBuf>, Option<PathBuf>) {
        let inputs = PlanInputs {
            monthly_budget: self.monthly_budget,
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            life_expectancy: self.life_expectancy,
            inflation_rate: self.inflation_rate,
            expected_return: self.expected_return,
            retirement_return: self.retirement_return,
            current_investments: self.current_investments,
        };
        (inputs, self.csv, self.json)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (inputs, csv_path, json_path) = Args::parse().into_inputs();

    println!("Retirement Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    println!("Inputs:");
    println!("  Monthly Budget: ${:.2}", inputs.monthly_budget);
    println!(
        "  Ages: {} -> {} (life expectancy {})",
        inputs.current_age, inputs.retirement_age, inputs.life_expectancy
    );
    println!("  Inflation: {:.2}%", inputs.inflation_rate * 100.0);
    println!(
        "  Returns: {:.2}% accumulation, {:.2}% retirement",
        inputs.expected_return * 100.0,
        inputs.retirement_return * 100.0
    );
    println!("  Current Investments: ${:.2}", inputs.current_investments);
    println!();

    let planner = RetirementPlanner::new();
    let projection = planner.project(&inputs)?;

    println!("Projection:");
    println!(
        "  Expenses at retirement: ${:.2}/month (${:.2}/year)",
        projection.future_monthly_expenses, projection.future_annual_expenses
    );
    println!("  Nest egg needed: ${:.2}", projection.nest_egg);
    println!(
        "  FV of current investments: ${:.2}",
        projection.savings_goal.fv_current_investments
    );
    println!("  Savings gap: ${:.2}", projection.savings_goal.savings_gap);
    println!(
        "  Savings goal: ${:.2}/year (${:.2}/month)",
        projection.savings_goal.annual_savings_goal,
        projection.savings_goal.monthly_savings_goal
    );
    println!();

    // Print the schedule table
    println!(
        "{:>4} {:>4} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Age", "Start Balance", "Contribution", "Growth", "End Balance"
    );
    println!("{}", "-".repeat(70));
    for row in &projection.schedule {
        println!(
            "{:>4} {:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.year,
            row.age,
            row.starting_balance,
            row.contribution,
            row.investment_growth,
            row.ending_balance
        );
    }

    println!("\nSummary:");
    println!("  Years: {}", projection.summary.years);
    println!(
        "  Total Contributions: ${:.2}",
        projection.summary.total_contributions
    );
    println!("  Total Growth: ${:.2}", projection.summary.total_growth);
    println!("  Final Balance: ${:.2}", projection.summary.final_balance);

    if let Some(path) = csv_path {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        export::write_schedule_csv(file, &projection.schedule)?;
        println!("\nSchedule written to: {}", path.display());
    }

    if let Some(path) = json_path {
        let json = export::plan_projection_json(&projection)?;
        std::fs::write(&path, json)
            .with_context(|| format!("unable to create {}", path.display()))?;
        println!("Projection written to: {}", path.display());
    }

    Ok(())
}
