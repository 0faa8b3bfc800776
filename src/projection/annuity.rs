//! Present value of payment streams
//!
//! The nest egg calculation is a growing annuity: retirement-year expenses
//! that rise with inflation, discounted at the expected in-retirement
//! return. When the two rates (nearly) coincide the general formula divides
//! by a near-zero denominator, so a degenerate closed form takes over below
//! a fixed tolerance.

use crate::error::{check_amount, check_periods, check_rate, InvalidArgument};

/// Below this absolute rate difference the general growing-annuity formula
/// is numerically unstable and the degenerate form is used instead.
const RATE_EQUALITY_TOLERANCE: f64 = 1e-4;

/// Present value of a growing annuity.
///
/// Payments start at `first_payment` and grow by `growth_rate` each period;
/// the stream is discounted at `discount_rate`:
///
/// `PV = P * (1 - ((1+g)/(1+r))^n) / (r - g)`
///
/// When `|r - g| < 1e-4` the degenerate form `PV = P * n / (1 + r)` applies.
/// `growth_rate` is unconstrained in sign; the other inputs must be
/// non-negative.
pub fn present_value_growing_annuity(
    first_payment: f64,
    discount_rate: f64,
    growth_rate: f64,
    periods: f64,
) -> Result<f64, InvalidArgument> {
    check_amount("first_payment", first_payment)?;
    check_rate("discount_rate", discount_rate)?;
    check_periods("periods", periods)?;

    if (discount_rate - growth_rate).abs() < RATE_EQUALITY_TOLERANCE {
        return Ok(first_payment * periods / (1.0 + discount_rate));
    }

    let factor = ((1.0 + growth_rate) / (1.0 + discount_rate)).powf(periods);
    Ok(first_payment * (1.0 - factor) / (discount_rate - growth_rate))
}

/// Lump sum needed at retirement to fund `annual_expense` for
/// `years_in_retirement`, with expenses growing at `inflation_rate` and the
/// balance earning `expected_return`.
pub fn retirement_nest_egg(
    annual_expense: f64,
    years_in_retirement: f64,
    expected_return: f64,
    inflation_rate: f64,
) -> Result<f64, InvalidArgument> {
    present_value_growing_annuity(
        annual_expense,
        expected_return,
        inflation_rate,
        years_in_retirement,
    )
}

/// Net present value of a series of cash flows.
///
/// `cash_flows[t]` is the flow in period `t`; period 0 is undiscounted.
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> Result<f64, InvalidArgument> {
    check_rate("rate", rate)?;

    Ok(cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum())
}
