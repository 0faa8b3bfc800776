//! Domain error for the projection engine
//!
//! Every engine function validates its mathematical preconditions up front
//! and fails fast with an [`InvalidArgument`] naming the violated
//! precondition. There are no retryable failure modes: nothing in the
//! engine touches I/O or external state.

use thiserror::Error;

/// A precondition violation on an engine input.
///
/// The engine only validates mathematical domain preconditions
/// (non-negativity, ordering). UX range checks (e.g. age 18-100) belong to
/// the calling boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    /// A monetary amount was negative. Amounts are non-negative at every
    /// boundary; derived values such as a satisfied savings gap are clamped
    /// to zero by the solver, never rejected.
    #[error("{param} must be non-negative, got {value}")]
    NegativeAmount { param: &'static str, value: f64 },

    /// A growth, discount, return, or inflation rate was negative.
    #[error("{param} must be non-negative, got {value}")]
    NegativeRate { param: &'static str, value: f64 },

    /// A period count was negative where zero or more periods are allowed.
    #[error("{param} must be non-negative, got {value}")]
    NegativePeriods { param: &'static str, value: f64 },

    /// A period count was zero or negative where the formula divides by it.
    #[error("{param} must be positive, got {value}")]
    NonPositivePeriods { param: &'static str, value: f64 },

    /// A schedule was requested with no accumulation years.
    #[error("retirement age ({retirement_age}) must exceed current age ({current_age})")]
    RetirementAgeNotAfterCurrentAge {
        current_age: u8,
        retirement_age: u8,
    },

    /// A retirement phase was requested with no retirement years.
    #[error("life expectancy ({life_expectancy}) must exceed retirement age ({retirement_age})")]
    LifeExpectancyNotAfterRetirementAge {
        retirement_age: u8,
        life_expectancy: u8,
    },
}

/// Check that an amount input is non-negative.
pub(crate) fn check_amount(param: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value < 0.0 {
        Err(InvalidArgument::NegativeAmount { param, value })
    } else {
        Ok(value)
    }
}

/// Check that a rate input is non-negative.
pub(crate) fn check_rate(param: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value < 0.0 {
        Err(InvalidArgument::NegativeRate { param, value })
    } else {
        Ok(value)
    }
}

/// Check that a period count is non-negative (zero allowed).
pub(crate) fn check_periods(param: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value < 0.0 {
        Err(InvalidArgument::NegativePeriods { param, value })
    } else {
        Ok(value)
    }
}

/// Check that a period count is strictly positive.
pub(crate) fn check_positive_periods(
    param: &'static str,
    value: f64,
) -> Result<f64, InvalidArgument> {
    if value <= 0.0 {
        Err(InvalidArgument::NonPositivePeriods { param, value })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checks_pass_through_valid_values() {
        assert_eq!(check_amount("pv", 100.0).unwrap(), 100.0);
        assert_eq!(check_rate("rate", 0.0).unwrap(), 0.0);
        assert_eq!(check_periods("periods", 0.0).unwrap(), 0.0);
        assert_eq!(check_positive_periods("periods", 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_checks_name_the_offending_parameter() {
        let err = check_amount("current_investments", -1.0).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::NegativeAmount {
                param: "current_investments",
                value: -1.0
            }
        );
        assert!(err.to_string().contains("current_investments"));
    }

    #[test]
    fn test_zero_periods_rejected_only_where_strict() {
        assert!(check_periods("periods", 0.0).is_ok());
        assert!(check_positive_periods("periods", 0.0).is_err());
    }
}
