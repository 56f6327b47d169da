use hourglass_rs::SafeTimeProvider;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::{calculate_apy, resolve_term, CompoundingEngine, PaymentFrequency};
use crate::types::TermSpec;
use crate::validation::validate_inputs;

/// raw inputs for one balance calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositInputs {
    pub principal: f64,
    pub term: Option<TermSpec>,
    pub annual_rate: Rate,
    #[serde(default)]
    pub frequency: PaymentFrequency,
}

impl DepositInputs {
    pub fn new(
        principal: f64,
        term: impl Into<TermSpec>,
        annual_rate_percent: f64,
        frequency: PaymentFrequency,
    ) -> Self {
        Self {
            principal,
            term: Some(term.into()),
            annual_rate: Rate::from_percentage(annual_rate_percent),
            frequency,
        }
    }
}

/// outcome of a balance calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositCalculation {
    pub principal: Money,
    /// rounded to cents
    pub final_balance: Money,
    pub interest_earned: Money,
    pub term_years: f64,
    pub term_months: Option<u32>,
    pub periods_per_year: f64,
    /// yield over one year at this compounding
    pub effective_annual_yield: Rate,
    pub frequency: PaymentFrequency,
}

impl DepositCalculation {
    /// final balance with exactly two decimals, e.g. "10335.35"
    pub fn final_balance_string(&self) -> String {
        self.final_balance.to_fixed()
    }
}

/// validate, resolve the term, compound and round
pub struct BalanceCalculator;

impl BalanceCalculator {
    pub fn calculate(
        inputs: &DepositInputs,
        time_provider: &SafeTimeProvider,
    ) -> Result<DepositCalculation> {
        let term = validate_inputs(inputs.principal, inputs.term.as_ref(), inputs.annual_rate)?;
        let resolved = resolve_term(term, time_provider)?;

        let engine = CompoundingEngine::new(inputs.frequency);
        let periods_per_year = engine.periods_per_year(resolved.years);
        let amount =
            engine.calculate_compound(inputs.principal, inputs.annual_rate, resolved.years)?;

        let principal = Money::from_f64(inputs.principal)?.round_cents();
        let final_balance = Money::from_f64(amount)?.round_cents();

        debug!(
            "deposit of {} at {} for {} years paid {} -> {}",
            inputs.principal, inputs.annual_rate, resolved.years, inputs.frequency, final_balance
        );

        Ok(DepositCalculation {
            principal,
            final_balance,
            interest_earned: (final_balance - principal).round_cents(),
            term_years: resolved.years,
            term_months: resolved.months,
            periods_per_year,
            effective_annual_yield: calculate_apy(inputs.annual_rate, periods_per_year),
            frequency: inputs.frequency,
        })
    }
}

/// final balance of a term deposit as a two-decimal string
///
/// `term` is either a number of years or an end month; `frequency` defaults to
/// paying interest at maturity.
pub fn calculate_final_balance(
    principal: f64,
    term: impl Into<TermSpec>,
    annual_rate_percent: f64,
    frequency: Option<PaymentFrequency>,
    time_provider: &SafeTimeProvider,
) -> Result<String> {
    let inputs = DepositInputs::new(
        principal,
        term,
        annual_rate_percent,
        frequency.unwrap_or_default(),
    );
    BalanceCalculator::calculate(&inputs, time_provider).map(|calc| calc.final_balance_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DepositError;
    use crate::types::YearMonth;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::TimeSource;

    fn may_2023() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap()
        ))
    }

    #[test]
    fn test_monthly_interest_payments() {
        let time = may_2023();
        let balance =
            calculate_final_balance(10_000.0, 3.0, 1.1, Some(PaymentFrequency::Monthly), &time)
                .unwrap();
        assert_eq!(balance, "10335.35");
    }

    #[test]
    fn test_interest_paid_at_maturity() {
        let time = may_2023();
        let balance =
            calculate_final_balance(10_000.0, 3.0, 1.1, Some(PaymentFrequency::AtMaturity), &time)
                .unwrap();
        assert_eq!(balance, "10330.00");
    }

    #[test]
    fn test_frequency_defaults_to_at_maturity() {
        let time = may_2023();
        let balance = calculate_final_balance(10_000.0, 3.0, 1.1, None, &time).unwrap();
        assert_eq!(balance, "10330.00");
    }

    #[test]
    fn test_zero_rate_keeps_principal() {
        let time = may_2023();
        let balance =
            calculate_final_balance(20_000.0, 3.0, 0.0, Some(PaymentFrequency::Monthly), &time)
                .unwrap();
        assert_eq!(balance, "20000.00");
    }

    #[test]
    fn test_end_month_matches_years() {
        let time = may_2023();
        let end = YearMonth::new(2026, 5).unwrap();

        let by_month =
            calculate_final_balance(10_000.0, end, 1.1, Some(PaymentFrequency::Monthly), &time)
                .unwrap();
        let by_years =
            calculate_final_balance(10_000.0, 3.0, 1.1, Some(PaymentFrequency::Monthly), &time)
                .unwrap();
        assert_eq!(by_month, by_years);
    }

    #[test]
    fn test_end_month_not_after_current() {
        let time = may_2023();
        for month in ["2022-01", "2023-05"] {
            let end: YearMonth = month.parse().unwrap();
            let err = calculate_final_balance(10_000.0, end, 1.1, None, &time).unwrap_err();
            assert_eq!(err, DepositError::InvalidTerm);
            assert_eq!(
                err.to_string(),
                "End date cannot be before or the same as the current date"
            );
        }
    }

    #[test]
    fn test_calculation_breakdown() {
        let time = may_2023();
        let inputs = DepositInputs::new(
            10_000.0,
            YearMonth::new(2026, 5).unwrap(),
            1.1,
            PaymentFrequency::Quarterly,
        );
        let calc = BalanceCalculator::calculate(&inputs, &time).unwrap();

        assert_eq!(calc.term_months, Some(36));
        assert_eq!(calc.term_years, 3.0);
        assert_eq!(calc.periods_per_year, 4.0);
        assert_eq!(calc.principal, Money::from_major(10_000));
        assert_eq!(calc.final_balance - calc.principal, calc.interest_earned);
        assert_eq!(calc.frequency, PaymentFrequency::Quarterly);
        assert!(calc.effective_annual_yield.as_percentage() > 1.1);
    }

    #[test]
    fn test_fractional_principal_is_shown_in_cents() {
        let time = may_2023();
        let inputs = DepositInputs::new(500.123, 2.0, 1.1, PaymentFrequency::Monthly);
        let calc = BalanceCalculator::calculate(&inputs, &time).unwrap();

        assert_eq!(calc.principal, Money::from_str_exact("500.12").unwrap());
        assert_eq!(calc.principal.to_string(), "500.12");
        assert_eq!(calc.final_balance - calc.principal, calc.interest_earned);
    }

    #[test]
    fn test_yearly_yield_equals_rate() {
        let time = may_2023();
        let inputs = DepositInputs::new(1_000.0, 4.0, 2.5, PaymentFrequency::Yearly);
        let calc = BalanceCalculator::calculate(&inputs, &time).unwrap();
        assert!((calc.effective_annual_yield.as_percentage() - 2.5).abs() < 1e-9);

        let monthly = DepositInputs::new(1_000.0, 4.0, 2.5, PaymentFrequency::Monthly);
        let calc = BalanceCalculator::calculate(&monthly, &time).unwrap();
        assert!(calc.effective_annual_yield.as_percentage() > 2.5);
    }

    #[test]
    fn test_oversized_principal_is_rejected() {
        let time = may_2023();
        let err = calculate_final_balance(1e29, 3.0, 1.1, None, &time).unwrap_err();
        assert!(matches!(err, DepositError::InvalidInput { .. }));
    }

    #[test]
    fn test_missing_term_is_rejected() {
        let time = may_2023();
        let inputs = DepositInputs {
            principal: 100.0,
            term: None,
            annual_rate: Rate::from_percentage(1.0),
            frequency: PaymentFrequency::Monthly,
        };
        let err = BalanceCalculator::calculate(&inputs, &time).unwrap_err();
        assert_eq!(err.to_string(), "End date is required");
    }

    #[test]
    fn test_invalid_principal_is_rejected() {
        let time = may_2023();
        for principal in [0.0, -100.0, f64::NAN] {
            let err = calculate_final_balance(principal, 3.0, 1.1, None, &time).unwrap_err();
            assert!(matches!(err, DepositError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_zero_years_at_maturity_is_rejected() {
        let time = may_2023();
        let err = calculate_final_balance(1_000.0, 0.0, 1.1, None, &time).unwrap_err();
        assert!(matches!(err, DepositError::InvalidInput { .. }));
    }
}
