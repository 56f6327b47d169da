use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Rate;
use crate::errors::{DepositError, Result};
use crate::types::MONTHS_IN_YEAR;

pub const QUARTERS_IN_YEAR: u32 = 4;

/// how often interest is paid out and therefore compounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    Yearly,
    /// single payment when the deposit matures
    #[default]
    AtMaturity,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 4] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::Quarterly,
        PaymentFrequency::Yearly,
        PaymentFrequency::AtMaturity,
    ];

    /// get number of compounding periods per year
    ///
    /// At maturity interest compounds exactly once over the whole term, so the
    /// rate is the reciprocal of the term and `n * t` is always one period.
    pub fn periods_per_year(&self, term_in_years: f64) -> f64 {
        match self {
            PaymentFrequency::Monthly => MONTHS_IN_YEAR as f64,
            PaymentFrequency::Quarterly => QUARTERS_IN_YEAR as f64,
            PaymentFrequency::Yearly => 1.0,
            PaymentFrequency::AtMaturity => 1.0 / term_in_years,
        }
    }

    /// wire tag, as accepted by `from_str`
    pub fn tag(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Yearly => "yearly",
            PaymentFrequency::AtMaturity => "atMaturity",
        }
    }

    /// human readable name
    pub fn label(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::Yearly => "Annually",
            PaymentFrequency::AtMaturity => "At Maturity",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PaymentFrequency {
    type Err = DepositError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        PaymentFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.tag() == tag)
            .ok_or_else(|| DepositError::InvalidFrequency {
                tag: tag.to_string(),
            })
    }
}

/// engine for compound interest calculations
pub struct CompoundingEngine {
    pub frequency: PaymentFrequency,
}

impl CompoundingEngine {
    pub fn new(frequency: PaymentFrequency) -> Self {
        Self { frequency }
    }

    /// compounding periods per year for a deposit of the given term
    pub fn periods_per_year(&self, term_in_years: f64) -> f64 {
        self.frequency.periods_per_year(term_in_years)
    }

    /// final amount `A = P * (1 + r/n)^(n*t)`
    pub fn calculate_compound(
        &self,
        principal: f64,
        annual_rate: Rate,
        term_in_years: f64,
    ) -> Result<f64> {
        let periods_per_year = self.periods_per_year(term_in_years);
        compound_amount(principal, annual_rate.as_decimal(), periods_per_year, term_in_years)
    }
}

/// apply `A = P * (1 + r/n)^(n*t)` with `r` as a decimal fraction
pub fn compound_amount(
    principal: f64,
    annual_rate: f64,
    periods_per_year: f64,
    term_in_years: f64,
) -> Result<f64> {
    let rate_per_period = annual_rate / periods_per_year;
    let number_of_periods = periods_per_year * term_in_years;
    let amount = principal * (1.0 + rate_per_period).powf(number_of_periods);

    debug!(
        "compounding {} at {} per period over {} periods -> {}",
        principal, rate_per_period, number_of_periods, amount
    );

    if !amount.is_finite() {
        return Err(DepositError::Calculation {
            message: format!(
                "compounding {} at {} per period over {} periods does not give a finite balance",
                principal, rate_per_period, number_of_periods
            ),
        });
    }

    Ok(amount)
}

/// calculate the future value of a deposit
pub fn future_value(
    principal: f64,
    annual_rate: Rate,
    term_in_years: f64,
    frequency: PaymentFrequency,
) -> Result<f64> {
    CompoundingEngine::new(frequency).calculate_compound(principal, annual_rate, term_in_years)
}
