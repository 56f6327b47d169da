use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calculator::DepositInputs;
use crate::decimal::Rate;
use crate::errors::{DepositError, Result};
use crate::interest::PaymentFrequency;
use crate::types::{TermSpec, YearMonth};

pub const DEFAULT_PRINCIPAL: f64 = 10_000.0;
pub const DEFAULT_RATE_PERCENT: f64 = 1.1;

/// calculator configuration, every field optional in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub end_month: Option<YearMonth>,
    pub term_years: Option<f64>,
    pub frequency: PaymentFrequency,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            annual_rate_percent: DEFAULT_RATE_PERCENT,
            end_month: None,
            term_years: None,
            frequency: PaymentFrequency::AtMaturity,
        }
    }
}

impl CalculatorConfig {
    /// parse from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| DepositError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// read and parse a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DepositError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.end_month.is_some() && self.term_years.is_some() {
            return Err(DepositError::Config {
                message: "set either end_month or term_years, not both".to_string(),
            });
        }
        Ok(())
    }

    /// term to use, falling back to the current month when neither is set
    pub fn term(&self, time_provider: &SafeTimeProvider) -> TermSpec {
        match (self.end_month, self.term_years) {
            (Some(month), _) => TermSpec::EndMonth(month),
            (None, Some(years)) => TermSpec::Years(years),
            (None, None) => TermSpec::EndMonth(YearMonth::current(time_provider)),
        }
    }

    pub fn to_inputs(&self, time_provider: &SafeTimeProvider) -> Result<DepositInputs> {
        self.validate()?;
        Ok(DepositInputs {
            principal: self.principal,
            term: Some(self.term(time_provider)),
            annual_rate: Rate::from_percentage(self.annual_rate_percent),
            frequency: self.frequency,
        })
    }
}
