use chrono::{Datelike, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{DepositError, Result};

pub const MONTHS_IN_YEAR: u32 = 12;

/// calendar month without a day, written as "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=MONTHS_IN_YEAR).contains(&month) {
            return Err(DepositError::InvalidMonth {
                input: format!("{}-{}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    /// month containing the provider's current instant
    pub fn current(time_provider: &SafeTimeProvider) -> Self {
        let now = time_provider.now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month of year
    pub fn month(&self) -> u32 {
        self.month
    }

    fn month_index(&self) -> i64 {
        self.year as i64 * MONTHS_IN_YEAR as i64 + self.month as i64
    }

    /// whole months from `self` to `target`, negative when target is earlier
    pub fn months_until(&self, target: YearMonth) -> i64 {
        target.month_index() - self.month_index()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DepositError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || DepositError::InvalidMonth {
            input: trimmed.to_string(),
        };

        // chrono's %Y also takes short or signed years, which are never a maturity month
        let (year, _) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
            .map_err(|_| invalid())?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DepositError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// how long the deposit runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermSpec {
    /// explicit term length in (possibly fractional) years
    Years(f64),
    /// maturity month, measured from the current month
    EndMonth(YearMonth),
}

impl FromStr for TermSpec {
    type Err = DepositError;

    /// accepts "YYYY-MM" or a plain number of years
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DepositError::invalid_input("End date is required"));
        }

        match trimmed.parse::<YearMonth>() {
            Ok(month) => Ok(TermSpec::EndMonth(month)),
            Err(month_err) => trimmed
                .parse::<f64>()
                .map(TermSpec::Years)
                .map_err(|_| month_err),
        }
    }
}

impl From<f64> for TermSpec {
    fn from(years: f64) -> Self {
        TermSpec::Years(years)
    }
}

impl From<YearMonth> for TermSpec {
    fn from(month: YearMonth) -> Self {
        TermSpec::EndMonth(month)
    }
}
