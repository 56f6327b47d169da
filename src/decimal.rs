use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::errors::{DepositError, Result};

/// Money type rounded to cents at the output boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    /// number of decimal places balances are shown with
    pub const CENTS_DP: u32 = 2;

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from a computed float, keeping every bit of the binary value
    pub fn from_f64(value: f64) -> Result<Self> {
        Decimal::from_f64_retain(value)
            .map(Money)
            .ok_or_else(|| DepositError::Calculation {
                message: format!("balance {} cannot be represented as money", value),
            })
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round half away from zero to cents, always carrying two decimal places
    pub fn round_cents(&self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::CENTS_DP, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::CENTS_DP);
        Money(rounded)
    }

    /// fixed-point rendering with exactly two decimals, no symbol or separators
    pub fn to_fixed(&self) -> String {
        self.round_cents().to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

/// annual interest rate, held as the percentage the user typed (1.1 means 1.1%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct Rate(f64);

impl Rate {
    pub const ZERO: Rate = Rate(0.0);

    /// create from percentage (e.g., 1.1 for 1.1%)
    pub fn from_percentage(p: f64) -> Self {
        Rate(p)
    }

    /// create from decimal (e.g., 0.011 for 1.1%)
    pub fn from_decimal(d: f64) -> Self {
        Rate(d * 100.0)
    }

    /// get as percentage
    pub fn as_percentage(&self) -> f64 {
        self.0
    }

    /// get as decimal fraction
    pub fn as_decimal(&self) -> f64 {
        self.0 / 100.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<f64> for Rate {
    fn from(p: f64) -> Self {
        Rate::from_percentage(p)
    }
}
