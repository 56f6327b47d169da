pub mod compound;
pub mod term;

use crate::decimal::Rate;

pub use compound::{compound_amount, future_value, CompoundingEngine, PaymentFrequency};
pub use term::{resolve_term, resolve_term_in_years, ResolvedTerm};

/// calculate effective annual percentage yield (APY)
///
/// `(1 + r/n)^n - 1` for `n` compounding periods per year.
pub fn calculate_apy(apr: Rate, periods_per_year: f64) -> Rate {
    let base = 1.0 + apr.as_decimal() / periods_per_year;
    Rate::from_decimal(base.powf(periods_per_year) - 1.0)
}
