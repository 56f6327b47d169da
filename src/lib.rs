pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod types;
pub mod validation;

// re-export key types
pub use calculator::{calculate_final_balance, BalanceCalculator, DepositCalculation, DepositInputs};
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{DepositError, Result};
pub use interest::{
    calculate_apy, future_value, resolve_term, resolve_term_in_years, CompoundingEngine,
    PaymentFrequency, ResolvedTerm,
};
pub use types::{TermSpec, YearMonth};
pub use validation::validate_inputs;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
