use crate::decimal::Rate;
use crate::errors::{DepositError, Result};
use crate::types::TermSpec;

/// largest deposit that still fits the decimal type balances are rounded in
pub const MAX_PRINCIPAL: f64 = 7.9e28;

/// reject inputs that cannot produce a meaningful balance
///
/// Zero and negative rates are allowed. A term given directly in years must be
/// a positive finite number. Returns the term that was checked.
pub fn validate_inputs(
    principal: f64,
    term: Option<&TermSpec>,
    annual_rate: Rate,
) -> Result<&TermSpec> {
    if principal.is_nan() || principal <= 0.0 || principal.is_infinite() {
        return Err(DepositError::invalid_input("Initial deposit must be a positive number"));
    }
    if principal > MAX_PRINCIPAL {
        return Err(DepositError::invalid_input("Initial deposit is too large"));
    }

    let term = term.ok_or_else(|| DepositError::invalid_input("End date is required"))?;

    if !annual_rate.is_valid() {
        return Err(DepositError::invalid_input("Annual interest rate must be a valid number"));
    }

    if let TermSpec::Years(years) = *term {
        if !years.is_finite() || years <= 0.0 {
            return Err(DepositError::invalid_input(
                "Investment term must be a positive number of years",
            ));
        }
    }

    Ok(term)
}
