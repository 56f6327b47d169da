use hourglass_rs::SafeTimeProvider;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{DepositError, Result};
use crate::types::{TermSpec, YearMonth, MONTHS_IN_YEAR};

/// investment term after resolving it against the clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTerm {
    pub years: f64,
    /// whole months, only known when the term came from an end month
    pub months: Option<u32>,
}

/// turn a term specification into a length in years
///
/// An end month is counted in whole calendar months from the provider's
/// current month, ignoring the day. A years value passes through as given.
pub fn resolve_term(term: &TermSpec, time_provider: &SafeTimeProvider) -> Result<ResolvedTerm> {
    match *term {
        TermSpec::Years(years) => Ok(ResolvedTerm { years, months: None }),
        TermSpec::EndMonth(end_month) => {
            let current = YearMonth::current(time_provider);
            let months = current.months_until(end_month);

            if months <= 0 {
                warn!("end month {} is not after current month {}", end_month, current);
                return Err(DepositError::InvalidTerm);
            }

            let months = u32::try_from(months).map_err(|_| DepositError::Calculation {
                message: format!("term of {} months is too long", months),
            })?;
            debug!("term from {} to {} is {} months", current, end_month, months);

            Ok(ResolvedTerm {
                years: months as f64 / MONTHS_IN_YEAR as f64,
                months: Some(months),
            })
        }
    }
}

/// length of the term in fractional years
pub fn resolve_term_in_years(term: &TermSpec, time_provider: &SafeTimeProvider) -> Result<f64> {
    resolve_term(term, time_provider).map(|resolved| resolved.years)
}
