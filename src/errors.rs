use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepositError {
    #[error("{message}")]
    InvalidInput {
        message: String,
    },

    #[error("End date cannot be before or the same as the current date")]
    InvalidTerm,

    #[error("Invalid interest payment frequency: {tag}")]
    InvalidFrequency {
        tag: String,
    },

    #[error("Invalid month '{input}', expected YYYY-MM")]
    InvalidMonth {
        input: String,
    },

    #[error("calculation error: {message}")]
    Calculation {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    Config {
        message: String,
    },
}

impl DepositError {
    pub(crate) fn invalid_input(message: &str) -> Self {
        DepositError::InvalidInput {
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DepositError>;
