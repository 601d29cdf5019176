use thiserror::Error;

/// Errors raised while building a simulation.
/// Nothing in the per-tick path can fail once construction succeeds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    #[error("invalid dimension: {field} must be positive, got {value}")]
    InvalidDimension { field: &'static str, value: String },

    #[error("malformed pattern '{name}': {reason}")]
    MalformedPattern { name: String, reason: String },

    #[error("invalid {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

impl LifeError {
    pub(crate) fn dimension(field: &'static str, value: impl ToString) -> Self {
        LifeError::InvalidDimension {
            field,
            value: value.to_string(),
        }
    }

    pub(crate) fn pattern(name: &str, reason: impl Into<String>) -> Self {
        LifeError::MalformedPattern {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn setting(field: &'static str, reason: impl Into<String>) -> Self {
        LifeError::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
