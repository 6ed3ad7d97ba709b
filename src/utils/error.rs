use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{path}: {message}")]
    DataLoadError { path: String, message: String },

    #[error("{path}: {message}")]
    DataSaveError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LedgerError {
    pub fn load(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        LedgerError::DataLoadError {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    pub fn save(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        LedgerError::DataSaveError {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    /// Console message: `Display` plus a prefix naming the failed step.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LedgerError::DataLoadError { .. } => format!("Error loading data: {}", self),
            LedgerError::DataSaveError { .. } => format!("Error saving data: {}", self),
            LedgerError::ConfigError { message } => {
                format!("Invalid configuration: {}", message)
            }
            LedgerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message_has_prefix() {
        let err = LedgerError::load("data.json", "No such file or directory");
        assert_eq!(
            err.user_friendly_message(),
            "Error loading data: data.json: No such file or directory"
        );
    }

    #[test]
    fn test_save_error_message_has_prefix() {
        let err = LedgerError::save("/readonly/data.json", "Permission denied");
        assert!(err.user_friendly_message().starts_with("Error saving data: "));
    }
}
