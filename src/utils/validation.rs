use crate::utils::error::{LedgerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use std::fmt::Write;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// chrono only reports a bad specifier lazily, while formatting; catch it up front.
pub fn validate_date_format(field_name: &str, format: &str) -> Result<()> {
    validate_non_empty_string(field_name, format)?;

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Not a valid strftime format".to_string(),
        });
    }

    // %z, %Z and friends parse fine but fail on a date-time without an offset
    let sample = NaiveDateTime::default();
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(format)).is_err() {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: "Format needs a timezone, report dates have none".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    if !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Valid levels: {}", LEVELS.join(", ")),
        });
    }
    Ok(())
}
