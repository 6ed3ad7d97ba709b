use crate::utils::error::{LedgerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub report: ReportSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSection {
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LedgerError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LedgerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LedgerError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_file(&self) -> Option<&str> {
        self.ledger.data_file.as_deref()
    }

    pub fn date_format(&self) -> Option<&str> {
        self.report.date_format.as_deref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.data_file() {
            validation::validate_path("ledger.data_file", path)?;
        }
        if let Some(format) = self.date_format() {
            validation::validate_date_format("report.date_format", format)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[ledger]
data_file = "/var/lib/ledger/data.json"

[report]
date_format = "%d/%m/%Y"

[logging]
level = "debug"
json = true
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_file(), Some("/var/lib/ledger/data.json"));
        assert_eq!(config.date_format(), Some("%d/%m/%Y"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.data_file(), None);
        assert_eq!(config.date_format(), None);
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STAFFING_LEDGER_TEST_HOME", "/srv/ledger");

        let config = TomlConfig::from_toml_str(
            r#"
[ledger]
data_file = "${STAFFING_LEDGER_TEST_HOME}/data.json"
"#,
        )
        .unwrap();
        assert_eq!(config.data_file(), Some("/srv/ledger/data.json"));

        std::env::remove_var("STAFFING_LEDGER_TEST_HOME");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
[ledger]
data_file = "${STAFFING_LEDGER_SURELY_UNSET}/data.json"
"#,
        )
        .unwrap();
        assert_eq!(
            config.data_file(),
            Some("${STAFFING_LEDGER_SURELY_UNSET}/data.json")
        );
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[report]
date_format = "%Q"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[logging]
level = "chatty"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[ledger\ndata_file = 1").unwrap_err();
        assert!(matches!(err, LedgerError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[ledger]\ndata_file = \"team.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_file(), Some("team.json"));
    }
}
