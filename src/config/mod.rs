pub mod cli;
pub mod toml_config;

use crate::core::report::DEFAULT_DATE_FORMAT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Effective settings after defaults, the TOML file and CLI flags are layered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub data_file: String,
    pub date_format: String,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            log_level: None,
            json_logs: false,
            verbose: false,
        }
    }
}

impl LedgerConfig {
    /// Values present in `toml` replace the current ones.
    pub fn merge_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(path) = toml.data_file() {
            self.data_file = path.to_string();
        }
        if let Some(format) = toml.date_format() {
            self.date_format = format.to_string();
        }
        if let Some(level) = toml.log_level() {
            self.log_level = Some(level.to_string());
        }
        self.json_logs |= toml.json_logs();
        self.verbose |= toml.verbose();
        self
    }
}

impl ConfigProvider for LedgerConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Validate for LedgerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_file", &self.data_file)?;
        validation::validate_date_format("date_format", &self.date_format)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "staffing-ledger")]
#[command(about = "Advances every programmer's duration by one day and prints the staffing report")]
pub struct CliConfig {
    #[arg(long, help = "Ledger JSON file [default: data.json]")]
    pub data_file: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "strftime format for report dates [default: %-m/%-d/%Y]")]
    pub date_format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the `--config` file, then explicit flags.
    pub fn resolve(&self) -> Result<LedgerConfig> {
        let mut config = LedgerConfig::default();

        if let Some(path) = &self.config {
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            config = config.merge_toml(&toml);
        }
        if let Some(path) = &self.data_file {
            config.data_file = path.clone();
        }
        if let Some(format) = &self.date_format {
            config.date_format = format.clone();
        }
        config.json_logs |= self.json_logs;
        config.verbose |= self.verbose;

        config.validate()?;
        Ok(config)
    }
}
