pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, LedgerConfig, TomlConfig};

pub use core::{engine::LedgerEngine, ledger::LedgerService, report::Report};
pub use domain::model::{BillingTier, Ledger, Programmer, ProjectTeam};
pub use utils::error::{LedgerError, Result};
