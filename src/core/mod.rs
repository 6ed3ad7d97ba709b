pub mod engine;
pub mod ledger;
pub mod report;

pub use crate::domain::model::{BillingTier, Ledger, Programmer, ProjectTeam};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use ledger::LedgerService;
pub use report::Report;
