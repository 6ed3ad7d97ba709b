use crate::core::{Ledger, Storage};
use crate::utils::error::{LedgerError, Result};

/// Loads and saves a [`Ledger`] through a [`Storage`] backend.
///
/// Every failure surfaces as `DataLoadError` or `DataSaveError`; deciding
/// whether to carry on is the caller's business.
pub struct LedgerService<S: Storage> {
    storage: S,
}

impl<S: Storage> LedgerService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// A top-level `null` or `[]` yields an empty ledger rather than an error.
    pub fn load(&self, path: &str) -> Result<Ledger> {
        let bytes = self
            .storage
            .read_file(path)
            .map_err(|e| LedgerError::load(path, e))?;

        let ledger: Option<Ledger> =
            serde_json::from_slice(&bytes).map_err(|e| LedgerError::load(path, e))?;
        let ledger = ledger.unwrap_or_default();

        tracing::debug!(
            "Loaded {} teams / {} programmers from {}",
            ledger.team_count(),
            ledger.programmer_count(),
            path
        );
        Ok(ledger)
    }

    /// Overwrites `path` wholesale with pretty-printed JSON.
    pub fn save(&self, ledger: &Ledger, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger).map_err(|e| LedgerError::save(path, e))?;

        self.storage
            .write_file(path, json.as_bytes())
            .map_err(|e| LedgerError::save(path, e))?;

        tracing::debug!("Saved {} bytes to {}", json.len(), path);
        Ok(())
    }
}
