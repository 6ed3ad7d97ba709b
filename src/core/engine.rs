use crate::core::{ConfigProvider, Ledger, LedgerService, Report, Storage};
use std::io::Write;

/// What a run ended with. Load/save failures are recorded here, not returned as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub ledger: Ledger,
    pub loaded: bool,
    pub saved: bool,
}

/// Runs the period update once: load → advance → save → report.
pub struct LedgerEngine<S: Storage, C: ConfigProvider> {
    service: LedgerService<S>,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LedgerEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            service: LedgerService::new(storage),
            config,
        }
    }

    /// The report and any load/save error lines go to `out`. The only error
    /// returned is a failure to write to `out` itself.
    pub fn run<W: Write>(&self, out: &mut W) -> std::io::Result<RunOutcome> {
        let path = self.config.data_file();
        tracing::info!("Updating ledger {}", path);

        // Load
        let (mut ledger, loaded) = match self.service.load(path) {
            Ok(ledger) => (ledger, true),
            Err(e) => {
                tracing::error!("❌ Load failed, continuing with an empty ledger: {}", e);
                writeln!(out, "{}", e.user_friendly_message())?;
                (Ledger::new(), false)
            }
        };

        // Advance
        ledger.advance();
        for programmer in ledger.programmers() {
            tracing::debug!("{}", programmer);
        }
        tracing::info!(
            "Advanced {} programmers across {} teams",
            ledger.programmer_count(),
            ledger.team_count()
        );

        // Save
        let saved = match self.service.save(&ledger, path) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("❌ Save failed, report reflects unsaved state: {}", e);
                writeln!(out, "{}", e.user_friendly_message())?;
                false
            }
        };

        // Report
        Report::build(&ledger, self.config.date_format()).write_to(out)?;

        Ok(RunOutcome {
            ledger,
            loaded,
            saved,
        })
    }
}
