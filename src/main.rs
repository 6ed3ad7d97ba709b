use clap::Parser;
use staffing_ledger::utils::logger;
use staffing_ledger::{CliConfig, LedgerEngine, LocalStorage};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Bad configuration is the only non-zero exit
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if config.json_logs {
        logger::init_json_logger(config.verbose, config.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, config.log_level.as_deref());
    }
    tracing::debug!("Effective config: {:?}", config);

    let engine = LedgerEngine::new(LocalStorage::default(), config);

    let stdout = std::io::stdout();
    let outcome = engine.run(&mut stdout.lock())?;

    tracing::info!(
        loaded = outcome.loaded,
        saved = outcome.saved,
        "Run finished"
    );
    Ok(())
}
