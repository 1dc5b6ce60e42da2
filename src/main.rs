use board_export::utils::{logger, validation::Validate};
use board_export::{CliConfig, EtlEngine, LocalStorage, MarkdownPipeline};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger();

    tracing::info!("Starting board-export CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }

    let pipeline = MarkdownPipeline::new(LocalStorage::new(), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "Export completed: {} files in {}",
                summary.files_written,
                summary.output_root.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Export failed: {} (category: {:?})", e, e.category());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            Err(e.into())
        }
    }
}
