use clap::Parser;
use suggest_csv::utils::{logger, validation::Validate};
use suggest_csv::{Cli, EtlEngine, LocalStorage, SuggestPipeline};

#[tokio::main]
async fn main() {
    // Bad argument counts print usage to stderr and exit 1; help and
    // version keep stdout and a zero status.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });
    let config = cli.into_config();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting suggest-csv");
    if config.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = SuggestPipeline::new(LocalStorage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Suggestions saved successfully!");
            println!("✅ Suggestions saved successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Query failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
