use article_metrics::utils::{logger, validation::Validate};
use article_metrics::{AnalyzerError, ArticlePipeline, BatchEngine, CliConfig, LocalStorage};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting article-metrics CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e, "Configuration validation failed");
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    // 詞典在此載入，缺檔即終止
    let pipeline = match ArticlePipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(&e, "Failed to initialise pipeline"),
    };

    let engine = BatchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Analysis completed successfully");
            println!("Analysis complete. Results saved to {}.", output_path);
        }
        Err(e) => exit_with(&e, "Analysis failed"),
    }
}

fn exit_with(e: &AnalyzerError, context: &str) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code().max(1))
}
