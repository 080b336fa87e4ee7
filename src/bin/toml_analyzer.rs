use article_metrics::core::ConfigProvider;
use article_metrics::core::lexicon::Lexicon;
use article_metrics::utils::{logger, validation::Validate};
use article_metrics::{AnalyzerError, ArticlePipeline, BatchEngine, LocalStorage, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-analyzer")]
#[command(about = "Article metrics driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "article-metrics.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Load lexicons and the URL list, then stop without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // 先載入配置，才能決定日誌格式
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        exit_with(&e, "Configuration validation failed");
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No articles will be fetched");
        if let Err(e) = perform_dry_run(&config) {
            exit_with(&e, "Dry run failed");
        }
        return;
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(config.output_path().to_string());
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

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Input: {}", config.input_file());
    tracing::info!(
        "📚 Lexicons: {}, {}, {}",
        config.positive_words(),
        config.negative_words(),
        config.stop_words_dir()
    );
    tracing::info!(
        "💾 Output: {}/{} ({})",
        config.output_path(),
        config.output_filename(),
        config.output_formats().join(", ")
    );
    if let Some(timeout) = config.request_timeout_seconds() {
        tracing::info!("⏱️ Request timeout: {}s", timeout);
    }
}

fn perform_dry_run(config: &TomlConfig) -> article_metrics::Result<()> {
    Lexicon::load(
        config.positive_words(),
        config.negative_words(),
        config.stop_words_dir(),
    )?;

    let data = std::fs::read(config.input_file())?;
    let entries = article_metrics::adapters::table::read_url_entries(&data, config.input_file())?;
    for entry in &entries {
        tracing::info!("  {} -> {}", entry.url_id, entry.url);
    }
    tracing::info!("🔍 {} articles would be processed", entries.len());
    Ok(())
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
