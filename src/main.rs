use advent_2022::domain::ports::ConfigProvider;
use advent_2022::utils::error::{AocError, EXIT_PARTIAL_FAILURE};
use advent_2022::utils::{logger, validation::Validate};
use advent_2022::{report, CliConfig, LocalInput, Runner};
use clap::Parser;

fn report_failure(context: &str, e: &AocError) {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, None, config.log_json);
    tracing::info!("Starting advent-2022");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e);
        std::process::exit(e.exit_code());
    }

    let input = LocalInput::new(config.input_dir())
        .with_pattern(config.input_pattern())
        .with_max_bytes(config.max_input_bytes());
    let format = config.report_format();
    let output = config.output.clone();
    let monitor = config.monitor;

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }
    let runner = Runner::new_with_monitoring(input, config, monitor);

    let summary = match runner.run().await {
        Ok(summary) => summary,
        Err(e) => {
            report_failure("Run failed", &e);
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = report::write_report(&summary, format, output.as_deref()).await {
        report_failure("Writing the report failed", &e);
        std::process::exit(e.exit_code());
    }

    if !summary.is_success() {
        eprintln!("❌ {} part(s) failed", summary.failures());
        std::process::exit(EXIT_PARTIAL_FAILURE);
    }
}
