use advent_2022::domain::ports::{ConfigProvider, Solver};
use advent_2022::utils::error::{AocError, EXIT_PARTIAL_FAILURE};
use advent_2022::utils::{logger, validation::Validate};
use advent_2022::{report, LocalInput, Runner, TomlConfig};
use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "advent-toml")]
#[command(about = "Advent of Code 2022 runner driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "advent.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the days from config, comma separated
    #[arg(long, value_delimiter = ',')]
    days: Option<Vec<u8>>,

    /// Show what would be solved without reading any input
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    logger::init_logger(args.verbose, config.log_level(), config.json_logs());
    tracing::info!("🚀 Starting advent-toml");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    if let Some(days) = args.days {
        tracing::info!("🔧 Days overridden to: {:?}", days);
        config.run.days = days;
    }

    if let Err(e) = config.validate() {
        exit_with("Configuration validation failed", &e);
    }

    display_config_summary(&config);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let input = LocalInput::new(config.input_dir())
        .with_pattern(config.input_pattern())
        .with_max_bytes(config.max_input_bytes());
    let format = config.report_format();
    let output = config.output_path().map(str::to_string);
    let runner = Runner::new_with_monitoring(input, config, monitor_enabled);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no input will be read");
        let (solvers, parts) = match runner.plan() {
            Ok(plan) => plan,
            Err(e) => exit_with("Planning the run failed", &e),
        };
        for solver in solvers {
            println!("Day {}: {} (parts {:?})", solver.day(), solver.title(), parts);
        }
        return Ok(());
    }

    let summary = match runner.run().await {
        Ok(summary) => summary,
        Err(e) => exit_with("Run failed", &e),
    };

    if let Err(e) = report::write_report(&summary, format, output.as_deref()).await {
        exit_with("Writing the report failed", &e);
    }

    if !summary.is_success() {
        tracing::error!("❌ {} part(s) failed", summary.failures());
        std::process::exit(EXIT_PARTIAL_FAILURE);
    }

    Ok(())
}

/// Exits with the code matching the error's severity.
fn exit_with(context: &str, e: &AocError) -> ! {
    tracing::error!("❌ {}: {} (Severity: {:?})", context, e, e.severity());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!(
        "   Inputs: {}/{} (max {} bytes)",
        config.input_dir(),
        config.input_pattern(),
        config.max_input_bytes()
    );
    if config.run.days.is_empty() {
        tracing::info!("   Days: all implemented");
    } else {
        tracing::info!("   Days: {:?}", config.run.days);
    }
    tracing::info!(
        "   Parallelism: {}, fail fast: {}",
        config.parallelism(),
        config.fail_fast()
    );
    tracing::info!(
        "   Report: {} -> {}",
        config.report_format(),
        config.output_path().unwrap_or("stdout")
    );
}
