//! Serena AI Med
//!
//! Main entry point: a terminal bedside monitor with simulated vitals.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serena_med::api::{CommandRouter, Session};
use serena_med::audit::AuditLog;
use serena_med::config::{self, Config};
use serena_med::core::VitalsSimulator;
use serena_med::ui::Console;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "serena-med", about = "Simulated bedside vitals monitor with a medical Q&A desk")]
struct Cli {
    /// Directory holding default.toml and <SERENA_ENV>.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Audit log file (defaults to serena_audit_log.txt beside the executable)
    #[arg(long)]
    audit_log: Option<PathBuf>,

    /// Seconds between automatic vitals refreshes
    #[arg(long)]
    tick_interval: Option<u64>,

    /// Seed for a reproducible simulation
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_config(&cli.config_dir)
        .with_context(|| format!("Failed to load configuration from {}", cli.config_dir.display()))?;
    if let Some(path) = cli.audit_log {
        config.audit.path = Some(path);
    }
    if let Some(secs) = cli.tick_interval {
        config.simulator.tick_interval_secs = secs;
    }
    if cli.seed.is_some() {
        config.simulator.seed = cli.seed;
    }
    config.validate()?;

    init_tracing(&config);
    info!("Starting application");

    let audit = match &config.audit.path {
        Some(path) => AuditLog::new(path),
        None => AuditLog::beside_executable(),
    };
    info!(path = %audit.path().display(), "Audit log ready");

    let simulator = match config.simulator.seed {
        Some(seed) => VitalsSimulator::seeded(seed),
        None => VitalsSimulator::from_entropy(),
    };

    let session = Session::new(simulator, Box::new(audit));
    let console = Console::new(session, CommandRouter::default(), config.simulator.tick_interval());
    console.run().await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not be up yet if configuration failed.
            error!("Application error: {:#}", e);
            eprintln!("Application error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
