//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing one-shot reports as JSON
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use site_audit::initialization::{init_client, init_logger_with};
use site_audit::{run_seo_audit, run_site_audit, start_server, AppState, Command, Opt};

fn print_json<T: serde::Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so RUST_LOG and
    // friends can be set without exporting them manually
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = opt.to_config();
    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    let outcome = match &opt.command {
        Command::Serve { bind } => {
            let state = AppState {
                client,
                config: Arc::new(config),
            };
            start_server(bind, state).await
        }
        Command::Audit { url } => match run_site_audit(&client, &config, url).await {
            Ok(report) => print_json(&report),
            Err(e) => Err(e.into()),
        },
        Command::Seo { url } => match run_seo_audit(&client, &config, url).await {
            Ok(report) => print_json(&report),
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = outcome {
        eprintln!("site_audit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
