//! Command-line client entry point.
mod commands;
mod config;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sheet_content::{ConfigLoader, ContentFactory};
use sheet_core::{CharacterError, GameConfig};
use sheet_runtime::{FileUserRepository, Runtime, RuntimeConfig, RuntimeError};

use commands::Cli;
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let runtime = bootstrap(&config)?;

    let outcome = commands::execute(&runtime.handle(), cli).await;
    runtime.shutdown().await?;

    match outcome {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if is_rejection(&err) {
                eprintln!("rejected: {err}");
            } else {
                eprintln!("error: {err:#}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Rule violations, whether raised while parsing arguments or by the runtime.
fn is_rejection(err: &anyhow::Error) -> bool {
    err.downcast_ref::<RuntimeError>()
        .is_some_and(RuntimeError::is_rejection)
        || err.downcast_ref::<CharacterError>().is_some()
}

/// Logs go to stderr so command output stays clean on stdout.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn bootstrap(config: &CliConfig) -> Result<Runtime> {
    let game_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };

    let catalogs = ContentFactory::new(&config.catalog_dir).load_catalogs()?;
    let repository = FileUserRepository::new(&config.data_dir)
        .with_context(|| format!("opening data dir {}", config.data_dir.display()))?;

    tracing::debug!(
        data_dir = %config.data_dir.display(),
        catalog_dir = %config.catalog_dir.display(),
        "bootstrapping runtime"
    );

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config,
            command_buffer_size: config.command_buffer,
        })
        .repository(repository)
        .catalogs(catalogs)
        .build()?;

    Ok(runtime)
}
