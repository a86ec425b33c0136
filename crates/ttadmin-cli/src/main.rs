//! ttadmin - Main entry point

use clap::Parser;
use std::process;
use tracing::{debug, warn};
use ttadmin_cli::api::ApiClient;
use ttadmin_cli::commands;
use ttadmin_cli::config::Config;
use ttadmin_cli::{Cli, CliError, Commands, ConfigCommand};
use ttadmin_common::logging::{init_logging, LogConfig, LogLevel};

#[tokio::main]
async fn main() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Environment first, then -v raises the level
    let mut log_config = LogConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}; using default logging", e);
        LogConfig::default()
    });
    if cli.verbose > 0 {
        log_config.level = LogLevel::Info.raised_by(cli.verbose);
    }

    // The CLI works without logging
    let _guard = init_logging(&log_config).ok();

    if let Err(e) = execute_command(&cli).await {
        match &e {
            // Already a single localized message
            CliError::View(_) | CliError::Validation(_) => debug!(error = %e, "Command failed"),
            _ => warn!(error = %e, "Command failed"),
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> ttadmin_cli::Result<()> {
    let api_url = cli.api_url.as_deref();
    let format = cli.format;

    if let Commands::Config { command } = &cli.command {
        return match command {
            ConfigCommand::Get { key } => commands::config::get(api_url, key).await,
            ConfigCommand::Show => commands::config::show(api_url).await,
        };
    }

    let config = Config::load(api_url)?;
    let api = ApiClient::from_config(&config)?;

    match &cli.command {
        Commands::Rooms { command } => commands::rooms::run(&api, command, format).await,
        Commands::Instructors { command } => commands::instructors::run(&api, command, format).await,
        Commands::Students { command } => commands::students::run(&api, command, format).await,
        Commands::Courses { command } => commands::courses::run(&api, command, format).await,
        Commands::Classes { command } => commands::classes::run(&api, command, format).await,
        Commands::Schedules { command } => commands::schedules::run(&api, command, format).await,
        Commands::Import {
            file,
            keep_existing,
        } => commands::import::run(&api, file.clone(), *keep_existing, format).await,
        Commands::Dashboard => commands::dashboard::run(&api, format).await,
        Commands::Config { .. } => Ok(()),
    }
}
