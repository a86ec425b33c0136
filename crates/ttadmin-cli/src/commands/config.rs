//! `ttadmin config` command implementation
//!
//! Prints the effective configuration after every layer is applied.

use crate::config::{Config, ENV_API_TIMEOUT, ENV_API_URL, ENV_CONFIG_PATH, KEYS};
use crate::error::Result;
use colored::Colorize;

/// Get configuration value
pub async fn get(api_url: Option<&str>, key: &str) -> Result<()> {
    let config = Config::load(api_url)?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Show all configuration
pub async fn show(api_url: Option<&str>) -> Result<()> {
    let config = Config::load(api_url)?;

    println!("{}", "ttadmin configuration:".cyan().bold());
    println!();
    for key in KEYS {
        println!("{:<15} {}", format!("{}:", key), config.get(key)?);
    }
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  {:<26}- API base URL", ENV_API_URL);
    println!("  {:<26}- Request timeout in seconds", ENV_API_TIMEOUT);
    println!("  {:<26}- Config file path", ENV_CONFIG_PATH);

    Ok(())
}
