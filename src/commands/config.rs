//! `droplist config`

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;

/// Show the config file location and the effective settings
pub fn cmd_config(path_only: bool) -> Result<()> {
    let path = Config::path()?;
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    let config = Config::load()?;
    let status = if path.exists() {
        "loaded".green()
    } else {
        "not found, using defaults".yellow()
    };
    println!("{}", "Configuration".bold());
    println!("  File: {} ({})", path.display(), status);
    println!();
    let rendered = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    for line in rendered.lines() {
        println!("  {line}");
    }
    Ok(())
}
