//! Configuration file loading
//!
//! Looks for `--config` first, then `smclcd/smclcd.toml` in the user
//! configuration directory. Falls back to the embedded defaults if
//! neither exists.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use super::Config;

/// Default configuration shipped with the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../../smclcd.toml");

/// `$XDG_CONFIG_HOME/smclcd/smclcd.toml` or the platform equivalent
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("smclcd").join("smclcd.toml"))
}

/// Parse TOML configuration; keys left out keep their defaults
pub fn parse(input: &str) -> Result<Config> {
    toml::from_str(input).context("invalid configuration")
}

/// Load configuration
///
/// An explicit path must exist. The default path is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_file(&path),
        _ => {
            debug!("Using embedded configuration");
            parse(EMBEDDED_CONFIG)
        }
    }
}

/// Load configuration from a specific file
pub fn load_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config =
        parse(&text).with_context(|| format!("failed to load config file {}", path.display()))?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}
