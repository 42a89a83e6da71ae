//! Application paths and option persistence.
//!
//! The demo stores its resolved options as JSON in the platform config
//! directory so a tweaked setup survives restarts.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use crate::options::FlipOptions;

const OPTIONS_FILE: &str = "flipbox.json";

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Create PathConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI args → ENV var (FLIPBOX_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir =
            cli_dir.or_else(|| std::env::var("FLIPBOX_CONFIG_DIR").ok().map(PathBuf::from));
        Self { config_dir }
    }
}

/// Resolve the configuration directory.
///
/// Platform paths:
/// - Linux: ~/.config/flipbox
/// - macOS: ~/Library/Application Support/flipbox
/// - Windows: %APPDATA%\flipbox
fn config_dir(config: &PathConfig) -> PathBuf {
    if let Some(ref dir) = config.config_dir {
        return dir.clone();
    }
    if let Some(dir) = dirs_next::config_dir() {
        return dir.join("flipbox");
    }
    // Headless fallback: current directory
    PathBuf::from(".")
}

/// Get path to a configuration file
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    config_dir(config).join(name)
}

/// Ensure the configuration directory exists
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let dir = config_dir(config);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))
}

/// Load persisted options; a missing file yields the defaults.
pub fn load_options(config: &PathConfig) -> Result<FlipOptions> {
    let path = config_file(OPTIONS_FILE, config);
    if !path.exists() {
        debug!("no options file at {}, using defaults", path.display());
        return Ok(FlipOptions::default());
    }
    let data = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let options = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!("loaded options from {}", path.display());
    Ok(options)
}

/// Persist the resolved options.
pub fn save_options(options: &FlipOptions, config: &PathConfig) -> Result<()> {
    let path = config_file(OPTIONS_FILE, config);
    let data = serde_json::to_string_pretty(options).context("failed to serialize options")?;
    std::fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("saved options to {}", path.display());
    Ok(())
}
