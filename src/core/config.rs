//! # Configuration
//!
//! Centralizes simulator settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.helmdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The core router itself has no configuration; everything here shapes the
//! simulated hardware surface (how many buttons, how far one key press
//! turns the pot) and where the console starts.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::context::Context;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub hardware: HardwareConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Context the console starts in. An unknown name is a parse error,
    /// not a runtime fallback — invalid contexts stay unrepresentable.
    pub start_context: Option<Context>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HardwareConfig {
    pub buttons: Option<u8>,
    pub pot_step: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// The physical deck carries nine buttons, ids 1..=9.
pub const DEFAULT_BUTTONS: u8 = 9;
/// One simulated key press turns the pot by 5% of its travel.
pub const DEFAULT_POT_STEP: f64 = 0.05;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_context: Context,
    pub buttons: u8,
    pub pot_step: f64,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.helmdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".helmdeck").join("config.toml"))
}

/// Load config from `path`, or from [`config_path`] when `path` is `None`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<PathBuf>) -> Result<DeckConfig, ConfigError> {
    let path = match path.or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Helmdeck Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_context = "main_menu"   # main_menu, hud_tuning, ship_viewer,
#                               # media_control, elite_data, settings

# [hardware]
# buttons = 9                   # Simulated button count (keys 1..=9)
# pot_step = 0.05               # Pot travel per arrow key / scroll notch
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_context` comes from the `--context` flag (None = not specified).
pub fn resolve(config: &DeckConfig, cli_context: Option<Context>) -> ResolvedConfig {
    // Start context: CLI → env → config → default
    let start_context = cli_context
        .or_else(|| {
            std::env::var("HELMDECK_CONTEXT")
                .ok()
                .and_then(|s| match Context::from_str(&s, true) {
                    Ok(context) => Some(context),
                    Err(_) => {
                        warn!("Ignoring unknown HELMDECK_CONTEXT value: {}", s);
                        None
                    }
                })
        })
        .or(config.general.start_context)
        .unwrap_or(Context::MainMenu);

    // Pot step: env → config → default
    let pot_step = std::env::var("HELMDECK_POT_STEP")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .or(config.hardware.pot_step)
        .unwrap_or(DEFAULT_POT_STEP);

    ResolvedConfig {
        start_context,
        buttons: config.hardware.buttons.unwrap_or(DEFAULT_BUTTONS),
        pot_step,
    }
}
