//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.brook/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrookConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub streaming: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub streaming: bool,
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

/// Returns the path to `~/.brook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".brook").join("config.toml"))
}

/// Load config from `~/.brook/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BrookConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BrookConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BrookConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BrookConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BrookConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Brook Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://localhost:8080"   # Or set BROOK_BASE_URL env var

# [general]
# streaming = true                     # false fetches the whole response at once
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Could not create config directory {}: {}", parent.display(), e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Could not write default config to {}: {}", path.display(), e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Merge the config file with env vars and CLI flags into concrete values.
///
/// `cli_base_url` and `cli_no_stream` come from clap; `BROOK_BASE_URL` is
/// read from the environment (populated from `.env` by dotenv in main).
pub fn resolve(
    config: BrookConfig,
    cli_base_url: Option<String>,
    cli_no_stream: bool,
) -> ResolvedConfig {
    let base_url = cli_base_url
        .or_else(|| std::env::var("BROOK_BASE_URL").ok())
        .or(config.server.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Trailing slashes would double up when the route is appended.
    let base_url = base_url.trim_end_matches('/').to_string();

    let streaming = if cli_no_stream {
        false
    } else {
        config.general.streaming.unwrap_or(true)
    };

    ResolvedConfig { base_url, streaming }
}
