//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lectern/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::display::{
    ContextViewMode, DEFAULT_VERSES_AFTER, DEFAULT_VERSES_BEFORE,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LecternConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_reference: Option<String>,
    pub view_mode: Option<ContextViewMode>,
    pub verses_before: Option<u16>,
    pub verses_after: Option<u16>,
    pub resource_dir: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_REFERENCE: &str = "JHN 1:1";

/// Where USFM texts live when `resource_dir` is not set: `~/.lectern/texts`.
pub fn default_resource_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".lectern")
        .join("texts")
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_reference: String,
    pub view_mode: ContextViewMode,
    pub verses_before: u16,
    pub verses_after: u16,
    pub resource_dir: PathBuf,
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

/// Returns the path to `~/.lectern/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lectern").join("config.toml"))
}

/// Load config from `~/.lectern/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LecternConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LecternConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LecternConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LecternConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LecternConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lectern Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_reference = "JHN 1:1"    # Opened when no saved position exists
# view_mode = "by-verse"         # "before-and-after", "by-verse", "by-section",
#                                # "by-chapter" or "by-book"
# verses_before = 2              # Context window in before-and-after mode
# verses_after = 6
# resource_dir = "/path/to/usfm" # Directory of .usfm files (default ~/.lectern/texts)
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
/// CLI arguments are `None` when not specified.
pub fn resolve(
    config: &LecternConfig,
    cli_reference: Option<&str>,
    cli_view: Option<ContextViewMode>,
    cli_resource: Option<&Path>,
) -> ResolvedConfig {
    // Start reference: CLI → env → config → default
    let start_reference = cli_reference
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LECTERN_REFERENCE").ok())
        .or_else(|| config.general.start_reference.clone())
        .unwrap_or_else(|| DEFAULT_START_REFERENCE.to_string());

    // View mode: CLI → config → default
    let view_mode = cli_view
        .or(config.general.view_mode)
        .unwrap_or_default();

    // Resource dir: CLI → env → config → default
    let resource_dir = cli_resource
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("LECTERN_RESOURCE_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.resource_dir.clone().map(PathBuf::from))
        .unwrap_or_else(default_resource_dir);

    ResolvedConfig {
        start_reference,
        view_mode,
        verses_before: config.general.verses_before.unwrap_or(DEFAULT_VERSES_BEFORE),
        verses_after: config.general.verses_after.unwrap_or(DEFAULT_VERSES_AFTER),
        resource_dir,
    }
}
