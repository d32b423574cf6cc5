//! Configuration file loading with precedence handling.

use crate::source::DEFAULT_BASE_URL;
use crate::storage::FileTermSlot;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/hnsb/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Search API base URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path of the persisted slot file (active search term).
    #[serde(default)]
    pub slot_path: Option<PathBuf>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Search API base URL.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Path of the persisted slot file.
    pub slot_path: PathBuf,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            slot_path: FileTermSlot::default_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path, `<state_dir>/hnsb/hnsb.log`.
///
/// The TUI owns the terminal, so logs always go to a file. Falls back to
/// the current directory if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hnsb").join("hnsb.log")
    } else {
        PathBuf::from("hnsb.log")
    }
}

/// Resolve the default config file path, `~/.config/hnsb/config.toml`.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hnsb").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
        path: path.clone(),
        reason: err.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|err| ConfigError::ParseError {
        path: path.clone(),
        reason: err.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `HNSB_CONFIG` environment variable
/// 3. Default path `~/.config/hnsb/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("HNSB_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a config file into defaults to create a resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        slot_path: config.slot_path.unwrap_or(defaults.slot_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to a resolved config.
///
/// Checks `HNSB_API_BASE_URL` (e.g. to point at a local stub server).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_url) = std::env::var("HNSB_API_BASE_URL") {
        config.api_base_url = base_url;
    }
    config
}

/// Apply CLI argument overrides to a resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_base_url_override: Option<String>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(base_url) = api_base_url_override {
        config.api_base_url = base_url;
    }
    if let Some(log_file) = log_file_override {
        config.log_file_path = log_file;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
