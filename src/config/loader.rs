//! Configuration file loading with precedence handling.

use crate::model::{InvalidSearchField, SearchField};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config loading and resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting holds a value that does not parse.
    #[error("Invalid value for {setting}: {reason}")]
    InvalidValue {
        /// The offending setting (config key or env var).
        setting: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to hardcoded defaults.
/// Corresponds to `~/.config/bibv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Remote search index base URL.
    #[serde(default)]
    pub remote_url: Option<String>,

    /// Remote index name.
    #[serde(default)]
    pub index: Option<String>,

    /// Default search field (label or key, e.g. "title" or "Author").
    #[serde(default)]
    pub search_field: Option<String>,

    /// Debounce delay for term edits in the remote flow, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Remote search index base URL, when the remote flow is configured.
    pub remote_url: Option<String>,
    /// Remote index name.
    pub index: String,
    /// Default search field.
    pub search_field: SearchField,
    /// Debounce delay for term edits, in milliseconds.
    pub debounce_ms: u64,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            remote_url: None,
            index: "articles".to_string(),
            search_field: SearchField::default(),
            debounce_ms: 300,
            log_file_path: default_log_path(),
        }
    }
}

/// Default config file location (`~/.config/bibv/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bibv").join("config.toml"))
}

/// Default log file location (`~/.local/state/bibv/bibv.log` on Unix-like
/// systems, platform equivalent elsewhere).
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("bibv").join("bibv.log"))
        .unwrap_or_else(|| PathBuf::from("bibv.log"))
}

/// Load the config file: an explicit `--config` path must exist and parse;
/// the default path is optional and silently skipped when absent.
///
/// # Errors
///
/// Returns [`ConfigError`] for unreadable or unparseable files.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit {
        Some(path) => load_config_file(&path).map(Some),
        None => match default_config_path() {
            Some(path) if path.exists() => load_config_file(&path).map(Some),
            _ => Ok(None),
        },
    }
}

fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    toml::from_str(&contents).map_err(|err| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Merge the config file over the hardcoded defaults.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when `search_field` names no
/// known field.
pub fn merge_config(file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();
    let Some(file) = file else {
        return Ok(defaults);
    };

    let search_field = match file.search_field {
        Some(raw) => parse_field(&raw, "search_field")?,
        None => defaults.search_field,
    };

    Ok(ResolvedConfig {
        remote_url: file.remote_url.or(defaults.remote_url),
        index: file.index.unwrap_or(defaults.index),
        search_field,
        debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply `BIBV_*` environment variable overrides.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for unparseable values.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(url) = std::env::var("BIBV_REMOTE_URL") {
        config.remote_url = Some(url);
    }
    if let Ok(index) = std::env::var("BIBV_INDEX") {
        config.index = index;
    }
    if let Ok(field) = std::env::var("BIBV_SEARCH_FIELD") {
        config.search_field = parse_field(&field, "BIBV_SEARCH_FIELD")?;
    }
    if let Ok(ms) = std::env::var("BIBV_DEBOUNCE_MS") {
        config.debounce_ms = ms.parse().map_err(|_| ConfigError::InvalidValue {
            setting: "BIBV_DEBOUNCE_MS",
            reason: format!("'{ms}' is not a number of milliseconds"),
        })?;
    }
    if let Ok(path) = std::env::var("BIBV_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }
    Ok(config)
}

/// Apply CLI argument overrides. CLI values are already validated by clap,
/// so this step is infallible.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    remote_url: Option<String>,
    index: Option<String>,
    search_field: Option<SearchField>,
) -> ResolvedConfig {
    if let Some(url) = remote_url {
        config.remote_url = Some(url);
    }
    if let Some(index) = index {
        config.index = index;
    }
    if let Some(field) = search_field {
        config.search_field = field;
    }
    config
}

fn parse_field(raw: &str, setting: &'static str) -> Result<SearchField, ConfigError> {
    raw.parse()
        .map_err(|err: InvalidSearchField| ConfigError::InvalidValue {
            setting,
            reason: err.to_string(),
        })
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
