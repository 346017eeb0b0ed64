//! Configuration file loading with precedence handling.

use crate::state::{DEFAULT_DASHBOARD_LIMIT, DEFAULT_PER_PAGE};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "HELPDESK_CONFIG";
/// Environment variable overriding the current user.
pub const ENV_USER: &str = "HELPDESK_USER";
/// Environment variable overriding the dataset file.
pub const ENV_DATA: &str = "HELPDESK_DATA";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Config key holding the value.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/helpdesk/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Page size of ticket lists.
    #[serde(default)]
    pub per_page: Option<usize>,

    /// Name used for "my tickets" and as the author of new interactions.
    #[serde(default)]
    pub current_user: Option<String>,

    /// Rows in each dashboard table.
    #[serde(default)]
    pub dashboard_limit: Option<usize>,

    /// Dataset file; the built-in dataset is used when absent.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Domain of derived user e-mail addresses.
    #[serde(default)]
    pub email_domain: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Page size of ticket lists; never zero.
    pub per_page: usize,
    /// Name used for "my tickets" and as the author of new interactions.
    pub current_user: String,
    /// Rows in each dashboard table; never zero.
    pub dashboard_limit: usize,
    /// Dataset file; `None` selects the built-in dataset.
    pub data_file: Option<PathBuf>,
    /// Domain of derived user e-mail addresses.
    pub email_domain: String,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            current_user: "Giovana Lana".to_string(),
            dashboard_limit: DEFAULT_DASHBOARD_LIMIT,
            data_file: None,
            email_domain: "helpdesk.local".to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/helpdesk/helpdesk.log` on Linux, the platform
/// equivalent elsewhere, or `helpdesk.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("helpdesk").join("helpdesk.log")
    } else {
        PathBuf::from("helpdesk.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/helpdesk/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("helpdesk").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HELPDESK_CONFIG` environment variable
/// 3. Default path `~/.config/helpdesk/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a zero page size or dashboard limit.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    if config.per_page == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "per_page",
            reason: "must be at least 1".to_string(),
        });
    }
    if config.dashboard_limit == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "dashboard_limit",
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(ResolvedConfig {
        per_page: config.per_page.unwrap_or(defaults.per_page),
        current_user: config.current_user.unwrap_or(defaults.current_user),
        dashboard_limit: config.dashboard_limit.unwrap_or(defaults.dashboard_limit),
        data_file: config.data_file.or(defaults.data_file),
        email_domain: config.email_domain.unwrap_or(defaults.email_domain),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HELPDESK_USER`: Override current user
/// - `HELPDESK_DATA`: Override dataset file
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(user) = std::env::var(ENV_USER) {
        if !user.trim().is_empty() {
            config.current_user = user;
        }
    }

    if let Ok(data) = std::env::var(ENV_DATA) {
        if !data.trim().is_empty() {
            config.data_file = Some(PathBuf::from(data));
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_override: Option<PathBuf>,
    per_page_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(data) = data_override {
        config.data_file = Some(data);
    }

    if let Some(per_page) = per_page_override {
        config.per_page = per_page;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
