//! Configuration file loading with precedence handling.

use crate::report::FALLBACK_RESOURCE;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
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
/// All fields are optional; unspecified fields fall back to hardcoded
/// defaults. Corresponds to `~/.config/hudlink/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Resource name attached to every outbound report.
    #[serde(default)]
    pub resource: Option<String>,

    /// Path the outbound JSONL report stream is appended to.
    #[serde(default)]
    pub report_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Resource name attached to every outbound report.
    pub resource: String,
    /// Path the outbound JSONL report stream is appended to.
    pub report_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            resource: FALLBACK_RESOURCE.to_string(),
            report_path: default_report_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// Returns `~/.local/state/hudlink/hudlink.log` on Unix-like systems, or
/// the platform equivalent elsewhere. Falls back to the current directory
/// if the state directory cannot be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hudlink").join("hudlink.log")
    } else {
        PathBuf::from("hudlink.log")
    }
}

/// Resolve the default report stream path.
///
/// Reports live next to the log file so both can be tailed from the same
/// directory.
pub fn default_report_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hudlink").join("reports.jsonl")
    } else {
        PathBuf::from("reports.jsonl")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error; defaults are
/// used). Returns `Err` if the file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

/// Resolve the default config file path.
///
/// Returns `~/.config/hudlink/config.toml` on Unix, the platform equivalent
/// elsewhere, or `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hudlink").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `HUDLINK_CONFIG` environment variable
/// 3. Default path `~/.config/hudlink/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("HUDLINK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        resource: config.resource.unwrap_or(defaults.resource),
        report_path: config.report_path.unwrap_or(defaults.report_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HUDLINK_RESOURCE`: Override the reported resource name
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(resource) = std::env::var(crate::report::RESOURCE_ENV_VAR) {
        config.resource = resource;
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
    resource_override: Option<String>,
    report_path_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(resource) = resource_override {
        config.resource = resource;
    }

    if let Some(report_path) = report_path_override {
        config.report_path = report_path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
