//! # Configuration Module
//!
//! This module provides configuration support for headstamp, allowing users
//! to keep the comment symbol, header identifiers, region name, and license
//! file path in a project-local file instead of repeating them on every
//! invocation. Command-line flags always win over config values.
//!
//! Configuration can be specified in a `.headstamp.toml` file or via the
//! `HEADSTAMP_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".headstamp.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADSTAMP_CONFIG";

/// Main configuration struct for headstamp.
///
/// This struct is loaded from a `.headstamp.toml` file and supplies defaults
/// for the command-line arguments:
///
/// ```toml
/// comment-symbol = "//"
/// identifiers = ["Copyright", "(c)"]
/// region-name = "license"
/// license-file = "LICENSE.header"
/// ```
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
  /// Line-comment symbol used to format and recognize headers.
  #[serde(default, rename = "comment-symbol")]
  pub comment_symbol: Option<String>,

  /// Substrings that distinguish a license header from a plain comment
  /// block.
  #[serde(default)]
  pub identifiers: Vec<String>,

  /// Name of a C# region to wrap the header in.
  #[serde(default, rename = "region-name")]
  pub region_name: Option<String>,

  /// Path to the license template file, relative to where the tool runs.
  #[serde(default, rename = "license-file")]
  pub license_file: Option<PathBuf>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A config value is invalid.
  #[error("Invalid config value for '{field}': {message}")]
  InvalidValue { field: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read or
  /// parsed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - `comment-symbol`, when present, is non-empty
  /// - No identifier is an empty string (an empty identifier would match
  ///   every comment block)
  /// - `license-file`, when present, is a non-empty path
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref symbol) = self.comment_symbol
      && symbol.is_empty()
    {
      return Err(ConfigError::InvalidValue {
        field: "comment-symbol".to_string(),
        message: "comment symbol cannot be empty".to_string(),
      });
    }

    if self.identifiers.iter().any(String::is_empty) {
      return Err(ConfigError::InvalidValue {
        field: "identifiers".to_string(),
        message: "identifiers cannot contain empty strings".to_string(),
      });
    }

    if let Some(ref license_file) = self.license_file
      && license_file.as_os_str().is_empty()
    {
      return Err(ConfigError::InvalidValue {
        field: "license-file".to_string(),
        message: "license file path cannot be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADSTAMP_CONFIG` environment variable
/// 3. `.headstamp.toml` in `search_dir` (the current working directory)
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `search_dir` - The directory to look for the default config file in
///
/// # Returns
///
/// The path to the configuration file, or `None` if no config file is found.
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check the search directory
  let local_config = search_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using local config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, or return `None`.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `search_dir` - The directory to look for the default config file in
/// * `no_config` - If true, skip config file discovery entirely
///
/// # Returns
///
/// The loaded configuration, or `None` when discovery is disabled or no
/// config file exists.
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, search_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
