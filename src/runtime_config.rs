//! # Runtime Configuration Module
//!
//! Settings that shape the generated route patterns, loaded at start-up.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults
//! 2. An optional YAML config file
//! 3. Environment variables
//! 4. Command-line flags (applied by the caller with [`VersionConfig::with_prefix`])
//!
//! ## Config File
//!
//! ```yaml
//! version:
//!   prefix: v            # segment is /{prefix}{version}, e.g. /v3
//!   error_path: /error   # reserved path exempt from overlap checks
//! ```
//!
//! ## Environment Variables
//!
//! ### `DVU_VERSION_PREFIX`
//!
//! Literal written in front of each version number. Default: `v`.
//! An empty value is honored and produces segments like `/3`.
//!
//! ### `DVU_ERROR_PATH`
//!
//! The host's reserved error-page path. Default: `/error`.
//!
//! ## Usage
//!
//! ```rust
//! use dynamic_version_url::runtime_config::VersionConfig;
//!
//! let config = VersionConfig::from_env();
//! println!("Version segment prefix: {}", config.prefix);
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Literal inserted before each version number.
pub const DEFAULT_VERSION_PREFIX: &str = "v";
/// Reserved error-page path registered by the host.
pub const DEFAULT_ERROR_PATH: &str = "/error";

pub const PREFIX_ENV: &str = "DVU_VERSION_PREFIX";
pub const ERROR_PATH_ENV: &str = "DVU_ERROR_PATH";

/// Versioning settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConfig {
    /// Version segment prefix (default: `v`)
    pub prefix: String,
    /// Path exempt from overlap validation (default: `/error`)
    pub error_path: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    version: VersionSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionSection {
    prefix: Option<String>,
    error_path: Option<String>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_VERSION_PREFIX.to_string(),
            error_path: DEFAULT_ERROR_PATH.to_string(),
        }
    }
}

impl VersionConfig {
    /// Defaults overridden by environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().apply_env(|key| env::var(key).ok())
    }

    /// Defaults, then the YAML file at `path`, then environment variables.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config.apply_env(|key| env::var(key).ok()))
    }

    /// Defaults overridden by a YAML document. Environment is not consulted.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or unknown keys under `version`.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = if content.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(content)?
        };

        let mut config = Self::default();
        if let Some(prefix) = file.version.prefix {
            config.prefix = prefix;
        }
        if let Some(error_path) = file.version.error_path {
            config.error_path = error_path;
        }
        Ok(config)
    }

    /// Override from a variable lookup (the process environment in production).
    #[must_use]
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(PREFIX_ENV) {
            self.prefix = prefix;
        }
        if let Some(error_path) = lookup(ERROR_PATH_ENV).filter(|p| !p.is_empty()) {
            self.error_path = error_path;
        }
        self
    }

    /// Override the prefix when a value was given (e.g. a CLI flag).
    #[must_use]
    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }
        self
    }
}
