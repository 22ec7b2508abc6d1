//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::identifier::NameRules;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Command name policy.
    pub names: NamesConfig,

    /// How parsed commands are printed.
    pub output: OutputConfig,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// Command name settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct NamesConfig {
    /// Accept one-character command names.
    pub allow_single_char: bool,
}

/// Printed form of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Unset means text.
    pub format: Option<OutputFormat>,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        // .fabline.toml in cwd overrides the user file
        if let Some(cwd) = cwd {
            if let Some(project_config) = Self::load_project_config(cwd)? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        let path = Self::user_config_path();
        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Ok(Some(Self::from_toml(&content)?));
            }
        }
        Ok(None)
    }

    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".fabline.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(Self::from_toml(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects FABLINE_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("FABLINE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("fabline/config.toml"))
    }

    /// Merge another config into this one (other takes precedence when set).
    fn merge(&mut self, other: Config) {
        if other.names.allow_single_char {
            self.names.allow_single_char = true;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
    }

    /// Name policy for both parsers.
    pub fn name_rules(&self) -> NameRules {
        NameRules {
            allow_single_char: self.names.allow_single_char,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    /// Audit log path, if auditing is on.
    pub fn audit_path(&self) -> Option<&Path> {
        if !self.audit.enabled {
            return None;
        }
        self.audit.path.as_deref().map(Path::new)
    }
}
