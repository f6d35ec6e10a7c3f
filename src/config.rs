//! Command-line defaults loaded from ~/.shapec/config.yaml.
//!
//! The compiler core reads no configuration; only the `shapec` binary does.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dsl::LexMode;
use crate::emit::Target;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target used when no mode flag is given on the command line.
    #[serde(default)]
    pub default_target: Option<Target>,
    /// Require a word boundary after keywords (`pointer` stays one name).
    #[serde(default)]
    pub strict_keywords: bool,
    /// Print the three banner lines before generated code.
    #[serde(default = "Config::default_banner")]
    pub banner: bool,
    /// Report emitter fallbacks on stderr.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    fn default_banner() -> bool {
        true
    }

    /// Load from the standard path. A missing file yields the defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = default_config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load from an explicit path, which must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content).map_err(|e| ConfigError::Yaml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn lex_mode(&self) -> LexMode {
        if self.strict_keywords {
            LexMode::Strict
        } else {
            LexMode::Priority
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_target: None,
            strict_keywords: false,
            banner: true,
            verbose: false,
        }
    }
}

/// Default path for the configuration file.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".shapec");
    path.push("config.yaml");
    path
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Yaml { path: PathBuf, source: serde_yaml::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            ConfigError::Yaml { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Yaml { source, .. } => Some(source),
        }
    }
}
