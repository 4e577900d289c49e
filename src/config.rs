//! YAML configuration for the plagcheck front end.
//!
//! One file carries the settings of every layer: the highlighter, the
//! service client and the result views. Sections may be omitted; missing
//! fields fall back to their defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "local dev"
//! log_level: "debug"
//!
//! highlight:
//!   sentinel: "sentence_start"
//!   trailing_punctuation: ".,!?;:"
//!   missing_hints: set_difference
//!
//! client:
//!   base_url: "http://127.0.0.1:5000/"
//!   analyze_timeout_ms: 30000
//!   rephrase_timeout_ms: 15000
//!   min_analyze_chars: 50
//!   min_rephrase_chars: 10
//!
//! view:
//!   common_phrase_limit: 5
//!   highlight:
//!     class_name: "highlight-change"
//!     label_prefix: "Changed from: "
//!     tooltip_toggle: true
//! ```

use std::fs;
use std::path::Path;

use client::ClientConfig;
use highlight::HighlightConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::ViewConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    /// `tracing` filter directive for the binaries
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub view: ViewConfig,
}

impl AppConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.highlight
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.client
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;

        if self.view.highlight.class_name.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "view.highlight.class_name must not be empty".into(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            log_level: default_log_level(),
            highlight: HighlightConfig::default(),
            client: ClientConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
