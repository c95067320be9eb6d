//! Translation configuration

use crate::LogLevel;
use crate::error::{TranslateError, TranslateResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one translation run
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateConfig {
    /// Emit the generated-file marker and the `use` lines
    #[serde(default = "default_true")]
    pub preamble: bool,

    /// Copy freestanding comments into the output
    #[serde(default = "default_true")]
    pub pass_comments: bool,

    /// Traits listed in each struct's `#[derive(...)]` header
    #[serde(default = "default_derives")]
    pub derives: Vec<String>,

    /// Fail on unsupported type expressions instead of emitting a placeholder
    #[serde(default)]
    pub strict: bool,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_derives() -> Vec<String> {
    ["Serialize", "Deserialize", "Debug", "Clone"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            preamble: default_true(),
            pass_comments: default_true(),
            derives: default_derives(),
            strict: false,
            log_level: default_log_level(),
        }
    }
}

impl TranslateConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> TranslateResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> TranslateResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TranslateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> TranslateResult<()> {
        if self.derives.is_empty() {
            return Err(TranslateError::Config("derives must not be empty".into()));
        }
        if let Some(bad) = self.derives.iter().find(|d| !is_derive_path(d)) {
            return Err(TranslateError::Config(format!(
                "invalid derive name: {bad:?}"
            )));
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level
    pub fn level(&self) -> TranslateResult<LogLevel> {
        self.log_level.parse()
    }
}

/// A derive entry is a Rust path such as `Debug` or `serde::Serialize`.
fn is_derive_path(name: &str) -> bool {
    !name.is_empty()
        && name.split("::").all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
