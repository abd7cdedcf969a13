use crate::options::MatchOptions;
use crate::ConfigError;
use grammex_resolve::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for both halves of the pipeline, as read from a TOML file:
///
/// ```toml
/// [compile]
/// duplicates = "last-wins"         # or "reject"
/// unterminated-literals = "reject" # or "accept"
///
/// [matching]
/// max-depth = 1024
/// ```
///
/// Missing tables and keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compile: CompileOptions,
    pub matching: MatchOptions,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading grammex configuration from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
