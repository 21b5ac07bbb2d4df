//! Engine configuration.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ExpectError, ExpectResult};
use crate::value::Value;

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub resolution: ResolutionConfig,
    /// Values preloaded into memory.
    #[serde(default)]
    pub values: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Resolve table rows as one concurrent batch.
    #[serde(default = "default_concurrent")]
    pub concurrent: bool,
}

fn default_concurrent() -> bool {
    true
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            concurrent: default_concurrent(),
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file. A missing file yields the default configuration.
    pub fn load(path: &Path) -> ExpectResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ExpectError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ExpectError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Add a preloaded value.
    pub fn with_value(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Preloaded values converted for the store.
    pub fn initial_values(&self) -> impl Iterator<Item = (String, Value)> + '_ {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.clone())))
    }
}
