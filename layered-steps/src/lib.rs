#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Step handlers for memory and validation steps.
//!
//! Each author-facing step maps to one async method on [`Steps`]. The step
//! runner is expected to match the step text and pass the quoted tokens, the
//! validation phrase and any data table through unchanged:
//!
//! ```ignore
//! use layered_steps::Steps;
//!
//! let steps = Steps::default();
//! // I set 'prices' = '$jq([1, 5, 10, 50])'
//! steps.set("prices", "$jq([1, 5, 10, 50])").await?;
//! // I expect at least 2 elements in '$prices' array to be above '4'
//! steps.expect_at_least(2, "$prices", "to be above", "4").await?;
//! ```
//!
//! ## Steps
//!
//! - Validation: [`Steps::expect`], [`Steps::expect_at_least`],
//!   [`Steps::expect_every`], [`Steps::expect_sorted`],
//!   [`Steps::expect_array_table`], [`Steps::expect_any_of`],
//!   [`Steps::expect_any_of_table`], [`Steps::expect_all_of`],
//!   [`Steps::expect_all_of_table`]
//! - Memory: [`Steps::save`], [`Steps::set`], [`Steps::save_multiline`],
//!   [`Steps::save_json`], [`Steps::save_key_value_pairs`],
//!   [`Steps::save_math_result`]

mod memory;
mod validation;

use std::path::Path;

use layered_comparators::standard_registry;
use layered_expect::{Engine, EngineConfig, ExpectError, ExpectResult, Value};

pub use layered_expect::DataTable;

/// Step handlers over one [`Engine`].
#[derive(Clone)]
pub struct Steps {
    engine: Engine,
}

impl Steps {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Steps over a fresh memory with the standard comparators.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Engine::from_config(config, standard_registry()))
    }

    /// Like [`Steps::from_config`], reading the configuration from a TOML file.
    pub fn load(path: &Path) -> ExpectResult<Self> {
        Ok(Self::from_config(&EngineConfig::load(path)?))
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Resolve a token that must produce an array.
    async fn resolve_array(&self, token: &str) -> ExpectResult<Value> {
        let value = self.engine.resolve(token).await?;
        if value.is_array() {
            Ok(value)
        } else {
            Err(ExpectError::NotAnArray {
                operand: token.to_string(),
                found: value.type_name(),
            })
        }
    }
}

impl Default for Steps {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests;
