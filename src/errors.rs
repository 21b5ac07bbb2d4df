//! Error types for value resolution and validation.
//!
//! Every failure is surfaced as an [`ExpectError`] so that step handlers can
//! propagate it with `?` and mark the step as failed.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while resolving tokens or validating values.
#[derive(Debug, Error)]
pub enum ExpectError {
    /// An operand that had to be a sequence was not.
    #[error("'{operand}' is not an array (found {found})")]
    NotAnArray {
        operand: String,
        found: &'static str,
    },

    /// No comparator is registered for the validation phrase.
    #[error("unknown validation: '{descriptor}'")]
    UnknownValidation { descriptor: String },

    /// The sort comparator operand did not resolve to an ordering function.
    #[error("comparator is not implemented (found {found})")]
    ComparatorMissing { found: &'static str },

    /// Fewer elements than required passed an at-least validation.
    #[error("expected at least {required} element(s) to pass '{validation}', but {passed} passed")]
    ThresholdNotMet {
        required: usize,
        passed: usize,
        validation: String,
    },

    /// Collected failures of an any-of/all-of validation.
    #[error(transparent)]
    AggregateMismatch(#[from] AggregateMismatch),

    /// A single comparator failure.
    #[error(transparent)]
    Mismatch(#[from] Mismatch),

    /// `$key()` was used on a stored value that cannot be invoked.
    #[error("'{key}' is not invocable (found {found})")]
    NotInvocable { key: String, found: &'static str },

    /// The host expression evaluator rejected an expression.
    #[error("failed to evaluate `{expression}`: {message}")]
    Expression { expression: String, message: String },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// A table row has too few cells.
    #[error("malformed table row {row}: expected at least {expected} cell(s), found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Error loading the engine configuration.
    #[error("failed to load config: {path}: {message}")]
    Config { path: String, message: String },

    /// Error raised by a backing store.
    #[error("store error: {message}")]
    Store { message: String },
}

/// Result type for resolution and validation.
pub type ExpectResult<T> = Result<T, ExpectError>;

/// A comparator rejected a pair of values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Mismatch {
    pub message: String,
}

impl Mismatch {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failures collected across several comparisons, in the order they were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct AggregateMismatch {
    pub failures: Vec<Mismatch>,
}

impl AggregateMismatch {
    pub fn new(failures: Vec<Mismatch>) -> Self {
        Self { failures }
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for AggregateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, failure) in self.failures.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", failure.message)?;
        }
        Ok(())
    }
}
