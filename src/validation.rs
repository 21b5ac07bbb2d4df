//! Validation phrases and comparator dispatch.
//!
//! A step such as `I expect '$value' does not contain '56'` carries the phrase
//! `does not contain`. The phrase is normalized into a [`Descriptor`] (a
//! [`ValidationKind`] plus a negation flag) using a closed table, and the
//! registry supplies the [`Comparator`] registered for that kind.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::{ExpectError, ExpectResult, Mismatch};
use crate::value::Value;

/// A two-argument check that fails with a [`Mismatch`].
pub trait Comparator: Send + Sync {
    fn compare(&self, actual: &Value, expected: &Value) -> Result<(), Mismatch>;

    /// Name used in threshold failure messages.
    fn describe(&self) -> String {
        "validation".to_string()
    }
}

impl<F> Comparator for F
where
    F: Fn(&Value, &Value) -> Result<(), Mismatch> + Send + Sync,
{
    fn compare(&self, actual: &Value, expected: &Value) -> Result<(), Mismatch> {
        self(actual, expected)
    }
}

/// Comparator families known to the phrase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    Equal,
    StrictlyEqual,
    DeeplyEqual,
    CaseInsensitiveEqual,
    Contain,
    Match,
    Above,
    Below,
    HaveType,
    HaveMembers,
    IncludeMembers,
    HaveProperty,
}

impl ValidationKind {
    pub const ALL: [ValidationKind; 12] = [
        ValidationKind::Equal,
        ValidationKind::StrictlyEqual,
        ValidationKind::DeeplyEqual,
        ValidationKind::CaseInsensitiveEqual,
        ValidationKind::Contain,
        ValidationKind::Match,
        ValidationKind::Above,
        ValidationKind::Below,
        ValidationKind::HaveType,
        ValidationKind::HaveMembers,
        ValidationKind::IncludeMembers,
        ValidationKind::HaveProperty,
    ];

    /// Phrase used in assertion messages, e.g. `expected 5 to be above 10`.
    pub fn phrase(&self) -> &'static str {
        match self {
            ValidationKind::Equal => "to equal",
            ValidationKind::StrictlyEqual => "to strictly equal",
            ValidationKind::DeeplyEqual => "to deeply equal",
            ValidationKind::CaseInsensitiveEqual => "to case insensitive equal",
            ValidationKind::Contain => "to contain",
            ValidationKind::Match => "to match",
            ValidationKind::Above => "to be above",
            ValidationKind::Below => "to be below",
            ValidationKind::HaveType => "to have type",
            ValidationKind::HaveMembers => "to have members",
            ValidationKind::IncludeMembers => "to include members",
            ValidationKind::HaveProperty => "to have property",
        }
    }

    /// Same phrase with `not` inserted after the leading `to`.
    pub fn negated_phrase(&self) -> String {
        format!("not {}", self.phrase())
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

static PHRASES: Lazy<HashMap<&'static str, ValidationKind>> = Lazy::new(|| {
    let mut phrases = HashMap::new();
    phrases.insert("equal", ValidationKind::Equal);
    phrases.insert("strictly equal", ValidationKind::StrictlyEqual);
    phrases.insert("deeply equal", ValidationKind::DeeplyEqual);
    phrases.insert("case insensitive equal", ValidationKind::CaseInsensitiveEqual);
    phrases.insert("contain", ValidationKind::Contain);
    phrases.insert("match", ValidationKind::Match);
    phrases.insert("above", ValidationKind::Above);
    phrases.insert("greater than", ValidationKind::Above);
    phrases.insert("below", ValidationKind::Below);
    phrases.insert("less than", ValidationKind::Below);
    phrases.insert("have type", ValidationKind::HaveType);
    phrases.insert("have member", ValidationKind::HaveMembers);
    phrases.insert("have members", ValidationKind::HaveMembers);
    phrases.insert("include member", ValidationKind::IncludeMembers);
    phrases.insert("include members", ValidationKind::IncludeMembers);
    phrases.insert("have property", ValidationKind::HaveProperty);
    phrases
});

const AUXILIARIES: [&str; 5] = ["is", "do", "does", "to", "be"];

fn uninflect(word: &str) -> &str {
    match word {
        "equals" => "equal",
        "contains" => "contain",
        "matches" => "match",
        "includes" => "include",
        "has" => "have",
        other => other,
    }
}

/// A normalized validation phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub kind: ValidationKind,
    pub negated: bool,
    /// The phrase as written by the author.
    pub source: String,
}

impl Descriptor {
    /// Normalize a validation phrase.
    ///
    /// Leading auxiliaries (`is`, `do`, `does`, `to`, `be`) are dropped, a
    /// single `not` sets the negation flag, and a trailing `to` is ignored.
    pub fn parse(phrase: &str) -> ExpectResult<Descriptor> {
        let unknown = || ExpectError::UnknownValidation {
            descriptor: phrase.to_string(),
        };

        let lowered = phrase.to_lowercase();
        let mut words = lowered.unicode_words().peekable();
        let mut negated = false;

        while let Some(&word) = words.peek() {
            if AUXILIARIES.contains(&word) {
                words.next();
            } else if word == "not" {
                if negated {
                    return Err(unknown());
                }
                negated = true;
                words.next();
            } else {
                break;
            }
        }

        let mut core: Vec<&str> = words.map(uninflect).collect();
        if core.len() > 1 && core.last() == Some(&"to") {
            core.pop();
        }

        let key = core.join(" ");
        let kind = PHRASES.get(key.as_str()).copied().ok_or_else(unknown)?;

        Ok(Descriptor {
            kind,
            negated,
            source: phrase.to_string(),
        })
    }
}

/// A comparator selected for a descriptor, with negation applied.
#[derive(Clone)]
pub struct Validation {
    descriptor: Descriptor,
    comparator: Arc<dyn Comparator>,
}

impl Validation {
    pub fn new(descriptor: Descriptor, comparator: Arc<dyn Comparator>) -> Self {
        Self {
            descriptor,
            comparator,
        }
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn kind(&self) -> ValidationKind {
        self.descriptor.kind
    }

    pub fn is_negated(&self) -> bool {
        self.descriptor.negated
    }
}

impl Comparator for Validation {
    fn compare(&self, actual: &Value, expected: &Value) -> Result<(), Mismatch> {
        let outcome = self.comparator.compare(actual, expected);
        if !self.descriptor.negated {
            return outcome;
        }
        match outcome {
            Ok(()) => Err(Mismatch::new(format!(
                "expected {} {} {}",
                actual.describe(),
                self.descriptor.kind.negated_phrase(),
                expected.describe()
            ))),
            Err(_) => Ok(()),
        }
    }

    fn describe(&self) -> String {
        self.descriptor.source.clone()
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Comparator capabilities keyed by [`ValidationKind`].
#[derive(Clone, Default)]
pub struct ComparatorRegistry {
    comparators: HashMap<ValidationKind, Arc<dyn Comparator>>,
}

impl ComparatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the comparator for a kind.
    pub fn register(&mut self, kind: ValidationKind, comparator: impl Comparator + 'static) {
        self.comparators.insert(kind, Arc::new(comparator));
    }

    pub fn with(mut self, kind: ValidationKind, comparator: impl Comparator + 'static) -> Self {
        self.register(kind, comparator);
        self
    }

    pub fn get(&self, kind: ValidationKind) -> Option<Arc<dyn Comparator>> {
        self.comparators.get(&kind).cloned()
    }

    pub fn contains(&self, kind: ValidationKind) -> bool {
        self.comparators.contains_key(&kind)
    }

    /// Select the comparator for a validation phrase.
    pub fn dispatch(&self, phrase: &str) -> ExpectResult<Validation> {
        let descriptor = Descriptor::parse(phrase)?;
        let comparator = self
            .get(descriptor.kind)
            .ok_or_else(|| ExpectError::UnknownValidation {
                descriptor: phrase.to_string(),
            })?;
        debug!(phrase, kind = ?descriptor.kind, negated = descriptor.negated, "dispatched validation");
        Ok(Validation::new(descriptor, comparator))
    }
}

impl fmt::Debug for ComparatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.comparators.keys().collect();
        kinds.sort_by_key(|k| k.phrase());
        f.debug_struct("ComparatorRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(phrase: &str) -> (ValidationKind, bool) {
        let descriptor = Descriptor::parse(phrase).unwrap();
        (descriptor.kind, descriptor.negated)
    }

    #[test]
    fn test_plain_phrases() {
        assert_eq!(parse("equals"), (ValidationKind::Equal, false));
        assert_eq!(parse("equals to"), (ValidationKind::Equal, false));
        assert_eq!(parse("to equal"), (ValidationKind::Equal, false));
        assert_eq!(parse("to be above"), (ValidationKind::Above, false));
        assert_eq!(parse("is greater than"), (ValidationKind::Above, false));
        assert_eq!(parse("to be less than"), (ValidationKind::Below, false));
        assert_eq!(parse("matches"), (ValidationKind::Match, false));
        assert_eq!(parse("to have type"), (ValidationKind::HaveType, false));
        assert_eq!(parse("has type"), (ValidationKind::HaveType, false));
        assert_eq!(parse("to have members"), (ValidationKind::HaveMembers, false));
        assert_eq!(parse("to deeply equal"), (ValidationKind::DeeplyEqual, false));
    }

    #[test]
    fn test_negated_phrases() {
        assert_eq!(parse("does not contain"), (ValidationKind::Contain, true));
        assert_eq!(parse("not to equal"), (ValidationKind::Equal, true));
        assert_eq!(parse("to not be above"), (ValidationKind::Above, true));
        assert_eq!(parse("is not below"), (ValidationKind::Below, true));
        assert_eq!(parse("do not match"), (ValidationKind::Match, true));
    }

    #[test]
    fn test_case_and_hyphen_insensitive() {
        assert_eq!(parse("To Equal"), (ValidationKind::Equal, false));
        assert_eq!(
            parse("to case-insensitive equal"),
            (ValidationKind::CaseInsensitiveEqual, false)
        );
    }

    #[test]
    fn test_unknown_phrases() {
        for phrase in ["", "to", "not", "to be sorted", "not not equal", "equal something"] {
            let err = Descriptor::parse(phrase).unwrap_err();
            assert!(
                matches!(err, ExpectError::UnknownValidation { ref descriptor } if descriptor == phrase),
                "{:?} should be unknown",
                phrase
            );
        }
    }

    #[test]
    fn test_every_kind_has_a_phrase_key() {
        for kind in ValidationKind::ALL.iter() {
            assert!(PHRASES.values().any(|k| k == kind), "{:?} unreachable", kind);
        }
    }

    fn always_pass(_: &Value, _: &Value) -> Result<(), Mismatch> {
        Ok(())
    }

    fn always_fail(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
        Err(Mismatch::new(format!(
            "expected {} to equal {}",
            actual.describe(),
            expected.describe()
        )))
    }

    #[test]
    fn test_dispatch_unregistered_kind() {
        let registry = ComparatorRegistry::new().with(ValidationKind::Equal, always_pass);
        let err = registry.dispatch("to contain").unwrap_err();
        assert_eq!(err.to_string(), "unknown validation: 'to contain'");
    }

    #[test]
    fn test_negation_inverts_outcome() {
        let registry = ComparatorRegistry::new()
            .with(ValidationKind::Equal, always_pass)
            .with(ValidationKind::Contain, always_fail);

        let not_equal = registry.dispatch("not to equal").unwrap();
        let mismatch = not_equal
            .compare(&Value::from("a"), &Value::from("a"))
            .unwrap_err();
        insta::assert_snapshot!(mismatch.message, @"expected 'a' not to equal 'a'");

        let not_contain = registry.dispatch("does not contain").unwrap();
        assert!(not_contain
            .compare(&Value::from("abc"), &Value::from("56"))
            .is_ok());
    }

    #[test]
    fn test_validation_describes_its_source() {
        let registry = ComparatorRegistry::new().with(ValidationKind::Above, always_pass);
        let validation = registry.dispatch("to be above").unwrap();
        assert_eq!(validation.describe(), "to be above");
        assert_eq!(validation.kind(), ValidationKind::Above);
        assert!(!validation.is_negated());
    }
}
