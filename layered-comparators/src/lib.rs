#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Standard comparators for `layered-expect`.
//!
//! Every comparator is a plain function over two [`Value`]s and is registered
//! against one [`ValidationKind`]. Failure messages read
//! `expected <actual> <phrase> <expected>`, with strings quoted.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_comparators::standard_registry;
//! use layered_expect::{Comparator, Value};
//!
//! let registry = standard_registry();
//! let validation = registry.dispatch("does not contain")?;
//! validation.compare(&Value::from("hello"), &Value::from("xyz"))?;
//! ```
//!
//! ## Kinds
//!
//! - **Equality**: equal (loose), strictly equal, deeply equal, case insensitive equal
//! - **Inclusion**: contain, have members, include members, have property
//! - **Ordering**: above, below
//! - **Pattern**: match
//! - **Typing**: have type

mod equality;
mod inclusion;
mod ordering;
mod pattern;
mod typing;

use layered_expect::{ComparatorRegistry, Mismatch, ValidationKind, Value};

pub use equality::{case_insensitive_equal, deeply_equal, equal, loose_eq, strictly_equal};
pub use inclusion::{contain, have_members, have_property, include_members};
pub use ordering::{above, below};
pub use pattern::{matches, parse_pattern};
pub use typing::have_type;

/// Register every standard comparator into `registry`.
///
/// Kinds already registered are replaced.
pub fn register_standard(registry: &mut ComparatorRegistry) {
    registry.register(ValidationKind::Equal, equal);
    registry.register(ValidationKind::StrictlyEqual, strictly_equal);
    registry.register(ValidationKind::DeeplyEqual, deeply_equal);
    registry.register(ValidationKind::CaseInsensitiveEqual, case_insensitive_equal);
    registry.register(ValidationKind::Contain, contain);
    registry.register(ValidationKind::Match, matches);
    registry.register(ValidationKind::Above, above);
    registry.register(ValidationKind::Below, below);
    registry.register(ValidationKind::HaveType, have_type);
    registry.register(ValidationKind::HaveMembers, have_members);
    registry.register(ValidationKind::IncludeMembers, include_members);
    registry.register(ValidationKind::HaveProperty, have_property);
}

/// A registry with every [`ValidationKind`] covered.
pub fn standard_registry() -> ComparatorRegistry {
    let mut registry = ComparatorRegistry::new();
    register_standard(&mut registry);
    registry
}

pub(crate) fn mismatch(actual: &Value, kind: ValidationKind, expected: &Value) -> Mismatch {
    Mismatch::new(format!(
        "expected {} {} {}",
        actual.describe(),
        kind.phrase(),
        expected.describe()
    ))
}

pub(crate) fn check(
    passed: bool,
    actual: &Value,
    kind: ValidationKind,
    expected: &Value,
) -> Result<(), Mismatch> {
    if passed {
        Ok(())
    } else {
        Err(mismatch(actual, kind, expected))
    }
}
