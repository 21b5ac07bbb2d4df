//! Quantified validation across array elements and candidate lists.
//!
//! | operation | iterates | stops early | fails with |
//! |---|---|---|---|
//! | [`validate_every`] | array elements vs one expected | first failure | that element's [`Mismatch`] |
//! | [`validate_at_least`] | array elements vs one expected | never | [`ExpectError::ThresholdNotMet`] |
//! | [`validate_any_of`] | one actual vs candidates | first success | [`AggregateMismatch`] |
//! | [`validate_all_of`] | one actual vs candidates | never | [`AggregateMismatch`] |
//!
//! The sequence operand is checked before any comparison runs.

use tracing::trace;

use crate::errors::{AggregateMismatch, ExpectError, ExpectResult};
use crate::validation::Comparator;
use crate::value::Value;

fn sequence<'a>(value: &'a Value, operand: &str) -> ExpectResult<&'a [Value]> {
    value.as_array().ok_or_else(|| ExpectError::NotAnArray {
        operand: operand.to_string(),
        found: value.type_name(),
    })
}

/// Pass/fail counts for one at-least evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OutcomeTally {
    pass: usize,
    fail: usize,
}

/// Every element must satisfy the comparator against `expected`.
pub fn validate_every(
    array: &Value,
    comparator: &dyn Comparator,
    expected: &Value,
) -> ExpectResult<()> {
    let elements = sequence(array, "array")?;
    for (idx, element) in elements.iter().enumerate() {
        trace!(idx, element = %element, "every: comparing");
        comparator.compare(element, expected)?;
    }
    Ok(())
}

/// At least `required` elements must satisfy the comparator against `expected`.
///
/// Every element is compared; individual failure messages are discarded.
pub fn validate_at_least(
    required: usize,
    array: &Value,
    comparator: &dyn Comparator,
    expected: &Value,
) -> ExpectResult<()> {
    let elements = sequence(array, "array")?;
    let mut tally = OutcomeTally::default();
    for element in elements {
        match comparator.compare(element, expected) {
            Ok(()) => tally.pass += 1,
            Err(_) => tally.fail += 1,
        }
    }
    trace!(required, pass = tally.pass, fail = tally.fail, "at least: tallied");

    if tally.pass < required {
        return Err(ExpectError::ThresholdNotMet {
            required,
            passed: tally.pass,
            validation: comparator.describe(),
        });
    }
    Ok(())
}

/// `actual` must satisfy the comparator against at least one candidate.
pub fn validate_any_of(
    actual: &Value,
    candidates: &Value,
    comparator: &dyn Comparator,
) -> ExpectResult<()> {
    let candidates = sequence(candidates, "candidates")?;
    let mut collected = AggregateMismatch::default();
    for candidate in candidates {
        match comparator.compare(actual, candidate) {
            Ok(()) => return Ok(()),
            Err(mismatch) => collected.failures.push(mismatch),
        }
    }
    Err(collected.into())
}

/// `actual` must satisfy the comparator against every candidate.
pub fn validate_all_of(
    actual: &Value,
    candidates: &Value,
    comparator: &dyn Comparator,
) -> ExpectResult<()> {
    let candidates = sequence(candidates, "candidates")?;
    let mut collected = AggregateMismatch::default();
    for candidate in candidates {
        if let Err(mismatch) = comparator.compare(actual, candidate) {
            collected.failures.push(mismatch);
        }
    }
    if collected.is_empty() {
        Ok(())
    } else {
        Err(collected.into())
    }
}
