//! Sort order verification.

use std::cmp::Ordering;

use tracing::debug;

use crate::errors::{ExpectError, ExpectResult};
use crate::validation::Comparator;
use crate::value::{Sorter, Value};

/// Check that `array` is already ordered by `sorter`.
///
/// A copy of the array is sorted with the sorter and compared against the
/// original using `deep_equal`, whose own failure is returned on mismatch.
/// The original array is never modified.
pub fn verify_sorted(array: &Value, sorter: &Value, deep_equal: &dyn Comparator) -> ExpectResult<()> {
    let sorted = sorted_copy(array, sorter)?;
    deep_equal.compare(array, &Value::Array(sorted))?;
    Ok(())
}

/// Copy of `array` ordered by `sorter`.
///
/// Fails with `NotAnArray` before `ComparatorMissing`. The sort is stable and
/// accepts sorters that are not a total order (e.g. a numeric sorter meeting a
/// non-numeric element); the result is then some permutation of the input.
pub fn sorted_copy(array: &Value, sorter: &Value) -> ExpectResult<Vec<Value>> {
    let elements = array.as_array().ok_or_else(|| ExpectError::NotAnArray {
        operand: "array".to_string(),
        found: array.type_name(),
    })?;
    let sorter = sorter.as_sorter().ok_or_else(|| ExpectError::ComparatorMissing {
        found: sorter.type_name(),
    })?;

    debug!(len = elements.len(), "verifying sort order");
    Ok(merge_sort(elements.to_vec(), sorter))
}

/// Top-down merge sort; ties keep the left element first.
fn merge_sort(mut items: Vec<Value>, sorter: &Sorter) -> Vec<Value> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, sorter);
    let mut right = merge_sort(right, sorter).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    for item in left {
        while let Some(next) = right.next_if(|next| sorter.compare(next, &item) == Ordering::Less) {
            merged.push(next);
        }
        merged.push(item);
    }
    merged.extend(right);
    merged
}
