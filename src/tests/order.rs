use super::{ascending, descending, equals};
use crate::errors::ExpectError;
use crate::order::verify_sorted;
use crate::value::Value;

#[test]
fn already_sorted_passes() {
    let array = Value::from(vec![1, 2, 3, 4, 5]);
    assert!(verify_sorted(&array, &Value::from(ascending()), &equals).is_ok());
}

#[test]
fn unsorted_fails_with_equality_message() {
    let array = Value::from(vec![2, 1, 3]);
    let err = verify_sorted(&array, &Value::from(ascending()), &equals).unwrap_err();
    assert!(matches!(err, ExpectError::Mismatch(_)));
    insta::assert_snapshot!(err.to_string(), @"expected [2,1,3] to equal [1,2,3]");
}

#[test]
fn input_is_not_reordered() {
    let array = Value::from(vec![3, 1, 2]);
    let before = array.clone();
    let _ = verify_sorted(&array, &Value::from(descending()), &equals);
    assert_eq!(array, before);
}

#[test]
fn empty_and_single_arrays_are_sorted() {
    for array in [Value::Array(vec![]), Value::from(vec![7])] {
        assert!(verify_sorted(&array, &Value::from(descending()), &equals).is_ok());
    }
}

#[test]
fn equal_keys_keep_their_order() {
    // Sort by string length only; ties must not be swapped.
    let by_length = crate::Sorter::new(|a, b| {
        let len = |v: &Value| v.as_str().map(str::len).unwrap_or(0) as f64;
        len(a) - len(b)
    });
    let array = Value::from(vec!["bb", "aa", "c"]);
    let err = verify_sorted(&array, &Value::from(by_length.clone()), &equals).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r###"expected ["bb","aa","c"] to equal ["c","bb","aa"]"###);

    let array = Value::from(vec!["c", "bb", "aa"]);
    assert!(verify_sorted(&array, &Value::from(by_length), &equals).is_ok());
}

#[test]
fn array_is_checked_before_sorter() {
    let err = verify_sorted(&Value::from("nope"), &Value::from("nope"), &equals).unwrap_err();
    assert!(matches!(err, ExpectError::NotAnArray { .. }));
}

#[test]
fn non_function_sorter_is_rejected() {
    let err = verify_sorted(&Value::from(vec![1, 2]), &Value::from("ascending"), &equals).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"comparator is not implemented (found string)");
}

#[test]
fn deferred_is_not_a_sorter() {
    let generator = crate::Deferred::from_fn(|| Value::Null);
    let err = verify_sorted(&Value::from(vec![1]), &Value::from(generator), &equals).unwrap_err();
    assert!(matches!(err, ExpectError::ComparatorMissing { found: "function" }));
}

#[test]
fn non_numeric_element_reports_mismatch() {
    let mut items: Vec<Value> = (0..40i32).rev().map(Value::from).collect();
    items.insert(20, Value::from("x"));
    let array = Value::Array(items);

    let err = verify_sorted(&array, &Value::from(ascending()), &equals).unwrap_err();
    assert!(matches!(err, ExpectError::Mismatch(_)));
}

#[test]
fn inconsistent_sorter_keeps_every_element() {
    let array = Value::from(vec![
        Value::from(3),
        Value::from("N/A"),
        Value::from(1),
        Value::from(2),
    ]);
    let sorted = crate::order::sorted_copy(&array, &Value::from(ascending())).unwrap();
    assert_eq!(sorted.len(), 4);
    for element in array.as_array().unwrap() {
        assert!(sorted.contains(element));
    }
}

#[test]
fn constant_sorter_keeps_input_order() {
    let after = crate::Sorter::new(|_, _| 1.0);
    let array = Value::from((0..40).collect::<Vec<i32>>());
    assert!(verify_sorted(&array, &Value::from(after), &equals).is_ok());
}
