use layered_expect::{Mismatch, ValidationKind, Value};

use crate::check;

/// Equality with scalar coercion.
///
/// Numbers equal numeric strings, booleans equal `"true"`/`"false"` and
/// `1`/`0`, and `null` equals `undefined`. Arrays and objects are compared
/// element by element with the same rules.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Number(n), other @ Value::String(_)) | (other @ Value::String(_), Value::Number(n)) => {
            other.to_number() == Some(*n)
        }
        (Value::Bool(flag), Value::String(s)) | (Value::String(s), Value::Bool(flag)) => {
            s.trim() == if *flag { "true" } else { "false" }
        }
        (Value::Bool(flag), Value::Number(n)) | (Value::Number(n), Value::Bool(flag)) => {
            *n == if *flag { 1.0 } else { 0.0 }
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| loose_eq(l, r))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, l)| right.get(key).map_or(false, |r| loose_eq(l, r)))
        }
        _ => a == b,
    }
}

pub fn equal(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    check(loose_eq(actual, expected), actual, ValidationKind::Equal, expected)
}

/// No coercion: variant and value must both match.
pub fn strictly_equal(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    check(actual == expected, actual, ValidationKind::StrictlyEqual, expected)
}

/// Structural equality over arrays and objects. Object key order is ignored.
pub fn deeply_equal(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    check(actual == expected, actual, ValidationKind::DeeplyEqual, expected)
}

pub fn case_insensitive_equal(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let passed = actual.to_string().to_lowercase() == expected.to_string().to_lowercase();
    check(passed, actual, ValidationKind::CaseInsensitiveEqual, expected)
}
