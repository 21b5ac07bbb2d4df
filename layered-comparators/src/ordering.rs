use layered_expect::{Mismatch, ValidationKind, Value};

use crate::check;

pub fn above(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let (a, e) = numbers(actual, expected)?;
    check(a > e, actual, ValidationKind::Above, expected)
}

pub fn below(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let (a, e) = numbers(actual, expected)?;
    check(a < e, actual, ValidationKind::Below, expected)
}

fn numbers(actual: &Value, expected: &Value) -> Result<(f64, f64), Mismatch> {
    Ok((number(actual)?, number(expected)?))
}

fn number(value: &Value) -> Result<f64, Mismatch> {
    value.to_number().ok_or_else(|| {
        Mismatch::new(format!(
            "expected {} to be a number or a numeric string",
            value.describe()
        ))
    })
}
