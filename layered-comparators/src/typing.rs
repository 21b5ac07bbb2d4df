use layered_expect::{Mismatch, ValidationKind, Value};

use crate::check;

/// Compare against [`Value::type_name`], ignoring case.
pub fn have_type(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let wanted = expected.to_string().trim().to_lowercase();
    check(
        actual.type_name() == wanted,
        actual,
        ValidationKind::HaveType,
        expected,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert!(have_type(&Value::from("x"), &Value::from("string")).is_ok());
        assert!(have_type(&Value::from(1), &Value::from("Number")).is_ok());
        assert!(have_type(&Value::from(vec![1]), &Value::from("array")).is_ok());
        assert!(have_type(&Value::Undefined, &Value::from("undefined")).is_ok());
        assert!(have_type(&Value::from(true), &Value::from("boolean")).is_ok());
    }

    #[test]
    fn test_type_mismatch() {
        let err = have_type(&Value::from("1"), &Value::from("number")).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"expected '1' to have type 'number'");
    }
}
