use super::{engine, engine_from};
use crate::errors::ExpectError;
use crate::value::Value;
use crate::{Comparator, EngineConfig};
use futures::executor::block_on;
use serde_json::json;

// ============================================================================
// Resolved steps
// ============================================================================

#[test]
fn at_least_two_elements_above_four() {
    let engine = engine();
    block_on(engine.store().set("arr", Value::from(vec![1, 5, 10, 50]))).unwrap();

    let array = block_on(engine.resolve("$arr")).unwrap();
    let expected = block_on(engine.resolve("4")).unwrap();
    let validation = engine.dispatch("to be above").unwrap();

    assert!(engine
        .validate_at_least(2, &array, &validation, &expected)
        .is_ok());
}

#[test]
fn at_least_threshold_uses_phrase() {
    let engine = engine();
    let array = block_on(engine.resolve("$arr")).unwrap();
    let validation = engine.dispatch("is above").unwrap();

    let err = engine
        .validate_at_least(3, &array, &validation, &Value::from(3))
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"expected at least 3 element(s) to pass 'is above', but 2 passed"
    );
}

#[test]
fn every_element_with_negation() {
    let engine = engine();
    let array = block_on(engine.resolve("$arr")).unwrap();

    let validation = engine.dispatch("not to be above").unwrap();
    assert!(engine
        .validate_every(&array, &validation, &Value::from(5))
        .is_ok());

    let err = engine
        .validate_every(&array, &validation, &Value::from(3))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected 4 not to be above 3");
}

#[test]
fn any_of_free_or_paid() {
    let engine = engine();
    let actual = block_on(engine.resolve("free")).unwrap();
    let candidates = block_on(engine.resolve(r#"$jq(["free", "paid"])"#)).unwrap();
    let validation = engine.dispatch("to equal").unwrap();

    assert!(engine
        .validate_any_of(&actual, &candidates, &validation)
        .is_ok());

    let err = engine
        .validate_any_of(&Value::from("trial"), &candidates, &validation)
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r###"
    expected 'trial' to equal 'free'
    expected 'trial' to equal 'paid'
    "###);
}

#[test]
fn all_of_with_negated_validation() {
    let engine = engine();
    let validation = engine.dispatch("does not equal").unwrap();
    let candidates = Value::from(vec!["free", "paid"]);

    assert!(engine
        .validate_all_of(&Value::from("trial"), &candidates, &validation)
        .is_ok());

    let err = engine
        .validate_all_of(&Value::from("paid"), &candidates, &validation)
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected 'paid' not to equal 'paid'");
}

#[test]
fn undefined_equals_undefined() {
    let engine = engine();
    let actual = block_on(engine.resolve("$notDefined")).unwrap();
    let expected = block_on(engine.resolve("$alsoNotDefined")).unwrap();
    let validation = engine.dispatch("to equal").unwrap();

    assert!(validation.compare(&actual, &expected).is_ok());

    let err = validation
        .compare(&actual, &Value::from("x"))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected undefined to equal 'x'");
}

// ============================================================================
// Sort order
// ============================================================================

#[test]
fn sorted_descending() {
    let engine = engine();
    block_on(engine.store().set("arr", Value::from(vec![5, 4, 3, 2, 1]))).unwrap();
    let array = block_on(engine.resolve("$arr")).unwrap();

    let descending = block_on(engine.resolve("$descending")).unwrap();
    assert!(engine.verify_sorted(&array, &descending).is_ok());

    let ascending = block_on(engine.resolve("$ascending")).unwrap();
    let err = engine.verify_sorted(&array, &ascending).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected [5,4,3,2,1] to equal [1,2,3,4,5]");
}

#[test]
fn sorted_checks_operands_before_lookup() {
    let engine = crate::Engine::new(
        std::sync::Arc::new(super::memory()),
        crate::default_evaluator(),
        crate::ComparatorRegistry::new(),
    );
    let err = engine
        .verify_sorted(&Value::from("not an array"), &Value::Null)
        .unwrap_err();
    assert!(matches!(err, ExpectError::NotAnArray { .. }));

    let err = engine
        .verify_sorted(&Value::from(vec![1, 2]), &Value::from("ascending"))
        .unwrap_err();
    assert!(matches!(err, ExpectError::ComparatorMissing { found: "string" }));

    let ascending = Value::from(super::ascending());
    let err = engine
        .verify_sorted(&Value::from(vec![1, 2]), &ascending)
        .unwrap_err();
    assert!(matches!(err, ExpectError::UnknownValidation { .. }));
}

// ============================================================================
// Dispatch and configuration
// ============================================================================

#[test]
fn unknown_phrase_is_rejected() {
    let err = engine().dispatch("to be shaped like").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown validation: 'to be shaped like'");
}

#[test]
fn known_phrase_without_comparator_is_rejected() {
    let err = engine().dispatch("to have property").unwrap_err();
    assert!(matches!(err, ExpectError::UnknownValidation { .. }));
}

#[test]
fn config_preloads_memory() {
    let config = EngineConfig::default()
        .with_value("plan", json!("free"))
        .with_value("prices", json!([1, 5, 10]));
    let engine = engine_from(&config);

    assert_eq!(block_on(engine.resolve("$plan")).unwrap(), Value::from("free"));
    assert_eq!(
        block_on(engine.resolve("$prices")).unwrap(),
        Value::from(vec![1, 5, 10])
    );
    assert!(engine.resolver().is_concurrent());
}

#[test]
fn config_can_disable_concurrency() {
    let mut config = EngineConfig::default();
    config.resolution.concurrent = false;
    let engine = engine_from(&config);
    assert!(!engine.resolver().is_concurrent());
}

#[test]
fn evaluate_parses_json() {
    let value = engine().evaluate(r#"{"a": [1, 2]}"#).unwrap();
    assert_eq!(value.to_json(), Some(json!({"a": [1, 2]})));
}
