//! Shared fixtures for the engine tests.

use crate::errors::{ExpectError, Mismatch};
use crate::validation::{ComparatorRegistry, ValidationKind};
use crate::value::{Deferred, Sorter, Value};
use crate::{Engine, EngineConfig, MemoryStore, Store};
use std::sync::Arc;

mod engine;
mod order;

pub(crate) fn equals(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    if actual == expected {
        Ok(())
    } else {
        Err(Mismatch::new(format!(
            "expected {} to equal {}",
            actual.describe(),
            expected.describe()
        )))
    }
}

pub(crate) fn above(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    match (actual.to_number(), expected.to_number()) {
        (Some(a), Some(e)) if a > e => Ok(()),
        _ => Err(Mismatch::new(format!(
            "expected {} to be above {}",
            actual.describe(),
            expected.describe()
        ))),
    }
}

pub(crate) fn registry() -> ComparatorRegistry {
    ComparatorRegistry::new()
        .with(ValidationKind::Equal, equals)
        .with(ValidationKind::DeeplyEqual, equals)
        .with(ValidationKind::Above, above)
}

pub(crate) fn numeric(v: &Value) -> f64 {
    v.to_number().unwrap_or(f64::NAN)
}

pub(crate) fn ascending() -> Sorter {
    Sorter::new(|a, b| numeric(a) - numeric(b))
}

pub(crate) fn descending() -> Sorter {
    Sorter::new(|a, b| numeric(b) - numeric(a))
}

/// Memory matching what a scenario suite would preload.
pub(crate) fn memory() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert("arr", vec![1, 2, 3, 4, 5]);
    store.insert("getString", Deferred::from_fn(|| Value::from("I was computed")));
    store.insert(
        "getStringAsync",
        Deferred::new(|| async { Ok::<_, ExpectError>(Value::from("I was computed async")) }),
    );
    store.insert("ascending", ascending());
    store.insert("descending", descending());
    store
}

pub(crate) fn engine() -> Engine {
    let store: Arc<dyn Store> = Arc::new(memory());
    Engine::new(store, crate::default_evaluator(), registry())
}

pub(crate) fn engine_from(config: &EngineConfig) -> Engine {
    Engine::from_config(config, registry())
}
