//! Scenario-style tests driving the step handlers.

use crate::Steps;
use futures::executor::block_on;
use layered_comparators::standard_registry;
use layered_expect::{
    default_evaluator, Deferred, Engine, ExpectResult, MemoryStore, Sorter, Value,
};
use std::sync::Arc;


fn numeric(v: &Value) -> f64 {
    v.to_number().unwrap_or(f64::NAN)
}

/// Steps over memory holding the values scenarios refer to.
pub(crate) fn steps() -> Steps {
    let store = MemoryStore::new();
    store.insert("arr", vec![1, 2, 3, 4, 5]);
    store.insert("getString", Deferred::from_fn(|| Value::from("I was computed")));
    store.insert(
        "getStringAsync",
        Deferred::new(|| async { ExpectResult::Ok(Value::from("I was computed async")) }),
    );
    store.insert("ascending", Sorter::new(|a, b| numeric(a) - numeric(b)));
    store.insert("descending", Sorter::new(|a, b| numeric(b) - numeric(a)));
    Steps::new(Engine::new(
        Arc::new(store),
        default_evaluator(),
        standard_registry(),
    ))
}

pub(crate) fn recall(steps: &Steps, key: &str) -> Value {
    block_on(steps.engine().store().get(key)).unwrap()
}
