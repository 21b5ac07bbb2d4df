//! The engine facade used by step handlers.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::EngineConfig;
use crate::errors::ExpectResult;
use crate::expression::{default_evaluator, ExpressionEvaluator};
use crate::order;
use crate::quantified;
use crate::resolver::Resolver;
use crate::store::{MemoryStore, Store};
use crate::table::{self, DataTable};
use crate::validation::{Comparator, ComparatorRegistry, Validation};
use crate::value::Value;

/// Phrase used to compare an array with its sorted copy.
const SORTED_EQUALITY: &str = "to deeply equal";

/// Resolver, comparator registry and validators behind one handle.
#[derive(Clone)]
pub struct Engine {
    resolver: Resolver,
    registry: Arc<ComparatorRegistry>,
}

impl Engine {
    pub fn new(
        store: Arc<dyn Store>,
        evaluator: Arc<dyn ExpressionEvaluator>,
        registry: ComparatorRegistry,
    ) -> Self {
        Self {
            resolver: Resolver::new(store, evaluator),
            registry: Arc::new(registry),
        }
    }

    /// Engine over a fresh [`MemoryStore`] seeded from the config.
    pub fn from_config(config: &EngineConfig, registry: ComparatorRegistry) -> Self {
        let store = MemoryStore::with_values(config.initial_values());
        let mut resolver = Resolver::new(Arc::new(store), default_evaluator());
        if !config.resolution.concurrent {
            resolver = resolver.sequential();
        }
        Self {
            resolver,
            registry: Arc::new(registry),
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn registry(&self) -> &ComparatorRegistry {
        &self.registry
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        self.resolver.store()
    }

    pub async fn resolve(&self, token: &str) -> ExpectResult<Value> {
        self.resolver.resolve(token).await
    }

    /// Evaluate already-resolved source with the host evaluator.
    pub fn evaluate(&self, expression: &str) -> ExpectResult<Value> {
        self.resolver.evaluator().evaluate(expression)
    }

    pub fn dispatch(&self, descriptor: &str) -> ExpectResult<Validation> {
        self.registry.dispatch(descriptor)
    }

    pub fn validate_every(
        &self,
        array: &Value,
        comparator: &dyn Comparator,
        expected: &Value,
    ) -> ExpectResult<()> {
        quantified::validate_every(array, comparator, expected)
    }

    pub fn validate_at_least(
        &self,
        required: usize,
        array: &Value,
        comparator: &dyn Comparator,
        expected: &Value,
    ) -> ExpectResult<()> {
        quantified::validate_at_least(required, array, comparator, expected)
    }

    pub fn validate_any_of(
        &self,
        actual: &Value,
        candidates: &Value,
        comparator: &dyn Comparator,
    ) -> ExpectResult<()> {
        quantified::validate_any_of(actual, candidates, comparator)
    }

    pub fn validate_all_of(
        &self,
        actual: &Value,
        candidates: &Value,
        comparator: &dyn Comparator,
    ) -> ExpectResult<()> {
        quantified::validate_all_of(actual, candidates, comparator)
    }

    /// Check sort order using the registered deep equality comparator.
    ///
    /// The operands are checked before the comparator is looked up.
    pub fn verify_sorted(&self, array: &Value, sorter: &Value) -> ExpectResult<()> {
        let sorted = order::sorted_copy(array, sorter)?;
        let deep_equal = self.dispatch(SORTED_EQUALITY)?;
        deep_equal.compare(array, &Value::Array(sorted))?;
        Ok(())
    }

    pub async fn rows_to_mapping(&self, table: &DataTable) -> ExpectResult<IndexMap<String, Value>> {
        table::rows_to_mapping(&self.resolver, table).await
    }

    pub async fn rows_to_sequence(&self, table: &DataTable) -> ExpectResult<Vec<Value>> {
        table::rows_to_sequence(&self.resolver, table).await
    }
}
