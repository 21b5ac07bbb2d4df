//! Key/value memory shared between steps.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::ExpectResult;
use crate::value::Value;

/// Accessor for named runtime values.
///
/// Reading a key that was never set yields [`Value::Undefined`] unless the
/// implementation defines its own error for it.
#[async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, key: &str) -> ExpectResult<Value>;

    async fn set(&self, key: &str, value: Value) -> ExpectResult<()>;
}

/// In-process store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: DashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with values.
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let store = Self::new();
        for (key, value) in values {
            store.insert(key, value);
        }
        store
    }

    /// Synchronous insert, for seeding.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> ExpectResult<Value> {
        Ok(self
            .values
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or(Value::Undefined))
    }

    async fn set(&self, key: &str, value: Value) -> ExpectResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
