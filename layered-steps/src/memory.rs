use tracing::{debug, instrument};

use layered_expect::{DataTable, ExpectResult, Value};

use crate::Steps;

impl Steps {
    /// `I save '$getRandomUser()' to memory as 'user'`
    #[instrument(skip(self), err(Display))]
    pub async fn save(&self, alias: &str, key: &str) -> ExpectResult<()> {
        let value = self.engine.resolve(alias).await?;
        self.remember(key, value).await
    }

    /// `I set 'key' = 'value'`
    #[instrument(skip(self), err(Display))]
    pub async fn set(&self, key: &str, value: &str) -> ExpectResult<()> {
        let value = self.engine.resolve(value).await?;
        self.remember(key, value).await
    }

    /// Doc-string form of [`Steps::set`]; placeholders in the text are rendered.
    #[instrument(skip(self, text), err(Display))]
    pub async fn save_multiline(&self, key: &str, text: &str) -> ExpectResult<()> {
        let value = self.engine.resolve(text).await?;
        self.remember(key, value).await
    }

    /// Parse the resolved text as JSON and store the result.
    ///
    /// ```text
    /// I save json to memory as 'key':
    /// """
    /// { "someKey": "someValue" }
    /// """
    /// ```
    #[instrument(skip(self, json), err(Display))]
    pub async fn save_json(&self, key: &str, json: &str) -> ExpectResult<()> {
        let text = self.engine.resolve(json).await?.to_string();
        let parsed: serde_json::Value = serde_json::from_str(&text)?;
        self.remember(key, Value::from(parsed)).await
    }

    /// ```text
    /// I save key-value pairs to memory as 'key':
    ///   | someKey      | 42               |
    ///   | someOtherKey | $valueFromMemory |
    /// ```
    #[instrument(skip(self, table), err(Display))]
    pub async fn save_key_value_pairs(&self, key: &str, table: &DataTable) -> ExpectResult<()> {
        let mapping = self.engine.rows_to_mapping(table).await?;
        self.remember(key, Value::from(mapping)).await
    }

    /// `I save result of math expression '{$variable} + 42' as 'result'`
    ///
    /// Placeholders are rendered first, then the text goes to the host
    /// expression evaluator.
    #[instrument(skip(self), err(Display))]
    pub async fn save_math_result(&self, expression: &str, key: &str) -> ExpectResult<()> {
        let source = self.engine.resolve(expression).await?.to_string();
        let value = self.engine.evaluate(&source)?;
        self.remember(key, value).await
    }

    async fn remember(&self, key: &str, value: Value) -> ExpectResult<()> {
        debug!(key, value = %value, "saved to memory");
        self.engine.store().set(key, value).await
    }
}
