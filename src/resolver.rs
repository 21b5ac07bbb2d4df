//! Resolution of tokens into runtime values.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::errors::{ExpectError, ExpectResult};
use crate::expression::ExpressionEvaluator;
use crate::store::Store;
use crate::token::{Reference, Segment, Template, Token};
use crate::value::Value;

/// Turns tokens into values by reading memory and evaluating expressions.
///
/// The resolver holds no state of its own; two resolutions of the same
/// token may differ if memory changed in between.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn Store>,
    evaluator: Arc<dyn ExpressionEvaluator>,
    concurrent: bool,
}

impl Resolver {
    pub fn new(store: Arc<dyn Store>, evaluator: Arc<dyn ExpressionEvaluator>) -> Self {
        Self {
            store,
            evaluator,
            concurrent: true,
        }
    }

    /// Resolve batches one token at a time instead of concurrently.
    pub fn sequential(mut self) -> Self {
        self.concurrent = false;
        self
    }

    pub fn is_concurrent(&self) -> bool {
        self.concurrent
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    pub fn evaluator(&self) -> &Arc<dyn ExpressionEvaluator> {
        &self.evaluator
    }

    /// Parse and resolve a raw token.
    pub async fn resolve(&self, input: &str) -> ExpectResult<Value> {
        let token = Token::parse(input);
        debug!(input, token = ?token, "resolving token");
        self.resolve_token(&token).await
    }

    pub async fn resolve_token(&self, token: &Token) -> ExpectResult<Value> {
        match token {
            Token::Literal(text) => Ok(Value::String(text.clone())),
            Token::Reference(reference) => self.resolve_reference(reference).await,
            Token::Template(template) => {
                let rendered = self.render(template, Rendering::Display).await?;
                Ok(Value::String(rendered))
            }
            Token::Expression(template) => {
                let source = self.render(template, Rendering::Json).await?;
                self.evaluator.evaluate(&source)
            }
        }
    }

    /// Resolve several tokens, keeping their input order.
    pub async fn resolve_all<S: AsRef<str>>(&self, inputs: &[S]) -> ExpectResult<Vec<Value>> {
        if self.concurrent {
            try_join_all(inputs.iter().map(|input| self.resolve(input.as_ref()))).await
        } else {
            let mut values = Vec::with_capacity(inputs.len());
            for input in inputs {
                values.push(self.resolve(input.as_ref()).await?);
            }
            Ok(values)
        }
    }

    /// Stored generators are awaited whether or not the call syntax is used.
    async fn resolve_reference(&self, reference: &Reference) -> ExpectResult<Value> {
        match self.store.get(&reference.key).await? {
            Value::Deferred(deferred) => {
                debug!(key = %reference.key, "invoking deferred value");
                deferred.call().await
            }
            other if reference.invoke => Err(ExpectError::NotInvocable {
                key: reference.key.clone(),
                found: other.type_name(),
            }),
            other => Ok(other),
        }
    }

    async fn render(&self, template: &Template, rendering: Rendering) -> ExpectResult<String> {
        let mut out = String::new();
        for segment in &template.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(reference) => {
                    let value = self.resolve_reference(reference).await?;
                    match rendering {
                        Rendering::Display => out.push_str(&value.to_string()),
                        Rendering::Json => {
                            let json = value.to_json().ok_or_else(|| ExpectError::Expression {
                                expression: format!("{{${}}}", reference.key),
                                message: format!("cannot embed a {} value", value.type_name()),
                            })?;
                            out.push_str(&json.to_string());
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}

/// How placeholder values are written into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rendering {
    /// Plain text, strings unquoted.
    Display,
    /// JSON, so the result can be fed to the expression evaluator.
    Json,
}
