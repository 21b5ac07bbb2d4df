//! Host expression evaluation for `$jq(...)` tokens and math steps.

use std::sync::Arc;

use crate::errors::{ExpectError, ExpectResult};
use crate::value::Value;

/// Evaluates an expression embedded in a token.
pub trait ExpressionEvaluator: Send + Sync {
    fn evaluate(&self, expression: &str) -> ExpectResult<Value>;
}

/// Evaluator that only accepts JSON literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEvaluator;

impl ExpressionEvaluator for JsonEvaluator {
    fn evaluate(&self, expression: &str) -> ExpectResult<Value> {
        serde_json::from_str::<serde_json::Value>(expression)
            .map(Value::from)
            .map_err(|e| ExpectError::Expression {
                expression: expression.to_string(),
                message: e.to_string(),
            })
    }
}

/// Evaluates expressions as jq filters applied to `null`.
///
/// The first output of the filter is the result; a filter that produces no
/// output evaluates to [`Value::Undefined`].
#[cfg(feature = "jq")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JqEvaluator;

#[cfg(feature = "jq")]
impl ExpressionEvaluator for JqEvaluator {
    fn evaluate(&self, expression: &str) -> ExpectResult<Value> {
        use jaq_interpret::{Ctx, FilterT, ParseCtx, RcIter, Val};

        let error = |message: String| ExpectError::Expression {
            expression: expression.to_string(),
            message,
        };

        let mut defs = ParseCtx::new(Vec::new());
        defs.insert_natives(jaq_core::core());
        defs.insert_defs(jaq_std::std());

        let main = jaq_syn::parse(expression, |p| p.module(|p| p.term()))
            .ok_or_else(|| error("invalid jq expression".to_string()))?;
        let filter = defs.compile(main.conv(expression));
        if !defs.errs.is_empty() {
            let msg = defs
                .errs
                .iter()
                .map(|(e, _span)| format!("{}", e))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(error(msg));
        }

        let inputs = RcIter::new(std::iter::empty());
        let ctx = Ctx::new([], &inputs);
        let mut outputs = filter.run((ctx, Val::from(serde_json::Value::Null)));

        match outputs.next() {
            None => Ok(Value::Undefined),
            Some(Ok(val)) => Ok(Value::from(serde_json::Value::from(val))),
            Some(Err(e)) => Err(error(format!("{}", e))),
        }
    }
}

/// The evaluator used when none is supplied.
pub fn default_evaluator() -> Arc<dyn ExpressionEvaluator> {
    #[cfg(feature = "jq")]
    {
        Arc::new(JqEvaluator)
    }
    #[cfg(not(feature = "jq"))]
    {
        Arc::new(JsonEvaluator)
    }
}
