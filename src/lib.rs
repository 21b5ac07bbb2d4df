#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Value resolution and quantified validation for behavior-driven test steps.
//!
//! Test authors write steps such as
//! `I expect every element in '$arr' array to be above '50'`. A step handler
//! hands the quoted tokens and the validation phrase to this crate, which:
//!
//! 1. resolves each token into a [`Value`] (literal, memory reference,
//!    template or `$jq(...)` expression),
//! 2. maps the phrase to a [`Comparator`] through a [`ComparatorRegistry`],
//! 3. applies the comparator directly or through one of the quantified
//!    validators.
//!
//! ## Modules
//!
//! - [`token`] - Token forms, decided at parse time
//! - [`resolver`] - Asynchronous token resolution against a [`Store`]
//! - [`validation`] - Phrase normalization and comparator dispatch
//! - [`quantified`] - Every-element, at-least-N, any-of and all-of policies
//! - [`order`] - Sort order verification
//! - [`table`] - Data table conversion
//! - [`engine`] - Facade tying the above together
//!
//! The concrete comparators live in the `layered-comparators` crate; this
//! crate only dispatches to whatever is registered.

pub mod config;
pub mod engine;
pub mod errors;
pub mod expression;
pub mod order;
pub mod quantified;
pub mod resolver;
pub mod store;
pub mod table;
pub mod token;
pub mod validation;
pub mod value;

pub use config::{EngineConfig, ResolutionConfig};
pub use engine::Engine;
pub use errors::{AggregateMismatch, ExpectError, ExpectResult, Mismatch};
#[cfg(feature = "jq")]
pub use expression::JqEvaluator;
pub use expression::{default_evaluator, ExpressionEvaluator, JsonEvaluator};
pub use order::{sorted_copy, verify_sorted};
pub use quantified::{validate_all_of, validate_any_of, validate_at_least, validate_every};
pub use resolver::Resolver;
pub use store::{MemoryStore, Store};
pub use table::{rows_to_mapping, rows_to_sequence, DataTable};
pub use token::{Reference, Segment, Template, Token};
pub use validation::{Comparator, ComparatorRegistry, Descriptor, Validation, ValidationKind};
pub use value::{Deferred, Sorter, Value, ValueFuture};

#[cfg(test)]
mod tests;
