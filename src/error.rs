//! Error types for the predicate core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the planner at query compile time.
///
/// Pushdown being unavailable is deliberately not an error: `to_filter`
/// returns `None` and the planner falls back to row evaluation. Arity or type
/// violations at evaluate time are contract failures of the binder, not
/// recoverable runtime errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("No overload of {name} accepts argument types ({found})")]
    SignatureMismatch { name: String, found: String },
}
