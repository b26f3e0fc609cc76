//! Scalar predicate evaluation and index pushdown for a SQL engine.
//!
//! This crate is the row-level boolean core a query engine plugs its planner
//! and storage layer into. It provides:
//! - Operator evaluation under SQL's three-valued logic, where NULL is an
//!   explicit value and never silently collapses to false
//! - Predicate pushdown: rewriting `column <op> constant` calls into
//!   storage-level filters via per-type equality capabilities, so the storage
//!   engine can prune rows without per-row evaluation
//! - A signature-keyed operator registry, built once at startup and bound per
//!   call site during planning
//!
//! Everything here is pure and `Send + Sync`: the registry and the capability
//! table are immutable after their single-threaded build, and operator
//! instances can be shared freely across concurrently executing queries.

pub mod error;
pub mod operators;
pub mod planning;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use operators::{ScalarOperator, resolve_operator};
pub use planning::push_down;
pub use storage::{StorageFilter, capabilities};
pub use types::{DataType, ExecutionContext, Expression, Value};
