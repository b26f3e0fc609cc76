//! The data model: values, logical types, bound expressions, and the
//! per-query execution context.

pub mod context;
pub mod data_type;
pub mod expression;
pub mod value;

pub use context::ExecutionContext;
pub use data_type::DataType;
pub use expression::{ColumnRef, Expression, FunctionCall, IndexKind, Literal};
pub use value::Value;
