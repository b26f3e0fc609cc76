//! Bound expression tree consumed by operators at plan time.
//!
//! The planner produces these after name resolution and signature binding;
//! they are immutable for the lifetime of the query. Only the shapes the
//! predicate core inspects are modeled here: column references, literals,
//! and operator calls.

use serde::{Deserialize, Serialize};

use super::data_type::DataType;
use super::value::Value;
use crate::operators::signature::BoundSignature;

/// How a column is indexed, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexKind {
    None,
    BTree,
    Hash,
}

/// A column reference resolved against table metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    /// Storage identifier of the column
    pub column: String,
    /// Declared column type
    pub value_type: DataType,
    /// Whether the storage layer keeps a secondary per-column structure that
    /// can answer lookups when no index exists
    pub has_secondary_index: bool,
    pub index: IndexKind,
}

impl ColumnRef {
    /// An unindexed reference; builders below add index metadata.
    pub fn new(column: impl Into<String>, value_type: DataType) -> Self {
        Self {
            column: column.into(),
            value_type,
            has_secondary_index: false,
            index: IndexKind::None,
        }
    }

    pub fn with_index(mut self, index: IndexKind) -> Self {
        self.index = index;
        self
    }

    pub fn with_secondary_index(mut self) -> Self {
        self.has_secondary_index = true;
        self
    }

    pub fn is_indexed(&self) -> bool {
        self.index != IndexKind::None
    }
}

/// A constant in a bound expression, possibly NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Value,
    pub data_type: DataType,
}

impl Literal {
    /// Literal with its type inferred from the value.
    pub fn new(value: Value) -> Self {
        let data_type = value.data_type();
        Self { value, data_type }
    }

    /// Literal with an explicitly declared type, e.g. a folded result whose
    /// type comes from the operator's return type rather than the value.
    pub fn typed(value: Value, data_type: DataType) -> Self {
        Self { value, data_type }
    }
}

/// A bound operator invocation.
///
/// Invariant, guaranteed by the binder: `args.len()` equals the operator's
/// declared arity, and each argument's declared type matches the bound
/// signature.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expression>,
    pub bound: BoundSignature,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Expression>, bound: BoundSignature) -> Self {
        Self {
            name: name.into(),
            args,
            bound,
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Column(ColumnRef),
    Literal(Literal),
    Function(FunctionCall),
}

impl Expression {
    pub fn literal(value: Value) -> Self {
        Expression::Literal(Literal::new(value))
    }

    /// Declared type of this expression.
    pub fn value_type(&self) -> DataType {
        match self {
            Expression::Column(column) => column.value_type.clone(),
            Expression::Literal(literal) => literal.data_type.clone(),
            Expression::Function(call) => call.bound.return_type.clone(),
        }
    }
}
