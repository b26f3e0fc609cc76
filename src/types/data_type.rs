//! Logical SQL column types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a logical column type.
///
/// Constructed at startup from table metadata and immutable thereafter.
/// `Null` is the type of an untyped NULL literal before any coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    I32,
    I64,
    F64,
    Decimal,
    Str,
    Date,
    Timestamp,
    Uuid,
    Bytea,
    Null,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Bool => write!(f, "BOOLEAN"),
            DataType::I32 => write!(f, "INT"),
            DataType::I64 => write!(f, "BIGINT"),
            DataType::F64 => write!(f, "DOUBLE PRECISION"),
            DataType::Decimal => write!(f, "DECIMAL"),
            DataType::Str => write!(f, "VARCHAR"),
            DataType::Date => write!(f, "DATE"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::Uuid => write!(f, "UUID"),
            DataType::Bytea => write!(f, "BYTEA"),
            DataType::Null => write!(f, "NULL"),
        }
    }
}
