//! Storage-level filters produced by predicate pushdown

use crate::types::Value;

/// Access path the storage layer should take for a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAccess {
    /// Lookup through the column's index
    Index,
    /// Lookup through the secondary per-column structure
    SecondaryIndex,
    /// No index available; the filter is applied while scanning
    Scan,
}

/// An index-level filter equivalent to a row predicate.
///
/// Produced at plan time by an operator's `to_filter` and consumed by the
/// storage engine in place of per-row evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageFilter {
    /// `column = value` exact match.
    Equals {
        column: String,
        value: Value,
        access: IndexAccess,
    },
}

impl StorageFilter {
    /// Whether a stored column value satisfies this filter.
    ///
    /// Equality never matches a NULL cell: under index semantics NULL is not
    /// equal to any constant, which is exactly what row evaluation of the
    /// producing operators yields.
    pub fn matches(&self, stored: &Value) -> bool {
        match self {
            StorageFilter::Equals { value, .. } => !stored.is_null() && stored == value,
        }
    }

    /// Column this filter applies to.
    pub fn column(&self) -> &str {
        match self {
            StorageFilter::Equals { column, .. } => column,
        }
    }
}
