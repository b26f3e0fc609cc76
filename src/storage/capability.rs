//! Per-type equality-filter capabilities

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::{DataType, Value};

use super::filter::{IndexAccess, StorageFilter};

/// Capability to turn `column = value` into a storage filter.
///
/// Attached per data type. A type without the capability cannot serve
/// equality predicates from an index, and predicates over its columns stay
/// row-evaluated.
pub trait EqualityFilter: Send + Sync {
    /// Build the filter for `column = value`, choosing the access path from
    /// the column's index metadata.
    fn equals_filter(
        &self,
        column: &str,
        value: &Value,
        has_secondary_index: bool,
        is_indexed: bool,
    ) -> StorageFilter;
}

/// Term-filter capability shared by the scalar key types.
struct TermEquality;

impl EqualityFilter for TermEquality {
    fn equals_filter(
        &self,
        column: &str,
        value: &Value,
        has_secondary_index: bool,
        is_indexed: bool,
    ) -> StorageFilter {
        let access = if is_indexed {
            IndexAccess::Index
        } else if has_secondary_index {
            IndexAccess::SecondaryIndex
        } else {
            IndexAccess::Scan
        };
        StorageFilter::Equals {
            column: column.to_string(),
            value: value.clone(),
            access,
        }
    }
}

/// Type-to-capability table, built once at startup and immutable afterwards.
pub struct CapabilityTable {
    equality: HashMap<DataType, &'static dyn EqualityFilter>,
}

impl CapabilityTable {
    fn new() -> Self {
        static TERM: TermEquality = TermEquality;
        let mut equality: HashMap<DataType, &'static dyn EqualityFilter> = HashMap::new();
        // Types whose stored representation is exact, so an index key equals
        // the value it was built from. F64 is excluded (NaN breaks equality),
        // Decimal is excluded (index keys do not normalize scale), Bytea is
        // not indexed at all.
        for data_type in [
            DataType::Bool,
            DataType::I32,
            DataType::I64,
            DataType::Str,
            DataType::Date,
            DataType::Timestamp,
            DataType::Uuid,
        ] {
            equality.insert(data_type, &TERM);
        }
        Self { equality }
    }

    /// Equality capability for a type, if the type supports indexed equality
    /// lookups.
    pub fn equality(&self, data_type: &DataType) -> Option<&dyn EqualityFilter> {
        self.equality.get(data_type).copied()
    }
}

static CAPABILITIES: LazyLock<CapabilityTable> = LazyLock::new(CapabilityTable::new);

/// Process-wide capability table.
pub fn capabilities() -> &'static CapabilityTable {
    &CAPABILITIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_presence() {
        let table = capabilities();
        for supported in [DataType::Bool, DataType::I64, DataType::Str, DataType::Uuid] {
            assert!(table.equality(&supported).is_some(), "{supported}");
        }
        for unsupported in [DataType::F64, DataType::Decimal, DataType::Bytea, DataType::Null] {
            assert!(table.equality(&unsupported).is_none(), "{unsupported}");
        }
    }

    #[test]
    fn test_access_path_selection() {
        let equality = capabilities().equality(&DataType::I64).unwrap();
        let value = Value::I64(7);

        let indexed = equality.equals_filter("id", &value, false, true);
        assert_eq!(
            indexed,
            StorageFilter::Equals {
                column: "id".to_string(),
                value: value.clone(),
                access: IndexAccess::Index,
            }
        );

        let secondary = equality.equals_filter("id", &value, true, false);
        assert!(matches!(
            secondary,
            StorageFilter::Equals {
                access: IndexAccess::SecondaryIndex,
                ..
            }
        ));

        let scan = equality.equals_filter("id", &value, false, false);
        assert!(matches!(
            scan,
            StorageFilter::Equals {
                access: IndexAccess::Scan,
                ..
            }
        ));
    }

    #[test]
    fn test_index_takes_precedence_over_secondary() {
        let equality = capabilities().equality(&DataType::Str).unwrap();
        let filter = equality.equals_filter("name", &Value::Str("a".to_string()), true, true);
        assert!(matches!(
            filter,
            StorageFilter::Equals {
                access: IndexAccess::Index,
                ..
            }
        ));
    }
}
