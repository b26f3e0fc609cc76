//! Operator signatures and call-site binding

use crate::types::DataType;

/// Declared shape of a scalar operator overload.
///
/// Identity is (name, argument types); the registry rejects a second
/// registration with the same identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub arg_types: Vec<DataType>,
    pub return_type: DataType,
    /// Deterministic operators may be constant-folded at plan time.
    pub deterministic: bool,
}

impl Signature {
    /// Exact-match check against call-site argument types.
    ///
    /// An untyped NULL literal (`DataType::Null`) matches any declared type;
    /// no other widening is performed.
    pub fn matches(&self, actual: &[DataType]) -> bool {
        self.arg_types.len() == actual.len()
            && self
                .arg_types
                .iter()
                .zip(actual)
                .all(|(declared, actual)| declared == actual || *actual == DataType::Null)
    }
}

/// A signature resolved against an actual call site.
///
/// With exact-match resolution the bound types are the declared types; the
/// type is kept separate so call sites never depend on declaration details
/// like the operator name or feature flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundSignature {
    pub arg_types: Vec<DataType>,
    pub return_type: DataType,
}

impl BoundSignature {
    pub fn from_signature(signature: &Signature) -> Self {
        Self {
            arg_types: signature.arg_types.clone(),
            return_type: signature.return_type.clone(),
        }
    }
}
