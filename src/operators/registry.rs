//! Registry mapping (operator name, argument types) to operator factories

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::types::DataType;

use super::is;
use super::signature::{BoundSignature, Signature};
use super::traits::ScalarOperator;

/// Builds a bound operator instance for a resolved call site.
pub type OperatorFactory = fn(Signature, BoundSignature) -> Box<dyn ScalarOperator>;

struct Registered {
    signature: Signature,
    factory: OperatorFactory,
}

/// Registry of scalar operator overloads.
///
/// Built once during single-threaded startup and read-only afterwards, so
/// lookups need no locking.
pub struct OperatorRegistry {
    operators: HashMap<&'static str, Vec<Registered>>,
}

impl OperatorRegistry {
    fn empty() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Create a registry with all builtin operators.
    fn new() -> Self {
        let mut registry = Self::empty();
        is::register(&mut registry);
        registry
    }

    /// Register an operator overload.
    ///
    /// Panics when an overload with the same (name, argument types) already
    /// exists: duplicate registration is a configuration error and must
    /// surface during startup, not at query time.
    pub fn register(&mut self, signature: Signature, factory: OperatorFactory) {
        let overloads = self.operators.entry(signature.name).or_default();
        assert!(
            !overloads
                .iter()
                .any(|registered| registered.signature.arg_types == signature.arg_types),
            "duplicate operator signature: {}({})",
            signature.name,
            format_types(&signature.arg_types),
        );
        tracing::debug!(name = signature.name, "registered scalar operator");
        overloads.push(Registered { signature, factory });
    }

    /// Resolve an operator call against the registered overloads.
    ///
    /// Matching is exact on argument types, with untyped NULL literals
    /// matching any declared type. Failures surface here, at plan time; an
    /// unresolved call is never evaluated lazily.
    pub fn resolve(
        &self,
        name: &str,
        arg_types: &[DataType],
    ) -> Result<Box<dyn ScalarOperator>> {
        let overloads = self
            .operators
            .get(name)
            .ok_or_else(|| Error::UnknownOperator(name.to_string()))?;
        let registered = overloads
            .iter()
            .find(|registered| registered.signature.matches(arg_types))
            .ok_or_else(|| Error::SignatureMismatch {
                name: name.to_string(),
                found: format_types(arg_types),
            })?;
        let bound = BoundSignature::from_signature(&registered.signature);
        Ok((registered.factory)(registered.signature.clone(), bound))
    }
}

static REGISTRY: LazyLock<OperatorRegistry> = LazyLock::new(OperatorRegistry::new);

/// Resolve an operator from the process-wide registry.
pub fn resolve_operator(name: &str, arg_types: &[DataType]) -> Result<Box<dyn ScalarOperator>> {
    REGISTRY.resolve(name, arg_types)
}

fn format_types(types: &[DataType]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
