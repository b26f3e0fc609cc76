//! Core contract for scalar operators

use crate::error::Result;
use crate::storage::{CapabilityTable, StorageFilter};
use crate::types::{ExecutionContext, Expression, FunctionCall, Literal, Value};

use super::signature::{BoundSignature, Signature};

/// A scalar operator bound to a concrete call site.
///
/// Implementations are immutable and shared across concurrently executing
/// queries; both methods below are pure functions of their inputs.
pub trait ScalarOperator: Send + Sync + std::fmt::Debug {
    /// The declared signature this operator was registered under.
    fn signature(&self) -> &Signature;

    /// The signature resolved against the call site.
    fn bound(&self) -> &BoundSignature;

    /// Evaluate the operator over one row's argument values.
    ///
    /// `args` holds one (possibly NULL) value per declared argument. The
    /// binder guarantees arity and argument types before execution starts;
    /// a violation here is a contract failure of the binder, not a runtime
    /// error to recover from.
    fn evaluate(&self, ctx: &ExecutionContext, args: &[Value]) -> Result<Value>;

    /// Attempt to push this call down to a storage-level filter.
    ///
    /// `None` means "not supported" and the planner falls back to row
    /// evaluation; it is an expected outcome on the hot planning path, never
    /// a fault. A returned filter must accept exactly the rows for which
    /// `evaluate` returns true; over-matching is a correctness bug, not an
    /// optimization.
    fn to_filter(
        &self,
        _call: &FunctionCall,
        _capabilities: &CapabilityTable,
    ) -> Option<StorageFilter> {
        None
    }

    /// Fold a fully-constant call into a literal.
    ///
    /// Returns `None` when any argument is non-constant or the operator is
    /// not deterministic; the folded literal carries the bound return type.
    fn normalize(&self, ctx: &ExecutionContext, call: &FunctionCall) -> Result<Option<Expression>> {
        if !self.signature().deterministic {
            return Ok(None);
        }
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            match arg {
                Expression::Literal(literal) => args.push(literal.value.clone()),
                _ => return Ok(None),
            }
        }
        let value = self.evaluate(ctx, &args)?;
        Ok(Some(Expression::Literal(Literal::typed(
            value,
            self.bound().return_type.clone(),
        ))))
    }
}
