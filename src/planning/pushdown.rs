//! Predicate pushdown entry point for the planner

use crate::error::Result;
use crate::operators::resolve_operator;
use crate::storage::{CapabilityTable, StorageFilter};
use crate::types::{DataType, ExecutionContext, Expression};

/// Try to replace a predicate with a storage-level filter.
///
/// Returns `Ok(None)` whenever the predicate cannot be pushed down (wrong
/// expression shape, NULL constant, or a column type without an equality
/// capability); the planner then evaluates it row by row. Binding
/// failures propagate: an unresolvable call is a query compile error, not a
/// pushdown miss.
pub fn push_down(
    ctx: &ExecutionContext,
    predicate: &Expression,
    capabilities: &CapabilityTable,
) -> Result<Option<StorageFilter>> {
    let Expression::Function(call) = predicate else {
        return Ok(None);
    };
    let arg_types: Vec<DataType> = call.args.iter().map(Expression::value_type).collect();
    let operator = resolve_operator(&call.name, &arg_types)?;
    let filter = operator.to_filter(call, capabilities);
    match &filter {
        Some(filter) => tracing::debug!(
            query_id = %ctx.query_id,
            column = filter.column(),
            "predicate pushed down to storage filter"
        ),
        None => tracing::trace!(
            query_id = %ctx.query_id,
            operator = %call.name,
            "predicate stays row-evaluated"
        ),
    }
    Ok(filter)
}
