//! Per-query execution context

use uuid::Uuid;

/// Context handed to operators at plan and evaluation time.
///
/// Operators are referentially transparent given their arguments; the context
/// only carries the query identity so planning decisions can be traced back
/// to the query that made them.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub query_id: Uuid,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self {
            query_id: Uuid::new_v4(),
        }
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
