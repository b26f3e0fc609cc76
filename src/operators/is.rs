//! The `IS` operator: boolean equality that treats NULL as a comparable
//! value.
//!
//! Backs the SQL surface forms `x IS TRUE` and `x IS FALSE`; the parser maps
//! `IS NOT TRUE` / `IS NOT FALSE` to this operator wrapped in logical
//! negation. Unlike ternary `=`, a NULL operand does not poison the result:
//! `NULL IS TRUE` is false, not NULL.

use crate::error::Result;
use crate::storage::{CapabilityTable, StorageFilter};
use crate::types::{DataType, ExecutionContext, Expression, FunctionCall, Value};

use super::registry::OperatorRegistry;
use super::signature::{BoundSignature, Signature};
use super::traits::ScalarOperator;

pub const NAME: &str = "is";

#[derive(Debug)]
pub struct IsOperator {
    signature: Signature,
    bound: BoundSignature,
}

impl IsOperator {
    fn declared() -> Signature {
        Signature {
            name: NAME,
            arg_types: vec![DataType::Bool, DataType::Bool],
            return_type: DataType::Bool,
            deterministic: true,
        }
    }

    fn bind(signature: Signature, bound: BoundSignature) -> Box<dyn ScalarOperator> {
        Box::new(Self { signature, bound })
    }
}

impl ScalarOperator for IsOperator {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn bound(&self) -> &BoundSignature {
        &self.bound
    }

    fn evaluate(&self, _ctx: &ExecutionContext, args: &[Value]) -> Result<Value> {
        assert!(args.len() == 2, "IS evaluates exactly two arguments");
        let left = &args[0];
        let right = &args[1];

        // A NULL right-hand side turns the call into an IS NULL test.
        if right.is_null() {
            return Ok(Value::Bool(left.is_null()));
        }
        if left.is_null() {
            return Ok(Value::Bool(false));
        }
        Ok(Value::Bool(left == right))
    }

    fn to_filter(
        &self,
        call: &FunctionCall,
        capabilities: &CapabilityTable,
    ) -> Option<StorageFilter> {
        let [Expression::Column(column), Expression::Literal(literal)] = call.args.as_slice()
        else {
            return None;
        };

        // An equality lookup cannot answer IS NULL; leave it to row
        // evaluation.
        if literal.value.is_null() {
            return None;
        }

        let Some(equality) = capabilities.equality(&column.value_type) else {
            tracing::trace!(
                column = %column.column,
                value_type = %column.value_type,
                "no equality capability; predicate stays row-evaluated"
            );
            return None;
        };

        Some(equality.equals_filter(
            &column.column,
            &literal.value,
            column.has_secondary_index,
            column.is_indexed(),
        ))
    }
}

/// Register the IS operator.
pub fn register(registry: &mut OperatorRegistry) {
    registry.register(IsOperator::declared(), IsOperator::bind);
}
