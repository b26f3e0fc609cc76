//! End-to-end coverage of the IS operator: binding, the full truth table
//! including the caller-negated forms, and constant folding.

use sql_predicate::operators::{ScalarOperator, is, resolve_operator};
use sql_predicate::types::{DataType, ExecutionContext, Expression, FunctionCall, Value};

fn is_operator() -> Box<dyn ScalarOperator> {
    resolve_operator(is::NAME, &[DataType::Bool, DataType::Bool]).unwrap()
}

fn eval(left: Value, right: Value) -> Value {
    let ctx = ExecutionContext::new();
    is_operator().evaluate(&ctx, &[left, right]).unwrap()
}

/// `x IS NOT y` is the caller wrapping `x IS y` in logical negation.
fn eval_negated(left: Value, right: Value) -> Value {
    match eval(left, right) {
        Value::Bool(b) => Value::Bool(!b),
        other => panic!("IS must return a boolean, got {other:?}"),
    }
}

#[test]
fn test_is_true() {
    assert_eq!(eval(Value::Bool(true), Value::Bool(true)), Value::Bool(true));
    assert_eq!(
        eval(Value::Bool(false), Value::Bool(true)),
        Value::Bool(false)
    );
    assert_eq!(eval(Value::Null, Value::Bool(true)), Value::Bool(false));
}

#[test]
fn test_is_false() {
    assert_eq!(
        eval(Value::Bool(true), Value::Bool(false)),
        Value::Bool(false)
    );
    assert_eq!(
        eval(Value::Bool(false), Value::Bool(false)),
        Value::Bool(true)
    );
    assert_eq!(eval(Value::Null, Value::Bool(false)), Value::Bool(false));
}

#[test]
fn test_is_not_true() {
    assert_eq!(
        eval_negated(Value::Bool(true), Value::Bool(true)),
        Value::Bool(false)
    );
    assert_eq!(
        eval_negated(Value::Bool(false), Value::Bool(true)),
        Value::Bool(true)
    );
    assert_eq!(
        eval_negated(Value::Null, Value::Bool(true)),
        Value::Bool(true)
    );
}

#[test]
fn test_is_not_false() {
    assert_eq!(
        eval_negated(Value::Bool(true), Value::Bool(false)),
        Value::Bool(true)
    );
    assert_eq!(
        eval_negated(Value::Bool(false), Value::Bool(false)),
        Value::Bool(false)
    );
    assert_eq!(
        eval_negated(Value::Null, Value::Bool(false)),
        Value::Bool(true)
    );
}

#[test]
fn test_evaluation_is_deterministic() {
    let ctx = ExecutionContext::new();
    let op = is_operator();
    let args = [Value::Bool(false), Value::Null];
    let first = op.evaluate(&ctx, &args).unwrap();
    for _ in 0..10 {
        assert_eq!(op.evaluate(&ctx, &args).unwrap(), first);
    }
}

fn constant_call(left: Value, right: Value) -> FunctionCall {
    let op = is_operator();
    FunctionCall::new(
        is::NAME,
        vec![Expression::literal(left), Expression::literal(right)],
        op.bound().clone(),
    )
}

fn normalize(left: Value, right: Value) -> Option<Expression> {
    let ctx = ExecutionContext::new();
    is_operator().normalize(&ctx, &constant_call(left, right)).unwrap()
}

#[test]
fn test_normalize_folds_constant_calls() {
    let folded = normalize(Value::Bool(true), Value::Bool(true)).unwrap();
    let Expression::Literal(literal) = folded else {
        panic!("folding must produce a literal");
    };
    assert_eq!(literal.value, Value::Bool(true));
    assert_eq!(literal.data_type, DataType::Bool);

    let folded = normalize(Value::Null, Value::Bool(true)).unwrap();
    assert_eq!(
        folded,
        Expression::Literal(sql_predicate::types::Literal::typed(
            Value::Bool(false),
            DataType::Bool
        ))
    );

    let folded = normalize(Value::Null, Value::Bool(false)).unwrap();
    assert!(matches!(
        folded,
        Expression::Literal(literal) if literal.value == Value::Bool(false)
    ));
}

#[test]
fn test_normalize_agrees_with_evaluation() {
    for left in [Value::Null, Value::Bool(false), Value::Bool(true)] {
        for right in [Value::Null, Value::Bool(false), Value::Bool(true)] {
            let folded = normalize(left.clone(), right.clone()).unwrap();
            let Expression::Literal(literal) = folded else {
                panic!("folding must produce a literal");
            };
            assert_eq!(literal.value, eval(left.clone(), right.clone()));
        }
    }
}

#[test]
fn test_normalize_leaves_column_calls_alone() {
    use sql_predicate::types::ColumnRef;

    let ctx = ExecutionContext::new();
    let op = is_operator();
    let call = FunctionCall::new(
        is::NAME,
        vec![
            Expression::Column(ColumnRef::new("flag", DataType::Bool)),
            Expression::literal(Value::Bool(true)),
        ],
        op.bound().clone(),
    );
    assert_eq!(op.normalize(&ctx, &call).unwrap(), None);
}
