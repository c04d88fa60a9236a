use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, type_error},
    },
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// `==` and `!=` use structural equality, so values of different types are
/// simply unequal. `<` and `>` use the natural ordering of the shared runtime
/// type, which must be one of `Integer`, `Decimal`, `Character` or `String`.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `offset`: Source offset for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
///
/// # Example
/// ```
/// use plc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let a = Value::String("apple".into());
/// let b = Value::String("banana".into());
///
/// assert_eq!(eval_comparison(BinaryOperator::Less, &a, &b, 0).unwrap(),
///            Value::Boolean(true));
/// assert!(eval_comparison(BinaryOperator::Less, &a, &Value::Nil, 0).is_err());
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       offset: usize)
                       -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Equal => left == right,
        BinaryOperator::NotEqual => left != right,
        BinaryOperator::Less => compare(left, right, offset)? == Ordering::Less,
        BinaryOperator::Greater => compare(left, right, offset)? == Ordering::Greater,
        other => {
            return Err(type_error(format!("'{other}' is not a comparison operator"), offset));
        },
    };
    Ok(Value::Boolean(result))
}

/// Orders two values of the same comparable runtime type.
fn compare(left: &Value, right: &Value, offset: usize) -> EvalResult<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
        (Value::Decimal(a), Value::Decimal(b)) => Ok(a.cmp(b)),
        (Value::Character(a), Value::Character(b)) => Ok(a.cmp(b)),
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
        _ => Err(type_error(format!("cannot compare {} with {}",
                                    left.type_name(),
                                    right.type_name()),
                            offset)),
    }
}
