use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, type_error},
    },
};

/// Evaluates a logical operation between two boolean values.
///
/// Both operands must already be evaluated, so nothing short-circuits here;
/// the evaluator skips the right operand before calling this when it can.
///
/// # Parameters
/// - `op`: `And` or `Or`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Source offset for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean.
///
/// # Example
/// ```
/// use plc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let a = Value::Boolean(true);
/// let b = Value::Boolean(false);
///
/// assert_eq!(eval_logic(BinaryOperator::Or, &a, &b, 0).unwrap(), Value::Boolean(true));
/// assert_eq!(eval_logic(BinaryOperator::And, &a, &b, 0).unwrap(), Value::Boolean(false));
/// ```
pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value, offset: usize) -> EvalResult<Value> {
    let left = left.as_boolean(offset)?;
    let right = right.as_boolean(offset)?;

    match op {
        BinaryOperator::And => Ok(Value::Boolean(left && right)),
        BinaryOperator::Or => Ok(Value::Boolean(left || right)),
        other => Err(type_error(format!("'{other}' is not a logical operator"), offset)),
    }
}
