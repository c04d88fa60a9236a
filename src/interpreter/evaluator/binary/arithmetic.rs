use num_traits::Zero;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, type_error},
    },
    util::num::divide_half_even,
};

/// Evaluates `+`, `-`, `*` or `/`.
///
/// `+` concatenates the printed forms of both operands when either one is a
/// string. Otherwise both operands must be integers or both decimals.
/// Integer division truncates toward zero; decimal division keeps the
/// dividend's scale and rounds half to even. Dividing by zero fails.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Source offset for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` with the result.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use num_bigint::BigInt;
/// use plc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_arithmetic, value::core::Value},
/// };
///
/// let five = Value::Integer(BigInt::from(5));
/// let two = Value::Integer(BigInt::from(2));
/// assert_eq!(eval_arithmetic(BinaryOperator::Div, &five, &two, 0).unwrap(),
///            Value::Integer(BigInt::from(2)));
///
/// let text = Value::String("a".into());
/// assert_eq!(eval_arithmetic(BinaryOperator::Add, &five, &text, 0).unwrap(),
///            Value::String("5a".into()));
///
/// let d = |s: &str| Value::Decimal(BigDecimal::from_str(s).unwrap());
/// assert_eq!(eval_arithmetic(BinaryOperator::Div, &d("5.0"), &d("2.0"), 0).unwrap(),
///            d("2.5"));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       offset: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    if op == Add
       && (matches!(left, Value::String(_)) || matches!(right, Value::String(_)))
    {
        return Ok(Value::String(format!("{left}{right}")));
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => match op {
            Add => Ok(Value::Integer(a + b)),
            Sub => Ok(Value::Integer(a - b)),
            Mul => Ok(Value::Integer(a * b)),
            Div if b.is_zero() => Err(RuntimeError::DivisionByZero { offset }),
            Div => Ok(Value::Integer(a / b)),
            other => Err(not_arithmetic(other, offset)),
        },
        (Value::Decimal(a), Value::Decimal(b)) => match op {
            Add => Ok(Value::Decimal(a + b)),
            Sub => Ok(Value::Decimal(a - b)),
            Mul => Ok(Value::Decimal(a * b)),
            Div => divide_half_even(a, b).map(Value::Decimal)
                                         .ok_or(RuntimeError::DivisionByZero { offset }),
            other => Err(not_arithmetic(other, offset)),
        },
        _ => Err(type_error(format!("cannot apply '{op}' to {} and {}",
                                    left.type_name(),
                                    right.type_name()),
                            offset)),
    }
}

fn not_arithmetic(op: BinaryOperator, offset: usize) -> RuntimeError {
    type_error(format!("'{op}' is not an arithmetic operator"), offset)
}
