use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, type_error},
    },
    util::num::{decimal_pow, exponent_to_u32},
};

/// Evaluates an exponentiation operation.
///
/// The exponent must be a non-negative integer. Integer bases give exact
/// integers; decimal bases give exact decimals whose scale is the base's
/// scale times the exponent.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `offset`: Source offset for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use plc::interpreter::{evaluator::binary::power::eval_pow, value::core::Value};
///
/// let b = Value::Integer(BigInt::from(2));
/// let e = Value::Integer(BigInt::from(10));
///
/// let result = eval_pow(&b, &e, 0).unwrap();
/// assert_eq!(result, Value::Integer(BigInt::from(1024)));
/// ```
pub fn eval_pow(base: &Value, exponent: &Value, offset: usize) -> EvalResult<Value> {
    let exponent = exponent_to_u32(exponent.as_integer(offset)?, offset)?;

    match base {
        Value::Integer(b) => Ok(Value::Integer(b.pow(exponent))),
        Value::Decimal(b) => decimal_pow(b, exponent).map(Value::Decimal)
                                                     .ok_or(RuntimeError::InvalidExponent { offset }),
        other => Err(type_error(format!("cannot raise {} to a power", other.type_name()), offset)),
    }
}
