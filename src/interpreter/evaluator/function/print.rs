use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Writes a value followed by a newline and returns `Nil`.
///
/// Accepts exactly one argument of any type. The value is formatted using its
/// `Display` implementation. Programs always reach `print` through a call
/// resolved by arity, but the function is public and can be handed any
/// slice, so the argument count is checked here too.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `output`: The sink to write to.
/// - `offset`: Source offset for error reporting.
///
/// # Returns
/// `Value::Nil`.
///
/// # Example
/// ```
/// use plc::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let mut output = Vec::new();
/// let list = Value::from(vec![Value::Boolean(true), Value::Nil]);
///
/// assert_eq!(print(&[list], &mut output, 0).unwrap(), Value::Nil);
/// assert_eq!(output, b"[true, null]\n");
/// assert!(print(&[], &mut output, 0).is_err());
/// ```
pub fn print(args: &[Value], output: &mut dyn Write, offset: usize) -> EvalResult<Value> {
    check_arity("print", args, 1, offset)?;

    writeln!(output, "{}", args[0]).map_err(|e| RuntimeError::OutputFailed { details: e.to_string() })?;
    Ok(Value::Nil)
}
