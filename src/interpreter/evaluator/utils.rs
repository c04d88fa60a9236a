use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Checks that a builtin received exactly `expected` arguments.
///
/// Calls are resolved by name and arity, so this only fails when a builtin is
/// invoked directly with the wrong slice.
///
/// # Example
/// ```
/// use plc::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// assert!(check_arity("print", &[Value::Nil], 1, 0).is_ok());
/// assert!(check_arity("print", &[], 1, 0).is_err());
/// ```
pub fn check_arity(name: &str, args: &[Value], expected: usize, offset: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                            arity: args.len(),
                                            offset })
    }
}
