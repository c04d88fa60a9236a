use std::{io::Write, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic,
                power::eval_pow,
            },
            core::{EvalResult, Interpreter},
            environment::Environment,
        },
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a binary expression.
    ///
    /// The left operand is always evaluated first. `&&` and `||`
    /// short-circuit: the right operand is skipped when the left one already
    /// decides the result, otherwise both go to [`eval_logic`]. Every other
    /// operator evaluates both operands and delegates to [`eval_binary`].
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr,
                                 env: &Rc<Environment>,
                                 offset: usize)
                                 -> EvalResult<Value> {
        let left_value = self.eval(left, env)?;

        match op {
            BinaryOperator::And | BinaryOperator::Or => {
                if left_value.as_boolean(left.offset)? == (op == BinaryOperator::Or) {
                    return Ok(left_value);
                }
                let right_value = self.eval(right, env)?;
                eval_logic(op, &left_value, &right_value, right.offset)
            },
            _ => {
                let right_value = self.eval(right, env)?;
                eval_binary(op, &left_value, &right_value, offset)
            },
        }
    }
}

/// Evaluates a binary operation between two values.
///
/// This routes the operation to a specialized handler: logical operators to
/// [`eval_logic`], equality and ordering to [`eval_comparison`], arithmetic
/// to [`eval_arithmetic`] and `^` to [`eval_pow`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Source offset for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use plc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let left = Value::Integer(BigInt::from(3));
/// let right = Value::Integer(BigInt::from(4));
///
/// let result = eval_binary(BinaryOperator::Add, &left, &right, 0);
/// assert_eq!(result.unwrap(), Value::Integer(BigInt::from(7)));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, offset: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, And, Div, Equal, Greater, Less, Mul, NotEqual, Or, Pow, Sub};

    match op {
        And | Or => eval_logic(op, left, right, offset),
        Equal | NotEqual | Less | Greater => eval_comparison(op, left, right, offset),
        Add | Sub | Mul | Div => eval_arithmetic(op, left, right, offset),
        Pow => eval_pow(left, right, offset),
    }
}
