use crate::{
    ast::{BinaryOperator, Expr},
    error::SemanticError,
    interpreter::analyzer::{
        core::{AnalysisResult, Analyzer},
        types::Type,
    },
};

impl Analyzer {
    /// Analyzes a binary expression.
    ///
    /// Both operands are analyzed left to right before the operator is
    /// checked.
    ///
    /// # Returns
    /// The result type of the operation.
    pub(crate) fn analyze_binary(&mut self,
                                 operator: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr,
                                 offset: usize)
                                 -> AnalysisResult<Type> {
        let left = self.analyze_expression(left)?;
        let right = self.analyze_expression(right)?;

        binary_result_type(operator, left, right).ok_or_else(|| {
                                                     SemanticError::InvalidOperands {
                                                         operator: operator.to_string(),
                                                         left,
                                                         right,
                                                         offset,
                                                     }
                                                 })
    }
}

/// Computes the result type of `left operator right`.
///
/// - `&&`, `||`: both `Boolean`, result `Boolean`.
/// - `==`, `!=`, `<`, `>`: the same comparable type on both sides, result
///   `Boolean`.
/// - `+`: `String` if either side is `String`, otherwise like `-`.
/// - `-`, `*`, `/`: both `Integer` or both `Decimal`, result that type.
/// - `^`: `Integer` or `Decimal` raised to an `Integer`, result the base type.
///
/// # Returns
/// `None` if the operator does not accept these operand types.
///
/// # Example
/// ```
/// use plc::{
///     ast::BinaryOperator,
///     interpreter::analyzer::{binary::binary_result_type, types::Type},
/// };
///
/// assert_eq!(binary_result_type(BinaryOperator::Add, Type::Integer, Type::String),
///            Some(Type::String));
/// assert_eq!(binary_result_type(BinaryOperator::Add, Type::Integer, Type::Decimal), None);
/// assert_eq!(binary_result_type(BinaryOperator::Pow, Type::Decimal, Type::Integer),
///            Some(Type::Decimal));
/// ```
#[must_use]
pub fn binary_result_type(operator: BinaryOperator, left: Type, right: Type) -> Option<Type> {
    let numeric = |ty: Type| matches!(ty, Type::Integer | Type::Decimal);

    match operator {
        BinaryOperator::And | BinaryOperator::Or => {
            (left == Type::Boolean && right == Type::Boolean).then_some(Type::Boolean)
        },
        BinaryOperator::Equal
        | BinaryOperator::NotEqual
        | BinaryOperator::Less
        | BinaryOperator::Greater => (left.is_comparable() && left == right).then_some(Type::Boolean),
        BinaryOperator::Add if left == Type::String || right == Type::String => Some(Type::String),
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            (numeric(left) && left == right).then_some(left)
        },
        BinaryOperator::Pow => (numeric(left) && right == Type::Integer).then_some(left),
    }
}
