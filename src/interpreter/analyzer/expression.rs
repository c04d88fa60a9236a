use num_traits::ToPrimitive;

use crate::{
    ast::{Expr, ExprKind, Literal},
    error::SemanticError,
    interpreter::analyzer::{
        core::{AnalysisResult, Analyzer, require_assignable},
        types::Type,
    },
    util::num::INTEGER_LITERAL_BITS,
};

impl Analyzer {
    /// Analyzes an expression and records its type.
    ///
    /// Subexpressions are always visited before the expression itself. Reading
    /// a list variable without an index gives `Any`, so a whole list only
    /// fits where any value is accepted. Indexing a variable that is not a
    /// list fails.
    ///
    /// # Returns
    /// The static type of `expr`.
    pub(crate) fn analyze_expression(&mut self, expr: &Expr) -> AnalysisResult<Type> {
        let ty = match &expr.kind {
            ExprKind::Literal(literal) => analyze_literal(literal, expr.offset)?,
            ExprKind::Group(inner) => {
                if !matches!(inner.kind, ExprKind::Binary { .. }) {
                    return Err(SemanticError::InvalidGroup { offset: expr.offset });
                }
                self.analyze_expression(inner)?
            },
            ExprKind::Binary { operator,
                               left,
                               right, } => self.analyze_binary(*operator, left, right, expr.offset)?,
            ExprKind::Access { name, index } => {
                if let Some(index) = index {
                    let found = self.analyze_expression(index)?;
                    require_assignable(Type::Integer, found, index.offset)?;
                }
                let variable =
                    self.scope
                        .lookup_variable(name)
                        .ok_or_else(|| SemanticError::UnknownVariable { name:   name.clone(),
                                                                        offset: expr.offset, })?;
                let ty = match (variable.list, index) {
                    (false, Some(_)) => {
                        return Err(SemanticError::NotAList { name:   name.clone(),
                                                             offset: expr.offset, });
                    },
                    (true, None) => Type::Any,
                    _ => variable.ty,
                };
                self.analysis.set_variable(expr.id, variable);
                ty
            },
            ExprKind::Call { name, arguments } => {
                let found = arguments.iter()
                                     .map(|argument| self.analyze_expression(argument))
                                     .collect::<AnalysisResult<Vec<_>>>()?;
                let function = self.scope
                                   .lookup_function(name, arguments.len())
                                   .ok_or_else(|| SemanticError::UnknownFunction {
                                       name:   name.clone(),
                                       arity:  arguments.len(),
                                       offset: expr.offset,
                                   })?;
                for ((target, found), argument) in function.parameters.iter().zip(found).zip(arguments) {
                    require_assignable(*target, found, argument.offset)?;
                }
                let ty = function.returns;
                self.analysis.set_function(expr.id, function);
                ty
            },
            ExprKind::List(elements) => {
                for element in elements {
                    self.analyze_expression(element)?;
                }
                Type::Any
            },
        };

        self.analysis.set_type(expr.id, ty);
        Ok(ty)
    }
}

/// Types a literal.
///
/// Integer literals must fit in 32 bits and decimal literals must stay finite
/// when converted to a double, since the back end targets `int` and `double`.
fn analyze_literal(literal: &Literal, offset: usize) -> AnalysisResult<Type> {
    let ty = match literal {
        Literal::Nil => Type::Nil,
        Literal::Boolean(_) => Type::Boolean,
        Literal::Character(_) => Type::Character,
        Literal::String(_) => Type::String,
        Literal::Integer(value) => {
            if value.bits() > INTEGER_LITERAL_BITS {
                return Err(SemanticError::IntegerTooLarge { offset });
            }
            Type::Integer
        },
        Literal::Decimal(value) => {
            if !value.to_f64().is_some_and(f64::is_finite) {
                return Err(SemanticError::DecimalTooLarge { offset });
            }
            Type::Decimal
        },
    };
    Ok(ty)
}
