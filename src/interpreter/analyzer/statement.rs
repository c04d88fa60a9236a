use log::trace;

use crate::{
    ast::{Case, Expr, ExprKind, Function, Global, Statement},
    error::SemanticError,
    interpreter::analyzer::{
        core::{AnalysisResult, Analyzer, require_assignable, resolve_type, return_type},
        mangle::mangle,
        scope::{FunctionSignature, Variable},
        types::Type,
    },
};

impl Analyzer {
    /// Analyzes a global declaration and defines it in the root scope.
    ///
    /// Annotated globals must have an initializer whose type the annotation
    /// accepts. Unannotated globals take the initializer's type. A `LIST`
    /// global checks every element against its element type.
    pub(crate) fn analyze_global(&mut self, global: &Global) -> AnalysisResult<()> {
        let declared = global.type_name
                             .as_deref()
                             .map(|name| resolve_type(name, global.offset))
                             .transpose()?;

        let ty = match &global.value {
            Some(Expr { id,
                        kind: ExprKind::List(elements),
                        .. }) => {
                let element_ty = declared.unwrap_or(Type::Any);
                for element in elements {
                    let found = self.analyze_expression(element)?;
                    require_assignable(element_ty, found, element.offset)?;
                }
                self.analysis.set_type(*id, element_ty);
                element_ty
            },
            Some(value) => {
                let found = self.analyze_expression(value)?;
                match declared {
                    Some(target) if !target.accepts(found) => {
                        return Err(SemanticError::VariableMismatch { name: global.name.clone(),
                                                                     target,
                                                                     found,
                                                                     offset: global.offset });
                    },
                    Some(target) => target,
                    None => found,
                }
            },
            None => declared.ok_or_else(|| SemanticError::MissingDeclarationType {
                                name:   global.name.clone(),
                                offset: global.offset,
                            })?,
        };

        let variable = Variable { name: global.name.clone(),
                                  runtime_name: mangle(&global.name),
                                  ty,
                                  mutable: global.mutable,
                                  list: global.is_list() };
        let variable = self.scope
                           .define_variable(variable)
                           .ok_or_else(|| already_defined(&global.name, global.offset))?;
        self.analysis.set_variable(global.id, variable);
        Ok(())
    }

    /// Defines a function in the root scope and analyzes its body.
    ///
    /// The function is defined before its body is visited, so it may call
    /// itself. Parameters share the body's scope.
    pub(crate) fn analyze_function(&mut self, function: &Function) -> AnalysisResult<()> {
        let parameters = function.parameters
                                 .iter()
                                 .map(|p| resolve_type(&p.type_name, p.offset))
                                 .collect::<AnalysisResult<Vec<_>>>()?;
        let returns = return_type(function)?;

        let signature = FunctionSignature { name: function.name.clone(),
                                            runtime_name: mangle(&function.name),
                                            parameters,
                                            returns };
        let signature = self.scope
                            .define_function(signature)
                            .ok_or_else(|| already_defined(&function.name, function.offset))?;
        self.analysis.set_function(function.id, signature.clone());

        trace!("analyzing function {}/{}", function.name, signature.arity());
        self.returns = returns;
        self.locals.clear();

        self.with_scope(|analyzer| {
                for (parameter, ty) in function.parameters.iter().zip(&signature.parameters) {
                    let variable = Variable { name:         parameter.name.clone(),
                                              runtime_name: analyzer.locals.fresh(&parameter.name),
                                              ty:           *ty,
                                              mutable:      true,
                                              list:         false, };
                    let variable =
                        analyzer.scope
                                .define_variable(variable)
                                .ok_or_else(|| already_defined(&parameter.name, parameter.offset))?;
                    analyzer.analysis.set_variable(parameter.id, variable);
                }
                analyzer.analyze_statements(&function.statements)
            })
    }

    /// Analyzes statements in a fresh scope.
    fn analyze_block(&mut self, statements: &[Statement]) -> AnalysisResult<()> {
        self.with_scope(|analyzer| analyzer.analyze_statements(statements))
    }

    fn analyze_statements(&mut self, statements: &[Statement]) -> AnalysisResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.analyze_statement(statement))
    }

    /// Analyzes a single statement.
    pub(crate) fn analyze_statement(&mut self, statement: &Statement) -> AnalysisResult<()> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.analyze_expression(expr)?;
            },
            Statement::Declaration { id,
                                     name,
                                     type_name,
                                     value,
                                     offset, } => {
                let declared = type_name.as_deref()
                                        .map(|name| resolve_type(name, *offset))
                                        .transpose()?;
                let found = value.as_ref()
                                 .map(|value| self.analyze_expression(value))
                                 .transpose()?;
                let aliased = value.as_ref().and_then(|value| self.list_element(value));

                let (ty, list) = match (declared, found, aliased) {
                    (None, _, Some(element)) => (element, true),
                    (Some(target), Some(found), _) => {
                        let at = value.as_ref().map_or(*offset, |value| value.offset);
                        require_assignable(target, found, at)?;
                        (target, false)
                    },
                    (Some(ty), None, _) | (None, Some(ty), _) => (ty, false),
                    (None, None, _) => {
                        return Err(SemanticError::MissingDeclarationType { name:   name.clone(),
                                                                           offset: *offset, });
                    },
                };

                let variable = Variable { name: name.clone(),
                                          runtime_name: self.locals.fresh(name),
                                          ty,
                                          mutable: true,
                                          list };
                let variable = self.scope
                                   .define_variable(variable)
                                   .ok_or_else(|| already_defined(name, *offset))?;
                self.analysis.set_variable(*id, variable);
            },
            Statement::Assignment { receiver,
                                    value,
                                    offset, } => {
                if !matches!(receiver.kind, ExprKind::Access { .. }) {
                    return Err(SemanticError::InvalidReceiver { offset: *offset });
                }
                let target = self.analyze_expression(receiver)?;
                let found = self.analyze_expression(value)?;
                match (self.list_element(receiver), self.list_element(value)) {
                    (Some(target), Some(element)) if target == element => {},
                    (Some(target), Some(element)) => {
                        return Err(SemanticError::NotAssignable { target,
                                                                  found: element,
                                                                  offset: value.offset });
                    },
                    (Some(_), None) => return Err(SemanticError::ListRequired { offset: value.offset }),
                    (None, _) => require_assignable(target, found, value.offset)?,
                }
            },
            Statement::If { condition,
                            then_statements,
                            else_statements,
                            offset, } => {
                self.analyze_condition(condition)?;
                if then_statements.is_empty() {
                    return Err(SemanticError::EmptyBranch { offset: *offset });
                }
                self.analyze_block(then_statements)?;
                if !else_statements.is_empty() {
                    self.analyze_block(else_statements)?;
                }
            },
            Statement::Switch { condition, cases, .. } => {
                let ty = self.analyze_expression(condition)?;
                for case in cases {
                    self.analyze_case(case, ty)?;
                }
            },
            Statement::While { condition,
                               statements,
                               .. } => {
                self.analyze_condition(condition)?;
                self.analyze_block(statements)?;
            },
            Statement::Return { value, .. } => {
                let found = self.analyze_expression(value)?;
                require_assignable(self.returns, found, value.offset)?;
            },
        }
        Ok(())
    }

    /// A `CASE` value must have exactly the type of the switch condition.
    fn analyze_case(&mut self, case: &Case, condition: Type) -> AnalysisResult<()> {
        self.with_scope(|analyzer| {
                if let Some(value) = &case.value {
                    let found = analyzer.analyze_expression(value)?;
                    if found != condition {
                        return Err(SemanticError::NotAssignable { target: condition,
                                                                  found,
                                                                  offset: value.offset });
                    }
                }
                analyzer.analyze_statements(&case.statements)
            })
    }

    /// The element type of `expr` if it names a list variable without
    /// indexing it.
    ///
    /// Such an access is how a list is aliased by `LET` or replaced by
    /// assignment. Anywhere else a bare list only fits where `Any` is
    /// expected.
    pub(crate) fn list_element(&self, expr: &Expr) -> Option<Type> {
        let ExprKind::Access { name, index: None } = &expr.kind else {
            return None;
        };
        self.scope
            .lookup_variable(name)
            .filter(|variable| variable.list)
            .map(|variable| variable.ty)
    }

    fn analyze_condition(&mut self, condition: &Expr) -> AnalysisResult<()> {
        let found = self.analyze_expression(condition)?;
        require_assignable(Type::Boolean, found, condition.offset)
    }
}

fn already_defined(name: &str, offset: usize) -> SemanticError {
    SemanticError::AlreadyDefined { name: name.to_string(),
                                    offset }
}
