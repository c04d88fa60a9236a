use std::{io::Write, rc::Rc};

use log::trace;

use crate::{
    ast::{Case, Expr, ExprKind, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter, lookup_variable},
            environment::{Environment, Variable},
        },
        value::core::{Value, type_error},
    },
    util::num::checked_index,
};

impl<W: Write> Interpreter<W> {
    /// Executes statements in order inside a fresh child of `env`.
    ///
    /// The child scope is dropped when this returns, whether the block ran to
    /// the end, hit a `RETURN` or failed.
    pub fn exec_block(&mut self, statements: &[Statement], env: &Rc<Environment>) -> EvalResult<Flow> {
        let scope = Environment::child(env);
        trace!("entered block scope");
        self.exec_statements(statements, &scope)
    }

    /// Executes statements in order in `env` itself, stopping at the first
    /// `RETURN`.
    pub(crate) fn exec_statements(&mut self,
                                  statements: &[Statement],
                                  env: &Rc<Environment>)
                                  -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.exec_statement(statement, env)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `env`: The innermost scope.
    ///
    /// # Returns
    /// [`Flow::Return`] if a `RETURN` ran, [`Flow::Normal`] otherwise.
    pub fn exec_statement(&mut self, statement: &Statement, env: &Rc<Environment>) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval(expr, env)?;
            },
            Statement::Declaration { name,
                                     value,
                                     offset,
                                     .. } => {
                let value = match value {
                    Some(value) => self.eval(value, env)?,
                    None => Value::Nil,
                };
                env.define_variable(Variable::new(name, true, value))
                   .ok_or_else(|| RuntimeError::AlreadyDefined { name:   name.clone(),
                                                                 offset: *offset, })?;
            },
            Statement::Assignment { receiver,
                                    value,
                                    offset, } => self.exec_assignment(receiver, value, env, *offset)?,
            Statement::If { condition,
                            then_statements,
                            else_statements,
                            .. } => {
                let branch = if self.eval(condition, env)?.as_boolean(condition.offset)? {
                    then_statements
                } else {
                    else_statements
                };
                if !branch.is_empty() {
                    return self.exec_block(branch, env);
                }
            },
            Statement::Switch { condition, cases, .. } => {
                let condition = self.eval(condition, env)?;
                if let Some(case) = self.select_case(&condition, cases, env)? {
                    return self.exec_block(&case.statements, env);
                }
            },
            Statement::While { condition,
                               statements,
                               .. } => {
                while self.eval(condition, env)?.as_boolean(condition.offset)? {
                    if let Flow::Return(value) = self.exec_block(statements, env)? {
                        return Ok(Flow::Return(value));
                    }
                }
            },
            Statement::Return { value, .. } => return Ok(Flow::Return(self.eval(value, env)?)),
        }
        Ok(Flow::Normal)
    }

    /// Picks the first case whose value equals `condition`, or the `DEFAULT`
    /// case when none does.
    ///
    /// Case values are evaluated in order until one matches.
    fn select_case<'c>(&mut self,
                       condition: &Value,
                       cases: &'c [Case],
                       env: &Rc<Environment>)
                       -> EvalResult<Option<&'c Case>> {
        let mut default = None;
        for case in cases {
            match &case.value {
                Some(value) => {
                    if self.eval(value, env)? == *condition {
                        return Ok(Some(case));
                    }
                },
                None => default = default.or(Some(case)),
            }
        }
        Ok(default)
    }

    /// Stores a value into a variable or a list element.
    ///
    /// The target variable must be mutable. Indexed assignment bounds-checks
    /// the index and then mutates the list in place, so every binding of the
    /// same list sees the change. Storing a list into itself, directly or
    /// through nested lists, is rejected.
    fn exec_assignment(&mut self,
                       receiver: &Expr,
                       value: &Expr,
                       env: &Rc<Environment>,
                       offset: usize)
                       -> EvalResult<()> {
        let ExprKind::Access { name, index } = &receiver.kind else {
            return Err(type_error("assignment target must be a variable", offset));
        };

        let variable = lookup_variable(env, name, receiver.offset)?;
        if !variable.mutable {
            return Err(RuntimeError::ImmutableAssignment { name: name.clone(),
                                                           offset });
        }

        match index {
            None => {
                let value = self.eval(value, env)?;
                variable.set(value);
            },
            Some(index) => {
                let position = self.eval(index, env)?;
                let value = self.eval(value, env)?;
                let list = variable.value().as_list(receiver.offset)?;
                if value.contains_list(&list) {
                    return Err(RuntimeError::CyclicList { name: name.clone(),
                                                          offset });
                }
                let mut list = list.borrow_mut();
                let position = checked_index(position.as_integer(index.offset)?,
                                             list.len(),
                                             index.offset)?;
                list[position] = value;
            },
        }
        Ok(())
    }
}
