use std::{
    io::{self, Stdout, Write},
    rc::Rc,
};

use log::debug;

use crate::{
    ast::{Expr, ExprKind, Source},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            environment::{Callable, Environment, FunctionValue, Variable},
            function::core::define_builtins,
        },
        value::core::Value,
    },
    util::num::checked_index,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Return` unwinds statement execution up to the nearest function call,
/// which turns it into the call's result.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `RETURN` was executed with this value.
    Return(Value),
}

/// Stores the runtime evaluation state.
///
/// Holds the global environment and the sink `print` writes to. Scopes below
/// the globals are passed explicitly through every evaluation call and are
/// dropped when the block that created them ends.
///
/// ## Usage
///
/// ```
/// use num_bigint::BigInt;
/// use plc::interpreter::{
///     evaluator::core::Interpreter, lexer::tokenize, parser::core::parse, value::core::Value,
/// };
///
/// let source = parse(&tokenize(r#"FUN main(): Integer DO print("hi"); RETURN 3; END"#).unwrap())
///     .unwrap();
///
/// let mut interpreter = Interpreter::with_output(Vec::new());
/// let exit = interpreter.run(&source).unwrap();
///
/// assert_eq!(exit, Value::Integer(BigInt::from(3)));
/// assert_eq!(interpreter.output(), b"hi\n");
/// ```
pub struct Interpreter<W: Write = Stdout> {
    globals: Rc<Environment>,
    output:  W,
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter<Stdout> {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `output`.
    ///
    /// The builtins are defined in the global environment.
    #[must_use]
    pub fn with_output(output: W) -> Self {
        let globals = Environment::root();
        define_builtins(&globals);
        Self { globals,
               output }
    }

    /// The global environment.
    #[must_use]
    pub const fn globals(&self) -> &Rc<Environment> {
        &self.globals
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Runs a program.
    ///
    /// Declares every global in order, then every function, then calls `main`
    /// with no arguments.
    ///
    /// # Parameters
    /// - `source`: The program, normally analyzed beforehand.
    ///
    /// # Returns
    /// The value `main` returned, which becomes the exit value.
    pub fn run(&mut self, source: &Source) -> EvalResult<Value> {
        let globals = Rc::clone(&self.globals);

        for global in &source.globals {
            let value = match &global.value {
                Some(value) => self.eval(value, &globals)?,
                None => Value::Nil,
            };
            globals.define_variable(Variable::new(&global.name, global.mutable, value))
                   .ok_or_else(|| RuntimeError::AlreadyDefined { name:   global.name.clone(),
                                                                 offset: global.offset, })?;
        }

        for function in &source.functions {
            let value = FunctionValue { name:     function.name.clone(),
                                        arity:    function.parameters.len(),
                                        callable: Callable::User { definition: Rc::new(function.clone()),
                                                                   closure:    Rc::downgrade(&globals), }, };
            globals.define_function(value)
                   .ok_or_else(|| RuntimeError::AlreadyDefined { name:   function.name.clone(),
                                                                 offset: function.offset, })?;
        }

        let offset = source.functions
                           .iter()
                           .find(|f| f.name == "main")
                           .map_or(0, |f| f.offset);
        let result = self.call_function("main", Vec::new(), &globals, offset)?;
        debug!("main returned {result}");
        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands and
    /// arguments are evaluated left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The innermost scope.
    pub fn eval(&mut self, expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(literal.into()),
            ExprKind::Group(inner) => self.eval(inner, env),
            ExprKind::Binary { operator,
                               left,
                               right, } => self.eval_binary_op(*operator, left, right, env, expr.offset),
            ExprKind::Access { name, index } => {
                let variable = lookup_variable(env, name, expr.offset)?;
                match index {
                    None => Ok(variable.value().clone()),
                    Some(index) => {
                        let position = self.eval(index, env)?;
                        let list = variable.value().as_list(expr.offset)?;
                        let list = list.borrow();
                        let position = checked_index(position.as_integer(index.offset)?,
                                                     list.len(),
                                                     index.offset)?;
                        Ok(list[position].clone())
                    },
                }
            },
            ExprKind::Call { name, arguments } => {
                let mut values = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(self.eval(argument, env)?);
                }
                self.call_function(name, values, env, expr.offset)
            },
            ExprKind::List(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval(element, env)?);
                }
                Ok(values.into())
            },
        }
    }
}

/// Resolves a variable, failing with `UnknownVariable`.
pub(crate) fn lookup_variable(env: &Environment,
                              name: &str,
                              offset: usize)
                              -> EvalResult<Rc<Variable>> {
    env.lookup_variable(name)
       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                      offset })
}
