use std::{io::Write, rc::Rc};

use log::trace;

use crate::{
    ast::Function,
    error::RuntimeError,
    interpreter::{
        analyzer::{scope::FunctionSignature, types::Type},
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            environment::{Callable, Environment, FunctionValue, NativeFn, Variable},
            function::print,
        },
        value::core::Value,
    },
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a source name,
/// - the runtime name the back end emits,
/// - the parameter types and return type the analyzer checks calls against,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                runtime_name: $runtime_name:literal,
                parameters: [$($parameter:expr),* $(,)?],
                returns: $returns:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:         &'static str,
            runtime_name: &'static str,
            parameters:   &'static [Type],
            returns:      Type,
            func:         NativeFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name,
                             runtime_name: $runtime_name,
                             parameters: &[$($parameter),*],
                             returns: $returns,
                             func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => {
        runtime_name: "System.out.println",
        parameters: [Type::Any],
        returns: Type::Nil,
        func: print::print,
    },
}

/// The analyzer's view of every builtin.
///
/// # Example
/// ```
/// use plc::interpreter::evaluator::function::core::builtin_signatures;
///
/// let print = &builtin_signatures()[0];
/// assert_eq!(print.name, "print");
/// assert_eq!(print.runtime_name, "System.out.println");
/// assert_eq!(print.arity(), 1);
/// ```
#[must_use]
pub fn builtin_signatures() -> Vec<FunctionSignature> {
    BUILTIN_TABLE.iter()
                 .map(|builtin| FunctionSignature { name:         builtin.name.to_string(),
                                                    runtime_name: builtin.runtime_name
                                                                         .to_string(),
                                                    parameters:   builtin.parameters.to_vec(),
                                                    returns:      builtin.returns, })
                 .collect()
}

/// Binds every builtin in `env`.
pub(crate) fn define_builtins(env: &Environment) {
    for builtin in BUILTIN_TABLE {
        env.define_function(FunctionValue { name:     builtin.name.to_string(),
                                            arity:    builtin.parameters.len(),
                                            callable: Callable::Native(builtin.func), });
    }
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a function call.
    ///
    /// The function is resolved by name and argument count, starting from
    /// `env`. Builtins run directly; user-defined functions run in a new
    /// scope below the one they were defined in.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Evaluated argument values.
    /// - `env`: The scope the call appears in.
    /// - `offset`: Source offset for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup fails.
    pub fn call_function(&mut self,
                         name: &str,
                         arguments: Vec<Value>,
                         env: &Rc<Environment>,
                         offset: usize)
                         -> EvalResult<Value> {
        let function = env.lookup_function(name, arguments.len())
                          .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                         arity: arguments.len(),
                                                                         offset })?;

        trace!("calling {}/{}", function.name, function.arity);
        match &function.callable {
            Callable::Native(func) => func(&arguments, self.output_mut(), offset),
            Callable::User { definition,
                             closure, } => {
                let closure = closure.upgrade()
                                     .ok_or_else(|| RuntimeError::UnknownFunction {
                                         name: name.to_string(),
                                         arity: arguments.len(),
                                         offset,
                                     })?;
                self.call_user_defined_function(definition, arguments, &closure)
            },
        }
    }

    /// Executes a user-defined function.
    ///
    /// The body runs in a fresh child of the function's defining scope, so
    /// the caller's locals are not visible. Parameters are bound in order as
    /// mutable variables. A `RETURN` ends the call with its value; falling
    /// off the end of the body yields `Nil`.
    fn call_user_defined_function(&mut self,
                                  definition: &Function,
                                  arguments: Vec<Value>,
                                  closure: &Rc<Environment>)
                                  -> EvalResult<Value> {
        let scope = Environment::child(closure);
        for (parameter, value) in definition.parameters.iter().zip(arguments) {
            scope.define_variable(Variable::new(&parameter.name, true, value))
                 .ok_or_else(|| RuntimeError::AlreadyDefined { name:   parameter.name.clone(),
                                                               offset: parameter.offset, })?;
        }

        match self.exec_statements(&definition.statements, &scope)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}
