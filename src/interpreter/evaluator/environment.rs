use std::{
    cell::{Ref, RefCell},
    collections::HashMap,
    io::Write,
    rc::{Rc, Weak},
};

use crate::{
    ast::Function,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Signature of a builtin implemented in Rust.
///
/// A builtin receives the evaluated arguments, the interpreter's output sink
/// and the offset of the call.
pub type NativeFn = fn(&[Value], &mut dyn Write, usize) -> EvalResult<Value>;

/// A variable cell shared by every access that resolves to it.
#[derive(Debug)]
pub struct Variable {
    /// The variable name.
    pub name:    String,
    /// Whether assignments are allowed.
    pub mutable: bool,
    value:       RefCell<Value>,
}

impl Variable {
    /// Creates a variable holding `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, mutable: bool, value: Value) -> Self {
        Self { name: name.into(),
               mutable,
               value: RefCell::new(value) }
    }

    /// Borrows the current value.
    pub fn value(&self) -> Ref<'_, Value> {
        self.value.borrow()
    }

    /// Replaces the current value. Mutability is checked by the caller.
    pub fn set(&self, value: Value) {
        *self.value.borrow_mut() = value;
    }
}

/// How a function runs when called.
#[derive(Debug, Clone)]
pub enum Callable {
    /// A builtin.
    Native(NativeFn),
    /// A function defined in the program.
    User {
        /// The definition.
        definition: Rc<Function>,
        /// The scope the function was defined in.
        closure:    Weak<Environment>,
    },
}

/// A callable function bound in an environment.
#[derive(Debug, Clone)]
pub struct FunctionValue {
    /// The function name.
    pub name:     String,
    /// The number of parameters.
    pub arity:    usize,
    /// The function's body.
    pub callable: Callable,
}

/// A runtime scope: variables by name and functions by name and arity, with
/// an optional parent.
///
/// Child environments live exactly as long as the block that created them.
/// Lookups walk the parent chain outward.
#[derive(Debug, Default)]
pub struct Environment {
    parent:    Option<Rc<Environment>>,
    variables: RefCell<HashMap<String, Rc<Variable>>>,
    functions: RefCell<HashMap<(String, usize), Rc<FunctionValue>>>,
}

impl Environment {
    /// Creates a root environment.
    #[must_use]
    pub fn root() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a child of `parent`.
    #[must_use]
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { parent: Some(Rc::clone(parent)),
                       ..Self::default() })
    }

    /// Defines a variable in this environment.
    ///
    /// # Returns
    /// The new cell, or `None` if this environment already defines the name.
    pub fn define_variable(&self, variable: Variable) -> Option<Rc<Variable>> {
        let mut variables = self.variables.borrow_mut();
        if variables.contains_key(&variable.name) {
            return None;
        }
        let variable = Rc::new(variable);
        variables.insert(variable.name.clone(), Rc::clone(&variable));
        Some(variable)
    }

    /// Resolves a variable in this environment or an ancestor.
    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<Rc<Variable>> {
        if let Some(variable) = self.variables.borrow().get(name) {
            return Some(Rc::clone(variable));
        }
        self.parent.as_ref()?.lookup_variable(name)
    }

    /// Defines a function in this environment.
    ///
    /// # Returns
    /// The bound function, or `None` if one with the same name and arity
    /// already exists here.
    pub fn define_function(&self, function: FunctionValue) -> Option<Rc<FunctionValue>> {
        let mut functions = self.functions.borrow_mut();
        let key = (function.name.clone(), function.arity);
        if functions.contains_key(&key) {
            return None;
        }
        let function = Rc::new(function);
        functions.insert(key, Rc::clone(&function));
        Some(function)
    }

    /// Resolves a function by name and arity in this environment or an
    /// ancestor.
    #[must_use]
    pub fn lookup_function(&self, name: &str, arity: usize) -> Option<Rc<FunctionValue>> {
        let key = (name.to_string(), arity);
        if let Some(function) = self.functions.borrow().get(&key) {
            return Some(Rc::clone(function));
        }
        self.parent.as_ref()?.lookup_function(name, arity)
    }
}
