use std::{collections::HashMap, rc::Rc};

use log::trace;

use crate::interpreter::analyzer::types::Type;

/// A resolved variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The source name.
    pub name:         String,
    /// The name the back end emits.
    pub runtime_name: String,
    /// The declared or inferred type; the element type for lists.
    pub ty:           Type,
    /// `false` for `VAL` globals.
    pub mutable:      bool,
    /// Whether the variable holds a list, declared with `LIST` or aliased
    /// from one with `LET`.
    pub list:         bool,
}

/// A resolved function, user-defined or builtin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// The source name.
    pub name:         String,
    /// The name the back end emits.
    pub runtime_name: String,
    /// Parameter types in order.
    pub parameters:   Vec<Type>,
    /// The return type.
    pub returns:      Type,
}

impl FunctionSignature {
    /// The number of parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// The names visible in one block.
#[derive(Debug, Default)]
struct Frame {
    variables: HashMap<String, Rc<Variable>>,
    functions: HashMap<(String, usize), Rc<FunctionSignature>>,
}

/// The static scope chain, kept as a stack of frames.
///
/// The bottom frame is the root scope holding globals, functions and
/// builtins. Lookups walk from the innermost frame outward.
#[derive(Debug)]
pub struct Scope {
    frames: Vec<Frame>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Creates a scope holding only an empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// Number of frames, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Enters a new innermost frame.
    pub fn push(&mut self) {
        self.frames.push(Frame::default());
        trace!("entered scope at depth {}", self.frames.len());
    }

    /// Leaves the innermost frame. The root frame is never removed.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        trace!("left scope, depth is now {}", self.frames.len());
    }

    /// Defines a variable in the innermost frame.
    ///
    /// # Returns
    /// The shared symbol, or `None` if the frame already defines the name.
    pub fn define_variable(&mut self, variable: Variable) -> Option<Rc<Variable>> {
        let frame = self.frames.last_mut()?;
        if frame.variables.contains_key(&variable.name) {
            return None;
        }
        let variable = Rc::new(variable);
        frame.variables
             .insert(variable.name.clone(), Rc::clone(&variable));
        Some(variable)
    }

    /// Defines a function in the innermost frame, keyed by name and arity.
    ///
    /// # Returns
    /// The shared symbol, or `None` if the frame already defines a function
    /// with this name and arity.
    pub fn define_function(&mut self,
                           function: FunctionSignature)
                           -> Option<Rc<FunctionSignature>> {
        let frame = self.frames.last_mut()?;
        let key = (function.name.clone(), function.arity());
        if frame.functions.contains_key(&key) {
            return None;
        }
        let function = Rc::new(function);
        frame.functions.insert(key, Rc::clone(&function));
        Some(function)
    }

    /// Resolves a variable by walking outward from the innermost frame.
    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<Rc<Variable>> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.variables.get(name).cloned())
    }

    /// Resolves a function by name and arity.
    #[must_use]
    pub fn lookup_function(&self, name: &str, arity: usize) -> Option<Rc<FunctionSignature>> {
        let key = (name.to_string(), arity);
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.functions.get(&key).cloned())
    }
}
