use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::{Function, NodeId, Source},
    error::SemanticError,
    interpreter::analyzer::{
        mangle::LocalNames,
        scope::{FunctionSignature, Scope, Variable},
        types::Type,
    },
};

pub type AnalysisResult<T> = Result<T, SemanticError>;

/// Annotations produced by the analyzer, keyed by node id.
///
/// The tree itself is never modified. The interpreter and the back end read
/// types and resolved symbols from here instead.
#[derive(Debug, Default, Clone)]
pub struct Analysis {
    types:     HashMap<NodeId, Type>,
    variables: HashMap<NodeId, Rc<Variable>>,
    functions: HashMap<NodeId, Rc<FunctionSignature>>,
}

impl Analysis {
    /// The static type of an expression.
    #[must_use]
    pub fn type_of(&self, id: NodeId) -> Option<Type> {
        self.types.get(&id).copied()
    }

    /// The variable an access, global, parameter or `LET` resolves to.
    #[must_use]
    pub fn variable(&self, id: NodeId) -> Option<&Rc<Variable>> {
        self.variables.get(&id)
    }

    /// The function a call or function definition resolves to.
    #[must_use]
    pub fn function(&self, id: NodeId) -> Option<&Rc<FunctionSignature>> {
        self.functions.get(&id)
    }

    pub(crate) fn set_type(&mut self, id: NodeId, ty: Type) {
        self.types.insert(id, ty);
    }

    pub(crate) fn set_variable(&mut self, id: NodeId, variable: Rc<Variable>) {
        self.variables.insert(id, variable);
    }

    pub(crate) fn set_function(&mut self, id: NodeId, function: Rc<FunctionSignature>) {
        self.functions.insert(id, function);
    }
}

/// Analyzes a parsed program.
///
/// Checks that a zero-argument `main` returning `Integer` exists, then visits
/// globals and functions in source order. The first violation aborts the
/// analysis.
///
/// # Parameters
/// - `source`: The parsed program.
/// - `builtins`: Functions available in the root scope, such as `print`.
///
/// # Returns
/// The side table of types and resolved symbols.
///
/// # Example
/// ```
/// use plc::interpreter::{
///     analyzer::{core::analyze, types::Type},
///     evaluator::function::core::builtin_signatures,
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let tokens = tokenize("FUN main(): Integer DO RETURN 1 + 2; END").unwrap();
/// let source = parse(&tokens).unwrap();
/// let analysis = analyze(&source, &builtin_signatures()).unwrap();
///
/// let main = analysis.function(source.functions[0].id).unwrap();
/// assert_eq!(main.returns, Type::Integer);
/// ```
pub fn analyze(source: &Source, builtins: &[FunctionSignature]) -> AnalysisResult<Analysis> {
    let mut analyzer = Analyzer::new(builtins);
    analyzer.analyze_source(source)?;
    Ok(analyzer.into_analysis())
}

/// Walks the tree, resolving names against a [`Scope`] and recording what it
/// finds in an [`Analysis`].
#[derive(Debug)]
pub struct Analyzer {
    pub(crate) scope:    Scope,
    pub(crate) analysis: Analysis,
    pub(crate) returns:  Type,
    pub(crate) locals:   LocalNames,
}

impl Analyzer {
    /// Creates an analyzer whose root scope holds `builtins`.
    #[must_use]
    pub fn new(builtins: &[FunctionSignature]) -> Self {
        let mut scope = Scope::new();
        for builtin in builtins {
            scope.define_function(builtin.clone());
        }
        Self { scope,
               analysis: Analysis::default(),
               returns: Type::Nil,
               locals: LocalNames::default() }
    }

    /// The current scope stack.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Consumes the analyzer and returns what it recorded.
    #[must_use]
    pub fn into_analysis(self) -> Analysis {
        self.analysis
    }

    /// Analyzes a whole program.
    ///
    /// The `main` check runs before anything else is visited.
    pub fn analyze_source(&mut self, source: &Source) -> AnalysisResult<()> {
        Self::check_main(source)?;

        for global in &source.globals {
            self.analyze_global(global)?;
        }
        for function in &source.functions {
            self.analyze_function(function)?;
        }

        debug!("analyzed {} global(s) and {} function(s)",
               source.globals.len(),
               source.functions.len());
        Ok(())
    }

    fn check_main(source: &Source) -> AnalysisResult<()> {
        let main = source.functions
                         .iter()
                         .find(|f| f.name == "main" && f.parameters.is_empty())
                         .ok_or(SemanticError::MissingMain)?;

        let returns = return_type(main)?;
        if returns != Type::Integer {
            return Err(SemanticError::InvalidMainReturnType { found:  returns,
                                                              offset: main.offset, });
        }
        Ok(())
    }

    /// Runs `f` inside a fresh innermost scope.
    ///
    /// The scope is popped again whether `f` succeeds or fails.
    pub(crate) fn with_scope<T>(&mut self,
                                f: impl FnOnce(&mut Self) -> AnalysisResult<T>)
                                -> AnalysisResult<T> {
        self.scope.push();
        let result = f(self);
        self.scope.pop();
        result
    }
}

/// Resolves the declared return type of a function.
///
/// Without an annotation the type is `Nil`, except for the zero-argument
/// `main`, whose return type is always `Integer`.
pub(crate) fn return_type(function: &Function) -> AnalysisResult<Type> {
    match function.return_type_name.as_deref() {
        Some(name) => resolve_type(name, function.offset),
        None if function.name == "main" && function.parameters.is_empty() => Ok(Type::Integer),
        None => Ok(Type::Nil),
    }
}

/// Resolves a type annotation.
pub(crate) fn resolve_type(name: &str, offset: usize) -> AnalysisResult<Type> {
    Type::from_name(name).ok_or_else(|| SemanticError::UnknownType { name: name.to_string(),
                                                                     offset })
}

/// Fails unless a value of type `found` can be stored as `target`.
pub(crate) fn require_assignable(target: Type, found: Type, offset: usize) -> AnalysisResult<()> {
    if target.accepts(found) {
        Ok(())
    } else {
        Err(SemanticError::NotAssignable { target,
                                           found,
                                           offset })
    }
}
