/// Core evaluation logic and the interpreter state.
///
/// Contains the `Interpreter` type, program entry via `run`, the
/// control-flow result used for `RETURN`, and expression evaluation.
pub mod core;

/// Runtime scopes.
///
/// Defines variable cells, bound functions and the parent-linked
/// environments they live in.
pub mod environment;

/// Statement execution.
///
/// Runs declarations, assignments, branches, switches, loops and returns,
/// creating and discarding block scopes as it goes.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles logical, comparison, arithmetic and power operators, including
/// short-circuiting.
pub mod binary;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls and holds the builtin
/// table shared with the analyzer.
pub mod function;

/// Utility functions for evaluation.
pub mod utils;
