/// Analyzer state, the side table it fills and the program entry point.
pub mod core;

/// The closed set of static types and the assignability rule.
pub mod types;

/// Resolved symbols and the static scope stack.
///
/// Variables are keyed by name and functions by name and arity. Frames are
/// pushed on entering a function body, branch, loop or case and popped on
/// leaving it.
pub mod scope;

/// Runtime names for the back end.
pub mod mangle;

/// Global, function and statement checks.
pub mod statement;

/// Expression typing and name resolution.
pub mod expression;

/// Binary operator typing rules.
pub mod binary;
