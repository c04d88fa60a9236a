/// Parser state and the program entry point.
///
/// Holds the token cursor, the lookahead primitives every grammar rule is
/// built on, and node id allocation.
pub mod core;

/// Global variable and function definitions.
///
/// Parses `VAL`, `VAR` and `LIST` globals, function headers, parameter lists
/// and optional type annotations.
pub mod declaration;

/// Statement parsing.
///
/// Dispatches on the leading keyword (`LET`, `SWITCH`, `IF`, `WHILE`,
/// `RETURN`) and falls back to expression or assignment statements.
pub mod statement;

/// Binary operator precedence levels.
pub mod binary;

/// Literals, groups, variable access and calls.
pub mod primary;

/// Helpers shared by the grammar rules.
pub mod utils;
