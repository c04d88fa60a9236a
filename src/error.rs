/// Lexical errors.
///
/// Defines the errors raised while turning raw source text into tokens, such
/// as unterminated literals, invalid escapes or raw line breaks inside a
/// literal. Every error points at the offending character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream: unexpected tokens, premature end of input, empty blocks
/// and malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include things like division by zero, index out
/// of bounds, type confusion at dynamically checked operations, or writes to
/// immutable variables.
pub mod runtime_error;
/// Semantic errors.
///
/// Defines the errors reported by the analyzer: unknown names, arity
/// mismatches, unassignable types, bad operand types and a missing or
/// ill-typed `main`.
pub mod semantic_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
