/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// identifiers (keywords included), integer and decimal literals, character
/// and string literals, and operators. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input text into tokens carrying their character offset.
/// - Applies maximal munch, skipping whitespace.
/// - Reports lexical errors at the offending character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence produced by the lexer and builds a
/// [`Source`](crate::ast::Source) tree by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into globals, functions, statements and expressions.
/// - Applies operator precedence and left associativity.
/// - Decodes literals into arbitrary-precision numbers and unescaped text.
/// - Reports the offset of the first token that does not fit the grammar.
pub mod parser;
/// The analyzer module type-checks the tree and resolves names.
///
/// The analyzer walks the parsed program with a stack of scopes, checks every
/// rule of the type system and records types and resolved symbols in a side
/// table keyed by node id. The tree itself is left untouched.
///
/// # Responsibilities
/// - Checks for a zero-argument `main` returning `Integer`.
/// - Resolves variables by name and functions by name and arity.
/// - Types every expression and checks assignability.
/// - Assigns runtime names for the back end.
pub mod analyzer;
/// The evaluator module executes programs.
///
/// The evaluator walks the tree, evaluates expressions and statements,
/// manages scopes and produces the exit value returned by `main`.
///
/// # Responsibilities
/// - Evaluates every expression and statement kind.
/// - Models `RETURN` as an explicit control-flow result.
/// - Reports runtime errors such as division by zero, out-of-bounds indices
///   or writes to immutable variables.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Formats values for `print` and string concatenation.
pub mod value;
