/// Operator dispatch and short-circuiting.
pub mod core;

/// `&&` and `||`.
pub mod logic;

/// Equality and ordering.
///
/// `==` and `!=` compare structurally; `<` and `>` require both operands to
/// share one comparable runtime type.
pub mod comparison;

/// `+`, `-`, `*` and `/` on integers and decimals, plus string
/// concatenation.
pub mod arithmetic;

/// Exact integer and decimal exponentiation.
pub mod power;
