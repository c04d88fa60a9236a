/// Numeric helpers.
///
/// This module holds the arbitrary-precision routines shared by the analyzer
/// and the evaluator: decimal division rounded half to even, exact decimal
/// powers, and checked conversions of exponents and list indices.
///
/// Conversions return a `Result` that is `Ok` only when the value is in range,
/// so no silent truncation happens.
pub mod num;
