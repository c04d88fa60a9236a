/// The builtin table and function calls.
///
/// Defines the builtins available in the root scope and runs both builtin and
/// user-defined functions.
pub mod core;
/// The `print` function implementation.
///
/// Writes a value and a newline to the interpreter's output sink.
pub mod print;
