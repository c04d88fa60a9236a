/// The `Value` enum and its conversions.
///
/// Covers every runtime type of the language: `Nil`, booleans,
/// arbitrary-precision integers and decimals, characters, strings and shared
/// mutable lists. Also defines how values print.
pub mod core;
