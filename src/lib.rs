//! # plc
//!
//! plc is a lexer, parser, static analyzer and tree-walking interpreter for a
//! small imperative language with arbitrary-precision numbers. Programs are
//! made of global declarations and functions; running one calls `main` and
//! yields its `Integer` result as the exit value. An analyzed program can
//! also be printed as Java source.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{error::Error, io::Write};

use crate::{
    ast::Source,
    interpreter::{
        analyzer::core::{Analysis, analyze},
        evaluator::{core::Interpreter, function::core::builtin_signatures},
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Source` tree and related types: globals,
/// functions, statements and expressions. The tree is built by the parser,
/// annotated by the analyzer through a side table and walked by the
/// evaluator and the Java back end.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Gives every declaration and expression a unique id and a source offset.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// analyzing or evaluating a program. Every error carries the character
/// offset it was raised at, when there is one.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Emits analyzed programs as Java source.
///
/// Globals become fields and functions become methods of a single `Main`
/// class, using the runtime names and types chosen by the analyzer.
pub mod generator;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, analysis, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers shared across phases.
pub mod util;

/// Lexes, parses and analyzes a program.
///
/// # Returns
/// The parsed program together with its analysis.
///
/// # Examples
/// ```
/// use plc::check;
///
/// assert!(check("FUN main(): Integer DO RETURN 0; END").is_ok());
///
/// // `main` must return an Integer.
/// assert!(check("FUN main(): String DO RETURN \"0\"; END").is_err());
/// ```
pub fn check(source: &str) -> Result<(Source, Analysis), Box<dyn Error>> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let analysis = analyze(&program, &builtin_signatures())?;
    Ok((program, analysis))
}

/// Checks and runs a program, printing to standard output.
///
/// # Returns
/// The value returned by `main`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use plc::{execute, interpreter::value::core::Value};
///
/// let exit = execute("FUN main(): Integer DO RETURN 2 ^ 10; END").unwrap();
/// assert_eq!(exit, Value::Integer(BigInt::from(1024)));
/// ```
pub fn execute(source: &str) -> Result<Value, Box<dyn Error>> {
    let (program, _) = check(source)?;
    Ok(Interpreter::new().run(&program)?)
}

/// Checks and runs a program, writing everything `print` produces to
/// `output`.
///
/// # Examples
/// ```
/// use plc::execute_with_output;
///
/// let mut output = Vec::new();
/// execute_with_output("FUN main(): Integer DO print(\"a\" + 1); RETURN 0; END",
///                     &mut output).unwrap();
/// assert_eq!(output, b"a1\n");
/// ```
pub fn execute_with_output<W: Write>(source: &str, output: W) -> Result<Value, Box<dyn Error>> {
    let (program, _) = check(source)?;
    Ok(Interpreter::with_output(output).run(&program)?)
}

/// Checks a program and prints it as Java source.
///
/// # Examples
/// ```
/// use plc::compile_to_java;
///
/// let java = compile_to_java("VAL answer: Integer = 42; FUN main(): Integer DO RETURN answer; END")
///     .unwrap();
/// assert!(java.contains("final int answer = 42;"));
/// ```
pub fn compile_to_java(source: &str) -> Result<String, Box<dyn Error>> {
    let (program, analysis) = check(source)?;
    Ok(generator::generate(&program, &analysis))
}
