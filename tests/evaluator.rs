use std::{error::Error, str::FromStr};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use plc::{
    error::RuntimeError,
    execute_with_output,
    interpreter::{
        evaluator::core::Interpreter, lexer::tokenize, parser::core::parse, value::core::Value,
    },
};

/// Checks and runs `source`, returning the exit value and everything printed.
fn run(source: &str) -> Result<(Value, String), Box<dyn Error>> {
    let mut output = Vec::new();
    let exit = execute_with_output(source, &mut output)?;
    Ok((exit, String::from_utf8(output)?))
}

/// Runs `source` without analyzing it first.
fn run_unchecked(source: &str) -> Result<Value, RuntimeError> {
    let source = parse(&tokenize(source).unwrap()).unwrap();
    Interpreter::with_output(Vec::new()).run(&source)
}

/// The text `print(expression)` writes, without the newline.
fn printed(expression: &str) -> String {
    let (_, output) = run(&format!("FUN main(): Integer DO print({expression}); RETURN 0; END")).unwrap();
    output.strip_suffix('\n').unwrap().to_string()
}

fn runtime_error(source: &str) -> RuntimeError {
    match run(source) {
        Ok(_) => panic!("program succeeded but was expected to fail"),
        Err(e) => e.downcast_ref::<RuntimeError>()
                   .unwrap_or_else(|| panic!("expected a runtime error, got {e}"))
                   .clone(),
    }
}

fn integer(n: i64) -> Value {
    Value::Integer(BigInt::from(n))
}

#[test]
fn exit_value_is_mains_result() {
    assert_eq!(run("FUN main(): Integer DO RETURN 42; END").unwrap().0, integer(42));
}

#[test]
fn integer_literals_round_trip() {
    for literal in ["0", "1", "-1", "2147483647", "-2147483648", "4294967295"] {
        let (exit, _) = run(&format!("FUN main(): Integer DO RETURN {literal}; END")).unwrap();
        assert_eq!(exit, Value::Integer(BigInt::from_str(literal).unwrap()));
    }
}

#[test]
fn integer_arithmetic() {
    assert_eq!(printed("1 + 2 * 3"), "7");
    assert_eq!(printed("(1 + 2) * 3"), "9");
    assert_eq!(printed("10 - 4 - 3"), "3");
    assert_eq!(printed("5 / 2"), "2");
    assert_eq!(printed("-7 / 2"), "-3");
    assert_eq!(printed("2147483647 * 2147483647"), "4611686014132420609");
}

#[test]
fn decimal_arithmetic() {
    assert_eq!(printed("5.0 / 2.0"), "2.5");
    assert_eq!(printed("1.0 / 3.0"), "0.3");
    assert_eq!(printed("0.5 / 2.0"), "0.2");
    assert_eq!(printed("1.5 / 2.0"), "0.8");
    assert_eq!(printed("1.5 + 0.25"), "1.75");
    assert_eq!(printed("1.5 * 2.0"), "3.00");
    assert_eq!(printed("0.1 - 0.3"), "-0.2");
}

#[test]
fn division_by_zero() {
    assert!(matches!(runtime_error("FUN main(): Integer DO RETURN 1 / 0; END"),
                     RuntimeError::DivisionByZero { offset: 30 }));
    assert!(matches!(runtime_error("FUN main(): Integer DO print(1.0 / 0.0); RETURN 0; END"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn powers() {
    assert_eq!(printed("2 ^ 10"), "1024");
    assert_eq!(printed("2 ^ 100"), "1267650600228229401496703205376");
    assert_eq!(printed("1.5 ^ 2"), "2.25");
    assert_eq!(printed("7 ^ 0"), "1");
    assert_eq!(printed("2 * 3 ^ 2"), "36");

    assert!(matches!(runtime_error("FUN main(): Integer DO RETURN 2 ^ -1; END"),
                     RuntimeError::InvalidExponent { .. }));
    assert!(matches!(runtime_error("FUN main(): Integer DO RETURN 2 ^ 100000; END"),
                     RuntimeError::InvalidExponent { .. }));
}

#[test]
fn string_concatenation() {
    assert_eq!(printed("\"a\" + 1"), "a1");
    assert_eq!(printed("1 + \"a\""), "1a");
    assert_eq!(printed("\"x\" + 1.50 + 'c' + TRUE + NIL"), "x1.50ctruenull");
}

#[test]
fn comparisons() {
    assert_eq!(printed("1 < 2"), "true");
    assert_eq!(printed("2 > 2"), "false");
    assert_eq!(printed("1.0 == 1.00"), "true");
    assert_eq!(printed("'a' < 'b'"), "true");
    assert_eq!(printed("\"abc\" > \"abd\""), "false");
    assert_eq!(printed("\"a\" != \"b\""), "true");
}

#[test]
fn logical_operators_short_circuit() {
    let source = "FUN boom(): Boolean DO print(\"boom\"); RETURN TRUE; END \
                  FUN main(): Integer DO \
                    print(FALSE && boom()); \
                    print(TRUE || boom()); \
                    print(TRUE && boom()); \
                    RETURN 0; \
                  END";
    assert_eq!(run(source).unwrap().1, "false\ntrue\nboom\ntrue\n");
}

#[test]
fn printing_values() {
    assert_eq!(printed("NIL"), "null");
    assert_eq!(printed("FALSE"), "false");
    assert_eq!(printed("'c'"), "c");
    assert_eq!(printed("0.0010"), "0.0010");
    assert_eq!(printed("\"tab\\there\""), "tab\there");
    assert_eq!(printed("\"a\\nb\""), "a\nb");

    let (_, output) = run("LIST xs: Integer = [1, 2, 3]; FUN main(): Integer DO print(xs); RETURN 0; END")
                      .unwrap();
    assert_eq!(output, "[1, 2, 3]\n");
}

#[test]
fn mutable_and_immutable_variables() {
    assert_eq!(run("VAR x = 5; FUN main(): Integer DO x = 10; RETURN x; END").unwrap().0,
               integer(10));
    assert_eq!(runtime_error("VAL y = 5; FUN main(): Integer DO y = 10; RETURN y; END"),
               RuntimeError::ImmutableAssignment { name:   "y".to_string(),
                                                   offset: 34, });
}

#[test]
fn globals_without_value_start_as_nil() {
    let (_, output) = run("VAR x: Integer; FUN main(): Integer DO print(x); x = 1; print(x); RETURN 0; END")
                      .unwrap();
    assert_eq!(output, "null\n1\n");
}

#[test]
fn lists_are_shared() {
    let source = "LIST xs: Integer = [1, 2, 3]; \
                  FUN main(): Integer DO \
                    LET ys = xs; \
                    ys[0] = 10; \
                    print(xs); \
                    RETURN xs[0]; \
                  END";
    let (exit, output) = run(source).unwrap();
    assert_eq!(exit, integer(10));
    assert_eq!(output, "[10, 2, 3]\n");
}

#[test]
fn list_indices_are_checked() {
    assert_eq!(runtime_error("LIST xs: Integer = [1, 2, 3]; FUN main(): Integer DO RETURN xs[3]; END"),
               RuntimeError::IndexOutOfBounds { index:  BigInt::from(3),
                                                length: 3,
                                                offset: 63, });
    assert!(matches!(runtime_error("LIST xs: Integer = [1]; FUN main(): Integer DO xs[-1] = 0; RETURN 0; END"),
                     RuntimeError::IndexOutOfBounds { .. }));
}

#[test]
fn lists_cannot_contain_themselves() {
    assert_eq!(runtime_error("LIST xs: Any = [1]; FUN main(): Integer DO xs[0] = xs; print(xs); RETURN 0; END"),
               RuntimeError::CyclicList { name:   "xs".to_string(),
                                          offset: 43, });

    // Through another list.
    assert!(matches!(runtime_error("LIST xs: Any = [1]; LIST ys: Any = [xs]; \
                                    FUN main(): Integer DO xs[0] = ys; RETURN 0; END"),
                     RuntimeError::CyclicList { .. }));

    // Nesting without a cycle is fine.
    let source = "LIST xs: Any = [1]; LIST ys: Any = [2]; \
                  FUN main(): Integer DO ys[0] = xs; print(ys); RETURN 0; END";
    assert_eq!(run(source).unwrap().1, "[[1]]\n");
}

#[test]
fn control_flow() {
    let source = "FUN main(): Integer DO \
                    LET i = 0; LET sum = 0; \
                    WHILE i < 5 DO i = i + 1; sum = sum + i; END \
                    IF sum == 15 DO print(\"yes\"); ELSE print(\"no\"); END \
                    RETURN sum; \
                  END";
    let (exit, output) = run(source).unwrap();
    assert_eq!(exit, integer(15));
    assert_eq!(output, "yes\n");
}

#[test]
fn return_unwinds_loops() {
    let source = "FUN first-over(limit: Integer): Integer DO \
                    LET i = 0; \
                    WHILE TRUE DO \
                      IF i * i > limit DO RETURN i; END \
                      i = i + 1; \
                    END \
                    RETURN -1; \
                  END \
                  FUN main(): Integer DO RETURN first-over(50); END";
    assert_eq!(run(source).unwrap().0, integer(8));
}

#[test]
fn switch_selects_a_case() {
    let source = "FUN name(n: Integer): String DO \
                    LET result = \"\"; \
                    SWITCH n \
                      CASE 1: result = \"one\"; \
                      CASE 2: result = \"two\"; \
                      DEFAULT result = \"many\"; \
                    END \
                    RETURN result; \
                  END \
                  FUN main(): Integer DO \
                    print(name(1)); print(name(2)); print(name(3)); \
                    RETURN 0; \
                  END";
    assert_eq!(run(source).unwrap().1, "one\ntwo\nmany\n");
}

#[test]
fn switch_evaluates_its_condition_once() {
    let source = "VAR calls = 0; \
                  FUN next(): Integer DO calls = calls + 1; RETURN calls; END \
                  FUN main(): Integer DO \
                    SWITCH next() CASE 5: print(5); CASE 6: print(6); DEFAULT print(calls); END \
                    RETURN calls; \
                  END";
    let (exit, output) = run(source).unwrap();
    assert_eq!(exit, integer(1));
    assert_eq!(output, "1\n");
}

#[test]
fn recursion() {
    let source = "FUN fact(n: Integer): Integer DO \
                    IF n < 2 DO RETURN 1; END \
                    RETURN n * fact(n - 1); \
                  END \
                  FUN main(): Integer DO print(fact(25)); RETURN fact(10); END";
    let (exit, output) = run(source).unwrap();
    assert_eq!(exit, integer(3_628_800));
    assert_eq!(output, "15511210043330985984000000\n");
}

#[test]
fn parameters_are_local_and_mutable() {
    let source = "VAR n = 1; \
                  FUN bump(n: Integer): Integer DO n = n + 100; RETURN n; END \
                  FUN main(): Integer DO print(bump(5)); RETURN n; END";
    let (exit, output) = run(source).unwrap();
    assert_eq!(exit, integer(1));
    assert_eq!(output, "105\n");
}

#[test]
fn functions_see_globals_not_caller_locals() {
    let source = "VAR count = 0; \
                  FUN tick() DO count = count + 1; END \
                  FUN main(): Integer DO tick(); tick(); RETURN count; END";
    assert_eq!(run(source).unwrap().0, integer(2));

    assert!(matches!(run_unchecked("FUN peek(): Integer DO RETURN secret; END \
                                    FUN main(): Integer DO LET secret = 1; RETURN peek(); END"),
                     Err(RuntimeError::UnknownVariable { name, .. }) if name == "secret"));
}

#[test]
fn falling_off_a_function_returns_nil() {
    let source = "FUN noop() DO print(\"ran\"); END \
                  FUN main(): Integer DO print(noop()); RETURN 0; END";
    assert_eq!(run(source).unwrap().1, "ran\nnull\n");
}

#[test]
fn block_scopes_end_with_the_block() {
    assert!(matches!(run_unchecked("FUN main(): Integer DO IF TRUE DO LET y = 1; END RETURN y; END"),
                     Err(RuntimeError::UnknownVariable { name, .. }) if name == "y"));
    assert!(matches!(run_unchecked("FUN main(): Integer DO \
                                      LET i = 0; \
                                      WHILE i < 1 DO LET y = 1; i = i + 1; END \
                                      RETURN y; \
                                    END"),
                     Err(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn a_fresh_scope_per_loop_iteration() {
    let source = "FUN main(): Integer DO \
                    LET i = 0; \
                    WHILE i < 3 DO LET y = i; i = i + 1; END \
                    RETURN i; \
                  END";
    assert_eq!(run(source).unwrap().0, integer(3));
}

#[test]
fn dynamic_checks_on_unanalyzed_programs() {
    assert!(matches!(run_unchecked("FUN main(): Integer DO RETURN 1 + 1.0; END"),
                     Err(RuntimeError::TypeError { .. })));
    assert!(matches!(run_unchecked("FUN main(): Integer DO IF 1 DO RETURN 1; END RETURN 0; END"),
                     Err(RuntimeError::TypeError { .. })));
    assert!(matches!(run_unchecked("FUN main(): Integer DO RETURN 1 < \"a\"; END"),
                     Err(RuntimeError::TypeError { .. })));
    assert!(matches!(run_unchecked("FUN main(): Integer DO LET x = 1; LET x = 2; RETURN x; END"),
                     Err(RuntimeError::AlreadyDefined { .. })));
    assert!(matches!(run_unchecked("FUN main(): Integer DO RETURN nothing(); END"),
                     Err(RuntimeError::UnknownFunction { arity: 0, .. })));
    assert!(matches!(run_unchecked("FUN main(): Integer DO IF TRUE && 1 DO RETURN 1; END RETURN 0; END"),
                     Err(RuntimeError::TypeError { offset: 34, .. })));
}

#[test]
fn interpreter_reports_output_and_globals() {
    let source = parse(&tokenize("VAL pi = 3.14; FUN main(): Integer DO print(pi); RETURN 0; END").unwrap())
                 .unwrap();
    let mut interpreter = Interpreter::with_output(Vec::new());

    assert_eq!(interpreter.run(&source).unwrap(), integer(0));
    let pi = interpreter.globals().lookup_variable("pi").unwrap();
    assert!(!pi.mutable);
    assert_eq!(*pi.value(), Value::Decimal(BigDecimal::from_str("3.14").unwrap()));
    assert_eq!(interpreter.into_output(), b"3.14\n");
}
