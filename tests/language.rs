use std::fs;

use num_bigint::BigInt;
use plc::{check, execute_with_output, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "plc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match execute_with_output(&content, Vec::new()) {
            Ok(Value::Integer(exit)) if exit == BigInt::from(0) => {},
            Ok(other) => panic!("Program {path:?} exited with {other} instead of 0"),
            Err(e) => panic!("Program {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

/// Runs `src` and requires it to exit with 0.
fn assert_success(src: &str) {
    match execute_with_output(src, Vec::new()) {
        Ok(Value::Integer(exit)) if exit == BigInt::from(0) => {},
        Ok(other) => panic!("Script exited with {other} instead of 0"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if execute_with_output(src, Vec::new()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Wraps `body` in a `main` that exits with 0 when `condition` holds.
fn assert_holds(body: &str, condition: &str) {
    assert_success(&format!("FUN main(): Integer DO {body} IF {condition} DO RETURN 0; END RETURN 1; END"));
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_holds("LET x = 1 + 2;", "x == 3");
    assert_holds("LET x = 7 * 9;", "x == 63");
    assert_holds("LET x = 8 - 5;", "x == 3");
    assert_holds("LET x = 10 / 2;", "x == 5");
    assert_holds("LET x = 5 / 2;", "x == 2");
    assert_holds("LET x = 5.0 / 2.0;", "x == 2.5");
}

#[test]
fn reassignment() {
    assert_holds("LET x = 5; x = 10;", "x == 10");
    assert_success("VAR x = 5; FUN main(): Integer DO x = 10; RETURN x - 10; END");
    assert_failure("VAL y = 5; FUN main(): Integer DO y = 10; RETURN 0; END");
}

#[test]
fn division_by_zero_fails() {
    assert_failure("FUN main(): Integer DO RETURN 1 / 0; END");
    assert_failure("FUN main(): Integer DO LET d = 1.0 / 0.0; RETURN 0; END");
}

#[test]
fn mixed_operands() {
    assert_holds("LET s = \"a\" + 1;", "s == \"a1\"");
    assert_holds("LET s = 1 + \"a\";", "s == \"1a\"");
    assert_failure("FUN main(): Integer DO LET x = 1 + 1.0; RETURN 0; END");
}

#[test]
fn main_without_return_type() {
    let src = "FUN main() DO LET x = 1; IF x == 1 DO RETURN 1; END RETURN 0; END";
    assert!(check(src).is_ok());
    assert_eq!(execute_with_output(src, Vec::new()).unwrap(),
               Value::Integer(BigInt::from(1)));
}

#[test]
fn shared_lists() {
    assert_success("LIST xs: Integer = [1, 2, 3]; \
                    FUN main(): Integer DO \
                      LET alias = xs; \
                      alias[1] = 20; \
                      IF xs[1] == 20 DO RETURN 0; END \
                      RETURN 1; \
                    END");
}

#[test]
fn block_scoping() {
    assert_failure("FUN main(): Integer DO IF TRUE DO LET y = 1; END RETURN y; END");
    assert_failure("FUN main(): Integer DO WHILE FALSE DO LET y = 1; END RETURN y; END");
}

#[test]
fn escapes_round_trip() {
    let mut output = Vec::new();
    execute_with_output(r#"FUN main(): Integer DO print("a\nb\t\"c\"\\"); print('\''); RETURN 0; END"#,
                        &mut output).unwrap();
    assert_eq!(output, b"a\nb\t\"c\"\\\n'\n");
}

#[test]
fn errors_from_every_stage() {
    // Lexical.
    assert_failure("FUN main(): Integer DO RETURN \"open; END");
    // Syntactic.
    assert_failure("FUN main(): Integer DO RETURN 0; ");
    // Semantic.
    assert_failure("FUN main(): Integer DO RETURN TRUE; END");
    // Runtime.
    assert_failure("LIST xs: Integer = [1]; FUN main(): Integer DO RETURN xs[1]; END");
}
