use plc::{
    ast::{ExprKind, Source, Statement},
    error::SemanticError,
    interpreter::{
        analyzer::{
            core::{Analysis, Analyzer, analyze},
            types::Type,
        },
        evaluator::function::core::builtin_signatures,
        lexer::tokenize,
        parser::core::parse,
    },
};

fn parse_source(source: &str) -> Source {
    parse(&tokenize(source).unwrap()).unwrap()
}

fn analyze_source(source: &str) -> Result<(Source, Analysis), SemanticError> {
    let source = parse_source(source);
    let analysis = analyze(&source, &builtin_signatures())?;
    Ok((source, analysis))
}

/// Wraps `body` in a `main` that returns an Integer.
fn analyze_main(body: &str) -> Result<(Source, Analysis), SemanticError> {
    analyze_source(&format!("FUN main(): Integer DO {body} RETURN 0; END"))
}

fn assert_valid(body: &str) {
    if let Err(e) = analyze_main(body) {
        panic!("analysis of `{body}` failed: {e}");
    }
}

fn analysis_error(body: &str) -> SemanticError {
    match analyze_main(body) {
        Ok(_) => panic!("analysis of `{body}` succeeded but was expected to fail"),
        Err(e) => e,
    }
}

/// The type recorded for `expression` when passed to `print`.
fn expression_type(expression: &str) -> Type {
    let (source, analysis) =
        analyze_source(&format!("FUN main(): Integer DO print({expression}); RETURN 0; END")).unwrap();
    let Statement::Expression { expr, .. } = &source.functions[0].statements[0] else {
        panic!("expected an expression statement");
    };
    let ExprKind::Call { arguments, .. } = &expr.kind else {
        panic!("expected a call");
    };
    analysis.type_of(arguments[0].id).unwrap()
}

#[test]
fn main_is_required() {
    assert_eq!(analyze_source("FUN f(): Integer DO RETURN 0; END").unwrap_err(),
               SemanticError::MissingMain);
    assert_eq!(analyze_source("FUN main(x: Integer): Integer DO RETURN x; END").unwrap_err(),
               SemanticError::MissingMain);
}

#[test]
fn main_must_return_integer() {
    assert_eq!(analyze_source("FUN main(): String DO RETURN \"0\"; END").unwrap_err(),
               SemanticError::InvalidMainReturnType { found:  Type::String,
                                                      offset: 0, });
}

#[test]
fn main_return_type_defaults_to_integer() {
    let (source, analysis) =
        analyze_source("FUN main() DO LET x = 1; IF x == 1 DO RETURN 1; END RETURN 0; END").unwrap();
    assert_eq!(analysis.function(source.functions[0].id).unwrap().returns,
               Type::Integer);
}

#[test]
fn main_is_checked_before_anything_else() {
    assert_eq!(analyze_source("VAL x: Integer = \"oops\"; FUN f() DO RETURN NIL; END").unwrap_err(),
               SemanticError::MissingMain);
}

#[test]
fn literal_types() {
    assert_eq!(expression_type("NIL"), Type::Nil);
    assert_eq!(expression_type("TRUE"), Type::Boolean);
    assert_eq!(expression_type("1"), Type::Integer);
    assert_eq!(expression_type("1.5"), Type::Decimal);
    assert_eq!(expression_type("'c'"), Type::Character);
    assert_eq!(expression_type("\"s\""), Type::String);
}

#[test]
fn literal_ranges() {
    assert_valid("LET x = 4294967295;");
    assert!(matches!(analysis_error("LET x = 4294967296;"),
                     SemanticError::IntegerTooLarge { .. }));

    let huge = format!("{}.0", "9".repeat(400));
    assert!(matches!(analysis_error(&format!("LET x = {huge};")),
                     SemanticError::DecimalTooLarge { .. }));
}

#[test]
fn binary_types() {
    assert_eq!(expression_type("1 + 2"), Type::Integer);
    assert_eq!(expression_type("1.0 * 2.0"), Type::Decimal);
    assert_eq!(expression_type("\"a\" + 1"), Type::String);
    assert_eq!(expression_type("1 + \"a\""), Type::String);
    assert_eq!(expression_type("'c' + \"a\""), Type::String);
    assert_eq!(expression_type("1 < 2"), Type::Boolean);
    assert_eq!(expression_type("\"a\" == \"b\""), Type::Boolean);
    assert_eq!(expression_type("TRUE && FALSE"), Type::Boolean);
    assert_eq!(expression_type("2 ^ 10"), Type::Integer);
    assert_eq!(expression_type("1.5 ^ 2"), Type::Decimal);
    assert_eq!(expression_type("(1 + 2)"), Type::Integer);
}

#[test]
fn invalid_operands() {
    for expression in ["1 + 1.0",
                       "1 - \"a\"",
                       "1 < 1.0",
                       "TRUE < FALSE",
                       "TRUE == TRUE",
                       "1 && TRUE",
                       "2 ^ 2.0",
                       "\"a\" ^ 2",
                       "'a' * 'b'"]
    {
        assert!(matches!(analysis_error(&format!("print({expression});")),
                         SemanticError::InvalidOperands { .. }),
                "`{expression}` should not type-check");
    }

    assert_eq!(analysis_error("print(1 + 1.0);"),
               SemanticError::InvalidOperands { operator: "+".to_string(),
                                                left:     Type::Integer,
                                                right:    Type::Decimal,
                                                offset:   29, });
}

#[test]
fn groups_must_wrap_binary_expressions() {
    assert!(matches!(analysis_error("print((1));"), SemanticError::InvalidGroup { .. }));
}

#[test]
fn declarations() {
    assert_valid("LET x: Integer = 1; LET y: String; LET z = 'c'; LET w: Any = 1.5;");
    assert_valid("LET c: Comparable = \"s\";");

    assert!(matches!(analysis_error("LET x;"),
                     SemanticError::MissingDeclarationType { name, .. } if name == "x"));
    assert!(matches!(analysis_error("LET x: Integer = \"1\";"),
                     SemanticError::NotAssignable { target: Type::Integer,
                                                    found: Type::String,
                                                    .. }));
    assert!(matches!(analysis_error("LET c: Comparable = TRUE;"),
                     SemanticError::NotAssignable { .. }));
    assert!(matches!(analysis_error("LET x: Float = 1;"),
                     SemanticError::UnknownType { name, .. } if name == "Float"));
}

#[test]
fn redefinition_in_the_same_scope() {
    assert!(matches!(analysis_error("LET x = 1; LET x = 2;"),
                     SemanticError::AlreadyDefined { name, .. } if name == "x"));
    assert!(matches!(analyze_source("VAR x = 1; VAR x = 2; FUN main(): Integer DO RETURN 0; END"),
                     Err(SemanticError::AlreadyDefined { .. })));

    // A nested block may shadow an outer name.
    assert_valid("LET x = 1; IF TRUE DO LET x = \"s\"; print(x); END");
}

#[test]
fn assignments() {
    assert_valid("LET x = 1; x = 2;");
    assert!(matches!(analysis_error("LET x = 1; x = \"s\";"),
                     SemanticError::NotAssignable { .. }));
    assert!(matches!(analysis_error("print(1) = 2;"),
                     SemanticError::InvalidReceiver { .. }));
    assert!(matches!(analysis_error("y = 2;"), SemanticError::UnknownVariable { .. }));
}

#[test]
fn immutability_is_left_to_the_interpreter() {
    assert!(analyze_source("VAL y = 5; FUN main(): Integer DO y = 10; RETURN y; END").is_ok());
}

#[test]
fn conditions_must_be_boolean() {
    assert!(matches!(analysis_error("IF 1 DO print(1); END"),
                     SemanticError::NotAssignable { target: Type::Boolean,
                                                    found: Type::Integer,
                                                    .. }));
    assert!(matches!(analysis_error("WHILE \"yes\" DO print(1); END"),
                     SemanticError::NotAssignable { target: Type::Boolean, .. }));
}

#[test]
fn block_scopes_end_with_the_block() {
    assert!(matches!(analysis_error("IF TRUE DO LET y = 1; END print(y);"),
                     SemanticError::UnknownVariable { name, .. } if name == "y"));
    assert!(matches!(analysis_error("WHILE FALSE DO LET y = 1; END print(y);"),
                     SemanticError::UnknownVariable { .. }));
    assert!(matches!(analysis_error("SWITCH 1 CASE 1: LET y = 1; DEFAULT print(y); END"),
                     SemanticError::UnknownVariable { .. }));
}

#[test]
fn switch_cases_match_the_condition_type() {
    assert_valid("SWITCH 'a' CASE 'a': print(1); CASE 'b': print(2); DEFAULT print(3); END");
    assert!(matches!(analysis_error("SWITCH 1 CASE 1.0: print(1); DEFAULT print(2); END"),
                     SemanticError::NotAssignable { target: Type::Integer,
                                                    found: Type::Decimal,
                                                    .. }));
}

#[test]
fn returns_match_the_declared_type() {
    assert!(matches!(analyze_source("FUN main(): Integer DO RETURN \"0\"; END"),
                     Err(SemanticError::NotAssignable { target: Type::Integer,
                                                        found: Type::String,
                                                        .. })));
    assert!(analyze_source("FUN f() DO RETURN NIL; END FUN main(): Integer DO RETURN 0; END").is_ok());
    assert!(analyze_source("FUN f() DO RETURN 1; END FUN main(): Integer DO RETURN 0; END").is_err());
}

#[test]
fn calls() {
    let (source, analysis) = analyze_source("FUN twice(n: Integer): Integer DO RETURN n * 2; END \
                                             FUN main(): Integer DO RETURN twice(21); END")
                             .unwrap();
    let Statement::Return { value, .. } = &source.functions[1].statements[0] else {
        panic!("expected RETURN");
    };
    assert_eq!(analysis.type_of(value.id), Some(Type::Integer));
    assert_eq!(analysis.function(value.id).unwrap().name, "twice");

    assert!(matches!(analysis_error("print(1, 2);"),
                     SemanticError::UnknownFunction { name, arity: 2, .. } if name == "print"));
    assert!(matches!(analysis_error("missing();"),
                     SemanticError::UnknownFunction { arity: 0, .. }));
    assert!(matches!(analyze_source("FUN f(s: String) DO print(s); END \
                                     FUN main(): Integer DO f(1); RETURN 0; END"),
                     Err(SemanticError::NotAssignable { target: Type::String,
                                                        found: Type::Integer,
                                                        .. })));
}

#[test]
fn functions_are_defined_in_order() {
    assert!(analyze_source("FUN fact(n: Integer): Integer DO \
                              IF n < 2 DO RETURN 1; END RETURN n * fact(n - 1); \
                            END \
                            FUN main(): Integer DO RETURN fact(5); END")
            .is_ok());
    assert!(matches!(analyze_source("FUN main(): Integer DO RETURN later(); END \
                                     FUN later(): Integer DO RETURN 1; END"),
                     Err(SemanticError::UnknownFunction { .. })));
}

#[test]
fn functions_are_keyed_by_arity() {
    assert!(analyze_source("FUN f(): Integer DO RETURN 0; END \
                            FUN f(x: Integer): Integer DO RETURN x; END \
                            FUN main(): Integer DO RETURN f() + f(1); END")
            .is_ok());
    assert!(matches!(analyze_source("FUN f() DO RETURN NIL; END FUN f() DO RETURN NIL; END \
                                     FUN main(): Integer DO RETURN 0; END"),
                     Err(SemanticError::AlreadyDefined { .. })));
}

#[test]
fn functions_do_not_see_callers_locals() {
    assert!(matches!(analyze_source("FUN f(): Integer DO RETURN x; END \
                                     FUN main(): Integer DO LET x = 1; RETURN f(); END"),
                     Err(SemanticError::UnknownVariable { .. })));
}

#[test]
fn globals() {
    assert!(analyze_source("VAR a: Integer; VAR b = 1; VAL c: Decimal = 1.5; LIST xs: String = [\"a\", \"b\"]; \
                            FUN main(): Integer DO print(xs[0] + c); RETURN a + b; END")
            .is_ok());

    assert!(matches!(analyze_source("VAR a; FUN main(): Integer DO RETURN 0; END"),
                     Err(SemanticError::MissingDeclarationType { .. })));
    assert!(matches!(analyze_source("VAL c: Decimal = 1; FUN main(): Integer DO RETURN 0; END"),
                     Err(SemanticError::VariableMismatch { target: Type::Decimal,
                                                           found: Type::Integer,
                                                           .. })));
    assert!(matches!(analyze_source("LIST xs: Integer = [1, \"b\"]; FUN main(): Integer DO RETURN 0; END"),
                     Err(SemanticError::NotAssignable { .. })));
}

#[test]
fn list_indices_are_integers() {
    assert!(matches!(analyze_source("LIST xs: Integer = [1]; FUN main(): Integer DO RETURN xs[TRUE]; END"),
                     Err(SemanticError::NotAssignable { target: Type::Integer,
                                                        found: Type::Boolean,
                                                        .. })));
}

#[test]
fn any_accepts_everything_but_supports_no_operators() {
    assert_valid("LET a: Any = 1; a = \"s\"; a = NIL; print(a);");
    assert!(matches!(analysis_error("LET a: Any = 1; print(a + 1);"),
                     SemanticError::InvalidOperands { .. }));
}

#[test]
fn runtime_names() {
    let (source, analysis) = analyze_source("VAR @total-count = 0; \
                                             FUN to-string(x-y: Integer): String DO RETURN \"\" + x-y; END \
                                             FUN main(): Integer DO \
                                               IF TRUE DO LET x = 1; print(x); END \
                                               IF TRUE DO LET x = 2; print(x); END \
                                               print(to-string(@total-count)); \
                                               RETURN 0; \
                                             END")
                             .unwrap();

    assert_eq!(analysis.variable(source.globals[0].id).unwrap().runtime_name,
               "$total_count");
    let to_string = &source.functions[0];
    assert_eq!(analysis.function(to_string.id).unwrap().runtime_name, "to_string");
    assert_eq!(analysis.variable(to_string.parameters[0].id).unwrap().runtime_name,
               "x_y");

    let local_name = |index: usize| {
        let Statement::If { then_statements, .. } = &source.functions[1].statements[index] else {
            panic!("expected IF");
        };
        let Statement::Declaration { id, .. } = &then_statements[0] else {
            panic!("expected LET");
        };
        analysis.variable(*id).unwrap().runtime_name.clone()
    };
    assert_eq!(local_name(0), "x");
    assert_eq!(local_name(1), "x_1");

    let Statement::Expression { expr, .. } = &source.functions[1].statements[2] else {
        panic!("expected print");
    };
    assert_eq!(analysis.function(expr.id).unwrap().runtime_name,
               "System.out.println");
}

#[test]
fn scope_is_restored_after_an_error() {
    let source = parse_source("FUN main(): Integer DO \
                                 IF TRUE DO WHILE TRUE DO print(missing); END END \
                                 RETURN 0; \
                               END");
    let mut analyzer = Analyzer::new(&builtin_signatures());

    assert!(analyzer.analyze_source(&source).is_err());
    assert_eq!(analyzer.scope().depth(), 1);
    assert!(analyzer.scope().lookup_function("main", 0).is_some());
}

#[test]
fn error_messages_carry_offsets() {
    let error = analysis_error("print(unknown);");
    assert!(matches!(error, SemanticError::UnknownVariable { offset: 29, .. }));
    assert!(error.to_string().contains("unknown"));
}

#[test]
fn whole_lists_only_fit_any() {
    let lists = "LIST xs: Integer = [1, 2]; LIST ys: Integer = [3]; LIST names: String = [\"a\"];";
    let with_lists = |body: &str| {
        analyze_source(&format!("{lists} FUN main(): Integer DO {body} RETURN 0; END"))
    };

    assert!(matches!(analyze_source(&format!("{lists} FUN main(): Integer DO RETURN xs; END")),
                     Err(SemanticError::NotAssignable { target: Type::Integer,
                                                        found: Type::Any,
                                                        .. })));
    assert!(matches!(with_lists("LET y = xs + 1;"),
                     Err(SemanticError::InvalidOperands { .. })));
    assert!(matches!(with_lists("IF xs == ys DO print(1); END"),
                     Err(SemanticError::InvalidOperands { .. })));

    assert!(with_lists("print(xs);").is_ok());
    assert!(with_lists("LET alias = xs; alias[0] = 5; print(alias[1] + 1);").is_ok());
    assert!(with_lists("xs = ys;").is_ok());
    assert!(matches!(with_lists("xs = names;"),
                     Err(SemanticError::NotAssignable { target: Type::Integer,
                                                        found: Type::String,
                                                        .. })));
    assert!(matches!(with_lists("xs = 1;"),
                     Err(SemanticError::ListRequired { .. })));
}

#[test]
fn only_lists_can_be_indexed() {
    assert!(matches!(analysis_error("LET y = 3; print(y[0]);"),
                     SemanticError::NotAList { .. }));
    assert!(matches!(analyze_source("VAR n = 1; FUN main(): Integer DO RETURN n[0]; END"),
                     Err(SemanticError::NotAList { .. })));

    // A list stored in an `Any` variable is no longer known to be a list.
    assert!(matches!(analyze_source("LIST xs: Integer = [1]; \
                                     FUN main(): Integer DO LET a: Any = xs; print(a[0]); RETURN 0; END"),
                     Err(SemanticError::NotAList { .. })));
}
