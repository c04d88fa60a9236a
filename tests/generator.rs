use plc::compile_to_java;

fn java(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[test]
fn minimal_program() {
    assert_eq!(compile_to_java("FUN main(): Integer DO RETURN 0; END").unwrap(),
               java(&["public class Main {",
                      "",
                      "    public static void main(String[] args) {",
                      "        System.exit(new Main().main());",
                      "    }",
                      "",
                      "    int main() {",
                      "        return 0;",
                      "    }",
                      "",
                      "}"]));
}

#[test]
fn full_program() {
    let source = r#"
        VAR count: Integer = 0;
        LIST xs: Integer = [1, 2];
        VAL name = "a\"b";

        FUN add(a: Integer, b: Integer): Integer DO
            RETURN a + b;
        END

        FUN main(): Integer DO
            LET x = 2 ^ 3;
            IF x > 1 DO print(x); ELSE print("small"); END
            SWITCH x
                CASE 8: print('\n');
                DEFAULT print(NIL);
            END
            WHILE count < 2 DO count = count + 1; END
            xs[0] = add(x, count);
            RETURN 0;
        END
    "#;

    assert_eq!(compile_to_java(source).unwrap(),
               java(&["public class Main {",
                      "",
                      "    int count = 0;",
                      "    int[] xs = {1, 2};",
                      r#"    final String name = "a\"b";"#,
                      "",
                      "    public static void main(String[] args) {",
                      "        System.exit(new Main().main());",
                      "    }",
                      "",
                      "    int add(int a, int b) {",
                      "        return a + b;",
                      "    }",
                      "",
                      "    int main() {",
                      "        int x = (int) Math.pow(2, 3);",
                      "        if (x > 1) {",
                      "            System.out.println(x);",
                      "        } else {",
                      r#"            System.out.println("small");"#,
                      "        }",
                      "        switch (x) {",
                      "            case 8:",
                      r"                System.out.println('\n');",
                      "                break;",
                      "            default:",
                      "                System.out.println(null);",
                      "        }",
                      "        while (count < 2) {",
                      "            count = count + 1;",
                      "        }",
                      "        xs[0] = add(x, count);",
                      "        return 0;",
                      "    }",
                      "",
                      "}"]));
}

#[test]
fn identifiers_use_runtime_names() {
    let source = "VAR @hits = 0; \
                  FUN log-hit(n-times: Integer) DO @hits = @hits + n-times; END \
                  FUN main(): Integer DO \
                    IF TRUE DO LET x = 1; log-hit(x); END \
                    IF TRUE DO LET x = 2; log-hit(x); END \
                    RETURN @hits; \
                  END";
    let java = compile_to_java(source).unwrap();

    assert!(java.contains("    int $hits = 0;"));
    assert!(java.contains("    Void log_hit(int n_times) {"));
    assert!(java.contains("        $hits = $hits + n_times;"));
    assert!(java.contains("            int x = 1;"));
    assert!(java.contains("            log_hit(x);"));
    assert!(java.contains("            int x_1 = 2;"));
    assert!(java.contains("            log_hit(x_1);"));
    assert!(java.contains("        return $hits;"));
    assert!(!java.contains('@'));
    assert!(!java.contains("log-hit"));
}

#[test]
fn types_and_literals() {
    let source = "VAR d: Decimal; VAR s: String = \"tab\\tquote\\\"\"; VAR c: Comparable = 'q'; \
                  FUN main(): Integer DO \
                    LET f = 1.50 ^ 2; \
                    LET b: Boolean = TRUE && (1 < 2 || FALSE); \
                    LET a: Any; \
                    RETURN 0; \
                  END";
    let java = compile_to_java(source).unwrap();

    assert!(java.contains("    double d;"));
    assert!(java.contains(r#"    String s = "tab\tquote\"";"#));
    assert!(java.contains("    Comparable c = 'q';"));
    assert!(java.contains("        double f = Math.pow(1.50, 2);"));
    assert!(java.contains("        boolean b = true && (1 < 2 || false);"));
    assert!(java.contains("        Object a;"));
}

#[test]
fn invalid_programs_are_rejected() {
    assert!(compile_to_java("FUN main(): Integer DO RETURN 1 + 1.0; END").is_err());
    assert!(compile_to_java("FUN main(): Integer DO RETURN 0 END").is_err());
}

#[test]
fn list_aliases_are_arrays() {
    let java = compile_to_java("LIST xs: Integer = [1]; \
                                FUN main(): Integer DO LET view = xs; view[0] = 2; RETURN view[0]; END")
               .unwrap();

    assert!(java.contains("    int[] xs = {1};"));
    assert!(java.contains("        int[] view = xs;"));
    assert!(java.contains("        view[0] = 2;"));
}
