use crate::{
    ast::{BinaryOperator, Case, Expr, ExprKind, Function, Global, Literal, Source, Statement},
    interpreter::{
        analyzer::{core::Analysis, mangle::mangle, types::Type},
        value::core::Value,
    },
};

const INDENT: &str = "    ";

/// Pretty-prints an analyzed program as Java source.
///
/// The program becomes a `Main` class: globals turn into fields, every
/// function into a method, and a `public static void main` exits with the
/// value of the program's own `main`. Types and names come from `analysis`;
/// identifiers are always emitted by their runtime name.
///
/// # Parameters
/// - `source`: The parsed program.
/// - `analysis`: The analyzer's side table for `source`.
///
/// # Returns
/// The Java source text, ending with a newline.
///
/// # Example
/// ```
/// use plc::{
///     generator::generate,
///     interpreter::{
///         analyzer::core::analyze, evaluator::function::core::builtin_signatures,
///         lexer::tokenize, parser::core::parse,
///     },
/// };
///
/// let source = parse(&tokenize("FUN main(): Integer DO print(\"hi\"); RETURN 0; END").unwrap())
///     .unwrap();
/// let analysis = analyze(&source, &builtin_signatures()).unwrap();
///
/// let java = generate(&source, &analysis);
/// assert!(java.contains("int main() {"));
/// assert!(java.contains("System.out.println(\"hi\");"));
/// ```
#[must_use]
pub fn generate(source: &Source, analysis: &Analysis) -> String {
    let mut generator = Generator { analysis,
                                    out: String::new(),
                                    indent: 0 };
    generator.source(source);
    generator.out
}

struct Generator<'a> {
    analysis: &'a Analysis,
    out:      String,
    indent:   usize,
}

impl Generator<'_> {
    fn print(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn newline(&mut self, indent: usize) {
        self.out.push('\n');
        for _ in 0..indent {
            self.out.push_str(INDENT);
        }
    }

    fn line(&mut self, text: &str) {
        self.newline(self.indent);
        self.print(text);
    }

    fn source(&mut self, source: &Source) {
        self.print("public class Main {");
        self.newline(0);
        self.indent += 1;

        if !source.globals.is_empty() {
            for global in &source.globals {
                self.newline(self.indent);
                self.global(global);
            }
            self.newline(0);
        }

        self.line("public static void main(String[] args) {");
        self.indent += 1;
        self.line("System.exit(new Main().main());");
        self.indent -= 1;
        self.line("}");

        for function in &source.functions {
            self.newline(0);
            self.newline(self.indent);
            self.function(function);
        }

        self.indent -= 1;
        self.newline(0);
        self.line("}");
        self.out.push('\n');
    }

    fn global(&mut self, global: &Global) {
        let (name, ty) = self.analysis
                             .variable(global.id)
                             .map_or_else(|| (mangle(&global.name), Type::Any),
                                          |variable| (variable.runtime_name.clone(), variable.ty));

        match &global.value {
            Some(value) if global.is_list() => {
                let value = self.expression(value);
                self.print(&format!("{}[] {name} = {value};", ty.jvm_name()));
            },
            value => {
                if !global.mutable {
                    self.print("final ");
                }
                self.print(&format!("{} {name}", ty.jvm_name()));
                if let Some(value) = value {
                    let value = self.expression(value);
                    self.print(&format!(" = {value}"));
                }
                self.print(";");
            },
        }
    }

    fn function(&mut self, function: &Function) {
        let (name, returns) = self.analysis
                                  .function(function.id)
                                  .map_or_else(|| (mangle(&function.name), Type::Nil),
                                               |f| (f.runtime_name.clone(), f.returns));
        let parameters = function.parameters
                                 .iter()
                                 .map(|parameter| {
                                     self.analysis.variable(parameter.id).map_or_else(
                                         || format!("Object {}", mangle(&parameter.name)),
                                         |v| format!("{} {}", v.ty.jvm_name(), v.runtime_name),
                                     )
                                 })
                                 .collect::<Vec<_>>()
                                 .join(", ");

        self.print(&format!("{} {name}({parameters}) {{", returns.jvm_name()));
        self.block(&function.statements);
        self.line("}");
    }

    fn block(&mut self, statements: &[Statement]) {
        self.indent += 1;
        for statement in statements {
            self.newline(self.indent);
            self.statement(statement);
        }
        self.indent -= 1;
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Expression { expr, .. } => {
                let expr = self.expression(expr);
                self.print(&format!("{expr};"));
            },
            Statement::Declaration { id, name, value, .. } => {
                let (name, ty, list) = self.analysis
                                           .variable(*id)
                                           .map_or_else(|| (mangle(name), Type::Any, false),
                                                        |v| (v.runtime_name.clone(), v.ty, v.list));
                let brackets = if list { "[]" } else { "" };
                self.print(&format!("{}{brackets} {name}", ty.jvm_name()));
                if let Some(value) = value {
                    let value = self.expression(value);
                    self.print(&format!(" = {value}"));
                }
                self.print(";");
            },
            Statement::Assignment { receiver, value, .. } => {
                let receiver = self.expression(receiver);
                let value = self.expression(value);
                self.print(&format!("{receiver} = {value};"));
            },
            Statement::If { condition,
                            then_statements,
                            else_statements,
                            .. } => {
                let condition = self.expression(condition);
                self.print(&format!("if ({condition}) {{"));
                self.block(then_statements);
                if !else_statements.is_empty() {
                    self.line("} else {");
                    self.block(else_statements);
                }
                self.line("}");
            },
            Statement::Switch { condition, cases, .. } => {
                let condition = self.expression(condition);
                self.print(&format!("switch ({condition}) {{"));
                self.indent += 1;
                for case in cases {
                    self.newline(self.indent);
                    self.case(case);
                }
                self.indent -= 1;
                self.line("}");
            },
            Statement::While { condition,
                               statements,
                               .. } => {
                let condition = self.expression(condition);
                self.print(&format!("while ({condition}) {{"));
                self.block(statements);
                self.line("}");
            },
            Statement::Return { value, .. } => {
                let value = self.expression(value);
                self.print(&format!("return {value};"));
            },
        }
    }

    fn case(&mut self, case: &Case) {
        match &case.value {
            Some(value) => {
                let value = self.expression(value);
                self.print(&format!("case {value}:"));
                self.block(&case.statements);
                self.indent += 1;
                self.line("break;");
                self.indent -= 1;
            },
            None => {
                self.print("default:");
                self.block(&case.statements);
            },
        }
    }

    fn expression(&self, expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::Literal(literal) => literal_text(literal),
            ExprKind::Group(inner) => format!("({})", self.expression(inner)),
            ExprKind::Binary { operator: BinaryOperator::Pow,
                               left,
                               right, } => {
                let call = format!("Math.pow({}, {})", self.expression(left), self.expression(right));
                if self.analysis.type_of(expr.id) == Some(Type::Integer) {
                    format!("(int) {call}")
                } else {
                    call
                }
            },
            ExprKind::Binary { operator,
                               left,
                               right, } => {
                format!("{} {operator} {}", self.expression(left), self.expression(right))
            },
            ExprKind::Access { name, index } => {
                let name = self.analysis
                               .variable(expr.id)
                               .map_or_else(|| mangle(name), |v| v.runtime_name.clone());
                match index {
                    Some(index) => format!("{name}[{}]", self.expression(index)),
                    None => name,
                }
            },
            ExprKind::Call { name, arguments } => {
                let name = self.analysis
                               .function(expr.id)
                               .map_or_else(|| mangle(name), |f| f.runtime_name.clone());
                format!("{name}({})", self.expressions(arguments))
            },
            ExprKind::List(elements) => format!("{{{}}}", self.expressions(elements)),
        }
    }

    fn expressions(&self, exprs: &[Expr]) -> String {
        exprs.iter()
             .map(|expr| self.expression(expr))
             .collect::<Vec<_>>()
             .join(", ")
    }
}

/// Formats a literal as Java source, re-escaping text.
fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Nil => "null".to_string(),
        Literal::Boolean(b) => b.to_string(),
        Literal::Integer(n) => n.to_string(),
        Literal::Decimal(d) => Value::Decimal(d.clone()).to_string(),
        Literal::Character(c) => format!("'{}'", escape(&c.to_string())),
        Literal::String(s) => format!("\"{}\"", escape(s)),
    }
}

/// Escapes text for a Java character or string literal.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\u{8}' => escaped.push_str("\\b"),
            other => escaped.push(other),
        }
    }
    escaped
}
