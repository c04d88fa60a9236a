use crate::{
    ast::{Expr, ExprKind, Function, Global, Parameter},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses one global declaration, including its trailing `;`.
    ///
    /// Grammar:
    /// ```text
    ///     global    := (list | mutable | immutable) ";"
    ///     list      := "LIST" identifier ":" identifier "=" "[" expression ("," expression)* "]"
    ///     mutable   := "VAR" identifier (":" identifier)? ("=" expression)?
    ///     immutable := "VAL" identifier (":" identifier)? "=" expression
    /// ```
    ///
    /// # Returns
    /// The parsed [`Global`]. `LIST` globals are mutable and carry an
    /// [`ExprKind::List`] initializer.
    pub fn parse_global(&mut self) -> ParseResult<Global> {
        let offset = self.offset();
        let id = self.node_id();

        let global = if self.eat(&["LIST"]) {
            let (name, _) = self.parse_identifier()?;
            self.expect(":")?;
            let (type_name, _) = self.parse_identifier()?;
            self.expect("=")?;
            let value = self.parse_list_literal()?;
            Global { id,
                     name,
                     mutable: true,
                     type_name: Some(type_name),
                     value: Some(value),
                     offset }
        } else if self.eat(&["VAR"]) {
            let (name, _) = self.parse_identifier()?;
            let type_name = self.parse_type_annotation()?;
            let value = if self.eat(&["="]) { Some(self.parse_expression()?) } else { None };
            Global { id,
                     name,
                     mutable: true,
                     type_name,
                     value,
                     offset }
        } else {
            self.expect("VAL")?;
            let (name, _) = self.parse_identifier()?;
            let type_name = self.parse_type_annotation()?;
            self.expect("=")?;
            let value = self.parse_expression()?;
            Global { id,
                     name,
                     mutable: false,
                     type_name,
                     value: Some(value),
                     offset }
        };

        self.expect(";")?;
        Ok(global)
    }

    /// Parses the bracketed initializer of a `LIST` global.
    fn parse_list_literal(&mut self) -> ParseResult<Expr> {
        let offset = self.offset();
        let id = self.node_id();
        self.expect("[")?;

        let mut elements = vec![self.parse_expression()?];
        while self.eat(&[","]) {
            elements.push(self.parse_expression()?);
        }
        self.expect("]")?;

        Ok(Expr { id,
                  offset,
                  kind: ExprKind::List(elements) })
    }

    /// Parses a function definition.
    ///
    /// Grammar:
    /// ```text
    ///     function  := "FUN" identifier "(" parameters? ")" (":" identifier)? "DO" block "END"
    ///     parameter := identifier ":" identifier
    /// ```
    ///
    /// # Returns
    /// The parsed [`Function`]. A missing return annotation is left as `None`.
    pub fn parse_function(&mut self) -> ParseResult<Function> {
        let offset = self.offset();
        let id = self.node_id();
        self.expect("FUN")?;

        let (name, _) = self.parse_identifier()?;
        self.expect("(")?;
        let parameters = self.parse_comma_separated(Self::parse_parameter, ")")?;
        let return_type_name = self.parse_type_annotation()?;

        self.expect("DO")?;
        let statements = self.parse_block(&["END"])?;
        self.expect("END")?;

        Ok(Function { id,
                      name,
                      parameters,
                      return_type_name,
                      statements,
                      offset })
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let id = self.node_id();
        let (name, offset) = self.parse_identifier()?;
        self.expect(":")?;
        let (type_name, _) = self.parse_identifier()?;

        Ok(Parameter { id,
                       name,
                       type_name,
                       offset })
    }
}
