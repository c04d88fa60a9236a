use crate::{
    ast::{Case, Statement},
    error::ParseError,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses statements until one of `terminators` is next.
    ///
    /// The terminator itself is left for the caller to consume. A block must
    /// hold at least one statement; running out of tokens before a terminator
    /// is an end-of-input error.
    ///
    /// # Parameters
    /// - `terminators`: Keywords that close the block, e.g. `["ELSE", "END"]`.
    ///
    /// # Returns
    /// The statements of the block in source order.
    pub fn parse_block(&mut self, terminators: &[&str]) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.peek_one_of(terminators) {
            if self.current().is_none() {
                let expected = terminators.iter()
                                          .map(|t| format!("'{t}'"))
                                          .collect::<Vec<_>>()
                                          .join(" or ");
                return Err(self.unexpected(&expected));
            }
            statements.push(self.parse_statement()?);
        }

        if statements.is_empty() {
            return Err(ParseError::EmptyBlock { offset: self.offset() });
        }
        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// The leading keyword selects the rule. Anything else is an expression,
    /// which becomes an assignment if `=` follows it.
    ///
    /// Grammar:
    /// ```text
    ///     statement := declaration | switch | if | while | return
    ///                | expression ("=" expression)? ";"
    /// ```
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let offset = self.offset();

        if self.eat(&["LET"]) {
            return self.parse_declaration(offset);
        }
        if self.eat(&["SWITCH"]) {
            return self.parse_switch(offset);
        }
        if self.eat(&["IF"]) {
            return self.parse_if(offset);
        }
        if self.eat(&["WHILE"]) {
            return self.parse_while(offset);
        }
        if self.eat(&["RETURN"]) {
            let value = self.parse_expression()?;
            self.expect(";")?;
            return Ok(Statement::Return { value,
                                          offset });
        }

        let expr = self.parse_expression()?;
        if self.eat(&["="]) {
            let value = self.parse_expression()?;
            self.expect(";")?;
            return Ok(Statement::Assignment { receiver: expr,
                                              value,
                                              offset });
        }
        self.expect(";")?;
        Ok(Statement::Expression { expr,
                                   offset })
    }

    /// Grammar: `declaration := "LET" identifier (":" identifier)? ("=" expression)? ";"`
    fn parse_declaration(&mut self, offset: usize) -> ParseResult<Statement> {
        let id = self.node_id();
        let (name, _) = self.parse_identifier()?;
        let type_name = self.parse_type_annotation()?;
        let value = if self.eat(&["="]) { Some(self.parse_expression()?) } else { None };
        self.expect(";")?;

        Ok(Statement::Declaration { id,
                                    name,
                                    type_name,
                                    value,
                                    offset })
    }

    /// Parses a `SWITCH` statement.
    ///
    /// Grammar:
    /// ```text
    ///     switch := "SWITCH" expression ("CASE" expression ":" block)* "DEFAULT" block "END"
    /// ```
    ///
    /// The `DEFAULT` arm is stored last in the case list with no value.
    fn parse_switch(&mut self, offset: usize) -> ParseResult<Statement> {
        let condition = self.parse_expression()?;

        let mut cases = Vec::new();
        while self.peek(&["CASE"]) {
            let case_offset = self.offset();
            self.advance();
            let value = self.parse_expression()?;
            self.expect(":")?;
            let statements = self.parse_block(&["CASE", "DEFAULT", "END"])?;
            cases.push(Case { value: Some(value),
                              statements,
                              offset: case_offset });
        }

        let default_offset = self.offset();
        self.expect("DEFAULT")?;
        let statements = self.parse_block(&["END"])?;
        cases.push(Case { value: None,
                          statements,
                          offset: default_offset });
        self.expect("END")?;

        Ok(Statement::Switch { condition,
                               cases,
                               offset })
    }

    /// Grammar: `if := "IF" expression "DO" block ("ELSE" block)? "END"`
    fn parse_if(&mut self, offset: usize) -> ParseResult<Statement> {
        let condition = self.parse_expression()?;
        self.expect("DO")?;
        let then_statements = self.parse_block(&["ELSE", "END"])?;

        let else_statements = if self.eat(&["ELSE"]) { self.parse_block(&["END"])? } else { Vec::new() };
        self.expect("END")?;

        Ok(Statement::If { condition,
                           then_statements,
                           else_statements,
                           offset })
    }

    /// Grammar: `while := "WHILE" expression "DO" block "END"`
    fn parse_while(&mut self, offset: usize) -> ParseResult<Statement> {
        let condition = self.parse_expression()?;
        self.expect("DO")?;
        let statements = self.parse_block(&["END"])?;
        self.expect("END")?;

        Ok(Statement::While { condition,
                              statements,
                              offset })
    }
}
