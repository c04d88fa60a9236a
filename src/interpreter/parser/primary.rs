use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    ast::{Expr, ExprKind, Literal},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            utils::{decode_literal, invalid_literal, is_keyword},
        },
    },
};

impl Parser<'_> {
    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "NIL" | "TRUE" | "FALSE"
    ///              | integer | decimal | character | string
    ///              | "(" expression ")"
    ///              | identifier ("(" arguments? ")" | "[" expression "]")?
    /// ```
    ///
    /// Numeric literals become arbitrary-precision values and escapes in
    /// character and string literals are decoded here.
    ///
    /// # Returns
    /// The parsed expression node.
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.current() else {
            return Err(self.unexpected("expression"));
        };
        let offset = token.offset;

        let kind = match token.kind {
            TokenKind::Identifier if token.text == "NIL" => ExprKind::Literal(Literal::Nil),
            TokenKind::Identifier if token.text == "TRUE" => ExprKind::Literal(Literal::Boolean(true)),
            TokenKind::Identifier if token.text == "FALSE" => {
                ExprKind::Literal(Literal::Boolean(false))
            },
            TokenKind::Integer => {
                let value = BigInt::from_str(&token.text).map_err(|_| invalid_literal(&token.text, offset))?;
                ExprKind::Literal(Literal::Integer(value))
            },
            TokenKind::Decimal => {
                let value = BigDecimal::from_str(&token.text).map_err(|_| invalid_literal(&token.text, offset))?;
                ExprKind::Literal(Literal::Decimal(value))
            },
            TokenKind::Character => {
                let decoded = decode_literal(&token.text);
                let mut chars = decoded.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => ExprKind::Literal(Literal::Character(c)),
                    _ => return Err(invalid_literal(&token.text, offset)),
                }
            },
            TokenKind::String => ExprKind::Literal(Literal::String(decode_literal(&token.text))),
            TokenKind::Operator if token.text == "(" => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(")")?;
                return Ok(Expr { id: self.node_id(),
                                 offset,
                                 kind: ExprKind::Group(Box::new(inner)) });
            },
            TokenKind::Identifier if !is_keyword(&token.text) => return self.parse_name(),
            _ => return Err(self.unexpected("expression")),
        };

        self.advance();
        Ok(Expr { id: self.node_id(),
                  offset,
                  kind })
    }

    /// Parses an identifier that starts a variable access, an indexed access
    /// or a call.
    ///
    /// A `(` directly after the name makes it a call and a `[` makes it an
    /// indexed access; otherwise it is a plain access.
    fn parse_name(&mut self) -> ParseResult<Expr> {
        let (name, offset) = self.parse_identifier()?;

        let kind = if self.eat(&["("]) {
            let arguments = self.parse_comma_separated(Self::parse_expression, ")")?;
            ExprKind::Call { name,
                             arguments }
        } else if self.eat(&["["]) {
            let index = self.parse_expression()?;
            self.expect("]")?;
            ExprKind::Access { name,
                               index: Some(Box::new(index)) }
        } else {
            ExprKind::Access { name,
                               index: None }
        };

        Ok(Expr { id: self.node_id(),
                  offset,
                  kind })
    }
}
