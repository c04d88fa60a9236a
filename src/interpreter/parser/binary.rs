use crate::{
    ast::{BinaryOperator, Expr, ExprKind},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This begins at the lowest-precedence level, the logical operators, and
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := logical`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_logical()
    }

    /// Parses `&&` and `||` chains.
    ///
    /// Both operators share one level and fold left to right, so
    /// `a || b && c` parses as `(a || b) && c`.
    ///
    /// The rule is: `logical := comparison (("&&" | "||") comparison)*`
    pub fn parse_logical(&mut self) -> ParseResult<Expr> {
        self.parse_level(&[BinaryOperator::And, BinaryOperator::Or],
                         Self::parse_comparison)
    }

    /// Parses equality and relational expressions.
    ///
    /// The rule is: `comparison := additive (("==" | "!=" | "<" | ">") additive)*`
    pub fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_level(&[BinaryOperator::Equal,
                           BinaryOperator::NotEqual,
                           BinaryOperator::Less,
                           BinaryOperator::Greater],
                         Self::parse_additive)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_level(&[BinaryOperator::Add, BinaryOperator::Sub],
                         Self::parse_multiplicative)
    }

    /// Parses multiplication-level expressions.
    ///
    /// `^` binds like `*` and `/` and is left-associative too:
    /// `2 ^ 3 ^ 2` parses as `(2 ^ 3) ^ 2`.
    ///
    /// The rule is: `multiplicative := primary (("*" | "/" | "^") primary)*`
    pub fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_level(&[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Pow],
                         Self::parse_primary)
    }

    /// Parses one precedence level.
    ///
    /// Reads an operand with `operand`, then keeps folding
    /// `left op operand` into a new left operand while the next token is one
    /// of `operators`.
    fn parse_level(&mut self,
                   operators: &[BinaryOperator],
                   operand: fn(&mut Self) -> ParseResult<Expr>)
                   -> ParseResult<Expr> {
        let mut left = operand(self)?;
        while let Some(operator) = self.eat_operator(operators) {
            let right = operand(self)?;
            left = Expr { id:     self.node_id(),
                          offset: left.offset,
                          kind:   ExprKind::Binary { operator,
                                                     left: Box::new(left),
                                                     right: Box::new(right) }, };
        }
        Ok(left)
    }

    /// Consumes the next token if it is one of `operators`.
    fn eat_operator(&mut self, operators: &[BinaryOperator]) -> Option<BinaryOperator> {
        if self.peek_kind(TokenKind::Operator)
           && let Some(token) = self.current()
           && let Some(operator) = BinaryOperator::from_symbol(&token.text)
           && operators.contains(&operator)
        {
            self.advance();
            return Some(operator);
        }
        None
    }
}
