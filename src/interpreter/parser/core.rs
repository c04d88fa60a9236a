use log::debug;

use crate::{
    ast::{NodeId, Source},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into a [`Source`] tree.
///
/// This is the entry point of the parser. The tokens are consumed left to
/// right by one function per grammar rule; the first grammar violation aborts
/// parsing.
///
/// Grammar: `source := global* function+`
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The parsed program.
///
/// # Example
/// ```
/// use plc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("VAR x = 1; FUN main(): Integer DO RETURN x; END").unwrap();
/// let source = parse(&tokens).unwrap();
///
/// assert_eq!(source.globals.len(), 1);
/// assert_eq!(source.functions[0].name, "main");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Source> {
    let source = Parser::new(tokens).parse_source()?;
    debug!("parsed {} global(s) and {} function(s)",
           source.globals.len(),
           source.functions.len());
    Ok(source)
}

/// Cursor over a token slice.
///
/// Grammar rules are implemented as methods on this type across the parser
/// submodules. Besides the cursor it hands out node ids, so every node of a
/// parsed tree gets a distinct one.
pub struct Parser<'t> {
    tokens:   &'t [Token],
    position: usize,
    next_id:  NodeId,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               position: 0,
               next_id: 0 }
    }

    /// Parses a whole program and requires every token to be consumed.
    pub fn parse_source(&mut self) -> ParseResult<Source> {
        let mut globals = Vec::new();
        while self.peek_one_of(&["LIST", "VAR", "VAL"]) {
            globals.push(self.parse_global()?);
        }

        let mut functions = Vec::new();
        while self.peek(&["FUN"]) {
            functions.push(self.parse_function()?);
        }

        if functions.is_empty() && self.current().is_none() {
            return Err(ParseError::MissingFunction { offset: self.offset() });
        }
        if self.current().is_some() {
            return Err(self.unexpected("'FUN'"));
        }

        Ok(Source { globals,
                    functions })
    }

    /// Returns the token under the cursor.
    pub(crate) fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// Returns the token under the cursor and moves past it.
    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Tests the upcoming tokens against `texts` without consuming anything.
    ///
    /// `peek(&["(", ")"])` is `true` only if the next two tokens are `(` and
    /// `)`, in that order.
    pub(crate) fn peek(&self, texts: &[&str]) -> bool {
        texts.iter().enumerate().all(|(i, text)| {
                                    self.tokens
                                        .get(self.position + i)
                                        .is_some_and(|token| token.text == *text)
                                })
    }

    /// Tests whether the next token is any one of `texts`.
    pub(crate) fn peek_one_of(&self, texts: &[&str]) -> bool {
        self.current()
            .is_some_and(|token| texts.contains(&token.text.as_str()))
    }

    /// Tests whether the next token has the given kind.
    pub(crate) fn peek_kind(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    /// Like [`Parser::peek`], but consumes the tokens on success.
    pub(crate) fn eat(&mut self, texts: &[&str]) -> bool {
        let matched = self.peek(texts);
        if matched {
            self.position += texts.len();
        }
        matched
    }

    /// Consumes the next token if its text is `text`, failing otherwise.
    pub(crate) fn expect(&mut self, text: &str) -> ParseResult<&'t Token> {
        if self.peek(&[text])
           && let Some(token) = self.advance()
        {
            return Ok(token);
        }
        Err(self.unexpected(&format!("'{text}'")))
    }

    /// Builds the error for a token that does not fit the grammar.
    ///
    /// At end of input the error points just past the last token.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                         found:    token.text.clone(),
                                                         offset:   token.offset, },
            None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       offset:   self.end_offset(), },
        }
    }

    /// Offset of the token under the cursor, or the end offset.
    pub(crate) fn offset(&self) -> usize {
        self.current().map_or_else(|| self.end_offset(), |token| token.offset)
    }

    /// Offset just past the last token.
    fn end_offset(&self) -> usize {
        self.tokens
            .last()
            .map_or(0, |token| token.offset + token.text.chars().count())
    }

    /// Allocates a fresh node id.
    pub(crate) const fn node_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
