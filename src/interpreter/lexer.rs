use log::debug;
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::lexer::literal::{LexFault, scan_character, scan_string},
};

/// Character-class lookahead over the raw source.
///
/// Provides the `peek`/`eat` primitives used by the literal scanners.
pub mod chars;
/// Scanners for character and string literal bodies.
pub mod literal;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// Keywords are not distinguished from identifiers here; the parser matches
/// them by their text. Whitespace is skipped and never produces a token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\n\x08]+")]
pub enum TokenKind {
    /// Names and keywords, such as `x`, `@count` or `to-string`.
    #[regex(r"[A-Za-z@][A-Za-z0-9_-]*")]
    Identifier,
    /// Integer literals such as `0`, `42` or `-7`.
    #[regex(r"-?[1-9][0-9]*")]
    #[token("0")]
    Integer,
    /// Decimal literals such as `0.5` or `-12.25`.
    #[regex(r"-?(0|[1-9][0-9]*)\.[0-9]+")]
    Decimal,
    /// Character literals such as `'a'` or `'\n'`.
    #[token("'", scan_character)]
    Character,
    /// String literals such as `"hello\tworld"`.
    #[token("\"", scan_string)]
    String,
    /// `==`, `!=`, `&&`, `||` or any other single character.
    #[regex(r"==|!=|&&|\|\|")]
    #[regex(r#"[^ \t\r\n\x08A-Za-z0-9@'"]"#)]
    Operator,
}

/// A lexical token.
///
/// Holds the raw source text of the token (quotes included for literals) and
/// the character offset of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind:   TokenKind,
    /// The exact source text.
    pub text:   String,
    /// Character offset of the token in the source.
    pub offset: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self { kind,
               text: text.into(),
               offset }
    }
}

/// Tokenizes source text.
///
/// Scans the input left to right using maximal munch, skipping whitespace.
/// Fails on the first malformed literal, reporting the offset of the
/// offending character rather than the start of the token.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The tokens in source order.
///
/// # Example
/// ```
/// use plc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("LET x = -1.5;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Identifier,
///             TokenKind::Operator,
///             TokenKind::Decimal,
///             TokenKind::Operator]);
/// assert_eq!(tokens[3].offset, 8);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer(source);
    let mut offsets = CharOffsets::new(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), offsets.at(span.start))),
            Err(fault) => return Err(fault.into_error(source, span.start, &mut offsets)),
        }
    }

    debug!("tokenized {} token(s)", tokens.len());
    Ok(tokens)
}

/// Converts byte offsets into character offsets.
///
/// Offsets are requested in increasing order while scanning, so the
/// conversion only counts the characters between two consecutive requests.
pub(crate) struct CharOffsets<'s> {
    source: &'s str,
    byte:   usize,
    chars:  usize,
}

impl<'s> CharOffsets<'s> {
    const fn new(source: &'s str) -> Self {
        Self { source,
               byte: 0,
               chars: 0 }
    }

    /// Returns the character offset of the given byte offset.
    pub(crate) fn at(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        let byte = byte.min(self.source.len());
        self.chars += self.source
                          .get(self.byte..byte)
                          .map_or(0, |slice| slice.chars().count());
        self.byte = byte;
        self.chars
    }
}
