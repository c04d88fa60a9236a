use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Words reserved by the grammar. They are lexed as identifiers but can never
/// name a variable, function or parameter.
pub const KEYWORDS: [&str; 17] = ["VAL", "VAR", "LIST", "FUN", "LET", "IF", "DO", "ELSE", "END",
                                  "WHILE", "SWITCH", "CASE", "DEFAULT", "RETURN", "NIL", "TRUE",
                                  "FALSE"];

/// Checks whether a word is reserved.
///
/// # Example
/// ```
/// use plc::interpreter::parser::utils::is_keyword;
///
/// assert!(is_keyword("WHILE"));
/// assert!(!is_keyword("while"));
/// ```
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// Used for argument and parameter lists. An immediately encountered
    /// closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `parse_item`: Rule used to parse each element.
    /// - `closing`: The token text that terminates the list (e.g. `)`).
    ///
    /// # Returns
    /// The parsed items.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: &str)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.eat(&[closing]) {
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            if self.eat(&[","]) {
                continue;
            }
            if self.eat(&[closing]) {
                break;
            }
            return Err(self.unexpected(&format!("',' or '{closing}'")));
        }
        Ok(items)
    }

    /// Parses a name that is not a keyword.
    ///
    /// # Returns
    /// The identifier text and its offset.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self)
                                                           -> ParseResult<(String, usize)> {
        if self.peek_kind(TokenKind::Identifier)
           && let Some(token) = self.current()
           && !is_keyword(&token.text)
        {
            self.advance();
            return Ok((token.text.clone(), token.offset));
        }
        Err(self.unexpected("identifier"))
    }

    /// Parses `: Type` if present.
    pub(in crate::interpreter::parser) fn parse_type_annotation(&mut self)
                                                                -> ParseResult<Option<String>> {
        if self.eat(&[":"]) {
            let (name, _) = self.parse_identifier()?;
            return Ok(Some(name));
        }
        Ok(None)
    }
}

/// Removes the surrounding quotes of a character or string literal and
/// decodes its escape sequences.
///
/// The lexer only lets the escapes `\b \n \r \t \' \" \\` through, so every
/// backslash here starts one of them.
///
/// # Example
/// ```
/// use plc::interpreter::parser::utils::decode_literal;
///
/// assert_eq!(decode_literal(r#""a\tb""#), "a\tb");
/// assert_eq!(decode_literal(r"'\''"), "'");
/// ```
#[must_use]
pub fn decode_literal(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();

    let mut decoded = String::with_capacity(text.len());
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => decoded.push('\u{8}'),
            Some('n') => decoded.push('\n'),
            Some('r') => decoded.push('\r'),
            Some('t') => decoded.push('\t'),
            Some(other) => decoded.push(other),
            None => decoded.push('\\'),
        }
    }
    decoded
}

/// Builds the error for a literal that the lexer accepted but that does not
/// convert to a value.
pub(in crate::interpreter::parser) fn invalid_literal(text: &str, offset: usize) -> ParseError {
    ParseError::InvalidLiteral { literal: text.to_string(),
                                 offset }
}
