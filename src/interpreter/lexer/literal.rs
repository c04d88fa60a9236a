use logos::Lexer;

use crate::{
    error::LexError,
    interpreter::lexer::{
        CharOffsets, TokenKind,
        chars::{CharStream, any, backslash, double_quote, escape, line_break, single_quote},
    },
};

/// Failure raised while scanning a single token.
///
/// Offsets are byte offsets into the source; [`LexFault::into_error`]
/// converts them into the character offsets carried by [`LexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFault {
    /// No token pattern matched.
    #[default]
    Unrecognized,
    /// The literal ended before its closing quote.
    Unterminated(usize),
    /// A backslash followed by an unknown escape character.
    InvalidEscape(usize),
    /// A raw line break inside the literal.
    LineBreak(usize),
    /// `''`
    EmptyCharacter(usize),
}

impl LexFault {
    /// Converts the fault into a [`LexError`] positioned at the offending
    /// character.
    pub(crate) fn into_error(self,
                             source: &str,
                             token_start: usize,
                             offsets: &mut CharOffsets<'_>)
                             -> LexError {
        match self {
            Self::Unrecognized => {
                let character = source.get(token_start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or_default();
                LexError::UnexpectedCharacter { character,
                                                offset: offsets.at(token_start) }
            },
            Self::Unterminated(byte) => LexError::UnterminatedLiteral { offset: offsets.at(byte) },
            Self::InvalidEscape(byte) => LexError::InvalidEscape { offset: offsets.at(byte) },
            Self::LineBreak(byte) => LexError::LineBreakInLiteral { offset: offsets.at(byte) },
            Self::EmptyCharacter(byte) => LexError::EmptyCharacter { offset: offsets.at(byte) },
        }
    }
}

/// Scans the body of a character literal after its opening quote.
///
/// The body is exactly one character or one escape sequence, followed by the
/// closing quote.
pub fn scan_character(lex: &mut Lexer<'_, TokenKind>) -> Result<(), LexFault> {
    let mut chars = CharStream::new(lex.remainder(), lex.span().end);

    if chars.peek(&[single_quote]) {
        return Err(LexFault::EmptyCharacter(chars.offset()));
    }
    scan_element(&mut chars)?;
    if !chars.eat(&[single_quote]) {
        return Err(unclosed(&chars));
    }

    lex.bump(chars.consumed());
    Ok(())
}

/// Scans the body of a string literal after its opening quote.
///
/// The body is any number of characters or escape sequences, followed by
/// the closing quote.
pub fn scan_string(lex: &mut Lexer<'_, TokenKind>) -> Result<(), LexFault> {
    let mut chars = CharStream::new(lex.remainder(), lex.span().end);

    while !chars.eat(&[double_quote]) {
        scan_element(&mut chars)?;
    }

    lex.bump(chars.consumed());
    Ok(())
}

/// Consumes one literal character or one escape sequence.
fn scan_element(chars: &mut CharStream<'_>) -> Result<(), LexFault> {
    if chars.eat(&[backslash]) {
        if chars.eat(&[escape]) {
            return Ok(());
        }
        return Err(if chars.is_empty() {
                       LexFault::Unterminated(chars.offset())
                   } else {
                       LexFault::InvalidEscape(chars.offset())
                   });
    }
    if chars.peek(&[line_break]) {
        return Err(LexFault::LineBreak(chars.offset()));
    }
    if chars.eat(&[any]) {
        return Ok(());
    }
    Err(LexFault::Unterminated(chars.offset()))
}

/// The fault for a literal missing its closing quote.
fn unclosed(chars: &CharStream<'_>) -> LexFault {
    if chars.peek(&[line_break]) {
        LexFault::LineBreak(chars.offset())
    } else {
        LexFault::Unterminated(chars.offset())
    }
}
