#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Offset of the character in the source.
        offset:    usize,
    },
    /// A character or string literal was not closed before the end of its
    /// body.
    UnterminatedLiteral {
        /// Offset of the character where the closing quote was expected.
        offset: usize,
    },
    /// A backslash was followed by a character that is not a recognized
    /// escape.
    InvalidEscape {
        /// Offset of the character following the backslash.
        offset: usize,
    },
    /// A raw line break appeared inside a literal.
    LineBreakInLiteral {
        /// Offset of the line break.
        offset: usize,
    },
    /// A character literal with no body (`''`).
    EmptyCharacter {
        /// Offset of the second quote.
        offset: usize,
    },
}

impl LexError {
    /// Offset of the character that caused the error.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::UnterminatedLiteral { offset }
            | Self::InvalidEscape { offset }
            | Self::LineBreakInLiteral { offset }
            | Self::EmptyCharacter { offset } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Unexpected character {character:?}.")
            },
            Self::UnterminatedLiteral { offset } => {
                write!(f, "Error at offset {offset}: Unterminated literal.")
            },
            Self::InvalidEscape { offset } => {
                write!(f, "Error at offset {offset}: Invalid escape sequence.")
            },
            Self::LineBreakInLiteral { offset } => {
                write!(f, "Error at offset {offset}: Line break inside literal.")
            },
            Self::EmptyCharacter { offset } => {
                write!(f, "Error at offset {offset}: Empty character literal.")
            },
        }
    }
}

impl std::error::Error for LexError {}
