#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token text encountered.
        found:    String,
        /// Offset of the offending token.
        offset:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Offset just past the last token.
        offset:   usize,
    },
    /// A block with no statements.
    EmptyBlock {
        /// Offset of the token that closed the block.
        offset: usize,
    },
    /// The program declares no function.
    MissingFunction {
        /// Offset where a function was expected.
        offset: usize,
    },
    /// A numeric literal that could not be converted to a value.
    InvalidLiteral {
        /// The literal text.
        literal: String,
        /// Offset of the literal.
        offset:  usize,
    },
}

impl ParseError {
    /// Offset of the token that caused the error.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset, .. }
            | Self::EmptyBlock { offset }
            | Self::MissingFunction { offset }
            | Self::InvalidLiteral { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    offset, } => write!(f,
                                                        "Error at offset {offset}: Expected {expected}, found '{found}'."),
            Self::UnexpectedEndOfInput { expected, offset } => write!(f,
                                                                      "Error at offset {offset}: Expected {expected}, found end of input."),
            Self::EmptyBlock { offset } => {
                write!(f, "Error at offset {offset}: Block must contain at least one statement.")
            },
            Self::MissingFunction { offset } => {
                write!(f, "Error at offset {offset}: Program must define at least one function.")
            },
            Self::InvalidLiteral { literal, offset } => {
                write!(f, "Error at offset {offset}: Invalid literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
