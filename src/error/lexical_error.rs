use crate::{error::SourceError, interpreter::source::Position};

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, thiserror::Error)]
pub enum LexicalError {
    /// A string literal, identifier, number or comment reached the length
    /// limit.
    #[error("Error at {position}: Literal is too long, the limit is {limit} characters.")]
    TooLongLiteral {
        /// The maximum accepted length.
        limit:    usize,
        /// Start of the offending literal.
        position: Position,
    },
    /// A string literal is unterminated or contains an invalid character.
    #[error("Error at {position}: Malformed string literal: {details}.")]
    MalformedStringLiteral {
        /// What is wrong with the literal.
        details:  String,
        /// Position of the fault.
        position: Position,
    },
    /// Indentation mixes spaces and tabs or dedents to an unknown level.
    #[error("Error at {position}: Inconsistent indentation.")]
    InconsistentIndentation {
        /// Position of the offending line.
        position: Position,
    },
    /// A numeric literal does not fit its representation.
    #[error("Error at {position}: Numeric literal is out of range.")]
    IntegerOverflow {
        /// Start of the offending literal.
        position: Position,
    },
    /// The underlying source failed while the lexer pulled a character.
    #[error(transparent)]
    Source(#[from] SourceError),
}
