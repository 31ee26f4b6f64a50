use crate::{
    error::LexicalError,
    interpreter::{lexer::token::TokenKind, source::Position},
};

/// Represents all errors that can occur during parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    #[error("Error at {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar expected.
        expected: String,
        /// The kind of the token actually found.
        found:    TokenKind,
        /// Position of the token actually found.
        position: Position,
    },
    /// The lexer failed while the parser requested the next token.
    #[error(transparent)]
    Lexical(#[from] LexicalError),
}
