/// Character source errors.
///
/// Raised by the file, string and socket sources before or while characters
/// are handed to the lexer: missing paths, failed binds and failed reads.
pub mod source_error;
/// Lexical errors.
///
/// Raised by the lexer for malformed literals, inconsistent indentation and
/// numeric overflow. Every variant carries the position of the fault.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines the single grammar violation the parser reports,
/// `UnexpectedToken`, and wraps lexical errors surfaced while pulling tokens.
pub mod parse_error;
/// Semantic errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, unsupported operand types, division by zero, singular matrices and
/// illegal assignments.
pub mod semantic_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use semantic_error::SemanticError;
pub use source_error::SourceError;

/// Any failure of a complete run, from opening the source to evaluation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The character source could not be opened or read.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The lexer rejected the input.
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}
