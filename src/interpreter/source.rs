/// Positions inside the source text.
pub mod position;
/// In-memory source backed by a string.
pub mod string;
/// File-backed source.
pub mod file;
/// Source reading from a single accepted TCP connection.
pub mod socket;

pub use file::FileSource;
pub use position::Position;
pub use socket::SocketSource;
pub use string::StringSource;

use crate::error::SourceError;

/// Character returned once a source has no more input.
pub const END_OF_INPUT: char = '\0';

/// A character together with the position it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceChar {
    /// The character, or [`END_OF_INPUT`] once the source is exhausted.
    pub character: char,
    /// Where the character sits in the input.
    pub position:  Position,
}

impl SourceChar {
    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.character == END_OF_INPUT
    }

    /// Position of the character that follows this one.
    #[must_use]
    pub const fn following_position(&self) -> Position {
        if self.character == '\n' {
            self.position.next_line()
        } else {
            self.position.next_char()
        }
    }
}

/// A cursor over characters consumed by the lexer.
///
/// Opening happens in the implementation's constructor. The cursor always
/// points at one current character; [`Source::advance`] moves it forward and
/// returns the new current character. Once the input is exhausted the current
/// character is [`END_OF_INPUT`] and further calls keep returning it.
pub trait Source {
    /// Returns the current character without consuming it.
    fn current(&self) -> SourceChar;

    /// Consumes the current character and returns the next one.
    fn advance(&mut self) -> Result<SourceChar, SourceError>;

    /// Releases the underlying resource. Later reads yield end of input.
    fn close(&mut self) {}
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn current(&self) -> SourceChar {
        (**self).current()
    }

    fn advance(&mut self) -> Result<SourceChar, SourceError> {
        (**self).advance()
    }

    fn close(&mut self) {
        (**self).close();
    }
}
