use crate::{
    error::SourceError,
    interpreter::source::{END_OF_INPUT, Position, Source, SourceChar},
};

/// A source reading from text held in memory.
///
/// # Example
/// ```
/// use matlang::interpreter::source::{Source, StringSource};
///
/// let mut source = StringSource::new("ab");
/// assert_eq!(source.current().character, 'a');
/// assert_eq!(source.advance().unwrap().character, 'b');
/// assert!(source.advance().unwrap().is_end());
/// assert!(source.advance().unwrap().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct StringSource {
    characters: Vec<char>,
    index:      usize,
    current:    SourceChar,
}

impl StringSource {
    /// Opens a source over `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let characters: Vec<char> = text.chars().collect();
        let character = characters.first().copied().unwrap_or(END_OF_INPUT);

        Self { characters,
               index: 0,
               current: SourceChar { character,
                                     position: Position::start() } }
    }
}

impl Source for StringSource {
    fn current(&self) -> SourceChar {
        self.current
    }

    fn advance(&mut self) -> Result<SourceChar, SourceError> {
        if self.current.is_end() {
            return Ok(self.current);
        }

        self.index += 1;
        let position = self.current.following_position();
        let character = self.characters.get(self.index).copied().unwrap_or(END_OF_INPUT);
        self.current = SourceChar { character, position };

        Ok(self.current)
    }

    fn close(&mut self) {
        self.index = self.characters.len();
        self.current.character = END_OF_INPUT;
    }
}
