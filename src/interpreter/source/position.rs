/// A location in the source text.
///
/// Offsets count characters from the start of the input. Lines start at 1 and
/// columns at 0; consuming a newline moves to column 0 of the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Number of characters before this position.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 0.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::source::Position;
    ///
    /// let start = Position::start();
    /// let next = start.next_char().next_line();
    ///
    /// assert_eq!(next.offset, 2);
    /// assert_eq!(next.line, 2);
    /// assert_eq!(next.column, 0);
    /// ```
    #[must_use]
    pub const fn start() -> Self {
        Self { offset: 0,
               line:   1,
               column: 0, }
    }

    /// Position after consuming an ordinary character.
    #[must_use]
    pub const fn next_char(self) -> Self {
        Self { offset: self.offset + 1,
               column: self.column + 1,
               ..self }
    }

    /// Position after consuming a newline.
    #[must_use]
    pub const fn next_line(self) -> Self {
        Self { offset: self.offset + 1,
               line:   self.line + 1,
               column: 0, }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
