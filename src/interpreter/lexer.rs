/// Token kinds, subtypes, payloads and the keyword table.
pub mod token;

mod literal;

use tracing::trace;

use crate::{
    error::LexicalError,
    interpreter::{
        lexer::token::{Subtype, Token, TokenKind, TokenValue},
        source::{END_OF_INPUT, Position, Source},
    },
};

/// Maximum length of string literals, identifiers, numbers and comments.
pub const MAX_LITERAL_LENGTH: usize = 2048;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexicalError>;

/// Turns a character source into tokens, one per call.
///
/// Block structure is derived from indentation. The lexer keeps a stack of
/// indentation strings whose bottom entry is always the empty string; a line
/// indented deeper than the top produces `OpenBlock`, a line indented less
/// produces one `CloseBlock` per closed level. Blank and comment-only lines are
/// skipped without touching the stack.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     lexer::{Lexer, token::TokenKind},
///     source::StringSource,
/// };
///
/// let mut lexer = Lexer::new(StringSource::new("if x:\n    y\n"));
/// let mut kinds = Vec::new();
/// loop {
///     let token = lexer.get_token().unwrap();
///     kinds.push(token.kind);
///     if token.kind == TokenKind::EndOfFile {
///         break;
///     }
/// }
///
/// assert_eq!(kinds,
///            vec![TokenKind::If,
///                 TokenKind::Identifier,
///                 TokenKind::Colon,
///                 TokenKind::NextLine,
///                 TokenKind::OpenBlock,
///                 TokenKind::Identifier,
///                 TokenKind::NextLine,
///                 TokenKind::CloseBlock,
///                 TokenKind::EndOfFile]);
/// ```
pub struct Lexer<S: Source> {
    source:           S,
    indent_stack:     Vec<String>,
    indent_character: Option<char>,
    line_start:       bool,
    line_has_content: bool,
    pending_closes:   usize,
    pending_token:    Option<Token>,
}

impl<S: Source> Lexer<S> {
    /// Creates a lexer reading from `source`.
    pub fn new(source: S) -> Self {
        Self { source,
               indent_stack: vec![String::new()],
               indent_character: None,
               line_start: true,
               line_has_content: false,
               pending_closes: 0,
               pending_token: None }
    }

    /// Produces the next token.
    ///
    /// Once the input is exhausted every open block is closed, and from then on
    /// each call returns `EndOfFile`. A `NextLine` is produced before the end
    /// of input if the last line had no trailing newline.
    ///
    /// # Errors
    /// Returns a [`LexicalError`] for malformed literals, inconsistent
    /// indentation, numeric overflow or a failing source.
    pub fn get_token(&mut self) -> LexResult<Token> {
        let token = self.next_token()?;

        match token.kind {
            TokenKind::NextLine => {
                self.line_start = true;
                self.line_has_content = false;
            },
            kind if kind.is_structural() => {},
            _ => self.line_has_content = true,
        }

        trace!(target: "matlang::lexer",
               kind = %token.kind,
               subtype = ?token.subtype,
               position = %token.position,
               "Produced token");
        Ok(token)
    }

    /// Number of currently open indentation levels.
    #[must_use]
    pub fn indent_depth(&self) -> usize {
        self.indent_stack.len() - 1
    }

    /// Closes the underlying source.
    pub fn close(&mut self) {
        self.source.close();
    }

    fn next_token(&mut self) -> LexResult<Token> {
        loop {
            if self.pending_closes > 0 {
                self.pending_closes -= 1;
                return Ok(Token::new(TokenKind::CloseBlock, self.source.current().position));
            }
            if let Some(token) = self.pending_token.take() {
                return Ok(token);
            }

            if self.line_start {
                let indentation = self.measure_indentation()?;
                let current = self.source.current();
                match current.character {
                    '\n' | '\r' => {
                        self.source.advance()?;
                        continue;
                    },
                    '#' => {
                        self.source.advance()?;
                        self.skip_comment(current.position)?;
                        continue;
                    },
                    '/' => {
                        self.source.advance()?;
                        if self.source.current().character == '/' {
                            self.source.advance()?;
                            self.skip_comment(current.position)?;
                            continue;
                        }
                        // No statement starts with '/'; the parser rejects it.
                        self.line_start = false;
                        self.check_indentation(&indentation, current.position)?;
                        let divide = Token::operator(TokenKind::Multiplicative,
                                                     Subtype::Divide,
                                                     current.position);
                        return match self.apply_indentation(&indentation, current.position)? {
                            Some(structural) => {
                                self.pending_token = Some(divide);
                                Ok(structural)
                            },
                            None => Ok(divide),
                        };
                    },
                    END_OF_INPUT => {},
                    _ => {
                        self.line_start = false;
                        self.check_indentation(&indentation, current.position)?;
                        if let Some(token) = self.apply_indentation(&indentation, current.position)? {
                            return Ok(token);
                        }
                    },
                }
            } else {
                self.skip_whitespace()?;
            }

            let current = self.source.current();
            let position = current.position;

            match current.character {
                END_OF_INPUT => return Ok(self.end_of_input(position)),
                '\n' => {
                    self.source.advance()?;
                    return Ok(Token::new(TokenKind::NextLine, position));
                },
                '"' | '\'' => return self.lex_string(),
                c if c.is_ascii_digit() => return self.lex_number(),
                c if c.is_alphabetic() => return self.lex_word(),
                '#' => {
                    self.source.advance()?;
                    self.skip_comment(position)?;
                },
                '/' => {
                    self.source.advance()?;
                    if self.source.current().character != '/' {
                        return Ok(Token::operator(TokenKind::Multiplicative,
                                                  Subtype::Divide,
                                                  position));
                    }
                    self.source.advance()?;
                    self.skip_comment(position)?;
                },
                _ => return self.lex_operator(),
            }
        }
    }

    /// Consumes the leading whitespace of a line and returns it.
    fn measure_indentation(&mut self) -> LexResult<String> {
        let mut indentation = String::new();

        loop {
            let character = self.source.current().character;
            if character != ' ' && character != '\t' {
                break;
            }
            indentation.push(character);
            self.source.advance()?;
        }

        Ok(indentation)
    }

    /// Rejects indentation mixing tabs and spaces.
    ///
    /// The first indented line with content fixes the indentation character
    /// for the rest of the input. Blank and comment-only lines are never
    /// checked.
    fn check_indentation(&mut self, indentation: &str, position: Position) -> LexResult<()> {
        for character in indentation.chars() {
            match self.indent_character {
                None => self.indent_character = Some(character),
                Some(chosen) if chosen != character => {
                    return Err(LexicalError::InconsistentIndentation { position });
                },
                Some(_) => {},
            }
        }
        Ok(())
    }

    /// Compares the indentation of a new line with the open blocks.
    fn apply_indentation(&mut self,
                         indentation: &str,
                         position: Position)
                         -> LexResult<Option<Token>> {
        let top = self.indent_stack.last().map_or(0, String::len);

        match indentation.len().cmp(&top) {
            std::cmp::Ordering::Equal => Ok(None),
            std::cmp::Ordering::Greater => {
                self.indent_stack.push(indentation.to_string());
                trace!(target: "matlang::lexer", depth = self.indent_depth(), "Opened block");
                Ok(Some(Token::new(TokenKind::OpenBlock, position)))
            },
            std::cmp::Ordering::Less => {
                let mut closed = 0;
                while self.indent_stack.len() > 1
                      && self.indent_stack.last().is_some_and(|top| top.len() > indentation.len())
                {
                    self.indent_stack.pop();
                    closed += 1;
                }

                if self.indent_stack.last().map_or(0, String::len) != indentation.len() {
                    return Err(LexicalError::InconsistentIndentation { position });
                }

                trace!(target: "matlang::lexer", closed, depth = self.indent_depth(), "Closed blocks");
                self.pending_closes = closed - 1;
                Ok(Some(Token::new(TokenKind::CloseBlock, position)))
            },
        }
    }

    /// Finishes the last line and closes every open block.
    fn end_of_input(&mut self, position: Position) -> Token {
        if self.line_has_content {
            return Token::new(TokenKind::NextLine, position);
        }

        let open = self.indent_depth();
        if open > 0 {
            self.indent_stack.truncate(1);
            self.pending_closes = open - 1;
            return Token::new(TokenKind::CloseBlock, position);
        }

        Token::new(TokenKind::EndOfFile, position)
    }

    fn skip_whitespace(&mut self) -> LexResult<()> {
        loop {
            let character = self.source.current().character;
            if character == '\n' || !character.is_whitespace() {
                return Ok(());
            }
            self.source.advance()?;
        }
    }

    /// Consumes one character if it equals `expected`.
    fn accept_char(&mut self, expected: char) -> LexResult<bool> {
        if self.source.current().character == expected {
            self.source.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn lex_operator(&mut self) -> LexResult<Token> {
        use Subtype::{
            Equal, Greater, GreaterEqual, Less, LessEqual, Minus, Multiply, Not, NotEqual, Plus,
        };
        use TokenKind::{Additive, Logical, Multiplicative};

        let current = self.source.current();
        let position = current.position;
        self.source.advance()?;

        let token = match current.character {
            '+' => Token::operator(Additive, Plus, position),
            '-' => Token::operator(Additive, Minus, position),
            '*' => Token::operator(Multiplicative, Multiply, position),
            '^' => Token::new(TokenKind::Exponent, position),
            '(' => Token::new(TokenKind::LeftParen, position),
            ')' => Token::new(TokenKind::RightParen, position),
            '[' => Token::new(TokenKind::LeftBracket, position),
            ']' => Token::new(TokenKind::RightBracket, position),
            ':' => Token::new(TokenKind::Colon, position),
            '.' => Token::new(TokenKind::Dot, position),
            ',' => Token::new(TokenKind::Comma, position),
            '<' => {
                let subtype = if self.accept_char('=')? { LessEqual } else { Less };
                Token::operator(Logical, subtype, position)
            },
            '>' => {
                let subtype = if self.accept_char('=')? { GreaterEqual } else { Greater };
                Token::operator(Logical, subtype, position)
            },
            '=' => {
                if self.accept_char('=')? {
                    Token::operator(Logical, Equal, position)
                } else {
                    Token::new(TokenKind::Assign, position)
                }
            },
            '!' => {
                let subtype = if self.accept_char('=')? { NotEqual } else { Not };
                Token::operator(Logical, subtype, position)
            },
            other => Token::with_value(TokenKind::Unrecognized,
                                       TokenValue::Text(other.to_string()),
                                       position),
        };

        Ok(token)
    }
}
