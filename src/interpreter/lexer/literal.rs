use crate::{
    error::LexicalError,
    interpreter::{
        lexer::{
            LexResult, Lexer, MAX_LITERAL_LENGTH,
            token::{Token, TokenKind, TokenValue, keyword},
        },
        source::{END_OF_INPUT, Position, Source},
    },
};

/// Escape sequences accepted in string literals.
const ESCAPES: [(char, char); 6] =
    [('n', '\n'), ('t', '\t'), ('\'', '\''), ('"', '"'), ('?', '?'), ('\\', '\\')];

fn too_long(position: Position) -> LexicalError {
    LexicalError::TooLongLiteral { limit: MAX_LITERAL_LENGTH,
                                   position }
}

impl<S: Source> Lexer<S> {
    /// Lexes a string literal delimited by `'` or `"`.
    pub(super) fn lex_string(&mut self) -> LexResult<Token> {
        let opening = self.source.current();
        let delimiter = opening.character;
        self.source.advance()?;

        let mut text = String::new();
        let mut length = 0;

        loop {
            let current = self.source.current();
            let character = match current.character {
                '\n' | END_OF_INPUT => {
                    return Err(LexicalError::MalformedStringLiteral { details:  "missing closing delimiter".to_string(),
                                                                      position: opening.position, });
                },
                c if c == delimiter => {
                    self.source.advance()?;
                    break;
                },
                '\\' => {
                    let escaped = self.source.advance()?;
                    let resolved = ESCAPES.iter()
                                          .find(|(code, _)| *code == escaped.character)
                                          .map(|(_, resolved)| *resolved)
                                          .ok_or_else(|| LexicalError::MalformedStringLiteral {
                                              details: format!("unknown escape sequence '\\{}'",
                                                               escaped.character),
                                              position: current.position,
                                          })?;
                    self.source.advance()?;
                    resolved
                },
                c if c.is_control() => {
                    return Err(LexicalError::MalformedStringLiteral { details: "non-printable character".to_string(),
                                                                      position: current.position, });
                },
                c => {
                    self.source.advance()?;
                    c
                },
            };

            length += 1;
            if length >= MAX_LITERAL_LENGTH {
                return Err(too_long(opening.position));
            }
            text.push(character);
        }

        Ok(Token::with_value(TokenKind::String, TokenValue::Text(text), opening.position))
    }

    /// Lexes an integer or, when a `.` follows the digits, a double.
    ///
    /// The integer part is accumulated with checked arithmetic. Overflow only
    /// fails the literal if it turns out to be an integer; a fractional
    /// literal is read as a double and rejected only if it is not finite.
    pub(super) fn lex_number(&mut self) -> LexResult<Token> {
        let position = self.source.current().position;
        let mut lexeme = String::new();
        let mut integer = Some(0_i64);

        while let Some(digit) = self.source.current().character.to_digit(10) {
            integer = integer.and_then(|value| value.checked_mul(10))
                             .and_then(|value| value.checked_add(i64::from(digit)));
            self.push_digit(&mut lexeme, position)?;
        }

        if self.source.current().character != '.' {
            return integer.map(|value| {
                              Token::with_value(TokenKind::Integer, TokenValue::Integer(value), position)
                          })
                          .ok_or(LexicalError::IntegerOverflow { position });
        }

        self.push_digit(&mut lexeme, position)?;
        while self.source.current().character.is_ascii_digit() {
            self.push_digit(&mut lexeme, position)?;
        }

        let value = lexeme.parse::<f64>()
                          .map_err(|_| LexicalError::IntegerOverflow { position })?;
        if !value.is_finite() {
            return Err(LexicalError::IntegerOverflow { position });
        }

        Ok(Token::with_value(TokenKind::Double, TokenValue::Double(value), position))
    }

    fn push_digit(&mut self, lexeme: &mut String, position: Position) -> LexResult<()> {
        lexeme.push(self.source.current().character);
        if lexeme.len() >= MAX_LITERAL_LENGTH {
            return Err(too_long(position));
        }
        self.source.advance()?;
        Ok(())
    }

    /// Lexes an identifier or keyword.
    pub(super) fn lex_word(&mut self) -> LexResult<Token> {
        let position = self.source.current().position;
        let mut word = String::new();

        loop {
            let character = self.source.current().character;
            if !character.is_alphanumeric() && character != '_' {
                break;
            }
            word.push(character);
            if word.len() >= MAX_LITERAL_LENGTH {
                return Err(too_long(position));
            }
            self.source.advance()?;
        }

        Ok(match keyword(&word) {
            Some((kind, Some(subtype))) => Token::operator(kind, subtype, position),
            Some((kind, None)) => Token::new(kind, position),
            None => Token::with_value(TokenKind::Identifier, TokenValue::Text(word), position),
        })
    }

    /// Skips the rest of a comment whose opening marker was consumed.
    ///
    /// The terminating newline is left in place.
    pub(super) fn skip_comment(&mut self, position: Position) -> LexResult<()> {
        let mut length = 0;

        loop {
            let character = self.source.current().character;
            if character == '\n' || character == END_OF_INPUT {
                return Ok(());
            }
            length += 1;
            if length >= MAX_LITERAL_LENGTH {
                return Err(too_long(position));
            }
            self.source.advance()?;
        }
    }
}
