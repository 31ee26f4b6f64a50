use crate::{
    error::ParseError,
    interpreter::{
        lexer::token::TokenKind,
        parser::{Parser, core::ParseResult},
        source::Source,
        value::ValueType,
    },
};

/// Maps a type keyword to the runtime type it names.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     lexer::token::TokenKind, parser::utils::value_type, value::ValueType,
/// };
///
/// assert_eq!(value_type(TokenKind::MatrixType), Some(ValueType::Matrix));
/// assert_eq!(value_type(TokenKind::Identifier), None);
/// ```
#[must_use]
pub const fn value_type(kind: TokenKind) -> Option<ValueType> {
    match kind {
        TokenKind::IntegerType => Some(ValueType::Integer),
        TokenKind::DoubleType => Some(ValueType::Double),
        TokenKind::TextType => Some(ValueType::Text),
        TokenKind::MatrixType => Some(ValueType::Matrix),
        _ => None,
    }
}

impl<S: Source> Parser<S> {
    /// Parses a comma-separated list of items up to and including `closing`.
    ///
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    pub(in crate::interpreter::parser) fn comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: TokenKind)
        -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if self.accept(closing)?.is_some() {
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            if self.accept(TokenKind::Comma)?.is_some() {
                continue;
            }
            if self.accept(closing)?.is_some() {
                break;
            }
            return Err(self.unexpected(&format!("',' or {closing}")));
        }

        Ok(items)
    }

    /// Parses a plain identifier and returns its name.
    pub(in crate::interpreter::parser) fn identifier(&mut self) -> ParseResult<String> {
        Ok(self.expect(TokenKind::Identifier)?.into_text())
    }

    /// Parses a type keyword.
    pub(in crate::interpreter::parser) fn type_keyword(&mut self) -> ParseResult<ValueType> {
        match value_type(self.current().kind) {
            Some(value_type) => {
                self.advance()?;
                Ok(value_type)
            },
            None => Err(self.unexpected("type keyword")),
        }
    }
}
