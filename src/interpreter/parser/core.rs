use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{
            Lexer,
            token::{Subtype, Token, TokenKind},
        },
        source::{Source, StringSource},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser pulling tokens from a [`Lexer`].
///
/// The parser holds exactly one token of lookahead. Tokens are consumed once
/// and then dropped; the first grammar violation aborts parsing.
///
/// # Example
/// ```
/// use matlang::{ast::Statement, interpreter::parser::Parser};
///
/// let mut parser = Parser::from_text("integer x = 2\nx = x + 1\n").unwrap();
/// let program = parser.parse_program().unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[0], Statement::Expression { .. }));
/// ```
pub struct Parser<S: Source> {
    lexer:   Lexer<S>,
    current: Token,
}

impl Parser<StringSource> {
    /// Creates a parser over in-memory source text.
    ///
    /// # Errors
    /// Returns a [`ParseError::Lexical`] if the first token cannot be read.
    pub fn from_text(text: &str) -> ParseResult<Self> {
        Self::new(Lexer::new(StringSource::new(text)))
    }
}

impl<S: Source> Parser<S> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns a [`ParseError::Lexical`] if the first token cannot be read.
    pub fn new(mut lexer: Lexer<S>) -> ParseResult<Self> {
        let current = lexer.get_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses statements until the end of input.
    ///
    /// Grammar: `program := statement* EOF`
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::EndOfFile) {
            statements.push(self.statement()?);
        }

        debug!(target: "matlang::parser", statements = statements.len(), "Parsed program");
        Ok(Program { statements })
    }

    /// Parses input that consists of a single expression.
    ///
    /// A trailing line break is allowed; anything after the expression is an
    /// error.
    ///
    /// # Example
    /// ```
    /// use matlang::{ast::Expr, interpreter::parser::Parser};
    ///
    /// let mut parser = Parser::from_text("1 + 2 * 3").unwrap();
    /// let expr = parser.parse_expression().unwrap();
    ///
    /// assert!(matches!(expr, Expr::Binary { .. }));
    /// ```
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.expression()?;
        self.accept(TokenKind::NextLine)?;
        self.expect(TokenKind::EndOfFile)?;
        Ok(expr)
    }

    /// Closes the lexer and its source.
    pub fn close(&mut self) {
        self.lexer.close();
    }

    /// Parses a full expression, starting at the loosest precedence level.
    ///
    /// Grammar: `expression := logical_or`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        self.logical_or()
    }

    /// The token under the cursor.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Moves to the next token and returns the one just passed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.get_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(in crate::interpreter::parser) fn check_subtype(&self,
                                                        kind: TokenKind,
                                                        subtype: Subtype)
                                                        -> bool {
        self.current.kind == kind && self.current.subtype == Some(subtype)
    }

    /// Consumes the current token if it has the given kind.
    pub(in crate::interpreter::parser) fn accept(&mut self,
                                                 kind: TokenKind)
                                                 -> ParseResult<Option<Token>> {
        if self.check(kind) {
            return self.advance().map(Some);
        }
        Ok(None)
    }

    /// Consumes the current token, which must have the given kind.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        match self.accept(kind)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(&kind.to_string())),
        }
    }

    /// Builds the error for a token that does not fit the grammar.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.current.kind,
                                      position: self.current.position, }
    }
}
