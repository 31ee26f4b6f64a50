use tracing::debug;

use crate::{
    ast::{Case, Otherwise, Statement},
    interpreter::{
        lexer::token::TokenKind,
        parser::{Parser, core::ParseResult},
        source::Source,
    },
};

impl<S: Source> Parser<S> {
    /// Parses an indented block.
    ///
    /// The block ends at its `CloseBlock`, or at the end of input, which closes
    /// it implicitly.
    ///
    /// Grammar: `block := ":" NEWLINE OPEN statement* (CLOSE | EOF)`
    pub(in crate::interpreter::parser) fn block(&mut self) -> ParseResult<Vec<Statement>> {
        self.expect(TokenKind::Colon)?;
        self.open_block()?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseBlock) && !self.check(TokenKind::EndOfFile) {
            statements.push(self.statement()?);
        }
        self.accept(TokenKind::CloseBlock)?;

        debug!(target: "matlang::parser", statements = statements.len(), "Parsed block");
        Ok(statements)
    }

    fn open_block(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::NextLine)?;
        self.expect(TokenKind::OpenBlock)?;
        Ok(())
    }

    /// Parses an `if` statement with an optional `otherwise` branch.
    ///
    /// `otherwise if` chains another conditional.
    ///
    /// Grammar: `if := "if" expression block ("otherwise" (if | block))?`
    pub(in crate::interpreter::parser) fn if_statement(&mut self) -> ParseResult<Statement> {
        let position = self.expect(TokenKind::If)?.position;
        let condition = self.expression()?;
        let body = self.block()?;

        let otherwise = if self.accept(TokenKind::Otherwise)?.is_some() {
            if self.check(TokenKind::If) {
                Some(Otherwise::If(Box::new(self.if_statement()?)))
            } else {
                Some(Otherwise::Block(self.block()?))
            }
        } else {
            None
        };

        Ok(Statement::If { condition,
                           body,
                           otherwise,
                           position })
    }

    /// Parses a counting loop.
    ///
    /// Grammar:
    /// `loop := "loop" IDENT "=" expression "to" expression ("step" expression)? block`
    pub(in crate::interpreter::parser) fn loop_statement(&mut self) -> ParseResult<Statement> {
        let position = self.expect(TokenKind::Loop)?.position;
        let counter = self.identifier()?;
        self.expect(TokenKind::Assign)?;
        let start = self.expression()?;
        self.expect(TokenKind::To)?;
        let end = self.expression()?;

        let step = match self.accept(TokenKind::Step)? {
            Some(_) => Some(self.expression()?),
            None => None,
        };
        let body = self.block()?;

        Ok(Statement::Loop { counter,
                             start,
                             end,
                             step,
                             body,
                             position })
    }

    /// Grammar: `as_long_as := "as_long_as" expression block`
    pub(in crate::interpreter::parser) fn as_long_as(&mut self) -> ParseResult<Statement> {
        let position = self.expect(TokenKind::AsLongAs)?.position;
        let condition = self.expression()?;
        let body = self.block()?;

        Ok(Statement::AsLongAs { condition,
                                 body,
                                 position })
    }

    /// Parses a `condition` statement with its cases and optional default.
    ///
    /// Grammar:
    /// ```text
    /// condition := "condition" expression ":" NEWLINE OPEN case* default? (CLOSE | EOF)
    /// case      := "case" expression block
    /// default   := "default" block
    /// ```
    pub(in crate::interpreter::parser) fn condition(&mut self) -> ParseResult<Statement> {
        let position = self.expect(TokenKind::Condition)?.position;
        let subject = self.expression()?;
        self.expect(TokenKind::Colon)?;
        self.open_block()?;

        let mut cases = Vec::new();
        while let Some(token) = self.accept(TokenKind::Case)? {
            let value = self.expression()?;
            let body = self.block()?;
            cases.push(Case { value,
                              body,
                              position: token.position });
        }

        let default = match self.accept(TokenKind::Default)? {
            Some(_) => Some(self.block()?),
            None => None,
        };

        if !self.check(TokenKind::CloseBlock) && !self.check(TokenKind::EndOfFile) {
            return Err(self.unexpected("'case', 'default' or end of block"));
        }
        self.accept(TokenKind::CloseBlock)?;

        Ok(Statement::Condition { subject,
                                  cases,
                                  default,
                                  position })
    }
}
