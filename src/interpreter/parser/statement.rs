use tracing::debug;

use crate::{
    ast::{Argument, Expr, FunctionDeclaration, MatrixSize, Statement},
    interpreter::{
        lexer::token::TokenKind,
        parser::{Parser, core::ParseResult},
        source::Source,
        value::ValueType,
    },
};

impl<S: Source> Parser<S> {
    /// Parses a single statement.
    ///
    /// Compound statements are recognized by their leading keyword; anything
    /// else is a simple statement terminated by a line break.
    ///
    /// Grammar:
    /// ```text
    /// statement := if | loop | as_long_as | function | condition | return
    ///            | simple NEWLINE
    /// ```
    pub(in crate::interpreter::parser) fn statement(&mut self) -> ParseResult<Statement> {
        match self.current().kind {
            TokenKind::If => self.if_statement(),
            TokenKind::Loop => self.loop_statement(),
            TokenKind::AsLongAs => self.as_long_as(),
            TokenKind::Function => self.function_declaration(),
            TokenKind::Condition => self.condition(),
            TokenKind::Return => self.return_statement(),
            _ => {
                let statement = self.simple_statement()?;
                self.expect(TokenKind::NextLine)?;
                Ok(statement)
            },
        }
    }

    /// Parses a declaration, an assignment, a call or a bare expression.
    ///
    /// An assignment is recognized after the fact: an expression that is a
    /// lone identifier followed by `=`.
    ///
    /// Grammar: `simple := declaration | assignment | call | expression`
    fn simple_statement(&mut self) -> ParseResult<Statement> {
        let position = self.current().position;

        if self.current().kind.is_type() {
            let expr = self.declaration()?;
            return Ok(Statement::Expression { expr, position });
        }

        let expr = self.expression()?;
        let expr = match expr {
            Expr::Identifier { name, position } if self.check(TokenKind::Assign) => {
                self.advance()?;
                let value = self.expression()?;
                Expr::Assignment { name,
                                   value: Box::new(value),
                                   position }
            },
            Expr::Call(call) => return Ok(Statement::Call(call)),
            expr => expr,
        };

        Ok(Statement::Expression { expr, position })
    }

    /// Parses a typed variable declaration.
    ///
    /// Grammar: `declaration := TYPE IDENT size? ("=" expression)?`
    fn declaration(&mut self) -> ParseResult<Expr> {
        let position = self.current().position;
        let var_type = self.type_keyword()?;
        let name = self.identifier()?;

        let size = if var_type == ValueType::Matrix && self.check(TokenKind::LeftBracket) {
            Some(self.matrix_size()?)
        } else {
            None
        };

        let value = match self.accept(TokenKind::Assign)? {
            Some(_) => Some(Box::new(self.expression()?)),
            None => None,
        };

        Ok(Expr::Declaration { var_type,
                               name,
                               size,
                               value,
                               position })
    }

    /// Parses the `[rows, columns]` clause of a matrix declaration.
    ///
    /// Grammar: `size := "[" expression "," expression "]"`
    fn matrix_size(&mut self) -> ParseResult<MatrixSize> {
        let position = self.expect(TokenKind::LeftBracket)?.position;
        let rows = self.expression()?;
        self.expect(TokenKind::Comma)?;
        let columns = self.expression()?;
        self.expect(TokenKind::RightBracket)?;

        Ok(MatrixSize { rows: Box::new(rows),
                        columns: Box::new(columns),
                        position })
    }

    /// Parses `return` with an optional value.
    ///
    /// Grammar: `return := "return" expression? NEWLINE`
    fn return_statement(&mut self) -> ParseResult<Statement> {
        let position = self.expect(TokenKind::Return)?.position;

        let value = if self.check(TokenKind::NextLine) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::NextLine)?;

        Ok(Statement::Return { value, position })
    }

    /// Parses a function declaration.
    ///
    /// Grammar:
    /// ```text
    /// function := "function" TYPE? IDENT "(" (argument ("," argument)*)? ")" block
    /// ```
    fn function_declaration(&mut self) -> ParseResult<Statement> {
        let position = self.expect(TokenKind::Function)?.position;

        let return_type = if self.current().kind.is_type() {
            Some(self.type_keyword()?)
        } else {
            None
        };
        let name = self.identifier()?;

        self.expect(TokenKind::LeftParen)?;
        let arguments = self.comma_separated(Self::argument, TokenKind::RightParen)?;
        let body = self.block()?;

        debug!(target: "matlang::parser", name = %name, arguments = arguments.len(), "Parsed function declaration");
        Ok(Statement::Function(FunctionDeclaration { name,
                                                     return_type,
                                                     arguments,
                                                     body,
                                                     position }))
    }

    /// Parses one declared argument.
    ///
    /// Grammar: `argument := TYPE IDENT ("=" expression)?`
    fn argument(&mut self) -> ParseResult<Argument> {
        let position = self.current().position;
        let var_type = self.type_keyword()?;
        let name = self.identifier()?;

        let default = match self.accept(TokenKind::Assign)? {
            Some(_) => Some(self.expression()?),
            None => None,
        };

        Ok(Argument { var_type,
                      name,
                      default,
                      position })
    }
}
