use crate::{
    ast::{Expr, FunctionCall, Literal, UnaryOperator},
    interpreter::{
        lexer::token::{Subtype, TokenKind, TokenValue},
        parser::{Parser, core::ParseResult},
        source::Source,
    },
};

impl<S: Source> Parser<S> {
    /// Parses prefix operators.
    ///
    /// Prefix operators bind tighter than every binary operator, so `-2 ^ 2`
    /// parses as `(-2) ^ 2`.
    ///
    /// Grammar: `unary := ("-" | "not" | "!" | "det" | "transpose" | "inverse") unary | primary`
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        let op = match (self.current().kind, self.current().subtype) {
            (TokenKind::Additive, Some(Subtype::Minus)) => UnaryOperator::Negate,
            (TokenKind::Logical, Some(Subtype::Not)) => UnaryOperator::Not,
            (TokenKind::MatrixOperator, Some(Subtype::Det)) => UnaryOperator::Det,
            (TokenKind::MatrixOperator, Some(Subtype::Transpose)) => UnaryOperator::Transpose,
            (TokenKind::MatrixOperator, Some(Subtype::Inverse)) => UnaryOperator::Inverse,
            _ => return self.primary(),
        };

        let position = self.advance()?.position;
        let operand = self.unary()?;

        Ok(Expr::Unary { op,
                         operand: Box::new(operand),
                         position })
    }

    /// Parses literals, identifiers, calls, matrix literals and parenthesized
    /// expressions.
    ///
    /// Grammar:
    /// ```text
    /// primary := INTEGER | DOUBLE | STRING | IDENT | call | matrix | "(" expression ")"
    /// ```
    fn primary(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Integer | TokenKind::Double | TokenKind::String => self.literal(),
            TokenKind::Identifier => {
                let token = self.advance()?;
                let position = token.position;
                let name = token.into_text();

                if self.accept(TokenKind::LeftParen)?.is_some() {
                    let arguments = self.comma_separated(Self::expression, TokenKind::RightParen)?;
                    return Ok(Expr::Call(FunctionCall { name,
                                                        arguments,
                                                        position }));
                }

                Ok(Expr::Identifier { name, position })
            },
            TokenKind::LeftBracket => self.matrix_literal(),
            TokenKind::LeftParen => {
                self.advance()?;
                let expr = self.expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(expr)
            },
            _ => Err(self.unexpected("expression")),
        }
    }

    fn literal(&mut self) -> ParseResult<Expr> {
        let token = self.advance()?;
        let value = match token.value {
            TokenValue::Integer(n) => Literal::Integer(n),
            TokenValue::Double(d) => Literal::Double(d),
            TokenValue::Text(s) => Literal::Text(s),
            TokenValue::None => Literal::Text(String::new()),
        };

        Ok(Expr::Literal { value,
                           position: token.position })
    }

    /// Parses a matrix literal.
    ///
    /// Either a list of bracketed rows, `[[1, 2], [3, 4]]`, or a single row,
    /// `[1, 2]`. The empty literal `[]` denotes the `0x0` matrix.
    ///
    /// Grammar:
    /// ```text
    /// matrix := "[" (row ("," row)* | expression ("," expression)*)? "]"
    /// row    := "[" expression ("," expression)* "]"
    /// ```
    fn matrix_literal(&mut self) -> ParseResult<Expr> {
        let position = self.expect(TokenKind::LeftBracket)?.position;

        let rows = if self.check(TokenKind::LeftBracket) {
            self.comma_separated(Self::matrix_row, TokenKind::RightBracket)?
        } else {
            let row = self.comma_separated(Self::expression, TokenKind::RightBracket)?;
            if row.is_empty() { Vec::new() } else { vec![row] }
        };

        Ok(Expr::MatrixLiteral { rows, position })
    }

    fn matrix_row(&mut self) -> ParseResult<Vec<Expr>> {
        self.expect(TokenKind::LeftBracket)?;
        self.comma_separated(Self::expression, TokenKind::RightBracket)
    }
}
