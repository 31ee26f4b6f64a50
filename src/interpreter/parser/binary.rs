use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::token::{Subtype, Token, TokenKind},
        parser::{Parser, core::ParseResult},
        source::Source,
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that do not denote a binary operator,
/// including the unary `not`.
///
/// # Example
/// ```
/// use matlang::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::token::{Subtype, Token, TokenKind},
///         parser::binary::binary_operator,
///         source::Position,
///     },
/// };
///
/// let plus = Token::operator(TokenKind::Additive, Subtype::Plus, Position::start());
/// let not = Token::operator(TokenKind::Logical, Subtype::Not, Position::start());
///
/// assert_eq!(binary_operator(&plus), Some(BinaryOperator::Add));
/// assert_eq!(binary_operator(&not), None);
/// ```
#[must_use]
pub fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
        Sub,
    };

    if token.kind == TokenKind::Exponent {
        return Some(Pow);
    }

    let operator = match token.subtype? {
        Subtype::Plus => Add,
        Subtype::Minus => Sub,
        Subtype::Multiply => Mul,
        Subtype::Divide => Div,
        Subtype::Less => Less,
        Subtype::LessEqual => LessEqual,
        Subtype::Greater => Greater,
        Subtype::GreaterEqual => GreaterEqual,
        Subtype::Equal => Equal,
        Subtype::NotEqual => NotEqual,
        Subtype::And => And,
        Subtype::Or => Or,
        Subtype::Not | Subtype::Det | Subtype::Transpose | Subtype::Inverse => return None,
    };
    Some(operator)
}

impl<S: Source> Parser<S> {
    /// Parses one left-associative precedence level.
    ///
    /// `accepts` selects the operators of this level; `operand` parses the
    /// next tighter level.
    fn left_associative(&mut self,
                        accepts: impl Fn(BinaryOperator) -> bool,
                        operand: impl Fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;

        loop {
            let op = match binary_operator(self.current()) {
                Some(op) if accepts(op) => op,
                _ => break,
            };
            let position = self.advance()?.position;
            let right = operand(self)?;

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  position };
        }

        Ok(left)
    }

    /// Grammar: `logical_or := logical_and ("or" logical_and)*`
    pub(in crate::interpreter::parser) fn logical_or(&mut self) -> ParseResult<Expr> {
        self.left_associative(|op| op == BinaryOperator::Or, Self::logical_and)
    }

    /// Grammar: `logical_and := comparison ("and" comparison)*`
    fn logical_and(&mut self) -> ParseResult<Expr> {
        self.left_associative(|op| op == BinaryOperator::And, Self::comparison)
    }

    /// Parses relational and equality operators.
    ///
    /// Grammar: `comparison := additive (("<" | "<=" | ">" | ">=" | "==" | "!=") additive)*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(BinaryOperator::is_comparison, Self::additive)
    }

    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn additive(&mut self) -> ParseResult<Expr> {
        self.left_associative(|op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                              Self::multiplicative)
    }

    /// Grammar: `multiplicative := exponent (("*" | "/") exponent)*`
    fn multiplicative(&mut self) -> ParseResult<Expr> {
        self.left_associative(|op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                              Self::exponent)
    }

    /// Parses exponentiation expressions.
    ///
    /// Exponentiation is right-associative: `a ^ b ^ c` parses as
    /// `a ^ (b ^ c)`.
    ///
    /// Grammar: `exponent := unary ("^" exponent)?`
    fn exponent(&mut self) -> ParseResult<Expr> {
        let left = self.unary()?;

        match self.accept(TokenKind::Exponent)? {
            Some(token) => {
                let right = self.exponent()?;
                Ok(Expr::Binary { left: Box::new(left),
                                  op: BinaryOperator::Pow,
                                  right: Box::new(right),
                                  position: token.position })
            },
            None => Ok(left),
        }
    }
}
