use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::SemanticError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        source::Position,
        value::{Value, signature},
    },
    matrix::{Matrix, MatrixError},
    util::num::promote,
};

/// The operand pair of a binary operator, grouped by the rules that apply to
/// it.
///
/// This is the dispatch table of every operator family: [`Operands::of`]
/// matches each of the sixteen operand-type pairs explicitly, and the family
/// handlers match on the resulting group. Mixed integer and double operands
/// are promoted to doubles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands<'v> {
    /// Two integers.
    Integers(i64, i64),
    /// Two numbers, at least one of them a double.
    Doubles(f64, f64),
    /// Two strings.
    Texts(&'v str, &'v str),
    /// Two matrices.
    Matrices(&'v Matrix, &'v Matrix),
    /// A matrix on the left, a number on the right.
    MatrixScalar(&'v Matrix, f64),
    /// A number on the left, a matrix on the right.
    ScalarMatrix(f64, &'v Matrix),
    /// Text combined with a number or a matrix.
    Mixed,
}

impl<'v> Operands<'v> {
    /// Classifies an operand pair.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::{evaluator::binary::core::Operands, value::Value};
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Double(0.5);
    ///
    /// assert_eq!(Operands::of(&left, &right), Operands::Doubles(3.0, 0.5));
    /// assert_eq!(Operands::of(&left, &Value::Text("a".into())), Operands::Mixed);
    /// ```
    #[must_use]
    pub fn of(left: &'v Value, right: &'v Value) -> Self {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::Integers(*a, *b),
            (Value::Integer(a), Value::Double(b)) => Self::Doubles(promote(*a), *b),
            (Value::Double(a), Value::Integer(b)) => Self::Doubles(*a, promote(*b)),
            (Value::Double(a), Value::Double(b)) => Self::Doubles(*a, *b),
            (Value::Text(a), Value::Text(b)) => Self::Texts(a, b),
            (Value::Matrix(a), Value::Matrix(b)) => Self::Matrices(a, b),
            (Value::Matrix(m), Value::Integer(s)) => Self::MatrixScalar(m, promote(*s)),
            (Value::Matrix(m), Value::Double(s)) => Self::MatrixScalar(m, *s),
            (Value::Integer(s), Value::Matrix(m)) => Self::ScalarMatrix(promote(*s), m),
            (Value::Double(s), Value::Matrix(m)) => Self::ScalarMatrix(*s, m),
            (Value::Text(_), Value::Integer(_) | Value::Double(_) | Value::Matrix(_))
            | (Value::Integer(_) | Value::Double(_) | Value::Matrix(_), Value::Text(_)) => Self::Mixed,
        }
    }
}

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation to the handler of its operator family. Every
    /// handler covers all sixteen combinations of operand types, rejecting the
    /// unsupported ones with `UnsupportedOperatorTypes`.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, source::Position, value::Value},
    /// };
    ///
    /// let result = Evaluator::binary(BinaryOperator::Add,
    ///                                &Value::Integer(3),
    ///                                &Value::Double(0.5),
    ///                                Position::start());
    ///
    /// assert_eq!(result.unwrap(), Value::Double(3.5));
    /// ```
    pub fn binary(op: BinaryOperator,
                  left: &Value,
                  right: &Value,
                  position: Position)
                  -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };

        trace!(target: "matlang::evaluator",
               op = %op,
               signature = signature(left.value_type(), right.value_type()),
               "Evaluating binary operator");

        match op {
            Add | Sub => Self::additive(op, left, right, position),
            Mul | Div => Self::multiplicative(op, left, right, position),
            Pow => Self::power(left, right, position),
            Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => {
                Self::comparison(op, left, right, position)
            },
            And | Or => Self::logical(op, left, right, position),
        }
    }
}

/// Builds the error for an operand pair the operator does not accept.
pub(in crate::interpreter::evaluator) fn unsupported(op: BinaryOperator,
                                                     left: &Value,
                                                     right: &Value,
                                                     expected: &'static str,
                                                     position: Position)
                                                     -> SemanticError {
    SemanticError::UnsupportedOperatorTypes { operator: op.to_string(),
                                              left: left.value_type(),
                                              right: right.value_type(),
                                              expected,
                                              position }
}

/// Wraps a matrix engine result into a value, attaching the position to a
/// failure.
pub(in crate::interpreter::evaluator) fn matrix_result(result: Result<Matrix, MatrixError>,
                                                       position: Position)
                                                       -> EvalResult<Value> {
    result.map(Value::Matrix)
          .map_err(|e| SemanticError::from_matrix(e, position))
}

/// Wraps a checked integer result, reporting overflow.
pub(in crate::interpreter::evaluator) fn checked(result: Option<i64>,
                                                 position: Position)
                                                 -> EvalResult<Value> {
    result.map(Value::Integer)
          .ok_or(SemanticError::IntegerOverflow { position })
}
