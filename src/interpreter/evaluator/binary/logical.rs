use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::{Operands, unsupported},
            core::{EvalResult, Evaluator},
        },
        source::Position,
        value::Value,
    },
};

const COMPARISON_OPERANDS: &str = "numbers, text with text, matrix == matrix, matrix != matrix";

impl Evaluator<'_> {
    /// Evaluates the six comparison operators.
    ///
    /// Numbers compare numerically and text lexicographically. Matrices only
    /// support `==` and `!=`, which compare dimensions exactly and values
    /// within a relative tolerance. The result is the integer 1 or 0.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, source::Position, value::Value},
    /// };
    ///
    /// let result = Evaluator::comparison(BinaryOperator::Less,
    ///                                    &Value::Text("abc".into()),
    ///                                    &Value::Text("abd".into()),
    ///                                    Position::start());
    ///
    /// assert_eq!(result.unwrap(), Value::Integer(1));
    /// ```
    pub fn comparison(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: Position)
                      -> EvalResult<Value> {
        let ordering = match Operands::of(left, right) {
            Operands::Integers(a, b) => Some(a.cmp(&b)),
            Operands::Doubles(a, b) => a.partial_cmp(&b),
            Operands::Texts(a, b) => Some(a.cmp(b)),
            Operands::Matrices(a, b) => {
                let equal = a.approx_eq(b);
                return match op {
                    BinaryOperator::Equal => Ok(Value::from(equal)),
                    BinaryOperator::NotEqual => Ok(Value::from(!equal)),
                    _ => Err(unsupported(op, left, right, COMPARISON_OPERANDS, position)),
                };
            },
            Operands::MatrixScalar(..) | Operands::ScalarMatrix(..) | Operands::Mixed => {
                return Err(unsupported(op, left, right, COMPARISON_OPERANDS, position));
            },
        };

        Ok(Value::from(holds(op, ordering)))
    }

    /// Evaluates `and` and `or` on the truthiness of two numbers.
    ///
    /// Both operands are always evaluated.
    pub fn logical(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   position: Position)
                   -> EvalResult<Value> {
        match Operands::of(left, right) {
            Operands::Integers(..) | Operands::Doubles(..) => {
                let (a, b) = (left.is_truthy(), right.is_truthy());
                let result = if op == BinaryOperator::And { a && b } else { a || b };
                Ok(Value::from(result))
            },
            _ => Err(unsupported(op, left, right, "numbers", position)),
        }
    }
}

/// Whether `op` holds for the given ordering. An unordered pair (a NaN
/// operand) satisfies only `!=`.
fn holds(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return op == BinaryOperator::NotEqual;
    };

    match op {
        BinaryOperator::Less => ordering == Ordering::Less,
        BinaryOperator::LessEqual => ordering != Ordering::Greater,
        BinaryOperator::Greater => ordering == Ordering::Greater,
        BinaryOperator::GreaterEqual => ordering != Ordering::Less,
        BinaryOperator::Equal => ordering == Ordering::Equal,
        _ => ordering != Ordering::Equal,
    }
}
