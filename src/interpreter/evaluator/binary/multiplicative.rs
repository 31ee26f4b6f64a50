use crate::{
    ast::BinaryOperator,
    error::SemanticError,
    interpreter::{
        evaluator::{
            binary::core::{Operands, checked, matrix_result, unsupported},
            core::{EvalResult, Evaluator},
        },
        source::Position,
        value::Value,
    },
};

const MUL_OPERANDS: &str = "numbers, matrix * matrix, matrix and number";
const DIV_OPERANDS: &str = "numbers, matrix / matrix, matrix / number";

impl Evaluator<'_> {
    /// Evaluates `*` and `/`.
    ///
    /// Integer division truncates. A zero divisor is rejected before
    /// dividing, for integers, doubles and matrix-by-number division alike.
    /// `*` on two matrices is the matrix product; `/` on two matrices
    /// multiplies by the inverse of the right operand.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     ast::BinaryOperator,
    ///     error::SemanticError,
    ///     interpreter::{evaluator::Evaluator, source::Position, value::Value},
    /// };
    ///
    /// let result = Evaluator::multiplicative(BinaryOperator::Div,
    ///                                        &Value::Integer(7),
    ///                                        &Value::Integer(2),
    ///                                        Position::start());
    /// assert_eq!(result.unwrap(), Value::Integer(3));
    ///
    /// let result = Evaluator::multiplicative(BinaryOperator::Div,
    ///                                        &Value::Double(2.0),
    ///                                        &Value::Double(0.0),
    ///                                        Position::start());
    /// assert!(matches!(result, Err(SemanticError::DivisionByZero { .. })));
    /// ```
    pub fn multiplicative(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: Position)
                          -> EvalResult<Value> {
        let divide = op == BinaryOperator::Div;

        match Operands::of(left, right) {
            Operands::Integers(a, b) if divide => {
                if b == 0 {
                    return Err(SemanticError::DivisionByZero { position });
                }
                checked(a.checked_div(b), position)
            },
            Operands::Integers(a, b) => checked(a.checked_mul(b), position),
            Operands::Doubles(a, b) if divide => {
                if b == 0.0 {
                    return Err(SemanticError::DivisionByZero { position });
                }
                Ok(Value::Double(a / b))
            },
            Operands::Doubles(a, b) => Ok(Value::Double(a * b)),
            Operands::Matrices(a, b) => {
                matrix_result(if divide { a.divide(b) } else { a.multiply(b) }, position)
            },
            Operands::MatrixScalar(m, s) if divide => {
                if s == 0.0 {
                    return Err(SemanticError::DivisionByZero { position });
                }
                Ok(Value::Matrix(m.div_scalar(s)))
            },
            Operands::MatrixScalar(m, s) => Ok(Value::Matrix(m.scale(s))),
            Operands::ScalarMatrix(s, m) if !divide => Ok(Value::Matrix(m.scale(s))),
            Operands::ScalarMatrix(..) | Operands::Texts(..) | Operands::Mixed => {
                let expected = if divide { DIV_OPERANDS } else { MUL_OPERANDS };
                Err(unsupported(op, left, right, expected, position))
            },
        }
    }
}
