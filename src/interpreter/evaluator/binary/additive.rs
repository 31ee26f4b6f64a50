use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::{Operands, checked, matrix_result, unsupported},
            core::{EvalResult, Evaluator},
        },
        source::Position,
        value::Value,
    },
};

const ADD_OPERANDS: &str = "numbers, text + text, matrix + matrix, matrix and number";
const SUB_OPERANDS: &str = "numbers, matrix - matrix, matrix and number";

impl Evaluator<'_> {
    /// Evaluates `+` and `-`.
    ///
    /// Integer arithmetic is checked for overflow, mixed numbers are promoted
    /// to doubles, `+` concatenates text, and matrices combine elementwise
    /// with matrices of the same size or with numbers.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, source::Position, value::Value},
    /// };
    ///
    /// let result = Evaluator::additive(BinaryOperator::Add,
    ///                                  &Value::Text("mama".into()),
    ///                                  &Value::Text("tata".into()),
    ///                                  Position::start());
    /// assert_eq!(result.unwrap(), Value::Text("mamatata".into()));
    ///
    /// let result = Evaluator::additive(BinaryOperator::Sub,
    ///                                  &Value::Text("a".into()),
    ///                                  &Value::Text("b".into()),
    ///                                  Position::start());
    /// assert!(result.is_err());
    /// ```
    pub fn additive(op: BinaryOperator,
                    left: &Value,
                    right: &Value,
                    position: Position)
                    -> EvalResult<Value> {
        let subtract = op == BinaryOperator::Sub;

        match Operands::of(left, right) {
            Operands::Integers(a, b) => {
                checked(if subtract { a.checked_sub(b) } else { a.checked_add(b) }, position)
            },
            Operands::Doubles(a, b) => Ok(Value::Double(if subtract { a - b } else { a + b })),
            Operands::Texts(a, b) if !subtract => Ok(Value::Text(format!("{a}{b}"))),
            Operands::Matrices(a, b) => {
                matrix_result(if subtract { a.sub(b) } else { a.add(b) }, position)
            },
            Operands::MatrixScalar(m, s) => {
                Ok(Value::Matrix(if subtract { m.sub_scalar(s) } else { m.add_scalar(s) }))
            },
            Operands::ScalarMatrix(s, m) => {
                Ok(Value::Matrix(if subtract { m.subtract_from(s) } else { m.add_scalar(s) }))
            },
            Operands::Texts(..) | Operands::Mixed => {
                let expected = if subtract { SUB_OPERANDS } else { ADD_OPERANDS };
                Err(unsupported(op, left, right, expected, position))
            },
        }
    }
}
