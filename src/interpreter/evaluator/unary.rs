use crate::{
    ast::UnaryOperator,
    error::SemanticError,
    interpreter::{
        evaluator::{
            binary::core::{checked, matrix_result},
            core::{EvalResult, Evaluator},
        },
        source::Position,
        value::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: integers (checked), doubles, and matrices elementwise.
    /// - `Not`: negated truthiness for every type, so `not ""` and `not []`
    ///   are 1.
    /// - `Det`, `Transpose`, `Inverse`: matrices only. The determinant is a
    ///   double.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Evaluator, source::Position, value::Value},
    /// };
    ///
    /// let v = Evaluator::unary(UnaryOperator::Negate, &Value::Integer(5), Position::start());
    /// assert_eq!(v.unwrap(), Value::Integer(-5));
    ///
    /// let v = Evaluator::unary(UnaryOperator::Not, &Value::Text(String::new()), Position::start());
    /// assert_eq!(v.unwrap(), Value::Integer(1));
    /// ```
    pub fn unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => checked(n.checked_neg(), position),
            (UnaryOperator::Negate, Value::Double(d)) => Ok(Value::Double(-d)),
            (UnaryOperator::Negate, Value::Matrix(m)) => Ok(Value::Matrix(m.negate())),
            (UnaryOperator::Not, value) => Ok(Value::from(!value.is_truthy())),
            (UnaryOperator::Det, Value::Matrix(m)) => {
                m.determinant()
                 .map(Value::Double)
                 .map_err(|e| SemanticError::from_matrix(e, position))
            },
            (UnaryOperator::Transpose, Value::Matrix(m)) => Ok(Value::Matrix(m.transpose())),
            (UnaryOperator::Inverse, Value::Matrix(m)) => matrix_result(m.inverse(), position),
            (op, value) => {
                let expected = if op == UnaryOperator::Negate { "integer, double, matrix" } else { "matrix" };
                Err(SemanticError::UnsupportedOperandType { operator: op.to_string(),
                                                            operand: value.value_type(),
                                                            expected,
                                                            position })
            },
        }
    }
}
