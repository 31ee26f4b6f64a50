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
    util::num::promote,
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Both operands must be numbers. The result is always a double, also for
    /// two integers.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::{evaluator::Evaluator, source::Position, value::Value};
    ///
    /// let result = Evaluator::power(&Value::Integer(2), &Value::Integer(2), Position::start());
    /// assert_eq!(result.unwrap(), Value::Double(4.0));
    /// ```
    pub fn power(base: &Value, exponent: &Value, position: Position) -> EvalResult<Value> {
        match Operands::of(base, exponent) {
            Operands::Integers(b, e) => Ok(Value::Double(promote(b).powf(promote(e)))),
            Operands::Doubles(b, e) => Ok(Value::Double(b.powf(e))),
            _ => Err(unsupported(BinaryOperator::Pow, base, exponent, "numbers", position)),
        }
    }
}
