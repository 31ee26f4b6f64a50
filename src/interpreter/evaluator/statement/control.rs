use tracing::trace;

use crate::{
    ast::{BinaryOperator, Case, Expr, Otherwise, Statement},
    error::SemanticError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            statement::Flow,
        },
        source::Position,
        value::{Value, ValueType},
    },
};

impl<'a> Evaluator<'a> {
    /// Runs the body if the condition is truthy, the `otherwise` branch if not.
    pub(in crate::interpreter::evaluator) fn execute_if(&mut self,
                                                        condition: &'a Expr,
                                                        body: &'a [Statement],
                                                        otherwise: Option<&'a Otherwise>)
                                                        -> EvalResult<Flow> {
        if self.evaluate(condition)?.is_truthy() {
            return self.execute_block(body);
        }

        match otherwise {
            Some(Otherwise::If(statement)) => self.execute(statement),
            Some(Otherwise::Block(statements)) => self.execute_block(statements),
            None => Ok(Flow::Normal(None)),
        }
    }

    /// Runs a counting loop.
    ///
    /// Bounds and step are evaluated once. The counter runs from `start`
    /// towards the exclusive `end` and is bound inside each iteration's
    /// block: as an integer when all three are integers, as a double
    /// otherwise.
    pub(in crate::interpreter::evaluator) fn execute_loop(&mut self,
                                                          counter: &'a str,
                                                          start: &'a Expr,
                                                          end: &'a Expr,
                                                          step: Option<&'a Expr>,
                                                          body: &'a [Statement],
                                                          position: Position)
                                                          -> EvalResult<Flow> {
        let start = self.evaluate(start)?;
        let end = self.evaluate(end)?;
        let step = match step {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Integer(1),
        };

        if let (Value::Integer(start), Value::Integer(end), Value::Integer(step)) =
            (&start, &end, &step)
        {
            return self.integer_loop(counter, *start, *end, *step, body, position);
        }

        let bound = |value: &Value| {
            value.as_f64().ok_or_else(|| SemanticError::UnsupportedOperandType {
                operator: "loop".to_string(),
                operand: value.value_type(),
                expected: "integer, double",
                position,
            })
        };
        let (start, end, step) = (bound(&start)?, bound(&end)?, bound(&step)?);
        if step == 0.0 {
            return Err(SemanticError::InvalidLoopStep { position });
        }

        trace!(target: "matlang::evaluator", counter, start, end, step, "Running double loop");
        let mut current = start;
        while (step > 0.0 && current < end) || (step < 0.0 && current > end) {
            let flow = self.iteration(counter, ValueType::Double, Value::Double(current), body, position)?;
            if let Flow::Return(_) = flow {
                return Ok(flow);
            }

            // A step below the counter's precision would never reach the bound.
            let next = current + step;
            if next == current {
                return Err(SemanticError::InvalidLoopStep { position });
            }
            current = next;
        }

        Ok(Flow::Normal(None))
    }

    fn integer_loop(&mut self,
                    counter: &'a str,
                    start: i64,
                    end: i64,
                    step: i64,
                    body: &'a [Statement],
                    position: Position)
                    -> EvalResult<Flow> {
        if step == 0 {
            return Err(SemanticError::InvalidLoopStep { position });
        }

        trace!(target: "matlang::evaluator", counter, start, end, step, "Running integer loop");
        let mut current = start;
        while (step > 0 && current < end) || (step < 0 && current > end) {
            let flow = self.iteration(counter, ValueType::Integer, Value::Integer(current), body, position)?;
            if let Flow::Return(_) = flow {
                return Ok(flow);
            }

            // Past the bound once the counter would leave the i64 range.
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(Flow::Normal(None))
    }

    fn iteration(&mut self,
                 counter: &'a str,
                 var_type: ValueType,
                 value: Value,
                 body: &'a [Statement],
                 position: Position)
                 -> EvalResult<Flow> {
        self.run_in_block(body, |evaluator| {
                evaluator.bind(counter, var_type, value, position).map(|_| ())
            })
    }

    /// Runs the body for as long as the condition stays truthy.
    pub(in crate::interpreter::evaluator) fn execute_as_long_as(&mut self,
                                                                condition: &'a Expr,
                                                                body: &'a [Statement])
                                                                -> EvalResult<Flow> {
        while self.evaluate(condition)?.is_truthy() {
            let flow = self.execute_block(body)?;
            if let Flow::Return(_) = flow {
                return Ok(flow);
            }
        }

        Ok(Flow::Normal(None))
    }

    /// Runs the first case equal to the subject, or the default.
    ///
    /// Cases are compared with `==`, so a case of an incomparable type is an
    /// error rather than a mismatch.
    pub(in crate::interpreter::evaluator) fn execute_condition(&mut self,
                                                               subject: &'a Expr,
                                                               cases: &'a [Case],
                                                               default: Option<&'a [Statement]>)
                                                               -> EvalResult<Flow> {
        let subject = self.evaluate(subject)?;

        for case in cases {
            let value = self.evaluate(&case.value)?;
            if Self::binary(BinaryOperator::Equal, &subject, &value, case.position)?.is_truthy() {
                return self.execute_block(&case.body);
            }
        }

        match default {
            Some(statements) => self.execute_block(statements),
            None => Ok(Flow::Normal(None)),
        }
    }
}
