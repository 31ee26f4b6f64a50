/// Conditional and looping statements.
pub mod control;

use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement. Expression statements
    /// and calls carry the value they produced.
    Normal(Option<Value>),
    /// A `return` was executed; enclosing blocks unwind up to the function
    /// call or the program.
    Return(Option<Value>),
}

impl<'a> Evaluator<'a> {
    /// Executes a single statement.
    pub fn execute(&mut self, statement: &'a Statement) -> EvalResult<Flow> {
        trace!(target: "matlang::evaluator", kind = %statement.token_kind(), "Executing statement");

        match statement {
            Statement::If { condition,
                            body,
                            otherwise,
                            .. } => self.execute_if(condition, body, otherwise.as_ref()),
            Statement::Loop { counter,
                              start,
                              end,
                              step,
                              body,
                              position, } => {
                self.execute_loop(counter, start, end, step.as_ref(), body, *position)
            },
            Statement::AsLongAs { condition, body, .. } => self.execute_as_long_as(condition, body),
            Statement::Function(function) => {
                self.scope.enter_function(function);
                Ok(Flow::Normal(None))
            },
            Statement::Call(call) => Ok(Flow::Normal(self.call(call)?)),
            Statement::Condition { subject,
                                   cases,
                                   default,
                                   .. } => self.execute_condition(subject, cases, default.as_deref()),
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => Some(self.evaluate(expr)?),
                    None => None,
                };
                Ok(Flow::Return(value))
            },
            Statement::Expression { expr, .. } => Ok(Flow::Normal(Some(self.evaluate(expr)?))),
        }
    }

    /// Runs statements inside a fresh block.
    pub fn execute_block(&mut self, statements: &'a [Statement]) -> EvalResult<Flow> {
        self.run_in_block(statements, |_| Ok(()))
    }

    /// Opens a block, lets `bind` populate it, runs the statements and closes
    /// the block again, also when a statement fails.
    pub(in crate::interpreter::evaluator) fn run_in_block(
        &mut self,
        statements: &'a [Statement],
        bind: impl FnOnce(&mut Self) -> EvalResult<()>)
        -> EvalResult<Flow> {
        self.scope.enter_block();
        let result = bind(self).and_then(|()| self.run_statements(statements));
        self.scope.close_block();
        result
    }

    fn run_statements(&mut self, statements: &'a [Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.execute(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal(None))
    }
}
