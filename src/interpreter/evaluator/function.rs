use tracing::debug;

use crate::{
    ast::{FunctionCall, FunctionDeclaration},
    error::SemanticError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            statement::Flow,
        },
        value::Value,
    },
};

impl<'a> Evaluator<'a> {
    /// Calls a user-defined function.
    ///
    /// Supplied arguments are evaluated in the caller's block. The body then
    /// runs in a new block in which the arguments are bound; omitted trailing
    /// arguments take their default, evaluated inside that block.
    ///
    /// # Returns
    /// The returned value, or `None` if an untyped function returned nothing.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function of that name was declared.
    /// - `ArgumentCountMismatch` for surplus arguments or a missing argument
    ///   without default.
    /// - `IllegalAssignmentType` if an argument has the wrong type.
    /// - `IllegalReturnType` or `MissingReturnValue` if a typed function does
    ///   not return a value of its type.
    pub fn call(&mut self, call: &'a FunctionCall) -> EvalResult<Option<Value>> {
        let function = self.scope.search_function(&call.name).ok_or_else(|| {
                                                                   SemanticError::UnknownFunction { name:     call.name.clone(),
                                                                                                    position: call.position, }
                                                               })?;
        check_argument_count(function, call)?;

        let mut supplied = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            supplied.push(self.evaluate(argument)?);
        }

        debug!(target: "matlang::evaluator",
               name = %call.name,
               arguments = supplied.len(),
               depth = self.scope.depth(),
               "Calling function");

        let flow = self.run_in_block(&function.body, |evaluator| {
                           let mut supplied = supplied.into_iter();
                           for argument in &function.arguments {
                               let value = match (supplied.next(), &argument.default) {
                                   (Some(value), _) => value,
                                   (None, Some(default)) => evaluator.evaluate(default)?,
                                   (None, None) => return Err(argument_count_error(function, call)),
                               };
                               evaluator.bind(&argument.name, argument.var_type, value, call.position)?;
                           }
                           Ok(())
                       })?;

        let returned = match flow {
            Flow::Return(value) => value,
            Flow::Normal(_) => None,
        };

        match (function.return_type, returned) {
            (Some(expected), Some(value)) if value.value_type() != expected => {
                Err(SemanticError::IllegalReturnType { name: call.name.clone(),
                                                       expected,
                                                       found: value.value_type(),
                                                       position: call.position })
            },
            (Some(_), None) => Err(SemanticError::MissingReturnValue { name:     call.name.clone(),
                                                                       position: call.position, }),
            (_, returned) => Ok(returned),
        }
    }
}

/// Rejects surplus arguments and omitted arguments that have no default.
fn check_argument_count(function: &FunctionDeclaration, call: &FunctionCall) -> EvalResult<()> {
    let supplied = call.arguments.len();
    let declared = function.arguments.len();

    if supplied > declared || function.arguments[supplied..].iter().any(|a| a.default.is_none()) {
        return Err(argument_count_error(function, call));
    }
    Ok(())
}

fn argument_count_error(function: &FunctionDeclaration, call: &FunctionCall) -> SemanticError {
    SemanticError::ArgumentCountMismatch { name:     call.name.clone(),
                                           expected: function.arguments.len(),
                                           found:    call.arguments.len(),
                                           position: call.position, }
}
