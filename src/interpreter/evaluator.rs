/// Core evaluation logic and the evaluator state.
///
/// Contains the expression evaluator, declarations and assignments, and the
/// program entry point.
pub mod core;

/// Variable and function binding.
///
/// Variables are keyed by name and block depth; functions live in one flat
/// table.
pub mod scope;

/// Statement execution.
///
/// Runs blocks and the control flow statements, and propagates `return`.
pub mod statement;

/// Function evaluation.
///
/// Handles calls of user-defined functions: argument checking, default
/// values, and return type validation.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements negation, logical `not`, and the matrix operators `det`,
/// `transpose` and `inverse`.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Dispatches on the operand types of arithmetic, power and logical
/// operators.
pub mod binary;

pub use self::{
    core::{EvalResult, Evaluator},
    scope::{ScopeManager, VariableInfo},
    statement::Flow,
};
