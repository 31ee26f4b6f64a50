//! # matlang
//!
//! matlang is an indentation-sensitive scripting language with built-in
//! matrix arithmetic. Source text flows one way through the pipeline:
//! characters, tokens, a syntax tree, and finally a value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    config::{Config, InputSource},
    error::Error,
    interpreter::{
        evaluator::Evaluator,
        lexer::Lexer,
        parser::Parser,
        source::{FileSource, SocketSource, Source, StringSource},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The tree is built by the parser and
/// traversed by the evaluator; every node keeps the position it was parsed
/// from for error reporting.
pub mod ast;
/// Run configuration.
///
/// Declares the input source selection and the options the command line
/// front end passes to [`run`].
pub mod config;
/// Provides unified error types for every stage.
///
/// One error family per stage (source, lexer, parser, evaluator), each
/// variant carrying the `line:column` position of the fault, and a top-level
/// [`Error`](error::Error) that any of them converts into.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together the character sources, the lexer, the parser, the evaluator
/// and the runtime values.
pub mod interpreter;
/// Dense matrices of doubles and the linear algebra the language exposes.
///
/// The engine is independent of the rest of the interpreter: arithmetic,
/// transpose, LU decomposition, determinant and inverse, each returning a
/// fresh matrix or a [`MatrixError`](matrix::MatrixError).
pub mod matrix;
/// General utilities for numeric conversion.
pub mod util;

/// Runs the program selected by `config`.
///
/// Opens the source, parses the whole program, prints the tree if requested,
/// and evaluates it.
///
/// # Returns
/// The program's value: the value of a top-level `return`, or of the last
/// top-level statement that produced one.
///
/// # Example
/// ```
/// use matlang::{
///     config::{Config, InputSource},
///     interpreter::value::Value,
///     run,
/// };
///
/// let config = Config::new(InputSource::Text("integer x = 20\nx + 22\n".into()));
///
/// assert_eq!(run(&config).unwrap(), Some(Value::Integer(42)));
/// ```
pub fn run(config: &Config) -> Result<Option<Value>, Error> {
    let source: Box<dyn Source> = match &config.input {
        InputSource::File(path) => Box::new(FileSource::open(path)?),
        InputSource::Socket(port) => Box::new(SocketSource::listen(*port)?),
        InputSource::Text(text) => Box::new(StringSource::new(text)),
    };

    let program = parse(source)?;
    if config.dump_ast {
        println!("{program:#?}");
    }

    Ok(Evaluator::new().evaluate_program(&program)?)
}

/// Parses and evaluates a complete program held in memory.
///
/// # Example
/// ```
/// use matlang::{evaluate_source, interpreter::value::Value};
///
/// let source = "function integer twice(integer n):\n    return 2 * n\ntwice(21)\n";
/// assert_eq!(evaluate_source(source).unwrap(), Some(Value::Integer(42)));
///
/// // 'y' is not defined
/// assert!(evaluate_source("integer x = y + 1\n").is_err());
/// ```
pub fn evaluate_source(text: &str) -> Result<Option<Value>, Error> {
    let program = parse(StringSource::new(text))?;
    Ok(Evaluator::new().evaluate_program(&program)?)
}

/// Parses and evaluates a single expression.
///
/// # Example
/// ```
/// use matlang::{evaluate_expression, interpreter::value::Value};
///
/// assert_eq!(evaluate_expression("3.0 + 0.14").unwrap(), Value::Double(3.14));
/// assert_eq!(evaluate_expression("det [[1, 1], [1, 1]]").unwrap(), Value::Double(0.0));
/// ```
pub fn evaluate_expression(text: &str) -> Result<Value, Error> {
    let mut parser = Parser::from_text(text)?;
    let expr = parser.parse_expression()?;
    parser.close();

    Ok(Evaluator::new().evaluate(&expr)?)
}

fn parse<S: Source>(source: S) -> Result<Program, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let program = parser.parse_program();
    parser.close();

    let program = program?;
    debug!(target: "matlang::cli", statements = program.statements.len(), "Parsed input");
    Ok(program)
}
