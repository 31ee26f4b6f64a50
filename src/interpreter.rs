/// Character sources feeding the lexer.
///
/// A source hands out one character at a time together with its position.
/// Sources exist for in-memory text, files, and a single TCP connection; the
/// end of input reads as `'\0'`.
pub mod source;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads characters from a source and produces one token per call,
/// deriving block structure from indentation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, subtype,
///   payload and source position.
/// - Emits `OpenBlock`, `CloseBlock` and `NextLine` from the layout.
/// - Reports lexical errors for malformed literals and inconsistent
///   indentation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead that turns the
/// token stream into a [`Program`](crate::ast::Program).
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting the first violation with its position.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// # Responsibilities
/// - Evaluates expressions over the four runtime types.
/// - Manages variable bindings per block depth and the function table.
/// - Runs control flow and user-defined function calls.
/// - Reports semantic errors such as unknown names, division by zero or
///   illegal assignments.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Declares `Value` with its four variants (integer, double, text, matrix),
/// the matching `ValueType`, truthiness and the operand-pair signature.
pub mod value;
