/// Parser state and token navigation.
///
/// Holds the lexer and the current token, provides `accept`/`expect`, and
/// exposes the two entry points: whole programs and standalone expressions.
pub mod core;

/// Statement parsing.
///
/// Declarations, assignments, calls, returns and function declarations.
pub mod statement;

/// Block parsing.
///
/// Indented blocks and the compound statements built on them: `if` with
/// `otherwise`, `loop`, `as_long_as` and `condition` with its cases.
pub mod block;

/// Binary operator parsing, one function per precedence level.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Literals, identifiers, calls, matrix literals and parenthesized
/// expressions.
pub mod unary;

/// Helpers shared by the other parser modules.
pub mod utils;

pub use self::core::{ParseResult, Parser};
