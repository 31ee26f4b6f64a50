use crate::interpreter::{lexer::token::TokenKind, source::Position, value::ValueType};

/// A parsed program: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements at depth zero.
    pub statements: Vec<Statement>,
}

/// Represents a literal value in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Double(f64),
    /// A string literal with escapes already resolved.
    Text(String),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Declarations and assignments are expressions: they evaluate to the value
/// they bind.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value:    Literal,
        /// Where the literal starts.
        position: Position,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:     String,
        /// Where the name starts.
        position: Position,
    },
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// An infix operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// Rebinding a declared variable, `name = value`.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Box<Self>,
        /// Position of the variable name.
        position: Position,
    },
    /// A typed variable declaration, `matrix m[2, 2] = ...`.
    Declaration {
        /// The declared type.
        var_type: ValueType,
        /// The name of the variable.
        name:     String,
        /// Declared dimensions, matrices only.
        size:     Option<MatrixSize>,
        /// The initializer, if any.
        value:    Option<Box<Self>>,
        /// Position of the type keyword.
        position: Position,
    },
    /// A matrix literal given as rows of element expressions.
    MatrixLiteral {
        /// The rows; a single-row literal `[a, b]` has one row.
        rows:     Vec<Vec<Self>>,
        /// Position of the opening bracket.
        position: Position,
    },
    /// A function call used as an expression.
    Call(FunctionCall),
}

impl Expr {
    /// The position the node was parsed from.
    ///
    /// ## Example
    /// ```
    /// use matlang::{ast::Expr, interpreter::source::Position};
    ///
    /// let position = Position::start().next_line();
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               position };
    ///
    /// assert_eq!(expr.position().line, 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Identifier { position, .. }
            | Self::Unary { position, .. }
            | Self::Binary { position, .. }
            | Self::Assignment { position, .. }
            | Self::Declaration { position, .. }
            | Self::MatrixLiteral { position, .. } => *position,
            Self::Call(call) => call.position,
        }
    }

    /// Kind of the token the node was parsed from.
    ///
    /// ## Example
    /// ```
    /// use matlang::{
    ///     ast::{BinaryOperator, Expr, Literal},
    ///     interpreter::{lexer::token::TokenKind, source::Position},
    /// };
    ///
    /// let one = Expr::Literal { value:    Literal::Integer(1),
    ///                           position: Position::start() };
    /// let sum = Expr::Binary { left:     Box::new(one.clone()),
    ///                          op:       BinaryOperator::Add,
    ///                          right:    Box::new(one.clone()),
    ///                          position: Position::start() };
    ///
    /// assert_eq!(one.token_kind(), TokenKind::Integer);
    /// assert_eq!(sum.token_kind(), TokenKind::Additive);
    /// ```
    #[must_use]
    pub const fn token_kind(&self) -> TokenKind {
        match self {
            Self::Literal { value, .. } => match value {
                Literal::Integer(_) => TokenKind::Integer,
                Literal::Double(_) => TokenKind::Double,
                Literal::Text(_) => TokenKind::String,
            },
            Self::Identifier { .. } | Self::Assignment { .. } | Self::Call(_) => TokenKind::Identifier,
            Self::Unary { op, .. } => op.token_kind(),
            Self::Binary { op, .. } => op.token_kind(),
            Self::Declaration { var_type, .. } => type_keyword(*var_type),
            Self::MatrixLiteral { .. } => TokenKind::LeftBracket,
        }
    }
}

const fn type_keyword(value_type: ValueType) -> TokenKind {
    match value_type {
        ValueType::Integer => TokenKind::IntegerType,
        ValueType::Double => TokenKind::DoubleType,
        ValueType::Text => TokenKind::TextType,
        ValueType::Matrix => TokenKind::MatrixType,
    }
}

/// The `[rows, columns]` clause of a matrix declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSize {
    /// Expression for the number of rows.
    pub rows:     Box<Expr>,
    /// Expression for the number of columns.
    pub columns:  Box<Expr>,
    /// Position of the opening bracket.
    pub position: Position,
}

/// A call `name(arguments...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Name of the function being called.
    pub name:      String,
    /// Arguments to the function, in order.
    pub arguments: Vec<Expr>,
    /// Position of the function name.
    pub position:  Position,
}

/// A declared function argument, `integer n = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Type the supplied value must have.
    pub var_type: ValueType,
    /// The name bound inside the body.
    pub name:     String,
    /// Value used when the caller omits the argument.
    pub default:  Option<Expr>,
    /// Position of the type keyword.
    pub position: Position,
}

/// Represents a user-defined function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    /// The name of the function.
    pub name:        String,
    /// The declared return type; untyped functions may return anything.
    pub return_type: Option<ValueType>,
    /// The declared arguments.
    pub arguments:   Vec<Argument>,
    /// The statements executed on call.
    pub body:        Vec<Statement>,
    /// Position of the `function` keyword.
    pub position:    Position,
}

/// One `case value:` arm of a condition statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// Value compared against the condition's subject.
    pub value:    Expr,
    /// Statements run when the case matches.
    pub body:     Vec<Statement>,
    /// Position of the `case` keyword.
    pub position: Position,
}

/// The branch following `otherwise`.
#[derive(Debug, Clone, PartialEq)]
pub enum Otherwise {
    /// `otherwise if ...`, a chained conditional.
    If(Box<Statement>),
    /// `otherwise:` followed by a block.
    Block(Vec<Statement>),
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `if condition:` with an optional `otherwise` branch.
    If {
        /// The condition, tested for truthiness.
        condition: Expr,
        /// Statements run when the condition holds.
        body:      Vec<Statement>,
        /// The alternative branch.
        otherwise: Option<Otherwise>,
        /// Position of the `if` keyword.
        position:  Position,
    },
    /// `loop counter = start to end step step:`.
    Loop {
        /// Name of the counter bound inside the body.
        counter:  String,
        /// First counter value.
        start:    Expr,
        /// Exclusive bound.
        end:      Expr,
        /// Increment; one when omitted.
        step:     Option<Expr>,
        /// Statements run per iteration.
        body:     Vec<Statement>,
        /// Position of the `loop` keyword.
        position: Position,
    },
    /// `as_long_as condition:`.
    AsLongAs {
        /// Re-evaluated before each iteration.
        condition: Expr,
        /// Statements run per iteration.
        body:      Vec<Statement>,
        /// Position of the `as_long_as` keyword.
        position:  Position,
    },
    /// A function declaration.
    Function(FunctionDeclaration),
    /// A function call on its own line.
    Call(FunctionCall),
    /// `condition subject:` with its cases.
    Condition {
        /// Value compared against each case.
        subject:  Expr,
        /// The cases, tried in order.
        cases:    Vec<Case>,
        /// Statements run when no case matches.
        default:  Option<Vec<Statement>>,
        /// Position of the `condition` keyword.
        position: Position,
    },
    /// `return` with an optional value.
    Return {
        /// The returned expression.
        value:    Option<Expr>,
        /// Position of the `return` keyword.
        position: Position,
    },
    /// An expression evaluated for its value or effect.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Where the statement starts.
        position: Position,
    },
}

impl Statement {
    /// Kind of the token the statement starts with.
    #[must_use]
    pub const fn token_kind(&self) -> TokenKind {
        match self {
            Self::If { .. } => TokenKind::If,
            Self::Loop { .. } => TokenKind::Loop,
            Self::AsLongAs { .. } => TokenKind::AsLongAs,
            Self::Function(_) => TokenKind::Function,
            Self::Call(_) => TokenKind::Identifier,
            Self::Condition { .. } => TokenKind::Condition,
            Self::Return { .. } => TokenKind::Return,
            Self::Expression { expr, .. } => expr.token_kind(),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }

    /// Kind of the operator's token.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add | Self::Sub => TokenKind::Additive,
            Self::Mul | Self::Div => TokenKind::Multiplicative,
            Self::Pow => TokenKind::Exponent,
            Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual
            | Self::And
            | Self::Or => TokenKind::Logical,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical negation (`not x` or `!x`).
    Not,
    /// Matrix determinant (`det m`).
    Det,
    /// Matrix transpose (`transpose m`).
    Transpose,
    /// Matrix inverse (`inverse m`).
    Inverse,
}

impl UnaryOperator {
    /// Kind of the operator's token.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Negate => TokenKind::Additive,
            Self::Not => TokenKind::Logical,
            Self::Det | Self::Transpose | Self::Inverse => TokenKind::MatrixOperator,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "not",
            Self::Det => "det",
            Self::Transpose => "transpose",
            Self::Inverse => "inverse",
        };
        write!(f, "{operator}")
    }
}
