use crate::interpreter::source::Position;

/// The kind of a lexical token.
///
/// Overloaded operators share one kind and are told apart by their
/// [`Subtype`]: `+` and `-` are both `Additive`, the comparisons and the
/// boolean connectives are all `Logical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `integer`
    IntegerType,
    /// `double`
    DoubleType,
    /// `text`
    TextType,
    /// `matrix`
    MatrixType,
    /// `if`
    If,
    /// `otherwise`
    Otherwise,
    /// `loop`
    Loop,
    /// `to`
    To,
    /// `step`
    Step,
    /// `as_long_as`
    AsLongAs,
    /// `function`
    Function,
    /// `condition`
    Condition,
    /// `case`
    Case,
    /// `default`
    Default,
    /// `return`
    Return,
    /// `det`, `transpose` or `inverse`.
    MatrixOperator,
    /// Integer literal, such as `42`.
    Integer,
    /// Floating-point literal, such as `3.14`.
    Double,
    /// String literal, such as `"mama"`.
    String,
    /// Variable or function name.
    Identifier,
    /// `+` or `-`.
    Additive,
    /// `*` or `/`.
    Multiplicative,
    /// `^`
    Exponent,
    /// Comparisons, `and`, `or`, `not` and `!`.
    Logical,
    /// `=`
    Assign,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// End of a logical line.
    NextLine,
    /// Indentation increased.
    OpenBlock,
    /// Indentation decreased by one level.
    CloseBlock,
    /// No more input.
    EndOfFile,
    /// A character that starts no token.
    Unrecognized,
}

impl TokenKind {
    /// Returns `true` for the four type keywords.
    #[must_use]
    pub const fn is_type(self) -> bool {
        matches!(self, Self::IntegerType | Self::DoubleType | Self::TextType | Self::MatrixType)
    }

    /// Returns `true` for the markers produced from layout rather than text.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::OpenBlock | Self::CloseBlock | Self::EndOfFile)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::IntegerType => "'integer'",
            Self::DoubleType => "'double'",
            Self::TextType => "'text'",
            Self::MatrixType => "'matrix'",
            Self::If => "'if'",
            Self::Otherwise => "'otherwise'",
            Self::Loop => "'loop'",
            Self::To => "'to'",
            Self::Step => "'step'",
            Self::AsLongAs => "'as_long_as'",
            Self::Function => "'function'",
            Self::Condition => "'condition'",
            Self::Case => "'case'",
            Self::Default => "'default'",
            Self::Return => "'return'",
            Self::MatrixOperator => "matrix operator",
            Self::Integer => "integer literal",
            Self::Double => "double literal",
            Self::String => "string literal",
            Self::Identifier => "identifier",
            Self::Additive => "additive operator",
            Self::Multiplicative => "multiplicative operator",
            Self::Exponent => "'^'",
            Self::Logical => "logical operator",
            Self::Assign => "'='",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Colon => "':'",
            Self::Dot => "'.'",
            Self::Comma => "','",
            Self::NextLine => "end of line",
            Self::OpenBlock => "indented block",
            Self::CloseBlock => "end of block",
            Self::EndOfFile => "end of input",
            Self::Unrecognized => "unrecognized character",
        };
        write!(f, "{text}")
    }
}

/// Disambiguates tokens whose kind covers several operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtype {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not` or `!`
    Not,
    /// `det`
    Det,
    /// `transpose`
    Transpose,
    /// `inverse`
    Inverse,
}

/// Payload carried by literal and identifier tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// No payload.
    None,
    /// Value of an integer literal.
    Integer(i64),
    /// Value of a floating-point literal.
    Double(f64),
    /// Contents of a string literal, an identifier's name, or the text of an
    /// unrecognized character.
    Text(String),
}

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The operator variant, for overloaded kinds.
    pub subtype:  Option<Subtype>,
    /// The literal payload, if any.
    pub value:    TokenValue,
    /// Where the token's first character was read.
    pub position: Position,
}

impl Token {
    /// Creates a token without subtype or payload.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind,
               subtype: None,
               value: TokenValue::None,
               position }
    }

    /// Creates an operator token with its subtype.
    #[must_use]
    pub const fn operator(kind: TokenKind, subtype: Subtype, position: Position) -> Self {
        Self { kind,
               subtype: Some(subtype),
               value: TokenValue::None,
               position }
    }

    /// Creates a token carrying a payload.
    #[must_use]
    pub const fn with_value(kind: TokenKind, value: TokenValue, position: Position) -> Self {
        Self { kind,
               subtype: None,
               value,
               position }
    }

    /// Consumes the token and returns its text payload, or an empty string.
    #[must_use]
    pub fn into_text(self) -> String {
        match self.value {
            TokenValue::Text(text) => text,
            _ => String::new(),
        }
    }
}

/// Looks up a word in the keyword table.
///
/// # Example
/// ```
/// use matlang::interpreter::lexer::token::{Subtype, TokenKind, keyword};
///
/// assert_eq!(keyword("otherwise"), Some((TokenKind::Otherwise, None)));
/// assert_eq!(keyword("det"), Some((TokenKind::MatrixOperator, Some(Subtype::Det))));
/// assert_eq!(keyword("matrixx"), None);
/// ```
#[must_use]
pub fn keyword(word: &str) -> Option<(TokenKind, Option<Subtype>)> {
    let entry = match word {
        "integer" => (TokenKind::IntegerType, None),
        "double" => (TokenKind::DoubleType, None),
        "text" => (TokenKind::TextType, None),
        "matrix" => (TokenKind::MatrixType, None),
        "if" => (TokenKind::If, None),
        "otherwise" => (TokenKind::Otherwise, None),
        "loop" => (TokenKind::Loop, None),
        "to" => (TokenKind::To, None),
        "step" => (TokenKind::Step, None),
        "as_long_as" => (TokenKind::AsLongAs, None),
        "function" => (TokenKind::Function, None),
        "condition" => (TokenKind::Condition, None),
        "case" => (TokenKind::Case, None),
        "default" => (TokenKind::Default, None),
        "return" => (TokenKind::Return, None),
        "det" => (TokenKind::MatrixOperator, Some(Subtype::Det)),
        "transpose" => (TokenKind::MatrixOperator, Some(Subtype::Transpose)),
        "inverse" => (TokenKind::MatrixOperator, Some(Subtype::Inverse)),
        "and" => (TokenKind::Logical, Some(Subtype::And)),
        "or" => (TokenKind::Logical, Some(Subtype::Or)),
        "not" => (TokenKind::Logical, Some(Subtype::Not)),
        _ => return None,
    };
    Some(entry)
}
