use crate::{matrix::Matrix, util::num::promote};

/// Represents a runtime value in the interpreter.
///
/// Values are never mutated in place: every operation produces a fresh value
/// and reassignment replaces the binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Double(f64),
    /// A string of characters.
    Text(String),
    /// A dense matrix of doubles.
    Matrix(Matrix),
}

/// The four runtime types, as named by the type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `integer`
    Integer,
    /// `double`
    Double,
    /// `text`
    Text,
    /// `matrix`
    Matrix,
}

impl ValueType {
    /// Position of the type in the ordered set integer, double, text, matrix.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Integer => 0,
            Self::Double => 1,
            Self::Text => 2,
            Self::Matrix => 3,
        }
    }

    /// The value a declaration without initializer binds.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::value::{Value, ValueType};
    ///
    /// assert_eq!(ValueType::Integer.default_value(), Value::Integer(0));
    /// assert_eq!(ValueType::Text.default_value(), Value::Text(String::new()));
    /// ```
    #[must_use]
    pub fn default_value(self) -> Value {
        match self {
            Self::Integer => Value::Integer(0),
            Self::Double => Value::Double(0.0),
            Self::Text => Value::Text(String::new()),
            Self::Matrix => Value::Matrix(Matrix::default()),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Text => "text",
            Self::Matrix => "matrix",
        };
        write!(f, "{name}")
    }
}

/// Numbers the ordered operand-type pair of a binary operator as
/// `4 * left + right`, one of sixteen values.
///
/// Operator traces are labelled with it; the dispatch itself matches on the
/// pair through [`Operands::of`](crate::interpreter::evaluator::binary::core::Operands::of).
///
/// # Example
/// ```
/// use matlang::interpreter::value::{ValueType, signature};
///
/// assert_eq!(signature(ValueType::Integer, ValueType::Integer), 0);
/// assert_eq!(signature(ValueType::Text, ValueType::Matrix), 11);
/// assert_eq!(signature(ValueType::Matrix, ValueType::Matrix), 15);
/// ```
#[must_use]
pub const fn signature(left: ValueType, right: ValueType) -> usize {
    4 * left.index() + right.index()
}

impl Value {
    /// The runtime type of the value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Double(_) => ValueType::Double,
            Self::Text(_) => ValueType::Text,
            Self::Matrix(_) => ValueType::Matrix,
        }
    }

    /// C-style truthiness used by conditions and logical operators.
    ///
    /// Numbers are true when non-zero, text and matrices when non-empty.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Double(0.0).is_truthy());
    /// assert!(!Value::Text(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Double(d) => *d != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::Matrix(m) => !m.is_empty(),
        }
    }

    /// The value as a double, if it is numeric. Integers are promoted.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(promote(*n)),
            Self::Double(d) => Some(*d),
            Self::Text(_) | Self::Matrix(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Matrix> for Value {
    fn from(v: Matrix) -> Self {
        Self::Matrix(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(d) => write!(f, "{d:?}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
