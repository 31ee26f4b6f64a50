use crate::{
    interpreter::{source::Position, value::ValueType},
    matrix::MatrixError,
};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum SemanticError {
    /// Tried to use a variable that is not bound at the current depth.
    #[error("Error at {position}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Position of the reference.
        position: Position,
    },
    /// Called a function that was never declared.
    #[error("Error at {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Position of the call.
        position: Position,
    },
    /// A binary operator was applied to a type pair it does not support.
    #[error("Error at {position}: Cannot apply '{operator}' to {left} and {right}. Valid operands are: {expected}.")]
    UnsupportedOperatorTypes {
        /// The operator as written in the source.
        operator: String,
        /// Type of the left operand.
        left:     ValueType,
        /// Type of the right operand.
        right:    ValueType,
        /// The combinations the operator accepts.
        expected: &'static str,
        /// Position of the operator.
        position: Position,
    },
    /// A unary operator or construct was applied to a type it does not
    /// support.
    #[error("Error at {position}: Cannot apply '{operator}' to {operand}. Valid operands are: {expected}.")]
    UnsupportedOperandType {
        /// The operator or construct.
        operator: String,
        /// Type of the operand.
        operand:  ValueType,
        /// The types the operator accepts.
        expected: &'static str,
        /// Position of the operator.
        position: Position,
    },
    /// Attempted division by a numeric zero.
    #[error("Error at {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the division.
        position: Position,
    },
    /// Attempted to invert a matrix whose determinant is zero.
    #[error("Error at {position}: Matrix is singular and cannot be inverted.")]
    SingularMatrix {
        /// Position of the operation.
        position: Position,
    },
    /// Matrix dimensions do not fit the requested operation.
    #[error("Error at {position}: Incompatible matrix dimensions: {details}.")]
    IncompatibleMatrixDimensions {
        /// Description of the mismatch.
        details:  String,
        /// Position of the operation.
        position: Position,
    },
    /// A determinant or inverse was requested for a non-square matrix.
    #[error("Error at {position}: Matrix of size {dimensions} is not square.")]
    NotSquare {
        /// The offending dimensions, as `rows x columns`.
        dimensions: String,
        /// Position of the operation.
        position:   Position,
    },
    /// LU decomposition hit a zero pivot; decomposition is done without row
    /// exchanges.
    #[error("Error at {position}: Zero pivot in row {row}, the matrix needs a row exchange.")]
    ZeroPivot {
        /// Row of the zero pivot.
        row:      usize,
        /// Position of the operation.
        position: Position,
    },
    /// The value assigned to a variable does not match its declared type.
    #[error("Error at {position}: Illegal assignment of {found} to '{name}' declared as {expected}.")]
    IllegalAssignmentType {
        /// The variable or argument being bound.
        name:     String,
        /// The declared type.
        expected: ValueType,
        /// The type of the assigned value.
        found:    ValueType,
        /// Position of the assignment.
        position: Position,
    },
    /// A function returned a value of the wrong type.
    #[error("Error at {position}: Function '{name}' must return {expected}, but returned {found}.")]
    IllegalReturnType {
        /// The function name.
        name:     String,
        /// The declared return type.
        expected: ValueType,
        /// The type actually returned.
        found:    ValueType,
        /// Position of the call.
        position: Position,
    },
    /// A function produced no value where one was required.
    #[error("Error at {position}: Function '{name}' did not return a value.")]
    MissingReturnValue {
        /// The function name.
        name:     String,
        /// Position of the call.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error at {position}: Function '{name}' takes {expected} argument(s), but {found} were supplied.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// The number of declared arguments.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
        /// Position of the call.
        position: Position,
    },
    /// A loop step evaluated to zero, or is too small to change the counter.
    #[error("Error at {position}: Loop step must be non-zero and change the counter.")]
    InvalidLoopStep {
        /// Position of the loop.
        position: Position,
    },
    /// A declared matrix size is negative, not an integer, or too large.
    #[error("Error at {position}: Invalid matrix size: {details}.")]
    InvalidMatrixSize {
        /// Description of the problem.
        details:  String,
        /// Position of the size clause.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    #[error("Error at {position}: Integer overflow while trying to compute result.")]
    IntegerOverflow {
        /// Position of the operation.
        position: Position,
    },
}

impl SemanticError {
    /// Attaches a source position to a matrix engine failure.
    #[must_use]
    pub fn from_matrix(error: MatrixError, position: Position) -> Self {
        match error {
            MatrixError::IncompatibleDimensions { left, right } => {
                Self::IncompatibleMatrixDimensions { details: format!("{left} and {right}"),
                                                     position }
            },
            MatrixError::ValueCount { expected, found } => {
                Self::IncompatibleMatrixDimensions { details:
                                                         format!("expected {expected} values, found {found}"),
                                                     position }
            },
            MatrixError::RaggedRows { row, expected, found } => {
                Self::IncompatibleMatrixDimensions { details: format!("row {row} has {found} columns, expected {expected}"),
                                                     position }
            },
            MatrixError::NotSquare(dimensions) => {
                Self::NotSquare { dimensions: dimensions.to_string(),
                                  position }
            },
            MatrixError::Singular => Self::SingularMatrix { position },
            MatrixError::ZeroPivot(row) => Self::ZeroPivot { row, position },
            MatrixError::TooLarge(dimensions) => {
                Self::InvalidMatrixSize { details: format!("{dimensions} exceeds the element limit"),
                                          position }
            },
        }
    }
}
