use tracing::debug;

use crate::{
    ast::{Expr, Literal, MatrixSize, Program},
    error::SemanticError,
    interpreter::{
        evaluator::{scope::ScopeManager, statement::Flow, VariableInfo},
        source::Position,
        value::{Value, ValueType},
    },
    matrix::Matrix,
    util::num::to_size,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `SemanticError` describing the failure.
pub type EvalResult<T> = Result<T, SemanticError>;

/// Walks a program tree and computes its value.
///
/// The evaluator borrows the tree for its whole lifetime: declared functions
/// are stored as references into it.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     evaluator::Evaluator, parser::Parser, value::Value,
/// };
///
/// let program = Parser::from_text("integer x = 4\nx * 2\n").unwrap()
///                                                           .parse_program()
///                                                           .unwrap();
/// let mut evaluator = Evaluator::new();
///
/// assert_eq!(evaluator.evaluate_program(&program).unwrap(), Some(Value::Integer(8)));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator<'a> {
    pub(in crate::interpreter::evaluator) scope: ScopeManager<'a>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scope: ScopeManager::new() }
    }

    /// The variable and function bindings.
    #[must_use]
    pub const fn scope(&self) -> &ScopeManager<'a> {
        &self.scope
    }

    /// Runs every top-level statement in order.
    ///
    /// # Returns
    /// The value of a top-level `return`, or else the value of the last
    /// statement that produced one. `None` if no statement did.
    pub fn evaluate_program(&mut self, program: &'a Program) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &program.statements {
            match self.execute(statement)? {
                Flow::Return(value) => {
                    debug!(target: "matlang::evaluator", "Program returned");
                    return Ok(value);
                },
                Flow::Normal(Some(value)) => result = Some(value),
                Flow::Normal(None) => {},
            }
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left before right.
    pub fn evaluate(&mut self, expr: &'a Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::literal(value)),
            Expr::Identifier { name, position } => self.variable(name, *position),
            Expr::Unary { op, operand, position } => {
                let value = self.evaluate(operand)?;
                Self::unary(*op, &value, *position)
            },
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::binary(*op, &left, &right, *position)
            },
            Expr::Assignment { name, value, position } => self.assign(name, value, *position),
            Expr::Declaration { var_type,
                                name,
                                size,
                                value,
                                position, } => {
                self.declare(*var_type, name, size.as_ref(), value.as_deref(), *position)
            },
            Expr::MatrixLiteral { rows, position } => self.matrix_literal(rows, *position),
            Expr::Call(call) => {
                self.call(call)?
                    .ok_or_else(|| SemanticError::MissingReturnValue { name:     call.name.clone(),
                                                                       position: call.position, })
            },
        }
    }

    fn literal(value: &Literal) -> Value {
        match value {
            Literal::Integer(n) => Value::Integer(*n),
            Literal::Double(d) => Value::Double(*d),
            Literal::Text(s) => Value::Text(s.clone()),
        }
    }

    fn variable(&self, name: &str, position: Position) -> EvalResult<Value> {
        self.scope
            .search_variable(name)
            .map(|info| info.value.clone())
            .ok_or_else(|| SemanticError::UnknownVariable { name: name.to_string(),
                                                            position })
    }

    /// Rebinds a declared variable after checking the value's type.
    fn assign(&mut self, name: &str, value: &'a Expr, position: Position) -> EvalResult<Value> {
        let value = self.evaluate(value)?;

        let var_type = self.scope
                           .search_variable(name)
                           .map(|info| info.var_type)
                           .ok_or_else(|| SemanticError::UnknownVariable { name: name.to_string(),
                                                                           position })?;

        self.bind(name, var_type, value, position)
    }

    /// Declares a variable, binding its initializer or the type's default.
    ///
    /// A matrix declared with a size starts as a zero matrix of that size; an
    /// initializer must then have exactly those dimensions.
    fn declare(&mut self,
               var_type: ValueType,
               name: &str,
               size: Option<&'a MatrixSize>,
               value: Option<&'a Expr>,
               position: Position)
               -> EvalResult<Value> {
        let initial = match value {
            Some(expr) => Some(self.evaluate(expr)?),
            None => None,
        };

        let value = match (size, initial) {
            (Some(size), initial) => {
                let zeros = self.matrix_size(size)?;
                match initial {
                    Some(Value::Matrix(m)) if m.dimensions() != zeros.dimensions() => {
                        return Err(SemanticError::IncompatibleMatrixDimensions {
                            details: format!("declared {}, initialized with {}",
                                             zeros.dimensions(),
                                             m.dimensions()),
                            position });
                    },
                    Some(value) => value,
                    None => Value::Matrix(zeros),
                }
            },
            (None, Some(value)) => value,
            (None, None) => var_type.default_value(),
        };

        self.bind(name, var_type, value, position)
    }

    /// Evaluates a `[rows, columns]` clause into a zero matrix.
    fn matrix_size(&mut self, size: &'a MatrixSize) -> EvalResult<Matrix> {
        let rows = self.evaluate(&size.rows)?;
        let columns = self.evaluate(&size.columns)?;

        let dimension = |value: &Value| match value {
            Value::Integer(n) => to_size(*n).ok_or_else(|| {
                                                SemanticError::InvalidMatrixSize { details: format!("{n} is negative"),
                                                                                   position: size.position }
                                            }),
            other => Err(SemanticError::InvalidMatrixSize { details: format!("expected integer, found {}",
                                                                             other.value_type()),
                                                            position: size.position }),
        };

        Matrix::with_size(dimension(&rows)?, dimension(&columns)?)
            .map_err(|e| SemanticError::from_matrix(e, size.position))
    }

    /// Type checks `value` against `var_type` and binds it at the current
    /// depth.
    pub(in crate::interpreter::evaluator) fn bind(&mut self,
                                                  name: &str,
                                                  var_type: ValueType,
                                                  value: Value,
                                                  position: Position)
                                                  -> EvalResult<Value> {
        if value.value_type() != var_type {
            return Err(SemanticError::IllegalAssignmentType { name: name.to_string(),
                                                              expected: var_type,
                                                              found: value.value_type(),
                                                              position });
        }

        self.scope.enter_variable(name,
                                  VariableInfo { var_type,
                                                 value: value.clone() });
        Ok(value)
    }

    /// Builds a matrix from rows of numeric element expressions.
    fn matrix_literal(&mut self, rows: &'a [Vec<Expr>], position: Position) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(rows.len());

        for row in rows {
            let mut numbers = Vec::with_capacity(row.len());
            for element in row {
                let value = self.evaluate(element)?;
                let number = value.as_f64().ok_or_else(|| {
                                               SemanticError::UnsupportedOperandType { operator: "matrix literal".to_string(),
                                                                                       operand:  value.value_type(),
                                                                                       expected: "integer, double",
                                                                                       position: element.position(), }
                                           })?;
                numbers.push(number);
            }
            values.push(numbers);
        }

        Matrix::from_rows(values).map(Value::Matrix)
                                 .map_err(|e| SemanticError::from_matrix(e, position))
    }
}
