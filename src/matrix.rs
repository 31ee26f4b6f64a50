use ordered_float::OrderedFloat;

/// Elementwise and matrix arithmetic.
///
/// Sums and differences with matrices or scalars, scaling, the matrix product
/// and division through the inverse. Every operation returns a fresh matrix.
pub mod arithmetic;
/// LU decomposition, determinant and inverse.
///
/// The decomposition is computed without pivoting: the upper factor has a unit
/// diagonal and the lower factor carries the scale. The inverse is the
/// adjugate divided by the determinant.
pub mod decomposition;

pub use decomposition::LuDecomposition;

/// Relative tolerance used by [`Matrix::approx_eq`].
pub const EPSILON: f64 = 1e-10;

/// Largest number of values a matrix built from a declared size may hold.
pub const MAX_ELEMENTS: usize = 1 << 24;

/// Result type used by the matrix engine.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Number of rows and columns of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of rows.
    pub rows:    usize,
    /// Number of columns.
    pub columns: usize,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Failures of the matrix engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The operands' dimensions do not fit the operation.
    #[error("incompatible dimensions {left} and {right}")]
    IncompatibleDimensions {
        /// Dimensions of the left operand.
        left:  Dimensions,
        /// Dimensions of the right operand.
        right: Dimensions,
    },
    /// The number of values does not match `rows * columns`.
    #[error("expected {expected} values, found {found}")]
    ValueCount {
        /// `rows * columns`.
        expected: usize,
        /// Number of values supplied.
        found:    usize,
    },
    /// A row of a nested literal has a different length than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row:      usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
    },
    /// The operation is only defined for square matrices.
    #[error("matrix of size {0} is not square")]
    NotSquare(Dimensions),
    /// The determinant is zero.
    #[error("matrix is singular")]
    Singular,
    /// Decomposition without pivoting met a zero pivot it must divide by.
    #[error("zero pivot in row {0}")]
    ZeroPivot(usize),
    /// `rows * columns` overflows or exceeds [`MAX_ELEMENTS`].
    #[error("matrix of size {0} is too large")]
    TooLarge(Dimensions),
}

/// A dense matrix of doubles stored row by row.
///
/// The invariant `values.len() == rows * columns` holds for every matrix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows:    usize,
    columns: usize,
    values:  Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from row-major values.
    ///
    /// # Errors
    /// Returns [`MatrixError::TooLarge`] if `rows * columns` overflows, and
    /// [`MatrixError::ValueCount`] if `values` does not hold exactly
    /// `rows * columns` entries.
    pub fn new(rows: usize, columns: usize, values: Vec<f64>) -> MatrixResult<Self> {
        let expected = rows.checked_mul(columns)
                           .ok_or(MatrixError::TooLarge(Dimensions { rows, columns }))?;
        if values.len() != expected {
            return Err(MatrixError::ValueCount { expected,
                                                 found: values.len() });
        }
        Ok(Self { rows,
                  columns,
                  values })
    }

    /// Creates a matrix filled with zeros.
    ///
    /// # Panics
    /// Panics if `rows * columns` overflows. Sizes read from a program go
    /// through [`Matrix::with_size`] instead.
    #[must_use]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self { rows,
               columns,
               values: vec![0.0; rows * columns] }
    }

    /// Creates a zero matrix of a size requested at runtime.
    ///
    /// # Errors
    /// Returns [`MatrixError::TooLarge`] if `rows * columns` overflows or
    /// exceeds [`MAX_ELEMENTS`].
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::{Matrix, MatrixError};
    ///
    /// assert_eq!(Matrix::with_size(2, 3).unwrap(), Matrix::zeros(2, 3));
    /// assert!(matches!(Matrix::with_size(1 << 32, 1 << 32), Err(MatrixError::TooLarge(_))));
    /// ```
    pub fn with_size(rows: usize, columns: usize) -> MatrixResult<Self> {
        match rows.checked_mul(columns) {
            Some(count) if count <= MAX_ELEMENTS => Ok(Self::zeros(rows, columns)),
            _ => Err(MatrixError::TooLarge(Dimensions { rows, columns })),
        }
    }

    /// Creates the `size x size` identity matrix.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        for i in 0..size {
            matrix.values[i * size + i] = 1.0;
        }
        matrix
    }

    /// Creates a matrix from nested rows.
    ///
    /// An empty list of rows yields the empty `0x0` matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::RaggedRows`] if the rows differ in length.
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.get(1, 0), Some(3.0));
    ///
    /// assert!(Matrix::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * columns);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(MatrixError::RaggedRows { row:      index,
                                                     expected: columns,
                                                     found:    row.len(), });
            }
            values.extend_from_slice(row);
        }

        let rows = if columns == 0 { 0 } else { rows.len() };
        Self::new(rows, columns, values)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Rows and columns together.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions { rows:    self.rows,
                     columns: self.columns, }
    }

    /// The values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The value at `row` and `column`, if inside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.at(row, column))
    }

    pub(crate) fn at(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.columns + column]
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Returns `true` if the matrix has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Swaps rows and columns.
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::Matrix;
    ///
    /// let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = m.transpose();
    ///
    /// assert_eq!(t.rows(), 3);
    /// assert_eq!(t.values(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// assert_eq!(t.transpose(), m);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for column in 0..self.columns {
            for row in 0..self.rows {
                values.push(self.at(row, column));
            }
        }

        Self { rows: self.columns,
               columns: self.rows,
               values }
    }

    /// Applies `f` to every value.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { rows:    self.rows,
               columns: self.columns,
               values:  self.values.iter().map(|&v| f(v)).collect(), }
    }

    /// Largest absolute value, or zero for the empty matrix.
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        self.values
            .iter()
            .map(|v| OrderedFloat(v.abs()))
            .max()
            .map_or(0.0, |m| m.0)
    }

    /// Compares two matrices within a relative tolerance.
    ///
    /// Dimensions must match exactly. Values may differ by at most
    /// [`EPSILON`] times the largest magnitude found in either operand.
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::Matrix;
    ///
    /// let a = Matrix::new(1, 2, vec![1.0, 0.0]).unwrap();
    /// let b = Matrix::new(1, 2, vec![1.0 + 1e-13, 1e-14]).unwrap();
    /// let c = Matrix::new(2, 1, vec![1.0, 0.0]).unwrap();
    ///
    /// assert!(a.approx_eq(&b));
    /// assert!(!a.approx_eq(&c));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }

        let tolerance = EPSILON * self.max_magnitude().max(other.max_magnitude());
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| a == b || (a - b).abs() <= tolerance)
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for column in 0..self.columns {
                if column > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", self.at(row, column))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
