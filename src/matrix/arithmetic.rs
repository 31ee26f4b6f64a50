use crate::matrix::{Matrix, MatrixError, MatrixResult};

impl Matrix {
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> MatrixResult<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(MatrixError::IncompatibleDimensions { left:  self.dimensions(),
                                                             right: other.dimensions(), });
        }

        Self::new(self.rows,
                  self.columns,
                  self.values.iter().zip(&other.values).map(|(&a, &b)| f(a, b)).collect())
    }

    /// Elementwise sum of two matrices of equal dimensions.
    ///
    /// # Errors
    /// Returns [`MatrixError::IncompatibleDimensions`] if the dimensions
    /// differ.
    pub fn add(&self, other: &Self) -> MatrixResult<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference of two matrices of equal dimensions.
    ///
    /// # Errors
    /// Returns [`MatrixError::IncompatibleDimensions`] if the dimensions
    /// differ.
    pub fn sub(&self, other: &Self) -> MatrixResult<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Adds `scalar` to every value.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Self {
        self.map(|v| v + scalar)
    }

    /// Subtracts `scalar` from every value.
    #[must_use]
    pub fn sub_scalar(&self, scalar: f64) -> Self {
        self.map(|v| v - scalar)
    }

    /// Subtracts every value from `scalar`.
    #[must_use]
    pub fn subtract_from(&self, scalar: f64) -> Self {
        self.map(|v| scalar - v)
    }

    /// Multiplies every value by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divides every value by `scalar`. Callers reject a zero divisor.
    #[must_use]
    pub fn div_scalar(&self, scalar: f64) -> Self {
        self.map(|v| v / scalar)
    }

    /// Negates every value.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.map(|v| -v)
    }

    /// Matrix product.
    ///
    /// # Errors
    /// Returns [`MatrixError::IncompatibleDimensions`] unless the left
    /// operand has as many columns as the right operand has rows.
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::Matrix;
    ///
    /// let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::new(2, 1, vec![5.0, 6.0]).unwrap();
    ///
    /// assert_eq!(a.multiply(&b).unwrap().values(), &[17.0, 39.0]);
    /// assert!(b.multiply(&a).is_err());
    /// ```
    pub fn multiply(&self, other: &Self) -> MatrixResult<Self> {
        if self.columns != other.rows {
            return Err(MatrixError::IncompatibleDimensions { left:  self.dimensions(),
                                                             right: other.dimensions(), });
        }

        let mut values = Vec::with_capacity(self.rows * other.columns);
        for row in 0..self.rows {
            for column in 0..other.columns {
                values.push((0..self.columns).map(|k| self.at(row, k) * other.at(k, column))
                                             .sum());
            }
        }

        Self::new(self.rows, other.columns, values)
    }

    /// Right division, defined as `self * inverse(other)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] if `other` is not square, the errors
    /// of [`Matrix::inverse`], and dimension errors of the product.
    pub fn divide(&self, other: &Self) -> MatrixResult<Self> {
        self.multiply(&other.inverse()?)
    }
}
