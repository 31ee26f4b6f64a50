use tracing::trace;

use crate::matrix::{Matrix, MatrixError, MatrixResult};

/// Lower and upper triangular factors of a square matrix.
///
/// `lower * upper` reproduces the decomposed matrix. The upper factor has a
/// unit diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    /// Lower triangular factor, carrying the scale of each row.
    pub lower: Matrix,
    /// Upper triangular factor with ones on the diagonal.
    pub upper: Matrix,
}

impl Matrix {
    /// Decomposes a square matrix into lower and upper triangular factors.
    ///
    /// No rows are exchanged. A zero on the lower diagonal is accepted only in
    /// the last row, where nothing has to be divided by it.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] for non-square input. A zero pivot
    /// with zeros below it means the matrix is singular and returns
    /// [`MatrixError::Singular`]; any other zero pivot would require a row
    /// exchange and returns [`MatrixError::ZeroPivot`].
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::Matrix;
    ///
    /// let m = Matrix::new(2, 2, vec![4.0, 3.0, 6.0, 3.0]).unwrap();
    /// let lu = m.lu_decomposition().unwrap();
    ///
    /// assert_eq!(lu.upper.get(0, 0), Some(1.0));
    /// assert!(lu.lower.multiply(&lu.upper).unwrap().approx_eq(&m));
    /// ```
    pub fn lu_decomposition(&self) -> MatrixResult<LuDecomposition> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.dimensions()));
        }

        let n = self.rows;
        let mut lower = Self::zeros(n, n);
        let mut upper = Self::identity(n);

        for j in 0..n {
            for i in j..n {
                let sum: f64 = (0..j).map(|k| lower.at(i, k) * upper.at(k, j)).sum();
                lower.values[i * n + j] = self.at(i, j) - sum;
            }

            let pivot = lower.at(j, j);
            if pivot == 0.0 && j + 1 < n {
                if (j + 1..n).all(|i| lower.at(i, j) == 0.0) {
                    return Err(MatrixError::Singular);
                }
                return Err(MatrixError::ZeroPivot(j));
            }

            for i in j + 1..n {
                let sum: f64 = (0..j).map(|k| lower.at(j, k) * upper.at(k, i)).sum();
                upper.values[j * n + i] = (self.at(j, i) - sum) / pivot;
            }
        }

        Ok(LuDecomposition { lower, upper })
    }

    /// Determinant as the product of the lower factor's diagonal.
    ///
    /// The empty matrix has determinant 1, and a matrix the decomposition
    /// finds singular has determinant 0.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] and [`MatrixError::ZeroPivot`] from
    /// [`Matrix::lu_decomposition`].
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::Matrix;
    ///
    /// let singular = Matrix::new(2, 2, vec![1.0, 1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(singular.determinant().unwrap(), 0.0);
    ///
    /// let m = Matrix::new(2, 2, vec![2.0, 1.0, 4.0, 5.0]).unwrap();
    /// assert!((m.determinant().unwrap() - 6.0).abs() < 1e-12);
    /// ```
    pub fn determinant(&self) -> MatrixResult<f64> {
        match self.lu_decomposition() {
            Ok(lu) => Ok((0..self.rows).map(|i| lu.lower.at(i, i)).product()),
            Err(MatrixError::Singular) => Ok(0.0),
            Err(e) => Err(e),
        }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Recurses through the minors and needs no division, so it never meets a
    /// zero pivot.
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::Matrix;
    ///
    /// let swapped = Matrix::new(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(swapped.expansion_determinant(), -1.0);
    /// ```
    #[must_use]
    pub fn expansion_determinant(&self) -> f64 {
        match self.rows {
            0 => 1.0,
            1 => self.at(0, 0),
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            _ => (0..self.columns).filter(|&j| self.at(0, j) != 0.0)
                                  .map(|j| {
                                      let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                                      sign * self.at(0, j) * self.minor(0, j).expansion_determinant()
                                  })
                                  .sum(),
        }
    }

    /// The matrix without row `row` and column `column`.
    #[must_use]
    pub fn minor(&self, row: usize, column: usize) -> Self {
        let mut values = Vec::with_capacity(self.rows.saturating_sub(1) * self.columns.saturating_sub(1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.columns).filter(|&j| j != column) {
                values.push(self.at(i, j));
            }
        }

        Self { rows: self.rows.saturating_sub(1),
               columns: self.columns.saturating_sub(1),
               values }
    }

    /// Matrix of signed minors, `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// The minors' determinants come from [`Matrix::expansion_determinant`].
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] for non-square input.
    pub fn cofactors(&self) -> MatrixResult<Self> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.dimensions()));
        }

        let mut values = Vec::with_capacity(self.values.len());
        for i in 0..self.rows {
            for j in 0..self.columns {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                values.push(sign * self.minor(i, j).expansion_determinant());
            }
        }

        Self::new(self.rows, self.columns, values)
    }

    /// Inverse via the adjugate: the transposed cofactor matrix divided by the
    /// determinant.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] for non-square input,
    /// [`MatrixError::Singular`] if the determinant is zero, and
    /// [`MatrixError::ZeroPivot`] if a determinant cannot be computed without
    /// row exchanges.
    ///
    /// # Example
    /// ```
    /// use matlang::matrix::{Matrix, MatrixError};
    ///
    /// let m = Matrix::new(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
    /// let product = m.multiply(&m.inverse().unwrap()).unwrap();
    /// assert!(product.approx_eq(&Matrix::identity(2)));
    ///
    /// let singular = Matrix::new(2, 2, vec![1.0, 1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(singular.inverse(), Err(MatrixError::Singular));
    /// ```
    pub fn inverse(&self) -> MatrixResult<Self> {
        let determinant = self.determinant()?;
        if determinant == 0.0 {
            return Err(MatrixError::Singular);
        }
        trace!(target: "matlang::matrix", dimensions = %self.dimensions(), determinant, "Inverting matrix");

        Ok(self.cofactors()?.transpose().div_scalar(determinant))
    }
}
