use matlang::matrix::{Dimensions, Matrix, MatrixError};

fn matrix(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).expect("well-formed rows")
}

fn square_samples() -> Vec<Matrix> {
    vec![matrix(&[&[4.0, 7.0], &[2.0, 6.0]]),
         matrix(&[&[2.0, 1.0, 1.0], &[1.0, 3.0, 2.0], &[1.0, 0.0, 0.0]]),
         matrix(&[&[5.0]]),
         matrix(&[&[1.0, 0.0, 1.0], &[0.0, 1.0, 0.0], &[1.0, 1.0, 3.0]]),
         matrix(&[&[1.0, 2.0, 3.0, 4.0],
                  &[2.0, 5.0, 1.0, 2.0],
                  &[3.0, 1.0, 4.0, 1.0],
                  &[4.0, 2.0, 1.0, 3.0]])]
}

#[test]
fn product_with_inverse_is_identity() {
    for m in square_samples() {
        let inverse = m.inverse().unwrap();
        let product = m.multiply(&inverse).unwrap();

        assert!(product.approx_eq(&Matrix::identity(m.rows())),
                "{m} * {inverse} = {product}");
    }
}

#[test]
fn lu_factors_reproduce_the_matrix() {
    for m in square_samples() {
        let lu = m.lu_decomposition().unwrap();

        for i in 0..m.rows() {
            assert_eq!(lu.upper.get(i, i), Some(1.0));
            for j in 0..i {
                assert_eq!(lu.upper.get(i, j), Some(0.0));
                assert_eq!(lu.lower.get(j, i), Some(0.0));
            }
        }
        assert!(lu.lower.multiply(&lu.upper).unwrap().approx_eq(&m));
    }
}

#[test]
fn determinants() {
    let det = matrix(&[&[2.0, 1.0, 1.0], &[1.0, 3.0, 2.0], &[1.0, 0.0, 0.0]]).determinant()
                                                                                .unwrap();
    assert!((det + 1.0).abs() < 1e-12);

    assert_eq!(matrix(&[&[5.0]]).determinant(), Ok(5.0));
    assert_eq!(Matrix::default().determinant(), Ok(1.0));
    assert_eq!(matrix(&[&[1.0, 1.0], &[1.0, 1.0]]).determinant(), Ok(0.0));
    assert_eq!(matrix(&[&[0.0, 0.0], &[0.0, 0.0]]).determinant(), Ok(0.0));
    assert_eq!(matrix(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[0.0, 0.0, 0.0]]).determinant(),
               Ok(0.0));
}

#[test]
fn expansion_agrees_with_decomposition() {
    for m in square_samples() {
        let lu = m.determinant().unwrap();
        let expansion = m.expansion_determinant();

        assert!((lu - expansion).abs() <= 1e-9 * lu.abs().max(1.0),
                "{m}: {lu} != {expansion}");
    }
    assert_eq!(matrix(&[&[0.0, 1.0], &[1.0, 0.0]]).expansion_determinant(), -1.0);
}

#[test]
fn singular_matrices_have_no_inverse() {
    let singular = matrix(&[&[1.0, 2.0], &[2.0, 4.0]]);

    assert_eq!(singular.inverse(), Err(MatrixError::Singular));
    assert_eq!(Matrix::zeros(2, 2).inverse(), Err(MatrixError::Singular));
    assert_eq!(Matrix::zeros(2, 2).lu_decomposition(), Err(MatrixError::Singular));
    assert_eq!(matrix(&[&[3.0]]).divide(&matrix(&[&[0.0]])),
               Err(MatrixError::Singular));
}

#[test]
fn decomposition_without_row_exchange_rejects_zero_pivot() {
    let swapped = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);

    assert_eq!(swapped.lu_decomposition(), Err(MatrixError::ZeroPivot(0)));
    assert_eq!(swapped.determinant(), Err(MatrixError::ZeroPivot(0)));
}

#[test]
fn non_square_operations() {
    let wide = matrix(&[&[1.0, 2.0, 3.0]]);
    let dimensions = Dimensions { rows:    1,
                                  columns: 3, };

    assert_eq!(wide.determinant(), Err(MatrixError::NotSquare(dimensions)));
    assert_eq!(wide.inverse(), Err(MatrixError::NotSquare(dimensions)));
    assert_eq!(wide.lu_decomposition(), Err(MatrixError::NotSquare(dimensions)));
}

#[test]
fn elementwise_operations_require_equal_dimensions() {
    let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = matrix(&[&[1.0, 2.0]]);

    let expected = MatrixError::IncompatibleDimensions { left:  a.dimensions(),
                                                         right: b.dimensions(), };
    assert_eq!(a.add(&b), Err(expected.clone()));
    assert_eq!(a.sub(&b), Err(expected));

    assert_eq!(a.add(&a).unwrap(), a.scale(2.0));
    assert_eq!(a.sub(&a).unwrap(), Matrix::zeros(2, 2));
}

#[test]
fn product_dimensions() {
    let a = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = a.transpose();

    let product = a.multiply(&b).unwrap();
    assert_eq!(product.dimensions(),
               Dimensions { rows:    2,
                            columns: 2, });
    assert_eq!(product.values(), &[14.0, 32.0, 32.0, 77.0]);

    assert!(matches!(a.multiply(&a), Err(MatrixError::IncompatibleDimensions { .. })));
}

#[test]
fn scalar_operations() {
    let m = matrix(&[&[1.0, -2.0]]);

    assert_eq!(m.add_scalar(1.0).values(), &[2.0, -1.0]);
    assert_eq!(m.sub_scalar(1.0).values(), &[0.0, -3.0]);
    assert_eq!(m.subtract_from(1.0).values(), &[0.0, 3.0]);
    assert_eq!(m.scale(3.0).values(), &[3.0, -6.0]);
    assert_eq!(m.div_scalar(2.0).values(), &[0.5, -1.0]);
    assert_eq!(m.negate().values(), &[-1.0, 2.0]);
}

#[test]
fn transpose_twice_is_identity() {
    for m in square_samples() {
        assert_eq!(m.transpose().transpose(), m);
    }
    let wide = matrix(&[&[1.0, 2.0, 3.0]]);
    assert_eq!(wide.transpose().dimensions(),
               Dimensions { rows:    3,
                            columns: 1, });
}

#[test]
fn construction_checks_shape() {
    assert_eq!(Matrix::new(2, 2, vec![1.0; 3]),
               Err(MatrixError::ValueCount { expected: 4,
                                             found:    3, }));
    assert_eq!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
               Err(MatrixError::RaggedRows { row:      1,
                                             expected: 2,
                                             found:    1, }));

    let empty = Matrix::from_rows(Vec::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty, Matrix::zeros(0, 0));
}

#[test]
fn construction_rejects_oversized_matrices() {
    let overflowing = Dimensions { rows:    usize::MAX,
                                   columns: 2, };
    assert_eq!(Matrix::new(usize::MAX, 2, Vec::new()),
               Err(MatrixError::TooLarge(overflowing)));

    let past_limit = Dimensions { rows:    100_000,
                                  columns: 100_000, };
    assert_eq!(Matrix::with_size(100_000, 100_000),
               Err(MatrixError::TooLarge(past_limit)));
    assert_eq!(Matrix::with_size(2, 3), Ok(Matrix::zeros(2, 3)));
}

#[test]
fn approximate_equality_scales_with_magnitude() {
    let big = matrix(&[&[1e12, 1.0]]);
    let close = matrix(&[&[1e12 + 1.0, 1.0]]);
    let far = matrix(&[&[1.0, 1.0]]);

    assert!(big.approx_eq(&close));
    assert!(!big.approx_eq(&far));
    assert!(!matrix(&[&[1.0]]).approx_eq(&matrix(&[&[1.0 + 1e-6]])));
}

#[test]
fn display() {
    assert_eq!(matrix(&[&[1.0, 2.0], &[3.0, 4.5]]).to_string(), "[[1.0, 2.0], [3.0, 4.5]]");
    assert_eq!(Matrix::default().to_string(), "[]");
}
