//! Matrix operations.
//!
//! Row-major 3×3 helpers used by the colour model conversions. Factorizations
//! and solves are delegated to `la-stack`'s stack-allocated LU.

#![forbid(unsafe_code)]

use la_stack::{DEFAULT_PIVOT_TOL, LaError, Matrix as LaMatrix, Vector as LaVector};
use thiserror::Error;

/// Row-major 3×3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

/// The 3×3 identity matrix.
pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Error type for matrix operations.
///
/// # Examples
///
/// ```rust
/// use macadam::geometry::matrix::MatrixError;
///
/// let err = MatrixError::SingularMatrix;
/// assert!(matches!(err, MatrixError::SingularMatrix));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// Matrix is singular.
    #[error("Matrix is singular!")]
    SingularMatrix,
    /// The factorization failed for another reason (typically non-finite entries).
    #[error("Matrix factorization failed: {details}")]
    FactorizationFailed {
        /// Description of the underlying failure.
        details: String,
    },
}

impl From<LaError> for MatrixError {
    fn from(err: LaError) -> Self {
        match err {
            LaError::Singular { .. } => Self::SingularMatrix,
            other => Self::FactorizationFailed {
                details: other.to_string(),
            },
        }
    }
}

/// Determinant of a 3×3 matrix.
///
/// Returns `0.0` for singular matrices and NaN when an entry is not finite.
///
/// ```rust
/// use macadam::geometry::matrix::{determinant, IDENTITY};
///
/// assert_eq!(determinant(&IDENTITY), 1.0);
/// ```
#[must_use]
pub fn determinant(m: &Matrix3) -> f64 {
    match LaMatrix::<3>::from_rows(*m).det(0.0) {
        Ok(det) => det,
        Err(LaError::Singular { .. }) => 0.0,
        Err(_) => f64::NAN,
    }
}

/// Solves `m · x = rhs`.
///
/// # Errors
///
/// Returns [`MatrixError::SingularMatrix`] when `m` has no inverse.
pub fn solve(m: &Matrix3, rhs: [f64; 3]) -> Result<[f64; 3], MatrixError> {
    let lu = LaMatrix::<3>::from_rows(*m).lu(DEFAULT_PIVOT_TOL)?;
    Ok(lu.solve_vec(LaVector::<3>::new(rhs))?.into_array())
}

/// Inverse of a 3×3 matrix.
///
/// # Errors
///
/// Returns [`MatrixError::SingularMatrix`] when `m` has no inverse.
///
/// ```rust
/// use macadam::geometry::matrix::{inverse, multiply, IDENTITY};
///
/// let m = [[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [1.0, 0.0, 1.0]];
/// let product = multiply(&m, &inverse(&m).unwrap());
/// for (row, expected) in product.iter().zip(IDENTITY.iter()) {
///     for (a, b) in row.iter().zip(expected.iter()) {
///         assert!((a - b).abs() < 1e-12);
///     }
/// }
/// ```
pub fn inverse(m: &Matrix3) -> Result<Matrix3, MatrixError> {
    let lu = LaMatrix::<3>::from_rows(*m).lu(DEFAULT_PIVOT_TOL)?;
    let mut result = [[0.0; 3]; 3];
    for (column, unit) in IDENTITY.iter().enumerate() {
        let x = lu.solve_vec(LaVector::<3>::new(*unit))?.into_array();
        for (row, value) in x.into_iter().enumerate() {
            result[row][column] = value;
        }
    }
    Ok(result)
}

/// Matrix product `a · b`.
#[must_use]
pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut result = [[0.0; 3]; 3];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    result
}

/// Matrix-vector product `m · v`.
#[must_use]
pub fn transform(m: &Matrix3, v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

/// Scales column `j` of `m` by `factors[j]` (`m · diag(factors)`).
#[must_use]
pub fn scale_columns(m: &Matrix3, factors: [f64; 3]) -> Matrix3 {
    m.map(|row| [row[0] * factors[0], row[1] * factors[1], row[2] * factors[2]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn determinant_of_known_matrices() {
        assert_relative_eq!(determinant(&IDENTITY), 1.0);
        let m = [[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]];
        assert_relative_eq!(determinant(&m), 18.0, epsilon = 1e-12);
        let singular = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]];
        assert_relative_eq!(determinant(&singular), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn solve_and_inverse_agree() {
        let m = [[4.0, -2.0, 1.0], [-2.0, 4.0, -2.0], [1.0, -2.0, 4.0]];
        let x = solve(&m, [11.0, -16.0, 17.0]).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], -2.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 3.0, epsilon = 1e-12);

        let y = transform(&inverse(&m).unwrap(), [11.0, -16.0, 17.0]);
        for (a, b) in x.iter().zip(y.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn inverse_of_singular_matrix_fails() {
        let singular = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]];
        assert_eq!(inverse(&singular), Err(MatrixError::SingularMatrix));
    }

    #[test]
    fn scale_columns_matches_diagonal_product() {
        let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let diagonal = [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]];
        assert_eq!(scale_columns(&m, [2.0, 3.0, 4.0]), multiply(&m, &diagonal));
    }
}
