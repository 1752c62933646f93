use crate::error::Error;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::MAX_SIZE;

use super::Matrix;

type Grid<T> = [[T; MAX_SIZE]; MAX_SIZE];

/// `a` with row `row` and column `col` removed, packed into the top-left
/// `(n - 1) x (n - 1)` corner.
fn minor<T: Scalar>(a: &Grid<T>, n: usize, row: usize, col: usize) -> Grid<T> {
    let mut out = [[T::zero(); MAX_SIZE]; MAX_SIZE];
    for (oi, i) in (0..n).filter(|&i| i != row).enumerate() {
        for (oj, j) in (0..n).filter(|&j| j != col).enumerate() {
            out[oi][oj] = a[i][j];
        }
    }
    out
}

/// Laplace expansion along row 0 of the top-left `n x n` block.
fn cofactor_det<T: Scalar>(a: &Grid<T>, n: usize) -> T {
    if n == 1 {
        return a[0][0];
    }
    let mut sum = T::zero();
    for i in 0..n {
        let term = a[0][i] * cofactor_det(&minor(a, n, 0, i), n - 1);
        sum = if i % 2 == 0 { sum + term } else { sum - term };
    }
    sum
}

impl<T: Scalar> Matrix<T> {
    fn grid(&self) -> Grid<T> {
        let mut g = [[T::zero(); MAX_SIZE]; MAX_SIZE];
        for (dst, row) in g.iter_mut().zip(self.rows()) {
            *dst = row.to_array();
        }
        g
    }

    fn require_square(&self, op: &'static str) -> Result<usize, Error> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                op,
                shape: self.shape(),
            });
        }
        Ok(self.nrows)
    }

    /// Every entry off the main diagonal is zero. Defined for any shape.
    pub fn is_diagonal(&self) -> bool {
        self.rows()
            .iter()
            .enumerate()
            .all(|(i, row)| row.iter().enumerate().all(|(j, &v)| i == j || v == T::zero()))
    }

    /// Square and equal to its own transpose.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows {
            for j in 0..i {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Square, ones on the diagonal, zeros elsewhere.
    pub fn is_identity(&self) -> bool {
        self.is_square() && self.is_diagonal() && (0..self.nrows).all(|i| self[(i, i)] == T::one())
    }

    /// Square and `M * Mᵀ` equals the identity exactly.
    ///
    /// No tolerance is applied, so rotations with irrational entries will
    /// usually fail this test.
    pub fn is_orthogonal(&self) -> bool {
        self.is_square() && (self * self.transposed()).is_identity()
    }

    /// Identity matrix of the same square shape.
    pub fn identity(&self) -> Result<Self, Error> {
        let n = self.require_square("identity")?;
        Self::eye(n)
    }

    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// ```
    /// use shadermath::{mat2, mat3};
    ///
    /// assert_eq!(mat2!(1, 2, 3, 4).unwrap().det().unwrap(), -2);
    /// let m = mat3!(6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0).unwrap();
    /// assert_eq!(m.det().unwrap(), -306.0);
    /// ```
    pub fn det(&self) -> Result<T, Error> {
        let n = self.require_square("det")?;
        Ok(cofactor_det(&self.grid(), n))
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse as adjugate over determinant; the receiver is unchanged.
    ///
    /// Fails with [`Error::SingularMatrix`] when the determinant is exactly
    /// zero, and with a shape error when the matrix is not square.
    ///
    /// ```
    /// use shadermath::mat2;
    ///
    /// let m = mat2!(1.0, 2.0, 3.0, 4.0).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, mat2!(-2.0, 1.0, 1.5, -0.5).unwrap());
    /// ```
    pub fn inverse(&self) -> Result<Self, Error> {
        let n = self.require_square("inverse")?;
        let a = self.grid();
        let d = cofactor_det(&a, n);
        if d == T::zero() {
            log::debug!("cannot invert singular {} matrix", self.shape());
            return Err(Error::SingularMatrix);
        }
        // Entry (i, j) of the inverse is cofactor (j, i) / det.
        Ok(Self::generate(n, n, |i, j| {
            let c = cofactor_det(&minor(&a, n, j, i), n - 1);
            let c = if (i + j) % 2 == 0 { c } else { -c };
            c / d
        }))
    }

    /// Invert in place and return the receiver.
    /// On error the receiver is left untouched.
    pub fn invert(&mut self) -> Result<&mut Self, Error> {
        *self = self.inverse()?;
        Ok(self)
    }
}
