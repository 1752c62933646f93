use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Shape};
use crate::traits::Scalar;
use crate::vector::Vector;

use super::Matrix;

// ── Checked matrix ∘ matrix ─────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn same_shape(&self, rhs: &Self, op: &'static str) -> Result<(), Error> {
        if self.shape() != rhs.shape() {
            return Err(Error::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(())
    }

    fn zip_rows(&self, rhs: &Self, f: impl Fn(&Vector<T>, &Vector<T>) -> Vector<T>) -> Self {
        Self::from_row_fn(self.nrows, self.ncols, |i| f(&self.rows[i], &rhs.rows[i]))
    }

    /// Entry-wise sum. Shapes must match.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, Error> {
        self.same_shape(rhs, "add")?;
        Ok(self.zip_rows(rhs, |a, b| a + b))
    }

    /// Entry-wise difference. Shapes must match.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, Error> {
        self.same_shape(rhs, "sub")?;
        Ok(self.zip_rows(rhs, |a, b| a - b))
    }

    /// Entry-wise quotient. Shapes must match, and a zero entry in `rhs`
    /// fails with [`Error::Numeric`] for every element type.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        self.same_shape(rhs, "div")?;
        if rhs.rows().iter().any(|r| r.iter().any(|&x| x == T::zero())) {
            return Err(Error::Numeric { op: "div" });
        }
        Ok(self.zip_rows(rhs, |a, b| a / b))
    }

    /// Matrix product: `(m x n) * (n x p) -> (m x p)`.
    ///
    /// ```
    /// use shadermath::{Matrix, ErrorKind};
    ///
    /// let a = Matrix::from_row_major(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// let b = Matrix::from_row_major(3, 2, &[7, 8, 9, 10, 11, 12]).unwrap();
    /// let c = a.checked_mul(&b).unwrap();
    /// assert_eq!(c, Matrix::from_row_major(2, 2, &[58, 64, 139, 154]).unwrap());
    ///
    /// assert_eq!(a.checked_mul(&a).unwrap_err().kind(), ErrorKind::ShapeMismatch);
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, Error> {
        if self.ncols != rhs.nrows {
            return Err(Error::ShapeMismatch {
                op: "mul",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        // Row i of the product is the combination of rhs rows weighted by row i of self.
        Ok(Self::from_row_fn(self.nrows, rhs.ncols, |i| {
            let mut acc = Vector::generate(rhs.ncols, |_| T::zero());
            for k in 0..self.ncols {
                acc = acc + rhs.rows[k] * self.rows[i][k];
            }
            acc
        }))
    }

    /// Matrix times column vector. `v` must have `ncols` components; the
    /// result has `nrows`.
    pub fn vecmul(&self, v: &Vector<T>) -> Result<Vector<T>, Error> {
        if v.len() != self.ncols {
            return Err(Error::ShapeMismatch {
                op: "vecmul",
                lhs: self.shape(),
                rhs: Shape::new(v.len(), 1),
            });
        }
        Ok(Vector::generate(self.nrows, |i| self.rows[i].dot(v)))
    }

    fn map_rows(&self, f: impl Fn(&Vector<T>) -> Vector<T>) -> Self {
        Self::from_row_fn(self.nrows, self.ncols, |i| f(&self.rows[i]))
    }
}

#[inline]
fn or_panic<T>(result: Result<Matrix<T>, Error>) -> Matrix<T> {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

// ── Operators ───────────────────────────────────────────────────────
// These panic on a shape mismatch (and `/` on a zero divisor); use the
// checked_* methods to recover.

macro_rules! impl_matrix_binop {
    ($Op:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $Op for Matrix<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<T: Scalar> $Op<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                or_panic(self.$checked(rhs))
            }
        }

        impl<T: Scalar> $Op<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<T: Scalar> $Op<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                or_panic(self.$checked(rhs))
            }
        }
    };
}

impl_matrix_binop!(Add, add, checked_add);
impl_matrix_binop!(Sub, sub, checked_sub);
impl_matrix_binop!(Mul, mul, checked_mul);
impl_matrix_binop!(Div, div, checked_div);

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = or_panic(self.checked_add(&rhs));
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = or_panic(self.checked_sub(&rhs));
    }
}

// ── Matrix ∘ scalar ─────────────────────────────────────────────────

macro_rules! impl_matrix_scalar_op {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $op:tt) => {
        impl<T: Scalar> $Op<T> for Matrix<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                self.map_rows(|r| r $op rhs)
            }
        }

        impl<T: Scalar> $Op<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                self.map_rows(|r| r $op rhs)
            }
        }

        impl<T: Scalar> $OpAssign<T> for Matrix<T> {
            fn $assign(&mut self, rhs: T) {
                for row in &mut self.rows[..self.nrows] {
                    *row = *row $op rhs;
                }
            }
        }
    };
}

impl_matrix_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_matrix_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_matrix_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_matrix_scalar_op!(Div, div, DivAssign, div_assign, /);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map_rows(|r| -r)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map_rows(|r| -r)
    }
}

// ── scalar ∘ matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.map_rows(|r| self + *r)
                }
            }

            impl Sub<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn sub(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.map_rows(|r| self - *r)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    *rhs * self
                }
            }

            impl Div<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn div(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.map_rows(|r| self / *r)
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
