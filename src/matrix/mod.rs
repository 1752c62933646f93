mod ops;
mod square;
mod util;

pub use util::TypeName;

use core::ops::{Index, IndexMut};

use crate::args::Arg;
use crate::error::{ConstructionError, Error, Shape};
use crate::swizzle::Swizzle;
use crate::traits::Scalar;
use crate::vector::{check_dim, Vector, MAX_SIZE};

/// Shader-style matrix stored as row vectors.
///
/// `nrows` and `ncols` are each 2, 3 or 4, fixed at construction (only
/// [`transpose`](Self::transpose) swaps them). Every row is a [`Vector`] of
/// exactly `ncols` components. Stack-allocated, `Copy`.
///
/// Shader type names list columns first: [`mat2x3!`](crate::mat2x3) builds a
/// matrix with 2 components per row and 3 rows.
///
/// # Examples
///
/// ```
/// use shadermath::{mat2, vec2, Matrix};
///
/// let a = mat2!(1.0, 2.0, 3.0, 4.0).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a[1], vec2(3.0, 4.0));
/// assert_eq!(a.det().unwrap(), -2.0);
///
/// let id: Matrix<f64> = Matrix::eye(3).unwrap();
/// assert!(id.is_identity());
/// ```
#[derive(Clone, Copy)]
pub struct Matrix<T> {
    rows: [Vector<T>; MAX_SIZE],
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Build an `nrows x ncols` matrix from `f(i)` per row.
    /// Dimensions must already be valid and every row `ncols` long.
    pub(crate) fn from_row_fn(
        nrows: usize,
        ncols: usize,
        mut f: impl FnMut(usize) -> Vector<T>,
    ) -> Self {
        let padding = Vector::generate(ncols, |_| T::zero());
        let mut rows = [padding; MAX_SIZE];
        for (i, row) in rows.iter_mut().enumerate().take(nrows) {
            *row = f(i);
            debug_assert_eq!(row.len(), ncols);
        }
        Self { rows, nrows, ncols }
    }

    /// Build an `nrows x ncols` matrix from `f(row, col)` per entry.
    pub(crate) fn generate(
        nrows: usize,
        ncols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Self {
        Self::from_row_fn(nrows, ncols, |i| Vector::generate(ncols, |j| f(i, j)))
    }

    fn check_dims(nrows: usize, ncols: usize) -> Result<(), Error> {
        check_dim(nrows)?;
        check_dim(ncols)
    }

    /// Matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, Error> {
        Self::from_scalar(nrows, ncols, T::zero())
    }

    /// `n x n` identity matrix.
    pub fn eye(n: usize) -> Result<Self, Error> {
        Self::from_scalar(n, n, T::one())
    }

    /// Diagonal matrix: `value` on the `min(nrows, ncols)` diagonal entries,
    /// zero elsewhere.
    ///
    /// ```
    /// use shadermath::{Matrix, vec2};
    /// let m = Matrix::from_scalar(3, 2, 5).unwrap();
    /// assert_eq!(m.rows(), &[vec2(5, 0), vec2(0, 5), vec2(0, 0)]);
    /// ```
    pub fn from_scalar(nrows: usize, ncols: usize, value: T) -> Result<Self, Error> {
        Self::check_dims(nrows, ncols)?;
        Ok(Self::generate(nrows, ncols, |i, j| {
            if i == j {
                value
            } else {
                T::zero()
            }
        }))
    }

    /// Every one of `nrows` rows set to its own copy of `row`.
    pub fn from_row_vector(nrows: usize, row: &Vector<T>) -> Result<Self, Error> {
        check_dim(nrows)?;
        Ok(Self::from_row_fn(nrows, row.len(), |_| *row))
    }

    /// Matrix from row vectors, which must all have the same length.
    pub fn from_rows(rows: &[Vector<T>]) -> Result<Self, Error> {
        check_dim(rows.len())?;
        let ncols = rows[0].len();
        for (i, r) in rows.iter().enumerate() {
            if r.len() != ncols {
                return Err(ConstructionError::RaggedRows {
                    row: i,
                    expected: ncols,
                    got: r.len(),
                }
                .into());
            }
        }
        Ok(Self::from_row_fn(rows.len(), ncols, |i| rows[i]))
    }

    /// Matrix from a flat row-major slice of `nrows * ncols` entries.
    ///
    /// ```
    /// use shadermath::Matrix;
    /// let m = Matrix::from_row_major(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(0, 2)], 3);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_row_major(nrows: usize, ncols: usize, entries: &[T]) -> Result<Self, Error> {
        Self::from_args(nrows, ncols, &[Arg::Flat(entries)])
    }

    /// Shader constructor: build an `nrows x ncols` matrix from mixed arguments.
    ///
    /// - one vector of length `ncols`: replicated into every row;
    /// - one scalar: diagonal matrix ([`from_scalar`](Self::from_scalar));
    /// - anything else: all arguments flattened in order (matrices row-major)
    ///   and packed row-major; the total must be `nrows * ncols`.
    ///
    /// ```
    /// use shadermath::{Arg, Matrix, vec2, vec3};
    ///
    /// let m = Matrix::from_args(3, 2, &[Arg::from(vec2(1, 2))]).unwrap();
    /// assert_eq!(m.rows(), &[vec2(1, 2), vec2(1, 2), vec2(1, 2)]);
    ///
    /// let m = Matrix::from_args(2, 3, &[Arg::from(vec3(1, 2, 3)), Arg::from(&[4, 5]), Arg::from(6)])
    ///     .unwrap();
    /// assert_eq!(m.rows(), &[vec3(1, 2, 3), vec3(4, 5, 6)]);
    /// ```
    pub fn from_args(nrows: usize, ncols: usize, args: &[Arg<'_, T>]) -> Result<Self, Error> {
        Self::check_dims(nrows, ncols)?;
        match args {
            [Arg::Vector(v)] if v.len() == ncols => return Self::from_row_vector(nrows, v),
            [Arg::Scalar(s)] => return Self::from_scalar(nrows, ncols, *s),
            _ => {}
        }

        let expected = nrows * ncols;
        let got: usize = args.iter().map(Arg::count).sum();
        if got != expected {
            return Err(ConstructionError::Count { expected, got }.into());
        }

        let mut out = Self::from_scalar(nrows, ncols, T::zero())?;
        let mut pos = 0;
        for arg in args {
            arg.for_each_component(|c| {
                out.rows[pos / ncols][pos % ncols] = c;
                pos += 1;
            });
        }
        Ok(out)
    }
}

// ── Shape and rows ──────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (components per row).
    #[inline]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub const fn shape(&self) -> Shape {
        Shape::new(self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// The rows, in order.
    #[inline]
    pub fn rows(&self) -> &[Vector<T>] {
        &self.rows[..self.nrows]
    }
}

impl<T: Scalar> Matrix<T> {
    /// Copy of row `i`. Panics if `i >= nrows`.
    pub fn row(&self, i: usize) -> Vector<T> {
        self.rows()[i]
    }

    /// Copy of column `j` as a vector of `nrows` components.
    /// Panics if `j >= ncols`.
    pub fn col(&self, j: usize) -> Vector<T> {
        assert!(j < self.ncols, "column {} out of range for {}", j, self.shape());
        Vector::generate(self.nrows, |i| self.rows[i][j])
    }

    /// Replace row `i`. The new row must have `ncols` components.
    /// Panics if `i >= nrows`.
    pub fn set_row(&mut self, i: usize, row: &Vector<T>) -> Result<(), Error> {
        assert!(i < self.nrows, "row {} out of range for {}", i, self.shape());
        if row.len() != self.ncols {
            return Err(Error::ShapeMismatch {
                op: "set_row",
                lhs: Shape::new(1, self.ncols),
                rhs: Shape::new(1, row.len()),
            });
        }
        self.rows[i] = *row;
        Ok(())
    }

    /// Swizzle-assign into row `i`, e.g. `m[1].yz = v`.
    /// The matrix is unchanged on error. Panics if `i >= nrows`.
    ///
    /// ```
    /// use shadermath::{mat3, vec2, vec3};
    /// let mut m = mat3!(0).unwrap();
    /// m.set_row_swizzle(1, "zx", vec2(7, 8)).unwrap();
    /// assert_eq!(m[1], vec3(8, 0, 7));
    /// ```
    pub fn set_row_swizzle(
        &mut self,
        i: usize,
        mask: &str,
        value: impl Into<Swizzle<T>>,
    ) -> Result<(), Error> {
        let mut row = self.row(i);
        row.set_swizzle(mask, value)?;
        self.rows[i] = row;
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    /// Equal shape and equal entries.
    fn eq(&self, other: &Self) -> bool {
        self.ncols == other.ncols && self.rows() == other.rows()
    }
}

impl<T: Eq> Eq for Matrix<T> {}

// Index a row
impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<T> {
        &self.rows()[i]
    }
}

// Index by (row, col) tuple
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows()[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let nrows = self.nrows;
        &mut self.rows[..nrows][row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccessorError, ErrorKind};
    use crate::vector::{vec2, vec3, vec4};

    #[test]
    fn zeros_and_eye() {
        let z: Matrix<f64> = Matrix::zeros(3, 3).unwrap();
        assert_eq!(z[(0, 0)], 0.0);
        assert_eq!(z[(2, 2)], 0.0);

        let id: Matrix<f64> = Matrix::eye(3).unwrap();
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn unsupported_dimensions() {
        assert_eq!(
            Matrix::<f64>::zeros(1, 3).unwrap_err(),
            Error::Construction(ConstructionError::Dimension { got: 1 })
        );
        assert!(Matrix::<f64>::zeros(3, 5).is_err());
        assert!(Matrix::<f64>::eye(6).is_err());
        assert!(Matrix::<f64>::from_rows(&[]).is_err());
    }

    #[test]
    fn non_square_shape() {
        let m: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert!(!m.is_square());
        assert_eq!(m.rows().len(), 2);
        assert_eq!(m[0].len(), 3);
    }

    #[test]
    fn scalar_gives_diagonal() {
        let m = Matrix::<i32>::from_args(2, 4, &[Arg::from(3)]).unwrap();
        assert_eq!(m.rows(), &[vec4(3, 0, 0, 0), vec4(0, 3, 0, 0)]);
    }

    #[test]
    fn replicated_rows_are_independent() {
        let v = vec3(1.0, 2.0, 3.0);
        let mut m = Matrix::from_args(3, 3, &[Arg::from(v)]).unwrap();
        assert_eq!(m.rows(), &[v, v, v]);

        m[(0, 0)] = 9.0;
        m.set_row_swizzle(2, "z", -1.0).unwrap();
        assert_eq!(m[0], vec3(9.0, 2.0, 3.0));
        assert_eq!(m[1], v);
        assert_eq!(m[2], vec3(1.0, 2.0, -1.0));
    }

    #[test]
    fn vector_of_other_length_is_flattened() {
        // mat2(vec4) packs the four components row-major
        let m = Matrix::from_args(2, 2, &[Arg::from(vec4(1, 2, 3, 4))]).unwrap();
        assert_eq!(m.rows(), &[vec2(1, 2), vec2(3, 4)]);

        let err = Matrix::from_args(3, 3, &[Arg::from(vec2(1, 2))]).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::Count {
                expected: 9,
                got: 2
            })
        );
    }

    #[test]
    fn mixed_arguments_pack_row_major() {
        let inner = Matrix::from_row_major(2, 2, &[1, 2, 3, 4]).unwrap();
        let nested: &[&[i32]] = &[&[5], &[6, 7]];
        let m = Matrix::from_args(
            3,
            3,
            &[Arg::from(inner), Arg::from(nested), Arg::from(vec2(8, 9))],
        )
        .unwrap();
        assert_eq!(m.rows(), &[vec3(1, 2, 3), vec3(4, 5, 6), vec3(7, 8, 9)]);

        let grid = [[1, 2, 3], [4, 5, 6]];
        let m = Matrix::from_args(3, 2, &[Arg::rows(&grid)]).unwrap();
        assert_eq!(m.rows(), &[vec2(1, 2), vec2(3, 4), vec2(5, 6)]);
    }

    #[test]
    fn wrong_total_is_construction_error() {
        let err = Matrix::from_row_major(2, 2, &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);

        let err = Matrix::<i32>::from_args(2, 2, &[Arg::from(1), Arg::from(2)]).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::Count {
                expected: 4,
                got: 2
            })
        );
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(&[vec2(1, 2), vec2(3, 4), vec2(5, 6)]).unwrap();
        assert_eq!(m.shape(), Shape::new(3, 2));
        assert_eq!(m[(2, 1)], 6);

        let err = Matrix::from_rows(&[vec2(1, 2), vec3(3, 4, 5)]).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::RaggedRows {
                row: 1,
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn rows_and_columns() {
        let m = Matrix::from_row_major(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.row(1), vec3(4, 5, 6));
        assert_eq!(m.col(1), vec2(2, 5));
    }

    #[test]
    fn set_row_checks_length() {
        let mut m: Matrix<i32> = Matrix::zeros(2, 2).unwrap();
        m.set_row(1, &vec2(7, 8)).unwrap();
        assert_eq!(m[1], vec2(7, 8));

        let err = m.set_row(0, &vec3(1, 2, 3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(m[0], vec2(0, 0));
    }

    #[test]
    fn set_row_swizzle_failure_leaves_matrix() {
        let mut m = Matrix::from_row_major(2, 2, &[1, 2, 3, 4]).unwrap();
        let before = m;
        let err = m.set_row_swizzle(0, "xz", vec2(0, 0)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAccessor(AccessorError::OutOfRange {
                component: 'z',
                size: 2
            })
        );
        assert_eq!(m, before);
    }

    #[test]
    fn equality_includes_shape() {
        let a: Matrix<i32> = Matrix::zeros(2, 3).unwrap();
        let b: Matrix<i32> = Matrix::zeros(3, 2).unwrap();
        let c: Matrix<i32> = Matrix::zeros(2, 3).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    #[should_panic]
    fn index_past_shape_panics() {
        let m: Matrix<f64> = Matrix::zeros(2, 2).unwrap();
        let _ = m[(2, 0)];
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64> = Matrix::zeros(2, 2).unwrap();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }
}
