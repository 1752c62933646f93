//! Constructor arguments.
//!
//! Shader constructors are variadic and accept a mix of scalars, vectors, and
//! matrices (`vec4(1.0, v.xy, 0.0)`). [`Arg`] is the tagged form of one such
//! argument; the `vecN!` / `matN!` macros convert each argument with
//! `Arg::from` and hand the list to [`Vector::from_args`] or
//! [`Matrix::from_args`].
//!
//! [`Vector::from_args`]: crate::Vector::from_args
//! [`Matrix::from_args`]: crate::Matrix::from_args

use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;

/// One constructor argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a, T> {
    Scalar(T),
    Vector(Vector<T>),
    Matrix(Matrix<T>),
    /// Flat sequence of components.
    Flat(&'a [T]),
    /// Nested sequence, flattened row by row. Rows may differ in length.
    Nested(&'a [&'a [T]]),
}

impl<'a, T: Scalar> Arg<'a, T> {
    /// Nested argument from equally sized rows, e.g. `&[[1.0, 2.0], [3.0, 4.0]]`.
    pub fn rows<const K: usize>(rows: &'a [[T; K]]) -> Self {
        Arg::Flat(rows.as_flattened())
    }

    /// Number of components this argument contributes.
    pub fn count(&self) -> usize {
        match self {
            Arg::Scalar(_) => 1,
            Arg::Vector(v) => v.len(),
            Arg::Matrix(m) => m.nrows() * m.ncols(),
            Arg::Flat(s) => s.len(),
            Arg::Nested(rows) => rows.iter().map(|r| r.len()).sum(),
        }
    }

    /// Short name of the argument kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Scalar(_) => "scalar",
            Arg::Vector(_) => "vector",
            Arg::Matrix(_) => "matrix",
            Arg::Flat(_) => "flat sequence",
            Arg::Nested(_) => "nested sequence",
        }
    }

    /// Feed every component to `f`, in order. Matrices are read row-major.
    pub(crate) fn for_each_component(&self, mut f: impl FnMut(T)) {
        match self {
            Arg::Scalar(s) => f(*s),
            Arg::Vector(v) => v.iter().copied().for_each(f),
            Arg::Matrix(m) => {
                for row in m.rows() {
                    row.iter().copied().for_each(&mut f);
                }
            }
            Arg::Flat(s) => s.iter().copied().for_each(f),
            Arg::Nested(rows) => {
                for row in rows.iter() {
                    row.iter().copied().for_each(&mut f);
                }
            }
        }
    }
}

impl<T> From<Vector<T>> for Arg<'_, T> {
    fn from(v: Vector<T>) -> Self {
        Arg::Vector(v)
    }
}

impl<T: Copy> From<&Vector<T>> for Arg<'_, T> {
    fn from(v: &Vector<T>) -> Self {
        Arg::Vector(*v)
    }
}

impl<T> From<Matrix<T>> for Arg<'_, T> {
    fn from(m: Matrix<T>) -> Self {
        Arg::Matrix(m)
    }
}

impl<T: Copy> From<&Matrix<T>> for Arg<'_, T> {
    fn from(m: &Matrix<T>) -> Self {
        Arg::Matrix(*m)
    }
}

impl<'a, T> From<&'a [T]> for Arg<'a, T> {
    fn from(s: &'a [T]) -> Self {
        Arg::Flat(s)
    }
}

impl<'a, T, const K: usize> From<&'a [T; K]> for Arg<'a, T> {
    fn from(s: &'a [T; K]) -> Self {
        Arg::Flat(s.as_slice())
    }
}

impl<'a, T> From<&'a [&'a [T]]> for Arg<'a, T> {
    fn from(rows: &'a [&'a [T]]) -> Self {
        Arg::Nested(rows)
    }
}

macro_rules! impl_scalar_arg {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_, $t> {
                fn from(s: $t) -> Self {
                    Arg::Scalar(s)
                }
            }
        )*
    };
}

impl_scalar_arg!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
