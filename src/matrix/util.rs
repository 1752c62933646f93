use core::fmt::{self, Write};

use crate::error::Shape;
use crate::traits::Scalar;
use crate::vector::MAX_SIZE;

use super::Matrix;

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// New matrix with rows and columns swapped: `(m x n) -> (n x m)`.
    pub fn transposed(&self) -> Self {
        Self::generate(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Transpose in place, changing the shape if non-square, and return the
    /// receiver.
    ///
    /// ```
    /// use shadermath::{mat2x3, vec3};
    ///
    /// let mut m = mat2x3!(1, 2, 3, 4, 5, 6).unwrap();
    /// m.transpose();
    /// assert_eq!((m.nrows(), m.ncols()), (2, 3));
    /// assert_eq!(m[0], vec3(1, 3, 5));
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }
}

impl<T> Matrix<T> {
    /// Shader type name: `mat3` when square, `mat{cols}x{rows}` otherwise.
    pub fn type_name(&self) -> TypeName {
        TypeName(self.shape())
    }
}

impl<T: Copy> Matrix<T> {
    /// Rows copied into a `Vec`.
    #[cfg(feature = "std")]
    pub fn to_rows(&self) -> std::vec::Vec<crate::Vector<T>> {
        self.rows().to_vec()
    }
}

/// Display adapter returned by [`Matrix::type_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeName(Shape);

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Shape { rows, cols } = self.0;
        if rows == cols {
            write!(f, "mat{}", cols)
        } else {
            write!(f, "mat{}x{}", cols, rows)
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// ```text
    /// mat2[vec2(1, 20)
    ///      vec2(3,  4)]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Max width per column for alignment
        let mut widths = [0usize; MAX_SIZE];
        for row in self.rows() {
            for (j, c) in row.iter().enumerate() {
                let w = WriteCounting::count(|wc| write!(wc, "{}", c));
                widths[j] = widths[j].max(w);
            }
        }

        let name = self.type_name();
        let indent = WriteCounting::count(|wc| write!(wc, "{}[", name));

        write!(f, "{}[", name)?;
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                write!(f, "{:indent$}", "", indent = indent)?;
            }
            write!(f, "vec{}(", self.ncols)?;
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>width$}", c, width = widths[j])?;
            }
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}

/// Nested list of the live rows: `[[1, 2], [3, 4]]`.
impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
