//! Error types shared by vectors, matrices, and the swizzle resolver.

use core::fmt;

use thiserror::Error;

/// Matrix shape as `rows x cols`.
///
/// Note that shader type names put columns first: a `mat2x3` has 2 columns
/// (components per row) and 3 rows, i.e. shape `3x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Why a constructor rejected its arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// Arguments flatten to the wrong number of components.
    #[error("wrong number of components: expected {expected}, got {got}")]
    Count { expected: usize, got: usize },

    /// Argument kind not accepted by this constructor (e.g. a matrix passed to a vector).
    #[error("unsupported argument for a {target} constructor: {argument}")]
    Unsupported {
        target: &'static str,
        argument: &'static str,
    },

    /// Requested dimension outside 2..=4.
    #[error("unsupported dimension {got} (expected 2, 3 or 4)")]
    Dimension { got: usize },

    /// Rows handed to a matrix constructor have different lengths.
    #[error("ragged rows: row {row} has {got} components, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Why a swizzle mask was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorError {
    #[error("empty swizzle mask")]
    Empty,

    #[error("swizzle mask of length {len} exceeds vector size {size}")]
    TooLong { len: usize, size: usize },

    #[error("swizzle mask mixes the xyzw and rgba alphabets")]
    MixedAlphabets,

    #[error("'{0}' is not a component name")]
    UnknownComponent(char),

    #[error("component '{component}' is out of range for a vector of size {size}")]
    OutOfRange { component: char, size: usize },

    #[error("component '{0}' is assigned more than once")]
    DuplicateTarget(char),

    #[error("swizzle assignment needs {expected} components, got {got}")]
    ValueLength { expected: usize, got: usize },
}

/// The six error categories of the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Construction,
    ShapeMismatch,
    InvalidAccessor,
    AttributeNotFound,
    SingularMatrix,
    Numeric,
}

/// Errors from construction, matrix arithmetic, swizzling, and inversion.
///
/// ```
/// use shadermath::{mat2, Error, ErrorKind};
///
/// let singular = mat2!(1.0, 2.0, 2.0, 4.0).unwrap();
/// let err = singular.inverse().unwrap_err();
/// assert_eq!(err, Error::SingularMatrix);
/// assert_eq!(err.kind(), ErrorKind::SingularMatrix);
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Operand shapes are incompatible for a binary matrix operation.
    #[error("shape mismatch in {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A square-only operation was applied to a non-square matrix.
    #[error("{op} requires a square matrix, got {shape}")]
    NotSquare { op: &'static str, shape: Shape },

    #[error("invalid accessor: {0}")]
    InvalidAccessor(#[from] AccessorError),

    /// Name is neither a declared field nor a swizzle mask.
    #[error("attribute not found")]
    AttributeNotFound,

    #[error("matrix is singular")]
    SingularMatrix,

    #[error("division by zero in {op}")]
    Numeric { op: &'static str },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Construction(_) => ErrorKind::Construction,
            Error::ShapeMismatch { .. } | Error::NotSquare { .. } => ErrorKind::ShapeMismatch,
            Error::InvalidAccessor(_) => ErrorKind::InvalidAccessor,
            Error::AttributeNotFound => ErrorKind::AttributeNotFound,
            Error::SingularMatrix => ErrorKind::SingularMatrix,
            Error::Numeric { .. } => ErrorKind::Numeric,
        }
    }
}
