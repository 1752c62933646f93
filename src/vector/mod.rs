mod access;
mod norm;
mod ops;

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::args::Arg;
use crate::error::{ConstructionError, Error};
use crate::traits::Scalar;

/// Largest supported vector size (and matrix dimension).
pub const MAX_SIZE: usize = 4;
/// Smallest supported vector size (and matrix dimension).
pub const MIN_SIZE: usize = 2;

#[inline]
pub(crate) fn check_dim(n: usize) -> Result<(), Error> {
    if (MIN_SIZE..=MAX_SIZE).contains(&n) {
        Ok(())
    } else {
        Err(ConstructionError::Dimension { got: n }.into())
    }
}

/// Shader-style vector with 2, 3 or 4 components.
///
/// Stack-allocated, `Copy`. The size is fixed at construction and never
/// changes; slots past the size are kept at zero.
///
/// Binary operators between vectors of different sizes use the shorter size:
/// the result has as many components as the smaller operand.
///
/// # Examples
///
/// ```
/// use shadermath::{vec2, vec3, vec4};
///
/// let v = vec4(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(v.swizzle("wzyx").unwrap().vector(), Some(vec4(4.0, 3.0, 2.0, 1.0)));
///
/// // Truncating broadcast
/// assert_eq!(vec3(1.0, 2.0, 3.0) + vec2(10.0, 20.0), vec2(11.0, 22.0));
///
/// // Variadic construction
/// let w = vec4!(2.0, vec2(1.5, 1.5), 0.0).unwrap();
/// assert_eq!(w, vec4(2.0, 1.5, 1.5, 0.0));
/// ```
#[derive(Clone, Copy)]
pub struct Vector<T> {
    data: [T; MAX_SIZE],
    len: usize,
}

/// Two-component vector.
#[inline]
pub fn vec2<T: Scalar>(x: T, y: T) -> Vector<T> {
    Vector::from_parts([x, y, T::zero(), T::zero()], 2)
}

/// Three-component vector.
#[inline]
pub fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector<T> {
    Vector::from_parts([x, y, z, T::zero()], 3)
}

/// Four-component vector.
#[inline]
pub fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vector<T> {
    Vector::from_parts([x, y, z, w], 4)
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    #[inline]
    pub(crate) fn from_parts(data: [T; MAX_SIZE], len: usize) -> Self {
        debug_assert!((MIN_SIZE..=MAX_SIZE).contains(&len));
        Self { data, len }
    }

    /// Build a vector of size `len` by calling `f(i)` per component.
    /// `len` must already be a supported size.
    #[inline]
    pub(crate) fn generate(len: usize, mut f: impl FnMut(usize) -> T) -> Self {
        let mut data = [T::zero(); MAX_SIZE];
        for (i, slot) in data.iter_mut().enumerate().take(len) {
            *slot = f(i);
        }
        Self::from_parts(data, len)
    }

    /// Zero vector of size `n`.
    pub fn zeros(n: usize) -> Result<Self, Error> {
        Self::fill(n, T::zero())
    }

    /// Vector of size `n` with every component set to `value`.
    ///
    /// ```
    /// use shadermath::{Vector, vec3};
    /// assert_eq!(Vector::fill(3, 1.0).unwrap(), vec3(1.0, 1.0, 1.0));
    /// assert!(Vector::fill(5, 1.0).is_err());
    /// ```
    pub fn fill(n: usize, value: T) -> Result<Self, Error> {
        check_dim(n)?;
        Ok(Self::generate(n, |_| value))
    }

    /// Vector whose size is the slice length.
    pub fn from_slice(components: &[T]) -> Result<Self, Error> {
        check_dim(components.len())?;
        Ok(Self::generate(components.len(), |i| components[i]))
    }

    /// Shader constructor: build a size-`n` vector from mixed arguments.
    ///
    /// A single scalar is broadcast to every component. Otherwise the
    /// arguments (scalars and vectors) are flattened in order and must supply
    /// exactly `n` components.
    ///
    /// ```
    /// use shadermath::{Arg, Vector, vec2, vec3};
    ///
    /// let v = Vector::from_args(3, &[Arg::from(1.0)]).unwrap();
    /// assert_eq!(v, vec3(1.0, 1.0, 1.0));
    ///
    /// let v = Vector::from_args(3, &[Arg::from(vec2(1.0, 2.0)), Arg::from(3.0)]).unwrap();
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    ///
    /// assert!(Vector::from_args(2, &[Arg::from(1.0), Arg::from(2.0), Arg::from(3.0)]).is_err());
    /// ```
    pub fn from_args(n: usize, args: &[Arg<'_, T>]) -> Result<Self, Error> {
        check_dim(n)?;
        if let [Arg::Scalar(s)] = args {
            return Self::fill(n, *s);
        }

        let mut got = 0;
        for arg in args {
            match arg {
                Arg::Scalar(_) | Arg::Vector(_) => got += arg.count(),
                other => {
                    return Err(ConstructionError::Unsupported {
                        target: "vector",
                        argument: other.kind(),
                    }
                    .into())
                }
            }
        }
        if got != n {
            return Err(ConstructionError::Count { expected: n, got }.into());
        }

        let mut data = [T::zero(); MAX_SIZE];
        let mut i = 0;
        for arg in args {
            arg.for_each_component(|c| {
                data[i] = c;
                i += 1;
            });
        }
        Ok(Self::from_parts(data, n))
    }
}

impl<T> Vector<T> {
    /// Number of components (2, 3 or 4).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Components as a slice of length [`len`](Self::len).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    /// Equal size and equal components. Vectors of different sizes are
    /// simply unequal.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Lists the live components only: `[1, 2]`.
impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    /// `vec3(1, 2, 3)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec{}(", self.len)?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
