//! Swizzle mask resolution.
//!
//! A mask such as `"zyx"` or `"rg"` names vector components by letter. Two
//! synonymous alphabets exist, positional `xyzw` and color `rgba`; index `i`
//! of one means index `i` of the other. A mask must stay within one alphabet.
//!
//! ```
//! use shadermath::swizzle::{Alphabet, Mask};
//!
//! let m = Mask::parse("wzx", 4).unwrap();
//! assert_eq!(m.indices(), &[3, 2, 0]);
//! assert_eq!(m.alphabet(), Alphabet::Positional);
//!
//! assert!(Mask::parse("xg", 4).is_err()); // mixed alphabets
//! assert!(Mask::parse("xyz", 2).is_err()); // longer than the vector
//! ```

use crate::error::{AccessorError, Error};
use crate::traits::Scalar;
use crate::vector::{Vector, MAX_SIZE};

/// One of the two component naming schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// `x`, `y`, `z`, `w`
    Positional,
    /// `r`, `g`, `b`, `a`
    Color,
}

impl Alphabet {
    /// Component names of this alphabet, in index order.
    pub const fn names(self) -> [char; MAX_SIZE] {
        match self {
            Alphabet::Positional => ['x', 'y', 'z', 'w'],
            Alphabet::Color => ['r', 'g', 'b', 'a'],
        }
    }

    /// Look up a component letter, returning its alphabet and index.
    #[inline]
    pub const fn lookup(c: char) -> Option<(Alphabet, usize)> {
        match c {
            'x' => Some((Alphabet::Positional, 0)),
            'y' => Some((Alphabet::Positional, 1)),
            'z' => Some((Alphabet::Positional, 2)),
            'w' => Some((Alphabet::Positional, 3)),
            'r' => Some((Alphabet::Color, 0)),
            'g' => Some((Alphabet::Color, 1)),
            'b' => Some((Alphabet::Color, 2)),
            'a' => Some((Alphabet::Color, 3)),
            _ => None,
        }
    }
}

/// Whether every character of `name` is a component letter of either alphabet.
///
/// This is the test that separates swizzle-shaped names (which go to
/// [`Mask::parse`] and may still be invalid) from unknown attributes.
pub fn is_swizzle_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| Alphabet::lookup(c).is_some())
}

/// A validated swizzle mask: component indices in the order written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    indices: [usize; MAX_SIZE],
    len: usize,
    alphabet: Alphabet,
}

impl Mask {
    /// Parse a read mask for a vector with `size` components.
    ///
    /// Repeated components are allowed (`"xxy"`).
    pub fn parse(mask: &str, size: usize) -> Result<Self, Error> {
        let len = mask.chars().count();
        if len == 0 {
            return Err(AccessorError::Empty.into());
        }
        if len > size || len > MAX_SIZE {
            return Err(AccessorError::TooLong { len, size }.into());
        }

        let mut indices = [0usize; MAX_SIZE];
        let mut alphabet = None;
        for (k, c) in mask.chars().enumerate() {
            let (a, index) = Alphabet::lookup(c).ok_or(AccessorError::UnknownComponent(c))?;
            match alphabet {
                None => alphabet = Some(a),
                Some(prev) if prev != a => return Err(AccessorError::MixedAlphabets.into()),
                Some(_) => {}
            }
            if index >= size {
                return Err(AccessorError::OutOfRange { component: c, size }.into());
            }
            indices[k] = index;
        }

        Ok(Self {
            indices,
            len,
            alphabet: alphabet.unwrap_or(Alphabet::Positional),
        })
    }

    /// Parse a write mask: like [`parse`](Self::parse), but every target
    /// component must be distinct.
    pub fn parse_targets(mask: &str, size: usize) -> Result<Self, Error> {
        let parsed = Self::parse(mask, size)?;
        let mut seen = [false; MAX_SIZE];
        for &i in parsed.indices() {
            if seen[i] {
                return Err(AccessorError::DuplicateTarget(parsed.alphabet.names()[i]).into());
            }
            seen[i] = true;
        }
        Ok(parsed)
    }

    /// Component indices in mask order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    /// Number of components named.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: an empty mask never parses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }
}

/// Result of a swizzle read, or the value of a swizzle write.
///
/// One-letter masks yield a scalar; longer masks yield a vector of the mask's
/// length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swizzle<T> {
    Scalar(T),
    Vector(Vector<T>),
}

impl<T: Scalar> Swizzle<T> {
    /// Number of components carried.
    pub fn len(&self) -> usize {
        match self {
            Swizzle::Scalar(_) => 1,
            Swizzle::Vector(v) => v.len(),
        }
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The scalar, if this is a one-component swizzle.
    pub fn scalar(self) -> Option<T> {
        match self {
            Swizzle::Scalar(s) => Some(s),
            Swizzle::Vector(_) => None,
        }
    }

    /// The vector, if this is a multi-component swizzle.
    pub fn vector(self) -> Option<Vector<T>> {
        match self {
            Swizzle::Scalar(_) => None,
            Swizzle::Vector(v) => Some(v),
        }
    }

    /// Component `k` (`k < len()`).
    pub(crate) fn component(&self, k: usize) -> T {
        match self {
            Swizzle::Scalar(s) => *s,
            Swizzle::Vector(v) => v[k],
        }
    }
}

impl<T> From<Vector<T>> for Swizzle<T> {
    fn from(v: Vector<T>) -> Self {
        Swizzle::Vector(v)
    }
}

impl<T: Copy> From<&Vector<T>> for Swizzle<T> {
    fn from(v: &Vector<T>) -> Self {
        Swizzle::Vector(*v)
    }
}

// Scalar conversions are concrete to stay clear of the vector impls.
macro_rules! impl_scalar_swizzle {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Swizzle<$t> {
                fn from(s: $t) -> Self {
                    Swizzle::Scalar(s)
                }
            }
        )*
    };
}

impl_scalar_swizzle!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::vector::vec2;

    #[test]
    fn lookup_tables_agree() {
        for (i, (p, c)) in Alphabet::Positional
            .names()
            .iter()
            .zip(Alphabet::Color.names().iter())
            .enumerate()
        {
            assert_eq!(Alphabet::lookup(*p), Some((Alphabet::Positional, i)));
            assert_eq!(Alphabet::lookup(*c), Some((Alphabet::Color, i)));
        }
        assert_eq!(Alphabet::lookup('q'), None);
    }

    #[test]
    fn parse_in_order_with_repeats() {
        let m = Mask::parse("xxy", 3).unwrap();
        assert_eq!(m.indices(), &[0, 0, 1]);
        assert_eq!(m.len(), 3);

        let m = Mask::parse("abgr", 4).unwrap();
        assert_eq!(m.indices(), &[3, 2, 1, 0]);
        assert_eq!(m.alphabet(), Alphabet::Color);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Mask::parse("", 4).unwrap_err(),
            Error::InvalidAccessor(AccessorError::Empty)
        );
        assert_eq!(
            Mask::parse("xyz", 2).unwrap_err(),
            Error::InvalidAccessor(AccessorError::TooLong { len: 3, size: 2 })
        );
        assert_eq!(
            Mask::parse("xyzwx", 4).unwrap_err(),
            Error::InvalidAccessor(AccessorError::TooLong { len: 5, size: 4 })
        );
        assert_eq!(
            Mask::parse("xr", 4).unwrap_err(),
            Error::InvalidAccessor(AccessorError::MixedAlphabets)
        );
        assert_eq!(
            Mask::parse("xq", 4).unwrap_err(),
            Error::InvalidAccessor(AccessorError::UnknownComponent('q'))
        );
        assert_eq!(
            Mask::parse("xz", 2).unwrap_err(),
            Error::InvalidAccessor(AccessorError::OutOfRange {
                component: 'z',
                size: 2
            })
        );
    }

    #[test]
    fn targets_must_be_distinct() {
        assert!(Mask::parse_targets("yz", 4).is_ok());
        let err = Mask::parse_targets("gg", 4).unwrap_err();
        assert_eq!(err, Error::InvalidAccessor(AccessorError::DuplicateTarget('g')));
        assert_eq!(err.kind(), ErrorKind::InvalidAccessor);
    }

    #[test]
    fn swizzle_name_shape() {
        assert!(is_swizzle_name("xyzw"));
        assert!(is_swizzle_name("xr")); // shaped like a swizzle, rejected later
        assert!(!is_swizzle_name(""));
        assert!(!is_swizzle_name("length"));
    }

    #[test]
    fn swizzle_value_accessors() {
        let s: Swizzle<f64> = 3.0.into();
        assert_eq!(s.len(), 1);
        assert_eq!(s.scalar(), Some(3.0));
        assert_eq!(s.vector(), None);

        let v: Swizzle<f64> = vec2(1.0, 2.0).into();
        assert_eq!(v.len(), 2);
        assert_eq!(v.component(1), 2.0);
        assert_eq!(v.vector(), Some(vec2(1.0, 2.0)));
    }
}
