use crate::error::{AccessorError, Error};
use crate::swizzle::{is_swizzle_name, Mask, Swizzle};
use crate::traits::Scalar;

use super::{Vector, MAX_SIZE};

// ── Named components ────────────────────────────────────────────────

impl<T: Copy> Vector<T> {
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Third component, if the vector has one.
    #[inline]
    pub fn z(&self) -> Option<T> {
        self.as_slice().get(2).copied()
    }

    /// Fourth component, if the vector has one.
    #[inline]
    pub fn w(&self) -> Option<T> {
        self.as_slice().get(3).copied()
    }

    #[inline]
    pub fn r(&self) -> T {
        self.x()
    }

    #[inline]
    pub fn g(&self) -> T {
        self.y()
    }

    #[inline]
    pub fn b(&self) -> Option<T> {
        self.z()
    }

    #[inline]
    pub fn a(&self) -> Option<T> {
        self.w()
    }
}

// ── Swizzling ───────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Read components by mask, in mask order.
    ///
    /// One letter gives a scalar, two to four give a new vector. Letters may
    /// repeat.
    ///
    /// ```
    /// use shadermath::{vec2, vec3, vec4};
    ///
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.swizzle("y").unwrap().scalar(), Some(2));
    /// assert_eq!(v.swizzle("zyx").unwrap().vector(), Some(vec3(3, 2, 1)));
    /// assert_eq!(v.swizzle("rr").unwrap().vector(), Some(vec2(1, 1)));
    /// assert!(v.swizzle("xg").is_err());
    /// ```
    pub fn swizzle(&self, mask: &str) -> Result<Swizzle<T>, Error> {
        let mask = Mask::parse(mask, self.len())?;
        let picked = mask.indices();
        if let [i] = picked {
            return Ok(Swizzle::Scalar(self[*i]));
        }
        Ok(Swizzle::Vector(Vector::generate(picked.len(), |k| {
            self[picked[k]]
        })))
    }

    /// Write components by mask.
    ///
    /// Targets must be distinct, and `value` must carry exactly as many
    /// components as the mask names: a scalar for one letter, a vector of the
    /// mask's length otherwise. On error the vector is unchanged.
    ///
    /// ```
    /// use shadermath::{vec2, vec4};
    ///
    /// let mut v = vec4(1, 2, 3, 4);
    /// v.set_swizzle("yz", vec2(9, 9)).unwrap();
    /// assert_eq!(v, vec4(1, 9, 9, 4));
    ///
    /// v.set_swizzle("a", 0).unwrap();
    /// assert_eq!(v, vec4(1, 9, 9, 0));
    /// ```
    pub fn set_swizzle(&mut self, mask: &str, value: impl Into<Swizzle<T>>) -> Result<(), Error> {
        let targets = Mask::parse_targets(mask, self.len())?;
        let value = value.into();
        if value.len() != targets.len() {
            return Err(AccessorError::ValueLength {
                expected: targets.len(),
                got: value.len(),
            }
            .into());
        }
        for (k, &i) in targets.indices().iter().enumerate() {
            self.data[i] = value.component(k);
        }
        Ok(())
    }

    /// Attribute-style read.
    ///
    /// Names made only of component letters are swizzles (and may still fail
    /// as invalid accessors); anything else is [`Error::AttributeNotFound`].
    ///
    /// ```
    /// use shadermath::{vec3, Error, ErrorKind};
    ///
    /// let v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.get("z").unwrap().scalar(), Some(3.0));
    /// assert_eq!(v.get("length").unwrap_err(), Error::AttributeNotFound);
    /// assert_eq!(v.get("xyzw").unwrap_err().kind(), ErrorKind::InvalidAccessor);
    /// ```
    pub fn get(&self, name: &str) -> Result<Swizzle<T>, Error> {
        if !is_swizzle_name(name) {
            return Err(Error::AttributeNotFound);
        }
        self.swizzle(name)
    }

    /// Attribute-style write; see [`get`](Self::get) for name resolution.
    pub fn set(&mut self, name: &str, value: impl Into<Swizzle<T>>) -> Result<(), Error> {
        if !is_swizzle_name(name) {
            return Err(Error::AttributeNotFound);
        }
        self.set_swizzle(name, value)
    }

    /// Components copied into a fixed array, zero past [`len`](Self::len).
    pub fn to_array(&self) -> [T; MAX_SIZE] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{AccessorError, Error, ErrorKind};
    use crate::swizzle::Swizzle;
    use crate::vector::{vec2, vec3, vec4, Vector};

    #[test]
    fn named_fields_in_canonical_order() {
        let v = vec2(1.0, 2.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, None, None));

        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, Some(3.0), None));

        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, Some(3.0), Some(4.0)));
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (1.0, 2.0, Some(3.0), Some(4.0)));
    }

    #[test]
    fn single_letter_fields_via_get() {
        for n in 2..=4 {
            let v = Vector::from_slice(&[10, 20, 30, 40][..n]).unwrap();
            for (i, name) in ["x", "y", "z", "w"].iter().take(n).enumerate() {
                assert_eq!(v.get(name).unwrap(), Swizzle::Scalar(v[i]));
            }
        }
    }

    #[test]
    fn swizzle_reads() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.swizzle("xyzw").unwrap().vector(), Some(v));
        assert_eq!(v.swizzle("wzyx").unwrap().vector(), Some(vec4(4, 3, 2, 1)));
        assert_eq!(v.swizzle("xy").unwrap().vector(), Some(vec2(1, 2)));
        assert_eq!(v.swizzle("rgba").unwrap(), v.swizzle("xyzw").unwrap());
        assert_eq!(v.swizzle("zwx").unwrap().vector(), Some(vec3(3, 4, 1)));
        assert_eq!(v.swizzle("wxw").unwrap().vector(), Some(vec3(4, 1, 4)));
    }

    #[test]
    fn swizzle_read_errors() {
        let v = vec2(1.0, 2.0);
        assert_eq!(
            v.swizzle("xyz").unwrap_err(),
            Error::InvalidAccessor(AccessorError::TooLong { len: 3, size: 2 })
        );
        assert_eq!(
            v.swizzle("z").unwrap_err(),
            Error::InvalidAccessor(AccessorError::OutOfRange {
                component: 'z',
                size: 2
            })
        );
        assert_eq!(
            v.swizzle("rx").unwrap_err(),
            Error::InvalidAccessor(AccessorError::MixedAlphabets)
        );
    }

    #[test]
    fn swizzle_writes() {
        let mut v = vec4(1, 2, 3, 4);
        v.set_swizzle("yz", vec2(9, 9)).unwrap();
        assert_eq!(v, vec4(1, 9, 9, 4));

        v.set_swizzle("wx", vec2(7, 8)).unwrap();
        assert_eq!(v, vec4(8, 9, 9, 7));

        v.set_swizzle("bgr", vec3(0, 1, 2)).unwrap();
        assert_eq!(v, vec4(2, 1, 0, 7));

        v.set("x", 5).unwrap();
        assert_eq!(v.x(), 5);
    }

    #[test]
    fn swizzle_write_errors_leave_vector_unchanged() {
        let mut v = vec3(1.0, 2.0, 3.0);
        let before = v;

        let err = v.set_swizzle("xx", vec2(5.0, 6.0)).unwrap_err();
        assert_eq!(err, Error::InvalidAccessor(AccessorError::DuplicateTarget('x')));

        let err = v.set_swizzle("xy", vec3(5.0, 6.0, 7.0)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAccessor(AccessorError::ValueLength {
                expected: 2,
                got: 3
            })
        );

        let err = v.set_swizzle("x", vec2(5.0, 6.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAccessor);

        let err = v.set_swizzle("xyzw", vec4(0.0, 0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAccessor);

        assert_eq!(v, before);
    }

    #[test]
    fn attribute_lookup() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.get("magnitude").unwrap_err(), Error::AttributeNotFound);
        assert_eq!(v.get("").unwrap_err(), Error::AttributeNotFound);
        assert_eq!(v.set("foo", 1).unwrap_err(), Error::AttributeNotFound);
        assert_eq!(v.get("xa").unwrap_err().kind(), ErrorKind::InvalidAccessor);
    }

    #[test]
    fn to_array_pads_with_zero() {
        assert_eq!(vec2(1, 2).to_array(), [1, 2, 0, 0]);
    }
}
