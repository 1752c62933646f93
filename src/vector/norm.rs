use crate::error::Error;
use crate::traits::{FloatScalar, Scalar};

use super::{vec3, Vector};

impl<T: Scalar> Vector<T> {
    /// Dot product over the shared prefix of the two vectors.
    ///
    /// Sizes may differ; extra components of the longer vector are ignored.
    ///
    /// ```
    /// use shadermath::{vec2, vec3};
    /// assert_eq!(vec3(1.0, 0.0, 0.0).dot(&vec3(0.0, 1.0, 0.0)), 0.0);
    /// assert_eq!(vec3(1.0, 2.0, 3.0).dot(&vec2(4.0, 5.0)), 14.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        let n = self.len().min(rhs.len());
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[i] * rhs[i];
        }
        sum
    }

    /// Squared Euclidean norm. No sqrt, works with integers.
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Cross product, returned as a 3-component vector.
    ///
    /// A 2-component operand is treated as lying in the xy plane (z = 0).
    /// Returns `None` if either operand has 4 components.
    ///
    /// ```
    /// use shadermath::{vec2, vec3};
    /// let z = vec3(1, 0, 0).cross(&vec3(0, 1, 0)).unwrap();
    /// assert_eq!(z, vec3(0, 0, 1));
    /// assert_eq!(vec2(1, 0).cross(&vec2(0, 1)), Some(vec3(0, 0, 1)));
    /// ```
    pub fn cross(&self, rhs: &Self) -> Option<Self> {
        if self.len() > 3 || rhs.len() > 3 {
            return None;
        }
        // Zero padding past `len` supplies z = 0 for 2-vectors.
        let (a, b) = (&self.data, &rhs.data);
        Some(vec3(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ))
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Euclidean norm over all components.
    ///
    /// ```
    /// use shadermath::vec3;
    /// assert_eq!(vec3(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// New unit vector in the same direction; the receiver is unchanged.
    ///
    /// Fails with [`Error::Numeric`] if the magnitude is zero or not finite
    /// (a NaN component, or a sum of squares that overflows).
    pub fn normal(&self) -> Result<Self, Error> {
        let m = self.magnitude();
        if !m.is_finite() || m == T::zero() {
            log::debug!("cannot normalize {:?}: magnitude {:?}", self, m);
            return Err(Error::Numeric { op: "normal" });
        }
        Ok(Self::generate(self.len(), |i| self[i] / m))
    }

    /// Normalize in place and return the receiver.
    ///
    /// Produces exactly the components [`normal`](Self::normal) would.
    /// On failure the receiver is left untouched.
    ///
    /// ```
    /// use shadermath::vec2;
    /// let mut v = vec2(3.0, 4.0);
    /// v.normalize().unwrap();
    /// assert_eq!(v, vec2(0.6, 0.8));
    /// ```
    pub fn normalize(&mut self) -> Result<&mut Self, Error> {
        *self = self.normal().map_err(|_| Error::Numeric { op: "normalize" })?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorKind};
    use crate::vector::{vec2, vec3, vec4};

    const TOL: f64 = 1e-12;

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 2.0, 3.0).dot(&vec3(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(vec3(1.0, 0.0, 0.0).dot(&vec3(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn dot_uses_shared_prefix() {
        let a = vec4(1, 2, 3, 4);
        let b = vec2(5, 6);
        assert_eq!(a.dot(&b), 17);
        assert_eq!(b.dot(&a), 17);
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec3(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(vec2(3, 4).magnitude_squared(), 25);
        assert!((vec4(1.0_f64, 1.0, 1.0, 1.0).magnitude() - 2.0).abs() < TOL);
    }

    #[test]
    fn normal_does_not_mutate() {
        let v = vec3(1.0_f64, 2.0, 2.0);
        let n = v.normal().unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 2.0));
        assert!((n.magnitude() - 1.0).abs() < TOL);
        assert!((n[0] - 1.0 / 3.0).abs() < TOL);
    }

    #[test]
    fn normalize_matches_normal() {
        let v = vec4(1.0_f64, 2.0, 3.0, 4.0);
        let expected = v.normal().unwrap();
        let mut w = v;
        let got = *w.normalize().unwrap();
        assert_eq!(got, expected);
        assert_eq!(w, expected);
        assert!((w.magnitude() - 1.0).abs() < TOL);
    }

    #[test]
    fn zero_magnitude_is_an_error() {
        let v = vec2(0.0_f64, 0.0);
        assert_eq!(v.normal().unwrap_err(), Error::Numeric { op: "normal" });

        let mut w = vec3(0.0_f32, 0.0, 0.0);
        let err = w.normalize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Numeric);
        assert_eq!(w, vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn overflowing_magnitude_is_an_error() {
        let v = vec2(1e200_f64, 1e200);
        assert!(v.magnitude().is_infinite());
        assert_eq!(v.normal().unwrap_err(), Error::Numeric { op: "normal" });

        let mut w = v;
        assert_eq!(w.normalize().unwrap_err(), Error::Numeric { op: "normalize" });
        assert_eq!(w, v);

        // Large but representable magnitudes still normalize.
        let n = vec2(1e150_f64, 1e150).normal().unwrap();
        assert!((n.magnitude() - 1.0).abs() < TOL);
    }

    #[test]
    fn nan_component_is_an_error() {
        let v = vec3(1.0_f64, f64::NAN, 0.0);
        assert_eq!(v.normal().unwrap_err().kind(), ErrorKind::Numeric);
        assert!(vec2(f64::INFINITY, 0.0).normal().is_err());
    }

    #[test]
    fn cross() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();
        assert_eq!(ab, -ba);
        assert_eq!(ab, vec3(-3.0, 6.0, -3.0));
        assert_eq!(a.cross(&a).unwrap(), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn cross_of_plane_vectors() {
        assert_eq!(vec2(2, 0).cross(&vec2(0, 3)), Some(vec3(0, 0, 6)));
        assert_eq!(vec2(1, 2).cross(&vec3(0, 0, 1)), Some(vec3(2, -1, 0)));
        assert_eq!(vec4(1, 0, 0, 0).cross(&vec3(0, 1, 0)), None);
    }
}
