use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::Vector;

/// Component-wise combination over the shorter of the two sizes.
#[inline]
fn zip_shortest<T: Scalar>(a: &Vector<T>, b: &Vector<T>, f: impl Fn(T, T) -> T) -> Vector<T> {
    let n = a.len().min(b.len());
    Vector::generate(n, |i| f(a[i], b[i]))
}

#[inline]
fn map_components<T: Scalar>(a: &Vector<T>, f: impl Fn(T) -> T) -> Vector<T> {
    Vector::generate(a.len(), |i| f(a[i]))
}

// ── Vector ∘ vector (truncating broadcast) ──────────────────────────
// `vec3 + vec2` is a vec2: the operation only covers the shared prefix.

macro_rules! impl_vector_binop {
    ($Op:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $Op for Vector<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                zip_shortest(&self, &rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $Op<&Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                zip_shortest(&self, rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $Op<Vector<T>> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Vector<T> {
                zip_shortest(self, &rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $Op<&Vector<T>> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                zip_shortest(self, rhs, |a, b| a $op b)
            }
        }
    };
}

impl_vector_binop!(Add, add, +);
impl_vector_binop!(Sub, sub, -);
impl_vector_binop!(Mul, mul, *);
impl_vector_binop!(Div, div, /);

// ── Vector ∘ scalar ─────────────────────────────────────────────────

macro_rules! impl_vector_scalar_op {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign:ident, $op:tt) => {
        impl<T: Scalar> $Op<T> for Vector<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                map_components(&self, |a| a $op rhs)
            }
        }

        impl<T: Scalar> $Op<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                map_components(self, |a| a $op rhs)
            }
        }

        impl<T: Scalar> $OpAssign<T> for Vector<T> {
            fn $assign(&mut self, rhs: T) {
                for c in self.as_mut_slice() {
                    *c = *c $op rhs;
                }
            }
        }
    };
}

impl_vector_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_vector_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_vector_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_vector_scalar_op!(Div, div, DivAssign, div_assign, /);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        map_components(&self, |a| T::zero() - a)
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        (*self).neg()
    }
}

// ── scalar ∘ vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn add(self, rhs: Vector<$t>) -> Vector<$t> {
                    map_components(&rhs, |a| self + a)
                }
            }

            impl Sub<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn sub(self, rhs: Vector<$t>) -> Vector<$t> {
                    map_components(&rhs, |a| self - a)
                }
            }

            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    map_components(&rhs, |a| self * a)
                }
            }

            impl Div<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn div(self, rhs: Vector<$t>) -> Vector<$t> {
                    map_components(&rhs, |a| self / a)
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    map_components(rhs, |a| self * a)
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
