//! Shader-notation constructors.
//!
//! Each macro wraps its arguments in [`Arg::from`](crate::Arg) and hands
//! them to the matching factory, so scalars, vectors, matrices and slices
//! can be mixed freely. All of them evaluate to a `Result`.

/// `vec2(...)`: a 2-component vector from mixed arguments.
///
/// ```
/// use shadermath::{vec2, vec3, Vector};
///
/// assert_eq!(vec2!(1.0).unwrap(), vec2(1.0, 1.0));
/// assert_eq!(vec2!(vec3(1, 2, 3)).unwrap_err().kind(), shadermath::ErrorKind::Construction);
/// let v: Vector<i32> = vec2!(4, 5).unwrap();
/// assert_eq!(v, vec2(4, 5));
/// ```
#[macro_export]
macro_rules! vec2 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Vector::from_args(2, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `vec3(...)`: a 3-component vector from mixed arguments.
///
/// ```
/// use shadermath::{vec2, vec3};
/// assert_eq!(vec3!(vec2(1, 2), 3).unwrap(), vec3(1, 2, 3));
/// ```
#[macro_export]
macro_rules! vec3 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Vector::from_args(3, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `vec4(...)`: a 4-component vector from mixed arguments.
///
/// ```
/// use shadermath::{vec3, vec4};
/// assert_eq!(vec4!(vec3(1.0, 2.0, 3.0), 1.0).unwrap(), vec4(1.0, 2.0, 3.0, 1.0));
/// ```
#[macro_export]
macro_rules! vec4 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Vector::from_args(4, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

// Shader naming puts columns first: matCxR has C components per row and R rows.

/// `mat2(...)`: a 2x2 matrix.
///
/// ```
/// use shadermath::{mat2, vec2, Matrix};
///
/// let m = mat2!(1, 2, 3, 4).unwrap();
/// assert_eq!(m.rows(), &[vec2(1, 2), vec2(3, 4)]);
/// assert_eq!(mat2!(1.0).unwrap(), Matrix::eye(2).unwrap());
/// ```
#[macro_export]
macro_rules! mat2 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(2, 2, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat3(...)`: a 3x3 matrix.
///
/// ```
/// use shadermath::{mat3, vec3};
///
/// let m = mat3!(vec3(1, 2, 3)).unwrap();
/// assert_eq!(m.rows(), &[vec3(1, 2, 3); 3]);
/// ```
#[macro_export]
macro_rules! mat3 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(3, 3, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat4(...)`: a 4x4 matrix.
///
/// ```
/// let m = shadermath::mat4!(1.0_f32).unwrap();
/// assert!(m.is_identity());
/// ```
#[macro_export]
macro_rules! mat4 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(4, 4, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat2x3(...)`: 3 rows of 2 components.
#[macro_export]
macro_rules! mat2x3 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(3, 2, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat2x4(...)`: 4 rows of 2 components.
#[macro_export]
macro_rules! mat2x4 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(4, 2, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat3x2(...)`: 2 rows of 3 components.
#[macro_export]
macro_rules! mat3x2 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(2, 3, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat3x4(...)`: 4 rows of 3 components.
#[macro_export]
macro_rules! mat3x4 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(4, 3, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat4x2(...)`: 2 rows of 4 components.
#[macro_export]
macro_rules! mat4x2 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(2, 4, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}

/// `mat4x3(...)`: 3 rows of 4 components.
#[macro_export]
macro_rules! mat4x3 {
    ( $( $arg:expr ),+ $(,)? ) => {
        $crate::Matrix::from_args(3, 4, &[ $( $crate::Arg::from($arg) ),+ ])
    };
}
