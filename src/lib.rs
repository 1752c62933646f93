//! # shadermath
//!
//! Shader-style vector and matrix algebra, no-std compatible. Vectors have 2
//! to 4 components, matrices 2 to 4 rows and columns, all stack-allocated and
//! `Copy`. Components are read and written through GLSL-style swizzles.
//!
//! ## Quick start
//!
//! ```
//! use shadermath::{mat2, vec2, vec3, vec4};
//!
//! let mut v = vec4(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v.swizzle("wzyx").unwrap().vector(), Some(vec4(4.0, 3.0, 2.0, 1.0)));
//! v.set_swizzle("yz", vec2(9.0, 9.0)).unwrap();
//! assert_eq!(v, vec4(1.0, 9.0, 9.0, 4.0));
//!
//! // Mixed sizes combine over the shared prefix.
//! assert_eq!(vec3(1, 2, 3) + vec2(10, 20), vec2(11, 22));
//!
//! let m = mat2!(1.0, 2.0, 3.0, 4.0).unwrap();
//! assert_eq!(m.det().unwrap(), -2.0);
//! assert_eq!(m.inverse().unwrap(), mat2!(-2.0, 1.0, 1.5, -0.5).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`Vector`]: runtime-sized (2..=4) vector with truncating arithmetic,
//!   `dot`, `cross`, `magnitude`, `normal` / `normalize`, and swizzle access.
//!
//! - [`Matrix`]: rows of [`Vector`]s with checked and panicking arithmetic,
//!   true matrix multiplication, predicates, transpose, cofactor determinant
//!   and adjugate inverse.
//!
//! - [`swizzle`]: accessor-string parsing shared by reads and writes.
//!
//! - [`Arg`]: constructor arguments for [`Vector::from_args`] /
//!   [`Matrix::from_args`] and the `vecN!` / `matN!` / `matCxR!` macros.
//!
//! - [`traits`]: element trait hierarchy:
//!   - [`Scalar`]: all components (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), needed by `magnitude`,
//!     `normal` and `inverse`
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error`, `Matrix::to_rows` |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod macros;

mod args;
mod error;
pub mod matrix;
pub mod swizzle;
pub mod traits;
pub mod vector;

pub use args::Arg;
pub use error::{AccessorError, ConstructionError, Error, ErrorKind, Shape};
pub use matrix::{Matrix, TypeName};
pub use swizzle::Swizzle;
pub use traits::{FloatScalar, Scalar};
pub use vector::{vec2, vec3, vec4, Vector};
