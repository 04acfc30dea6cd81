//! Exact linear algebra over arbitrary-precision numbers.
//!
//! # Motivation
//!
//! Floating-point linear algebra is fast, but rounds after every operation. For problems where
//! results have to be reproducible bit for bit (verifying algebraic identities, symbolic or
//! number-theoretic computations, test oracles for faster libraries), that rounding gets in the
//! way.
//!
//! This library performs every operation exactly, over one of four numeric domains:
//!
//! - arbitrary-precision integers ([`BigInt`]),
//! - arbitrary-precision decimals ([`BigDecimal`]),
//! - complex numbers with integer parts ([`ComplexBigInt`]),
//! - complex numbers with decimal parts ([`ComplexBigDecimal`]).
//!
//! The only approximate operation is the square root, which is needed for Euclidean norms and
//! distances, and for absolute values of complex numbers. Those take a [`SquareRootContext`]
//! that states the precision, rounding and tolerance to use.
//!
//! # Goals & Non-Goals
//!
//! - Write every algorithm once, generic over the [`Scalar`] trait, and instantiate it for each
//!   domain.
//! - Make containers immutable. [`Vector`] and [`Matrix`] are only created through
//!   [`VectorBuilder`] and [`MatrixBuilder`], which check that every element is set. All
//!   operations return new values.
//! - Use 1-based indices, matching the usual mathematical notation.
//! - Report invalid input with an [`Error`] that names the offending operand. The `std::ops`
//!   operators panic with the same message instead, like slice indexing does.
//! - Don't try to be fast. [`Matrix::determinant`] uses the Leibniz formula, which takes
//!   factorial time. There is no decomposition, no inversion and no eigenvalue computation.
//!
//! # Examples
//!
//! ```
//! # use exact_linalg::*;
//! let mat = Matrix::from_rows([
//!     [2, 1],
//!     [1, 1],
//! ].map(|row| row.map(BigInt::from))).unwrap();
//!
//! assert_eq!(mat.determinant(), Ok(BigInt::from(1)));
//! assert!(mat.is_invertible());
//! assert!(mat.is_symmetric());
//!
//! let ctx = SquareRootContext::default();
//! let v = Vector::from_elements([3, 4].map(BigInt::from)).unwrap();
//! assert_eq!(v.euclidean_norm_pow2(), BigInt::from(25));
//! assert_approx_eq!(v.euclidean_norm(&ctx), BigDecimal::from(5));
//! ```

pub mod approx;
mod error;
mod factory;
mod matrix;
mod sqrt;
mod traits;
mod vector;

pub use bigdecimal::{BigDecimal, RoundingMode};
pub use num_bigint::BigInt;
pub use num_complex::Complex;

pub use error::{Error, NotSquare, Result};
pub use factory::*;
pub use matrix::*;
pub use sqrt::{sqrt, SquareRootContext, MAX_PRECISION};
pub use traits::*;
pub use vector::*;
