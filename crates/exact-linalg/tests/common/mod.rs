//! Seeded random fixtures for the property tests.
//!
//! Every generator takes the caller's [`fastrand::Rng`], so a test is reproducible from its seed
//! alone. Containers are only ever created through the public builders.

#![allow(dead_code)]

use exact_linalg::{
    BigDecimal, BigInt, Complex, ComplexBigDecimal, ComplexBigInt, Matrix, MatrixBuilder, Scalar,
    Vector, VectorBuilder,
};
use fastrand::Rng;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Scalars that can be drawn at random.
///
/// Values are kept small so products of a few dozen of them stay readable in failure output.
pub trait Arbitrary: Scalar {
    fn arbitrary(rng: &mut Rng) -> Self;
}

impl Arbitrary for BigInt {
    fn arbitrary(rng: &mut Rng) -> Self {
        BigInt::from(rng.i64(-9..=9))
    }
}

impl Arbitrary for BigDecimal {
    /// Two decimal places, in `[-9.99, 9.99]`.
    fn arbitrary(rng: &mut Rng) -> Self {
        BigDecimal::new(BigInt::from(rng.i64(-999..=999)), 2)
    }
}

impl Arbitrary for ComplexBigInt {
    fn arbitrary(rng: &mut Rng) -> Self {
        Complex::new(BigInt::arbitrary(rng), BigInt::arbitrary(rng))
    }
}

impl Arbitrary for ComplexBigDecimal {
    fn arbitrary(rng: &mut Rng) -> Self {
        Complex::new(BigDecimal::arbitrary(rng), BigDecimal::arbitrary(rng))
    }
}

/// A size in `[1, max]`.
pub fn size(rng: &mut Rng, max: usize) -> usize {
    rng.usize(1..=max)
}

pub fn vector<T: Arbitrary>(rng: &mut Rng, size: usize) -> Vector<T> {
    let mut builder = VectorBuilder::new(size).unwrap();
    for i in 1..=size {
        builder.put(i, T::arbitrary(rng)).unwrap();
    }
    builder.build().unwrap()
}

pub fn matrix<T: Arbitrary>(rng: &mut Rng, rows: usize, columns: usize) -> Matrix<T> {
    filled(rng, rows, columns, |_, _| true)
}

pub fn square<T: Arbitrary>(rng: &mut Rng, size: usize) -> Matrix<T> {
    matrix(rng, size, size)
}

pub fn upper_triangular<T: Arbitrary>(rng: &mut Rng, size: usize) -> Matrix<T> {
    filled(rng, size, size, |i, j| i <= j)
}

pub fn lower_triangular<T: Arbitrary>(rng: &mut Rng, size: usize) -> Matrix<T> {
    filled(rng, size, size, |i, j| i >= j)
}

pub fn diagonal<T: Arbitrary>(rng: &mut Rng, size: usize) -> Matrix<T> {
    filled(rng, size, size, |i, j| i == j)
}

/// A matrix with determinant 1, invertible in every domain.
///
/// This is the product of a lower and an upper triangular matrix, both with ones on the
/// diagonal.
pub fn invertible<T: Arbitrary>(rng: &mut Rng, size: usize) -> Matrix<T> {
    let lower = unit_triangular(rng, size, |i, j| i > j);
    let upper = unit_triangular(rng, size, |i, j| i < j);
    lower.multiply(&upper).unwrap()
}

/// Puts random values where `random(row, column)` holds, and zeroes everywhere else.
fn filled<T: Arbitrary>(
    rng: &mut Rng,
    rows: usize,
    columns: usize,
    random: impl Fn(usize, usize) -> bool,
) -> Matrix<T> {
    let mut builder = MatrixBuilder::new(rows, columns).unwrap();
    for i in 1..=rows {
        for j in 1..=columns {
            if random(i, j) {
                builder.put(i, j, T::arbitrary(rng)).unwrap();
            }
        }
    }
    builder.nulls_to_element(T::zero()).build().unwrap()
}

fn unit_triangular<T: Arbitrary>(
    rng: &mut Rng,
    size: usize,
    random: impl Fn(usize, usize) -> bool,
) -> Matrix<T> {
    let mut builder = MatrixBuilder::new(size, size).unwrap();
    for i in 1..=size {
        builder.put(i, i, T::one()).unwrap();
        for j in 1..=size {
            if random(i, j) {
                builder.put(i, j, T::arbitrary(rng)).unwrap();
            }
        }
    }
    builder.nulls_to_element(T::zero()).build().unwrap()
}
