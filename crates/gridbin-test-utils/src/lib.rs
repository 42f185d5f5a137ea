//! Test utilities for gridbin development.
//!
//! Axis shorthands, fixture grids reused by the grid integration tests and
//! benchmarks, and tolerance-based float assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;

pub use fixtures::*;

/// Collect indices into an ordered set for order-insensitive comparison.
pub fn bins(indices: impl IntoIterator<Item = usize>) -> BTreeSet<usize> {
    indices.into_iter().collect()
}

/// `true` if `a` and `b` agree to a relative tolerance of `1e-12`.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

/// Assert two floats agree to a relative tolerance of `1e-12`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(approx_eq(actual, expected), "{actual} != {expected}");
}

/// Assert two points agree componentwise.
#[track_caller]
pub fn assert_point_close<const N: usize>(actual: [f64; N], expected: [f64; N]) {
    assert!(
        actual.iter().zip(&expected).all(|(&a, &b)| approx_eq(a, b)),
        "{actual:?} != {expected:?}"
    );
}
