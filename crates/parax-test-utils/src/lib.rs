//! Test utilities for parax development.
//!
//! Provides a dense Gaussian-elimination reference solver for checking
//! the engines' line-decomposed solves against an independent method,
//! and seeded random generators for deterministic field and coefficient
//! inputs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use parax_field::{Field1D, Field2D};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Solve the dense system `a · x = b` by Gaussian elimination with
/// partial pivoting.
///
/// Reference-quality, O(n³); for cross-checking small systems in tests.
///
/// # Panics
///
/// Panics on dimension mismatch or a (numerically) singular matrix —
/// test inputs are expected to be well-posed.
pub fn solve_dense(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let n = b.len();
    assert_eq!(a.len(), n);
    for row in &a {
        assert_eq!(row.len(), n);
    }

    for col in 0..n {
        // Partial pivot: bring the largest remaining entry up.
        let pivot_row = (col..n)
            .max_by(|&p, &q| a[p][col].abs().total_cmp(&a[q][col].abs()))
            .unwrap();
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);
        let pivot = a[col][col];
        assert!(pivot.abs() > 1e-12, "singular matrix at column {col}");

        for row in col + 1..n {
            let factor = a[row][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in row + 1..n {
            acc -= a[row][k] * x[k];
        }
        x[row] = acc / a[row][row];
    }
    x
}

/// Deterministic values in `[lo, hi)` from a ChaCha8 stream.
pub fn seeded_values(count: usize, seed: u64, lo: f64, hi: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| lo + (hi - lo) * rng.random::<f64>()).collect()
}

/// A `Field1D` filled with seeded values in `[lo, hi)`.
pub fn seeded_field1d(len: usize, seed: u64, lo: f64, hi: f64) -> Field1D {
    let mut field = Field1D::with_len(len);
    field.copy_from(&seeded_values(len, seed, lo, hi));
    field
}

/// A `Field2D` filled with seeded values in `[lo, hi)`.
pub fn seeded_field2d(nx: usize, ny: usize, seed: u64, lo: f64, hi: f64) -> Field2D {
    let values = seeded_values(nx * ny, seed, lo, hi);
    let mut field = Field2D::with_extent(nx, ny);
    for i in 0..nx {
        for j in 0..ny {
            field.set(i, j, values[i * ny + j]);
        }
    }
    field
}

/// A `Field2D` whose value at `(i, j)` is `fx[i] * gy[j]` — a separable
/// product of two 1D profiles.
pub fn product_field2d(fx: &[f64], gy: &[f64]) -> Field2D {
    let mut field = Field2D::with_extent(fx.len(), gy.len());
    for (i, &f) in fx.iter().enumerate() {
        for (j, &g) in gy.iter().enumerate() {
            field.set(i, j, f * g);
        }
    }
    field
}
