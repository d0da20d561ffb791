// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared drivers and test helpers*
//!
//! `std` holds the recycling drivers every distribution routes through: one each for
//! densities, CDFs, quantiles and sampling. They own the scale and tail
//! post-transforms, null-mask propagation, interrupt checkpoints and warning emission,
//! so the per-distribution kernels stay pure scalar math.

/// Scalar drivers shared by all univariate distributions.
pub mod std;

#[cfg(test)]
use minarrow::{Bitmask, Buffer};

#[cfg(test)]
use crate::distributions::shared::diagnostics::Evaluated;

// Common test helpers

/// Test Helper: unwrap `Evaluated`, assert *no* null mask, return data.
#[cfg(test)]
pub fn dense_data(arr: Evaluated) -> Buffer<f64> {
    assert!(arr.data.null_mask.is_none(), "unexpected mask on dense path");
    arr.data.data
}

/// Create a mask of given length with exactly the lane `idx` null.
#[cfg(test)]
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    m.set(idx, false);
    m
}

/// Assert absolute difference ≤ `tol`. Matching infinities and NaNs compare equal.
#[cfg(test)]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    if a.is_nan() || b.is_nan() {
        assert!(a.is_nan() && b.is_nan(), "assert_close failed: {} vs {}", a, b);
        return;
    }
    if a.is_infinite() || b.is_infinite() {
        assert_eq!(a, b, "assert_close failed: {} vs {}", a, b);
        return;
    }
    assert!(
        (a - b).abs() <= tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}
