// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Zero-Inflated Binomial Distribution
//!
//! A `Binomial(size, prob)` count that is forced to zero with probability `π`:
//! ```text
//! P(X = 0) = π + (1 − π)·(1 − prob)^size
//! P(X = x) = (1 − π)·Bin(x; size, prob),   x ≥ 1
//! ```

mod std;

use minarrow::Bitmask;
use rand::Rng;

use crate::distributions::shared::diagnostics::Evaluated;
use crate::distributions::univariate::common::std::{
    Scale, cdf_kernel_f64_std, density_kernel_f64_std, quantile_kernel_f64_std,
    sample_kernel_f64_std,
};
use crate::errors::KernelError;
use crate::traits::interrupt::NeverInterrupt;

/// Zero-inflated binomial PMF.
#[inline(always)]
pub fn zib_pmf(
    x: &[f64],
    size: &[f64],
    prob: &[f64],
    pi: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "zib_pmf",
        [x, size, prob, pi],
        Scale::Linear,
        log_prob,
        null_mask,
        null_count,
        |[x, n, p, z], d| std::zib_pmf_scalar(x, n, p, z, d),
    )
}

/// Zero-inflated binomial CDF.
#[inline(always)]
pub fn zib_cdf(
    x: &[f64],
    size: &[f64],
    prob: &[f64],
    pi: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    cdf_kernel_f64_std(
        "zib_cdf",
        [x, size, prob, pi],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
        |[x, n, p, z], d| std::zib_cdf_scalar(x, n, p, z, d),
    )
}

/// Zero-inflated binomial quantile: the smallest `x` with `F(x) ≥ p`.
#[inline(always)]
pub fn zib_quantile(
    p: &[f64],
    size: &[f64],
    prob: &[f64],
    pi: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    quantile_kernel_f64_std(
        "zib_quantile",
        [p, size, prob, pi],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        |[q, n, p, z], d| std::zib_quantile_scalar(q, n, p, z, d),
    )
}

/// `n` zero-inflated binomial draws.
#[inline(always)]
pub fn zib_sample<R: Rng + ?Sized>(
    n: usize,
    size: &[f64],
    prob: &[f64],
    pi: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std("zib_sample", n, [size, prob, pi], rng, |[s, p, z], rng, d| {
        std::zib_sample_scalar(rng, s, p, z, d)
    })
}
