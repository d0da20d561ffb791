// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Discrete Uniform Distribution
//!
//! Equal mass on each integer of `[min, max]`, both bounds finite:
//! ```text
//! P(X = x) = 1/(max − min + 1)
//! F(x)     = (⌊x⌋ − min + 1)/(max − min + 1)
//! F⁻¹(p)   = ⌈p·(max − min + 1) + min − 1⌉
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

/// Discrete uniform PMF. Non-integer points have mass zero and raise a warning.
#[inline(always)]
pub fn discrete_uniform_pmf(
    x: &[f64],
    min: &[f64],
    max: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "discrete_uniform_pmf",
        [x, min, max],
        Scale::Linear,
        log_prob,
        null_mask,
        null_count,
        |[x, lo, hi], d| std::discrete_uniform_pmf_scalar(x, lo, hi, d),
    )
}

/// Discrete uniform CDF.
#[inline(always)]
pub fn discrete_uniform_cdf(
    x: &[f64],
    min: &[f64],
    max: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    cdf_kernel_f64_std(
        "discrete_uniform_cdf",
        [x, min, max],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
        |[x, lo, hi], d| std::discrete_uniform_cdf_scalar(x, lo, hi, d),
    )
}

/// Discrete uniform quantile.
#[inline(always)]
pub fn discrete_uniform_quantile(
    p: &[f64],
    min: &[f64],
    max: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    quantile_kernel_f64_std(
        "discrete_uniform_quantile",
        [p, min, max],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        |[p, lo, hi], d| std::discrete_uniform_quantile_scalar(p, lo, hi, d),
    )
}

/// `n` discrete uniform draws.
#[inline(always)]
pub fn discrete_uniform_sample<R: Rng + ?Sized>(
    n: usize,
    min: &[f64],
    max: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std("discrete_uniform_sample", n, [min, max], rng, |[lo, hi], rng, d| {
        std::discrete_uniform_sample_scalar(rng, lo, hi, d)
    })
}
