// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Fatigue Life (Birnbaum–Saunders) Distribution
//!
//! Shape `α > 0`, scale `β > 0`, location `μ`. With `z = x − μ > 0`:
//! ```text
//! F(x) = Φ( (√(z/β) − √(β/z)) / α )
//! ```
//! The quantile and sampler both go through the normal score:
//! `x = β·(w + √(w² + 1))² + μ` with `w = α·Φ⁻¹(p)/2`.

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

/// Fatigue-life density.
#[inline(always)]
pub fn fatigue_life_pdf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    mu: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "fatigue_life_pdf",
        [x, alpha, beta, mu],
        Scale::Log,
        log_prob,
        null_mask,
        null_count,
        |[x, a, b, m], d| std::fatigue_life_logpdf_scalar(x, a, b, m, d),
    )
}

/// Fatigue-life CDF.
#[inline(always)]
pub fn fatigue_life_cdf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    mu: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    cdf_kernel_f64_std(
        "fatigue_life_cdf",
        [x, alpha, beta, mu],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
        |[x, a, b, m], d| std::fatigue_life_cdf_scalar(x, a, b, m, d),
    )
}

/// Fatigue-life quantile. `p = 0` maps to `μ` and `p = 1` to `+∞`.
#[inline(always)]
pub fn fatigue_life_quantile(
    p: &[f64],
    alpha: &[f64],
    beta: &[f64],
    mu: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    quantile_kernel_f64_std(
        "fatigue_life_quantile",
        [p, alpha, beta, mu],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        |[p, a, b, m], d| std::fatigue_life_quantile_scalar(p, a, b, m, d),
    )
}

/// `n` fatigue-life draws.
#[inline(always)]
pub fn fatigue_life_sample<R: Rng + ?Sized>(
    n: usize,
    alpha: &[f64],
    beta: &[f64],
    mu: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std(
        "fatigue_life_sample",
        n,
        [alpha, beta, mu],
        rng,
        |[a, b, m], rng, d| std::fatigue_life_sample_scalar(rng, a, b, m, d),
    )
}
