// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Gamma-Poisson Distribution
//!
//! A Poisson count with a `Gamma(α, scale β)` rate, i.e. a negative binomial
//! with `p = β/(1 + β)`:
//! ```text
//! P(X = x) = Γ(α + x)/(x!·Γ(α)) · p^x · (1 − p)^α
//! ```
//!
//! The CDF is summed from the mass into one cumulative table per distinct
//! `(α, β)` in the call. No quantile is provided.

mod std;

use minarrow::Bitmask;
use rand::Rng;

use crate::distributions::shared::diagnostics::Evaluated;
use crate::distributions::shared::scalar::finite_max;
use crate::distributions::shared::table::CdfMemo;
use crate::distributions::univariate::common::std::{
    Scale, cdf_kernel_f64_std, density_kernel_f64_std, sample_kernel_f64_std,
};
use crate::errors::KernelError;
use crate::traits::interrupt::{Interrupt, NeverInterrupt};

/// Gamma-Poisson PMF.
#[inline(always)]
pub fn gamma_poisson_pmf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "gamma_poisson_pmf",
        [x, alpha, beta],
        Scale::Log,
        log_prob,
        null_mask,
        null_count,
        |[x, a, b], d| std::gamma_poisson_logpmf_scalar(x, a, b, d),
    )
}

/// Gamma-Poisson CDF.
#[inline(always)]
pub fn gamma_poisson_cdf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    gamma_poisson_cdf_interruptible(
        x,
        alpha,
        beta,
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
    )
}

/// [`gamma_poisson_cdf`] with a cancellation source polled every
/// `interrupt_interval` rows.
#[inline(always)]
pub fn gamma_poisson_cdf_interruptible(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    interrupt: &dyn Interrupt,
) -> Result<Evaluated, KernelError> {
    let top = finite_max(x);
    let mut memo = CdfMemo::new();
    cdf_kernel_f64_std(
        "gamma_poisson_cdf",
        [x, alpha, beta],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        interrupt,
        |[x, a, b], d| std::gamma_poisson_cdf_scalar(x, a, b, top, &mut memo, d),
    )
}

/// `n` gamma-Poisson draws.
#[inline(always)]
pub fn gamma_poisson_sample<R: Rng + ?Sized>(
    n: usize,
    alpha: &[f64],
    beta: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std("gamma_poisson_sample", n, [alpha, beta], rng, |[a, b], rng, d| {
        std::gamma_poisson_sample_scalar(rng, a, b, d)
    })
}
