// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Generalised Pareto Distribution
//!
//! Location `μ`, scale `σ > 0`, shape `ξ`. With `z = (x − μ)/σ`:
//! ```text
//! ξ = 0:  f(x) = e^(−z)/σ                      F(x) = 1 − e^(−z)
//! ξ ≠ 0:  f(x) = (1 + ξz)^(−1/ξ − 1)/σ         F(x) = 1 − (1 + ξz)^(−1/ξ)
//! ```
//! Support is `z ≥ 0`, and additionally `z ≤ −1/ξ` for negative `ξ`.
//!
//! The `ξ = 0` branch is selected by exact comparison. Shapes within rounding of
//! zero take the general branch, which `ln_1p`/`exp_m1` keep accurate.

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

/// GPD density, recycled over `x`, `mu`, `sigma` and `xi`.
#[inline(always)]
pub fn gpd_pdf(
    x: &[f64],
    mu: &[f64],
    sigma: &[f64],
    xi: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "gpd_pdf",
        [x, mu, sigma, xi],
        Scale::Log,
        log_prob,
        null_mask,
        null_count,
        |[x, m, s, k], d| std::gpd_logpdf_scalar(x, m, s, k, d),
    )
}

/// GPD CDF.
#[inline(always)]
pub fn gpd_cdf(
    x: &[f64],
    mu: &[f64],
    sigma: &[f64],
    xi: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    cdf_kernel_f64_std(
        "gpd_cdf",
        [x, mu, sigma, xi],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
        |[x, m, s, k], d| std::gpd_cdf_scalar(x, m, s, k, d),
    )
}

/// GPD quantile.
#[inline(always)]
pub fn gpd_quantile(
    p: &[f64],
    mu: &[f64],
    sigma: &[f64],
    xi: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    quantile_kernel_f64_std(
        "gpd_quantile",
        [p, mu, sigma, xi],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        |[p, m, s, k], d| std::gpd_quantile_scalar(p, m, s, k, d),
    )
}

/// `n` GPD draws by inverse transform.
#[inline(always)]
pub fn gpd_sample<R: Rng + ?Sized>(
    n: usize,
    mu: &[f64],
    sigma: &[f64],
    xi: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std("gpd_sample", n, [mu, sigma, xi], rng, |[m, s, k], rng, d| {
        std::gpd_sample_scalar(rng, m, s, k, d)
    })
}
