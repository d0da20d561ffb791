// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Normal Mixture Distribution
//!
//! A finite mixture of `k` normal components. Each output row reads one recycled
//! row of the `mu`, `sigma` and `alpha` matrices:
//! ```text
//! f(x) = Σⱼ αⱼ·φ((x − μⱼ)/σⱼ)/σⱼ
//! F(x) = Σⱼ αⱼ·Φ((x − μⱼ)/σⱼ)
//! ```
//! A row is valid when every `σⱼ > 0`, every `αⱼ ≥ 0` and the weights sum to one
//! within `min_diff_eps`. Invalid rows give `NaN` and a warning. Matrices whose
//! column counts disagree are rejected with [`KernelError::ShapeMismatch`].
//!
//! The density is evaluated in log space with a log-sum-exp over components. No
//! quantile is provided.

use minarrow::{Bitmask, Vec64};
use rand::Rng;

use crate::config::numeric_config;
use crate::distributions::shared::diagnostics::{Diagnostics, Evaluated, Warning};
use crate::distributions::shared::recycle::ParamMatrix;
use crate::distributions::shared::sampler::{sample_normal, sample_uniform};
use crate::distributions::shared::scalar::{normal_cdf_scalar, normal_ln_pdf_scalar, tol_equal};
use crate::distributions::univariate::common::std::{
    Scale, apply_cdf_transforms, apply_density_scale, finish, indexed_kernel_f64_std,
};
use crate::errors::{KernelError, log_shape_mismatch};
use crate::traits::interrupt::NeverInterrupt;

/// Column count shared by the three parameter matrices.
fn component_count(
    fname: &str,
    mu: &ParamMatrix<'_>,
    sigma: &ParamMatrix<'_>,
    alpha: &ParamMatrix<'_>,
) -> Result<usize, KernelError> {
    let k = alpha.ncols();
    if mu.ncols() != k {
        return Err(KernelError::ShapeMismatch(log_shape_mismatch(
            fname,
            "mu",
            mu.ncols(),
            "alpha",
            k,
        )));
    }
    if sigma.ncols() != k {
        return Err(KernelError::ShapeMismatch(log_shape_mismatch(
            fname,
            "sigma",
            sigma.ncols(),
            "alpha",
            k,
        )));
    }
    Ok(k)
}

#[inline(always)]
fn any_nan(row: &[f64]) -> bool {
    row.iter().any(|v| v.is_nan())
}

/// Positive scales, non-negative weights summing to one.
#[inline]
fn valid_components(sigma: &[f64], alpha: &[f64], diag: &mut Diagnostics) -> bool {
    let c = numeric_config().prob_norm_const;
    let mut total = 0.0;
    let mut ok = true;
    for (&s, &a) in sigma.iter().zip(alpha) {
        if s <= 0.0 || a < 0.0 {
            ok = false;
        }
        total += a * c;
    }
    if !ok || !tol_equal(total / c, 1.0) {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// ln f(x) for one row of components.
#[inline]
pub fn normal_mixture_logpdf_scalar(
    x: f64,
    mu: &[f64],
    sigma: &[f64],
    alpha: &[f64],
    diag: &mut Diagnostics,
) -> f64 {
    if x.is_nan() || any_nan(mu) || any_nan(sigma) || any_nan(alpha) {
        return f64::NAN;
    }
    if !valid_components(sigma, alpha, diag) {
        return f64::NAN;
    }
    let term = |j: usize| {
        if alpha[j] == 0.0 {
            f64::NEG_INFINITY
        } else {
            alpha[j].ln() + normal_ln_pdf_scalar((x - mu[j]) / sigma[j]) - sigma[j].ln()
        }
    };
    let peak = (0..alpha.len()).map(term).fold(f64::NEG_INFINITY, f64::max);
    if peak == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    let sum: f64 = (0..alpha.len()).map(|j| (term(j) - peak).exp()).sum();
    peak + sum.ln()
}

/// F(x) for one row of components.
#[inline]
pub fn normal_mixture_cdf_scalar(
    x: f64,
    mu: &[f64],
    sigma: &[f64],
    alpha: &[f64],
    diag: &mut Diagnostics,
) -> f64 {
    if x.is_nan() || any_nan(mu) || any_nan(sigma) || any_nan(alpha) {
        return f64::NAN;
    }
    if !valid_components(sigma, alpha, diag) {
        return f64::NAN;
    }
    let p: f64 = (0..alpha.len())
        .map(|j| alpha[j] * normal_cdf_scalar((x - mu[j]) / sigma[j]))
        .sum();
    p.min(1.0)
}

/// One draw: pick a component by walking the weights from the last one back, then
/// draw from that component's normal.
#[inline]
pub fn normal_mixture_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    mu: &[f64],
    sigma: &[f64],
    alpha: &[f64],
    diag: &mut Diagnostics,
) -> f64 {
    if any_nan(mu) || any_nan(sigma) || any_nan(alpha) {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    let c = numeric_config().prob_norm_const;
    let bad = |j: usize| sigma[j] <= 0.0 || alpha[j] < 0.0 || alpha[j] > 1.0;
    let u = sample_uniform(rng) * c;
    let mut remaining = c;
    let mut chosen = 0;
    let mut invalid = false;
    for j in (0..alpha.len()).rev() {
        remaining -= alpha[j] * c;
        if bad(j) {
            invalid = true;
            break;
        }
        if u > remaining {
            chosen = j;
            break;
        }
    }
    if !invalid {
        // drain the rest so the weight total can be checked
        for j in (0..chosen).rev() {
            remaining -= alpha[j] * c;
            if bad(j) {
                invalid = true;
                break;
            }
        }
    }
    if invalid || alpha.is_empty() || !tol_equal(remaining / c, 0.0) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    sample_normal(rng, mu[chosen], sigma[chosen])
}

/// Output length: the longest of `x` and the three row counts, or zero if any is empty.
#[inline]
fn output_len(primary: usize, mu: &ParamMatrix<'_>, sigma: &ParamMatrix<'_>, alpha: &ParamMatrix<'_>) -> usize {
    let lens = [primary, mu.nrows(), sigma.nrows(), alpha.nrows()];
    if lens.contains(&0) { 0 } else { lens.into_iter().max().unwrap_or(0) }
}

/// Normal-mixture density.
///
/// `mu`, `sigma` and `alpha` hold one row of `k` components per parameter set.
/// The optional mask applies to `x`.
pub fn normal_mixture_pdf(
    x: &[f64],
    mu: &ParamMatrix<'_>,
    sigma: &ParamMatrix<'_>,
    alpha: &ParamMatrix<'_>,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    const FNAME: &str = "normal_mixture_pdf";
    component_count(FNAME, mu, sigma, alpha)?;
    let len = output_len(x.len(), mu, sigma, alpha);
    let mut diag = Diagnostics::new();
    let (mut out, out_mask) = indexed_kernel_f64_std(
        FNAME,
        x.len(),
        len,
        null_mask,
        null_count,
        &NeverInterrupt,
        &mut diag,
        |i, d| {
            normal_mixture_logpdf_scalar(
                x[i % x.len()],
                mu.recycled_row(i),
                sigma.recycled_row(i),
                alpha.recycled_row(i),
                d,
            )
        },
    )?;
    apply_density_scale(&mut out, Scale::Log, log_prob);
    Ok(finish(FNAME, out, out_mask, diag))
}

/// Normal-mixture CDF.
pub fn normal_mixture_cdf(
    x: &[f64],
    mu: &ParamMatrix<'_>,
    sigma: &ParamMatrix<'_>,
    alpha: &ParamMatrix<'_>,
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    const FNAME: &str = "normal_mixture_cdf";
    component_count(FNAME, mu, sigma, alpha)?;
    let len = output_len(x.len(), mu, sigma, alpha);
    let mut diag = Diagnostics::new();
    let (mut out, out_mask) = indexed_kernel_f64_std(
        FNAME,
        x.len(),
        len,
        null_mask,
        null_count,
        &NeverInterrupt,
        &mut diag,
        |i, d| {
            normal_mixture_cdf_scalar(
                x[i % x.len()],
                mu.recycled_row(i),
                sigma.recycled_row(i),
                alpha.recycled_row(i),
                d,
            )
        },
    )?;
    apply_cdf_transforms(&mut out, lower_tail, log_prob);
    Ok(finish(FNAME, out, out_mask, diag))
}

/// `n` normal-mixture draws. Parameter rows are recycled over the draws.
pub fn normal_mixture_sample<R: Rng + ?Sized>(
    n: usize,
    mu: &ParamMatrix<'_>,
    sigma: &ParamMatrix<'_>,
    alpha: &ParamMatrix<'_>,
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    const FNAME: &str = "normal_mixture_sample";
    component_count(FNAME, mu, sigma, alpha)?;
    let mut diag = Diagnostics::new();
    let mut out = Vec64::with_capacity(n);
    if output_len(1, mu, sigma, alpha) == 0 {
        if n > 0 {
            diag.raise(Warning::NAsProduced);
        }
        out.resize(n, f64::NAN);
        return Ok(finish(FNAME, out, None, diag));
    }
    for i in 0..n {
        out.push(normal_mixture_sample_scalar(
            rng,
            mu.recycled_row(i),
            sigma.recycled_row(i),
            alpha.recycled_row(i),
            &mut diag,
        ));
    }
    Ok(finish(FNAME, out, None, diag))
}
