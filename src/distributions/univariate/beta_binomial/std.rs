// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::config::MAX_TABLE_INDEX;
use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::{sample_beta, sample_binomial};
use crate::distributions::shared::scalar::{is_integer, ln_beta, ln_choose};
use crate::distributions::shared::table::{CdfMemo, CdfTable};

#[inline(always)]
fn valid_params(size: f64, alpha: f64, beta: f64, diag: &mut Diagnostics) -> bool {
    if alpha <= 0.0 || beta <= 0.0 || size < 0.0 || size.fract() != 0.0 {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// Log-mass for already validated parameters and an integral `k`.
#[inline(always)]
fn ln_mass(k: f64, size: f64, alpha: f64, beta: f64) -> f64 {
    if k < 0.0 || k > size {
        return f64::NEG_INFINITY;
    }
    ln_choose(size, k) + ln_beta(k + alpha, size - k + beta) - ln_beta(alpha, beta)
}

/// ln f(k) = ln C(n, k) + ln B(k + α, n − k + β) − ln B(α, β).
#[inline(always)]
pub fn beta_binomial_logpmf_scalar(
    x: f64,
    size: f64,
    alpha: f64,
    beta: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if x.is_nan() || size.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if !valid_params(size, alpha, beta, diag) {
        return f64::NAN;
    }
    if x.is_infinite() || !is_integer(x, diag) {
        return f64::NEG_INFINITY;
    }
    ln_mass(x, size, alpha, beta)
}

/// Lower-tail CDF read from the call's table for `(size, α, β)`.
///
/// `top` is the largest finite evaluation point of the call. The table is built
/// once per parameter tuple, out to `min(top, size)`.
#[inline(always)]
pub fn beta_binomial_cdf_scalar(
    x: f64,
    size: f64,
    alpha: f64,
    beta: f64,
    top: f64,
    memo: &mut CdfMemo<3>,
    diag: &mut Diagnostics,
) -> f64 {
    if x.is_nan() || size.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if !valid_params(size, alpha, beta, diag) {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    if x >= size {
        return 1.0;
    }
    if x > MAX_TABLE_INDEX {
        diag.raise(Warning::IntegerCoercion);
        return f64::NAN;
    }
    let extent = top.min(size).min(MAX_TABLE_INDEX).max(0.0).floor() as usize;
    let table = memo.get_or_build([size, alpha, beta], || {
        CdfTable::build(extent, None, |j| ln_mass(j as f64, size, alpha, beta))
    });
    table.get(x.floor() as usize)
}

/// Compound draw: `p ~ Beta(α, β)`, then `Binomial(size, p)`.
#[inline(always)]
pub fn beta_binomial_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    size: f64,
    alpha: f64,
    beta: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if size.is_nan() || alpha.is_nan() || beta.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(size, alpha, beta, diag) {
        return f64::NAN;
    }
    let p = sample_beta(rng, alpha, beta);
    sample_binomial(rng, size, p)
}
