// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::config::MAX_TABLE_INDEX;
use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::{sample_gamma, sample_poisson};
use crate::distributions::shared::scalar::{is_integer, ln_factorial, ln_gamma};
use crate::distributions::shared::table::{CdfMemo, CdfTable};

#[inline(always)]
fn valid_params(alpha: f64, beta: f64, diag: &mut Diagnostics) -> bool {
    if alpha <= 0.0 || beta <= 0.0 {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// ln f(x) = lΓ(α + x) − ln x! − lΓ(α) + x·ln p + α·ln(1 − p), with `p = β/(1 + β)`.
#[inline(always)]
pub fn gamma_poisson_logpmf_scalar(x: f64, alpha: f64, beta: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if x < 0.0 || x.is_infinite() || !is_integer(x, diag) {
        return f64::NEG_INFINITY;
    }
    let p = beta / (1.0 + beta);
    ln_gamma(alpha + x) - (ln_factorial(x) + ln_gamma(alpha)) + x * p.ln() + alpha * (-p).ln_1p()
}

/// Cumulative table for `(α, β)` out to `extent`.
///
/// The log-mass is carried by recurrence: `lΓ(j + α) − lΓ(α)` grows by
/// `ln(j − 1 + α)`, `ln j!` by `ln j` and `j·ln p` by `ln p`. The build settles
/// once past the mode `⌊(α − 1)·β⌋`.
fn build_table(extent: usize, alpha: f64, beta: f64) -> CdfTable {
    let p = beta / (1.0 + beta);
    let lp = p.ln();
    let qa = alpha * (-p).ln_1p();
    let mode = if alpha > 1.0 {
        ((alpha - 1.0) * beta).floor().min(MAX_TABLE_INDEX) as usize
    } else {
        0
    };

    let mut gax = 0.0_f64;
    let mut xf = 0.0_f64;
    let mut px = 0.0_f64;
    CdfTable::build(extent, Some(mode), |j| {
        if j > 0 {
            let dj = j as f64;
            gax += (dj + alpha - 1.0).ln();
            xf += dj.ln();
            px += lp;
        }
        gax - xf + px + qa
    })
}

/// Lower-tail CDF read from the call's table for `(α, β)`. Non-integer points are floored.
#[inline(always)]
pub fn gamma_poisson_cdf_scalar(
    x: f64,
    alpha: f64,
    beta: f64,
    top: f64,
    memo: &mut CdfMemo<2>,
    diag: &mut Diagnostics,
) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x > MAX_TABLE_INDEX {
        diag.raise(Warning::IntegerCoercion);
        return f64::NAN;
    }
    let extent = top.min(MAX_TABLE_INDEX).max(0.0).floor() as usize;
    let table = memo.get_or_build([alpha, beta], || build_table(extent, alpha, beta));
    table.get(x.floor() as usize)
}

/// Compound draw: `λ ~ Gamma(α, scale β)`, then `Poisson(λ)`.
#[inline(always)]
pub fn gamma_poisson_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    alpha: f64,
    beta: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if alpha.is_nan() || beta.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    let lambda = sample_gamma(rng, alpha, beta);
    sample_poisson(rng, lambda)
}
