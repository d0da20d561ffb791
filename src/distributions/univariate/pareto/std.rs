// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::sample_uniform;
use crate::distributions::shared::scalar::is_valid_prob;

/// `a > 0` and `b > 0`. Raises the warning otherwise.
#[inline(always)]
fn valid_params(a: f64, b: f64, diag: &mut Diagnostics) -> bool {
    if a <= 0.0 || b <= 0.0 {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// ln f(x) = ln a + a·ln b − (a + 1)·ln x for x ≥ b.
#[inline(always)]
pub fn pareto_logpdf_scalar(x: f64, a: f64, b: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if !valid_params(a, b, diag) {
        return f64::NAN;
    }
    if x < b || x.is_infinite() {
        return f64::NEG_INFINITY;
    }
    a.ln() + a * b.ln() - (a + 1.0) * x.ln()
}

/// F(x) = 1 − (b/x)^a for x ≥ b.
#[inline(always)]
pub fn pareto_cdf_scalar(x: f64, a: f64, b: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if !valid_params(a, b, diag) {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x < b {
        return 0.0;
    }
    -(a * (b / x).ln()).exp_m1()
}

/// F⁻¹(p) = b·(1 − p)^(−1/a).
#[inline(always)]
pub fn pareto_quantile_scalar(p: f64, a: f64, b: f64, diag: &mut Diagnostics) -> f64 {
    if p.is_nan() || a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if !valid_params(a, b, diag) || !is_valid_prob(p) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    (b.ln() - (-p).ln_1p() / a).exp()
}

/// One draw by inverse transform.
#[inline(always)]
pub fn pareto_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    a: f64,
    b: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if a.is_nan() || b.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(a, b, diag) {
        return f64::NAN;
    }
    let u = sample_uniform(rng);
    pareto_quantile_scalar(u, a, b, diag)
}
