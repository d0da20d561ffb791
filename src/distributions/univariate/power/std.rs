// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::sample_uniform;
use crate::distributions::shared::scalar::is_valid_prob;

#[inline(always)]
fn valid_params(alpha: f64, beta: f64, diag: &mut Diagnostics) -> bool {
    if alpha <= 0.0 || beta <= 0.0 {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// ln f(x) = ln β + (β − 1)·ln x − β·ln α on 0 < x < α.
#[inline(always)]
pub fn power_logpdf_scalar(x: f64, alpha: f64, beta: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if x <= 0.0 || x >= alpha {
        return f64::NEG_INFINITY;
    }
    beta.ln() + (beta - 1.0) * x.ln() - beta * alpha.ln()
}

/// F(x) = (x/α)^β.
#[inline(always)]
pub fn power_cdf_scalar(x: f64, alpha: f64, beta: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= alpha {
        return 1.0;
    }
    (beta * (x / alpha).ln()).exp()
}

/// F⁻¹(p) = α·p^(1/β).
#[inline(always)]
pub fn power_quantile_scalar(p: f64, alpha: f64, beta: f64, diag: &mut Diagnostics) -> f64 {
    if p.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if !is_valid_prob(p) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    alpha * p.powf(1.0 / beta)
}

/// One draw by inverse transform.
#[inline(always)]
pub fn power_sample_scalar<R: Rng + ?Sized>(
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
    alpha * sample_uniform(rng).powf(1.0 / beta)
}
