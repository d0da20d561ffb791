// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::sample_standard_normal;
use crate::distributions::shared::scalar::{
    is_valid_prob, normal_cdf_scalar, normal_ln_pdf_scalar, normal_quantile_scalar,
};

#[inline(always)]
fn valid_params(alpha: f64, beta: f64, diag: &mut Diagnostics) -> bool {
    if alpha <= 0.0 || beta <= 0.0 {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// Maps a standard normal score to the fatigue-life scale: `β·(w + √(w² + 1))² + μ`
/// with `w = α·z/2`.
#[inline(always)]
fn from_normal_score(z: f64, alpha: f64, beta: f64, mu: f64) -> f64 {
    let w = 0.5 * alpha * z;
    let r = w + (w * w + 1.0).sqrt();
    r * r * beta + mu
}

/// f(x) = (√(z/β) + √(β/z))/(2αz)·φ((√(z/β) − √(β/z))/α) with z = x − μ > 0.
#[inline(always)]
pub fn fatigue_life_logpdf_scalar(
    x: f64,
    alpha: f64,
    beta: f64,
    mu: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() || mu.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if x <= mu || x.is_infinite() {
        return f64::NEG_INFINITY;
    }
    let z = x - mu;
    let zb = (z / beta).sqrt();
    let bz = (beta / z).sqrt();
    (zb + bz).ln() - (2.0 * alpha * z).ln() + normal_ln_pdf_scalar((zb - bz) / alpha)
}

/// F(x) = Φ((√(z/β) − √(β/z))/α) with z = x − μ.
#[inline(always)]
pub fn fatigue_life_cdf_scalar(
    x: f64,
    alpha: f64,
    beta: f64,
    mu: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() || mu.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if x <= mu {
        return 0.0;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    let z = x - mu;
    let zb = (z / beta).sqrt();
    let bz = (beta / z).sqrt();
    normal_cdf_scalar((zb - bz) / alpha)
}

/// F⁻¹(p) = μ + β·(w + √(w² + 1))² with w = α·Φ⁻¹(p)/2.
#[inline(always)]
pub fn fatigue_life_quantile_scalar(
    p: f64,
    alpha: f64,
    beta: f64,
    mu: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if p.is_nan() || alpha.is_nan() || beta.is_nan() || mu.is_nan() {
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    if !is_valid_prob(p) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    if p == 0.0 {
        return mu;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    from_normal_score(normal_quantile_scalar(p), alpha, beta, mu)
}

/// A standard normal draw pushed through the quantile map.
#[inline(always)]
pub fn fatigue_life_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    alpha: f64,
    beta: f64,
    mu: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if alpha.is_nan() || beta.is_nan() || mu.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(alpha, beta, diag) {
        return f64::NAN;
    }
    from_normal_score(sample_standard_normal(rng), alpha, beta, mu)
}
