// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::sample_uniform;
use crate::distributions::shared::scalar::is_valid_prob;

#[inline(always)]
fn valid_params(sigma: f64, diag: &mut Diagnostics) -> bool {
    if sigma <= 0.0 {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// Standardised excess `z = (x − μ)/σ` and whether it lies inside the support.
///
/// Support is `z ≥ 0`, bounded above by `−1/ξ` when `ξ < 0`.
#[inline(always)]
fn standardise(x: f64, mu: f64, sigma: f64, xi: f64) -> (f64, bool) {
    let z = (x - mu) / sigma;
    let inside = z >= 0.0 && (xi >= 0.0 || z <= -1.0 / xi);
    (z, inside)
}

/// ln f(x) = −ln σ − (1/ξ + 1)·ln(1 + ξz), or −ln σ − z when ξ = 0.
#[inline(always)]
pub fn gpd_logpdf_scalar(x: f64, mu: f64, sigma: f64, xi: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || mu.is_nan() || sigma.is_nan() || xi.is_nan() {
        return f64::NAN;
    }
    if !valid_params(sigma, diag) {
        return f64::NAN;
    }
    let (z, inside) = standardise(x, mu, sigma, xi);
    if !inside || z.is_infinite() {
        return f64::NEG_INFINITY;
    }
    if xi == 0.0 {
        return -sigma.ln() - z;
    }
    let c = 1.0 / xi + 1.0;
    if c == 0.0 {
        // ξ = −1: flat on [μ, μ + σ], including the closed upper end
        return -sigma.ln();
    }
    -sigma.ln() - c * (xi * z).ln_1p()
}

/// F(x) = 1 − (1 + ξz)^(−1/ξ), or 1 − e^(−z) when ξ = 0.
#[inline(always)]
pub fn gpd_cdf_scalar(x: f64, mu: f64, sigma: f64, xi: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || mu.is_nan() || sigma.is_nan() || xi.is_nan() {
        return f64::NAN;
    }
    if !valid_params(sigma, diag) {
        return f64::NAN;
    }
    let z = (x - mu) / sigma;
    if z <= 0.0 {
        return 0.0;
    }
    if z == f64::INFINITY || (xi < 0.0 && z >= -1.0 / xi) {
        return 1.0;
    }
    if xi == 0.0 {
        -(-z).exp_m1()
    } else {
        -(-(xi * z).ln_1p() / xi).exp_m1()
    }
}

/// F⁻¹(p) = μ + σ·((1 − p)^(−ξ) − 1)/ξ, or μ − σ·ln(1 − p) when ξ = 0.
#[inline(always)]
pub fn gpd_quantile_scalar(p: f64, mu: f64, sigma: f64, xi: f64, diag: &mut Diagnostics) -> f64 {
    if p.is_nan() || mu.is_nan() || sigma.is_nan() || xi.is_nan() {
        return f64::NAN;
    }
    if !valid_params(sigma, diag) {
        return f64::NAN;
    }
    if !is_valid_prob(p) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    if p == 1.0 {
        return if xi >= 0.0 { f64::INFINITY } else { mu - sigma / xi };
    }
    let l = (-p).ln_1p();
    if xi == 0.0 {
        mu - sigma * l
    } else {
        mu + sigma * (-xi * l).exp_m1() / xi
    }
}

/// One draw by inverse transform.
#[inline(always)]
pub fn gpd_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    mu: f64,
    sigma: f64,
    xi: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if mu.is_nan() || sigma.is_nan() || xi.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(sigma, diag) {
        return f64::NAN;
    }
    gpd_quantile_scalar(sample_uniform(rng), mu, sigma, xi, diag)
}
