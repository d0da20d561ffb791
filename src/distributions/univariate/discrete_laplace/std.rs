// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::sample_geometric;
use crate::distributions::shared::scalar::is_integer;

/// `p` must lie strictly inside `(0, 1)`.
#[inline(always)]
fn valid_params(p: f64, diag: &mut Diagnostics) -> bool {
    if p <= 0.0 || p >= 1.0 {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

#[inline(always)]
pub fn discrete_laplace_pmf_scalar(x: f64, p: f64, mu: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || p.is_nan() || mu.is_nan() {
        return f64::NAN;
    }
    if !valid_params(p, diag) {
        return f64::NAN;
    }
    if !is_integer(x, diag) || x.is_infinite() {
        return 0.0;
    }
    (1.0 - p) / (1.0 + p) * p.powf((x - mu).abs())
}

#[inline(always)]
pub fn discrete_laplace_cdf_scalar(x: f64, p: f64, mu: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || p.is_nan() || mu.is_nan() {
        return f64::NAN;
    }
    if !valid_params(p, diag) {
        return f64::NAN;
    }
    let k = (x - mu).floor();
    if x < mu {
        p.powf(-k) / (1.0 + p)
    } else {
        1.0 - p.powf(k + 1.0) / (1.0 + p)
    }
}

/// Difference of two geometric counts with success probability `1 − p`, shifted by `μ`.
#[inline(always)]
pub fn discrete_laplace_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    p: f64,
    mu: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if p.is_nan() || mu.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(p, diag) {
        return f64::NAN;
    }
    let q = 1.0 - p;
    let u = sample_geometric(rng, q);
    let v = sample_geometric(rng, q);
    u - v + mu
}
