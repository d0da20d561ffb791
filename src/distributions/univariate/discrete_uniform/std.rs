// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::sample_uniform;
use crate::distributions::shared::scalar::{is_integer, is_valid_prob};

#[inline(always)]
fn valid_params(min: f64, max: f64, diag: &mut Diagnostics) -> bool {
    if min > max || min.is_infinite() || max.is_infinite() {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

/// `1/(max − min + 1)` on the integers of `[min, max]`.
#[inline(always)]
pub fn discrete_uniform_pmf_scalar(x: f64, min: f64, max: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    if !valid_params(min, max, diag) {
        return f64::NAN;
    }
    if !is_integer(x, diag) || x < min || x > max {
        return 0.0;
    }
    1.0 / (max - min + 1.0)
}

#[inline(always)]
pub fn discrete_uniform_cdf_scalar(x: f64, min: f64, max: f64, diag: &mut Diagnostics) -> f64 {
    if x.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    if !valid_params(min, max, diag) {
        return f64::NAN;
    }
    if x < min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    ((x.floor() - min + 1.0) / (max - min + 1.0)).clamp(0.0, 1.0)
}

#[inline(always)]
pub fn discrete_uniform_quantile_scalar(p: f64, min: f64, max: f64, diag: &mut Diagnostics) -> f64 {
    if p.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    if !valid_params(min, max, diag) {
        return f64::NAN;
    }
    if !is_valid_prob(p) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    if p == 0.0 {
        return min;
    }
    (p * (max - min + 1.0) + min - 1.0).ceil()
}

/// Uniform over the integers `ceil(min)..=floor(max)`. An empty integer range gives NaN.
#[inline(always)]
pub fn discrete_uniform_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if min.is_nan() || max.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(min, max, diag) {
        return f64::NAN;
    }
    let lo = min.ceil();
    let hi = max.floor();
    if lo > hi {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    (lo + (sample_uniform(rng) * (hi - lo + 1.0)).floor()).min(hi)
}
