// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Warning};
use crate::distributions::shared::sampler::{sample_bernoulli, sample_binomial};
use crate::distributions::shared::scalar::{
    binomial_cdf_scalar, binomial_ln_pmf, binomial_quantile_scalar, is_integer, is_valid_prob,
};

/// `size` a non-negative integer, `prob` and `pi` in `[0, 1]`.
#[inline(always)]
fn valid_params(size: f64, prob: f64, pi: f64, diag: &mut Diagnostics) -> bool {
    if size < 0.0 || size.fract() != 0.0 || !is_valid_prob(prob) || !is_valid_prob(pi) {
        diag.raise(Warning::NaNsProduced);
        return false;
    }
    true
}

#[inline(always)]
fn any_nan(vals: [f64; 4]) -> bool {
    vals.iter().any(|v| v.is_nan())
}

/// P(0) = π + (1 − π)·(1 − p)^n, P(x) = (1 − π)·C(n, x)·p^x·(1 − p)^(n−x) for x ≥ 1.
#[inline(always)]
pub fn zib_pmf_scalar(x: f64, size: f64, prob: f64, pi: f64, diag: &mut Diagnostics) -> f64 {
    if any_nan([x, size, prob, pi]) {
        return f64::NAN;
    }
    if !valid_params(size, prob, pi, diag) {
        return f64::NAN;
    }
    if x < 0.0 || x.is_infinite() || !is_integer(x, diag) {
        return 0.0;
    }
    if x == 0.0 {
        return pi + (1.0 - pi) * (1.0 - prob).powf(size);
    }
    (1.0 - pi) * binomial_ln_pmf(x, size, prob).exp()
}

/// F(x) = π + (1 − π)·B(x; n, p).
#[inline(always)]
pub fn zib_cdf_scalar(x: f64, size: f64, prob: f64, pi: f64, diag: &mut Diagnostics) -> f64 {
    if any_nan([x, size, prob, pi]) {
        return f64::NAN;
    }
    if !valid_params(size, prob, pi, diag) {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    if x.is_infinite() {
        return 1.0;
    }
    pi + (1.0 - pi) * binomial_cdf_scalar(x, size, prob)
}

/// Probabilities up to `pi` land on the inflated zero; the rest are rescaled onto
/// the binomial part.
#[inline(always)]
pub fn zib_quantile_scalar(p: f64, size: f64, prob: f64, pi: f64, diag: &mut Diagnostics) -> f64 {
    if any_nan([p, size, prob, pi]) {
        return f64::NAN;
    }
    if !valid_params(size, prob, pi, diag) {
        return f64::NAN;
    }
    if !is_valid_prob(p) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    if p <= pi {
        return 0.0;
    }
    binomial_quantile_scalar((p - pi) / (1.0 - pi), size, prob)
}

/// Zero with probability π, otherwise a binomial draw.
#[inline(always)]
pub fn zib_sample_scalar<R: Rng + ?Sized>(
    rng: &mut R,
    size: f64,
    prob: f64,
    pi: f64,
    diag: &mut Diagnostics,
) -> f64 {
    if size.is_nan() || prob.is_nan() || pi.is_nan() {
        diag.raise(Warning::NAsProduced);
        return f64::NAN;
    }
    if !valid_params(size, prob, pi, diag) {
        return f64::NAN;
    }
    if sample_bernoulli(rng, pi) == 1.0 {
        return 0.0;
    }
    sample_binomial(rng, size, prob)
}
