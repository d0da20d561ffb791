// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Base Samplers - Primitive draws the compound samplers are built from
//!
//! Every function is generic over the caller's `Rng`, so a seeded generator gives
//! reproducible draws. Parameters are validated by the calling kernel; a primitive
//! that still cannot draw returns `NaN`.

use num_traits::ToPrimitive;
use rand::Rng;
use rand_distr::{Beta, Binomial, Distribution, Geometric, Poisson};
use std::f64::consts::PI;

/// Uniform draw on the open interval (0, 1).
#[inline]
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.random::<f64>();
        if u > 0.0 {
            return u;
        }
    }
}

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // U1 ∈ (0,1], U2 ∈ [0,1)
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.random::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    r * (2.0 * PI * u2).cos()
}

/// N(mean, sd²).
#[inline]
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    mean + sd * sample_standard_normal(rng)
}

/// Generates a single sample from the Gamma distribution using the Marsaglia–Tsang algorithm.
/// Preconditions: shape > 0, scale > 0, both finite.
#[inline]
pub fn sample_gamma<R: Rng + ?Sized>(rng: &mut R, shape: f64, scale: f64) -> f64 {
    if !(shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0) {
        return f64::NAN;
    }

    // Handle 0 < shape < 1 by boosting to shape+1, then apply a power-law correction.
    if shape < 1.0 {
        let u = sample_uniform(rng);
        return sample_gamma(rng, shape + 1.0, scale) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let x = sample_standard_normal(rng);
        let one_plus_cx = 1.0 + c * x;
        if one_plus_cx <= 0.0 {
            continue;
        }
        let v = one_plus_cx * one_plus_cx * one_plus_cx;
        let u: f64 = rng.random::<f64>();

        // Squeeze step
        if u < 1.0 - 0.0331 * (x * x) * (x * x) {
            return d * v * scale;
        }
        // Log acceptance step
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v * scale;
        }
    }
}

/// Beta(a, b).
#[inline]
pub fn sample_beta<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    match Beta::new(a, b) {
        Ok(dist) => dist.sample(rng),
        Err(_) => f64::NAN,
    }
}

/// Bernoulli(p) as 0.0 / 1.0.
#[inline]
pub fn sample_bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    let u: f64 = rng.random::<f64>();
    if u < p { 1.0 } else { 0.0 }
}

/// Binomial(n, p) for a non-negative integral `n` held in an `f64`.
#[inline]
pub fn sample_binomial<R: Rng + ?Sized>(rng: &mut R, n: f64, p: f64) -> f64 {
    let Some(trials) = n.to_u64() else {
        return f64::NAN;
    };
    match Binomial::new(trials, p) {
        Ok(dist) => dist.sample(rng) as f64,
        Err(_) => f64::NAN,
    }
}

/// Poisson(λ). A zero rate always draws 0.
#[inline]
pub fn sample_poisson<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> f64 {
    if lambda == 0.0 {
        return 0.0;
    }
    match Poisson::new(lambda) {
        Ok(dist) => dist.sample(rng),
        Err(_) => f64::NAN,
    }
}

/// Number of failures before the first success, success probability `p`.
#[inline]
pub fn sample_geometric<R: Rng + ?Sized>(rng: &mut R, p: f64) -> f64 {
    match Geometric::new(p) {
        Ok(dist) => dist.sample(rng) as f64,
        Err(_) => f64::NAN,
    }
}
