// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants** - *Precomputed values for the distribution kernels*

/// The square root of 2: √2 ≈ 1.414213562373095.
///
/// Scales the standard normal argument into the complementary error function.
pub(crate) const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// ½·ln(2π), the log normalising constant of the standard normal density.
pub(crate) const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Acklam's inverse normal CDF approximation coefficients (numerator polynomial).
///
/// Used for the central region 0.02425 ≤ p ≤ 0.97575 of the rational approximation.
pub(crate) const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (denominator polynomial).
pub(crate) const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region numerator).
pub(crate) const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region denominator).
pub(crate) const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Break-point between Acklam's central and tail regions.
pub(crate) const P_LOW: f64 = 0.02425;

/// Relative fuzz applied to probabilities in discrete quantile searches, so that
/// `p` values produced by a CDF round-trip back onto their own support point.
pub(crate) const QUANTILE_FUZZ: f64 = 1.0 - 64.0 * f64::EPSILON;
