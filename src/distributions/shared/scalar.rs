// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Distribution Utilities Module** - *Special functions and shared numeric helpers*
//!
//! Scalar building blocks used by every distribution kernel: log-gamma and friends,
//! the regularised incomplete beta, binomial mass/CDF/quantile for real-valued sizes,
//! standard normal helpers, and the tolerance and integrality checks used in
//! parameter validation.
//!
//! The gamma and error functions come from `libm`; everything layered on top of them
//! lives here.

use num_traits::Float;

use crate::config::numeric_config;
use crate::distributions::shared::constants::*;
use crate::distributions::shared::diagnostics::Diagnostics;

/// Natural log of the absolute value of the Gamma function, ln|Γ(x)|.
///
/// Poles at non-positive integers return **+∞**. Propagates NaN.
#[inline(always)]
pub fn ln_gamma(x: f64) -> f64 {
    libm::lgamma_r(x).0
}

/// ln B(a, b) = ln Γ(a) + ln Γ(b) − ln Γ(a + b).
#[inline(always)]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// ln C(n, k) for real `n ≥ 0` and `k`; `-∞` outside `0 ≤ k ≤ n`.
#[inline(always)]
pub fn ln_choose(n: f64, k: f64) -> f64 {
    if k < 0.0 || k > n {
        return f64::NEG_INFINITY;
    }
    ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0)
}

/// C(n, k). Rounded to the nearest integer when both arguments are integral.
#[inline]
pub fn choose(n: f64, k: f64) -> f64 {
    let v = ln_choose(n, k).exp();
    if n.fract() == 0.0 && k.fract() == 0.0 {
        v.round()
    } else {
        v
    }
}

/// x! = Γ(x + 1).
#[inline(always)]
pub fn factorial(x: f64) -> f64 {
    libm::tgamma(x + 1.0)
}

/// ln x! = ln Γ(x + 1).
#[inline(always)]
pub fn ln_factorial(x: f64) -> f64 {
    ln_gamma(x + 1.0)
}

/// `|x − y| ≤ min_diff_eps`, the tolerance used for probability-sum checks.
#[inline(always)]
pub fn tol_equal(x: f64, y: f64) -> bool {
    (x - y).abs() <= numeric_config().min_diff_eps
}

/// Integrality check with a diagnostic side effect.
///
/// Returns `false` and records the point in `diag` when `x` has a fractional part.
/// Infinite values count as integral; callers handle them as support boundaries.
#[inline]
pub fn is_integer(x: f64, diag: &mut Diagnostics) -> bool {
    if x.floor() != x {
        diag.non_integer(x);
        return false;
    }
    true
}

/// `p ∈ [0, 1]`. NaN is not a valid probability.
#[inline(always)]
pub fn is_valid_prob(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// Largest finite element, or `-∞` when no element is finite.
pub fn finite_max<T: Float>(xs: &[T]) -> T {
    xs.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(T::neg_infinity(), |acc, v| if v > acc { v } else { acc })
}

/// Regularised incomplete beta I_x(a, b) by Lentz's continued fraction.
#[inline(always)]
pub fn incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if !(a.is_finite() && b.is_finite() && x.is_finite()) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if a == 0.0 {
        return 1.0;
    }
    if b == 0.0 {
        return 0.0;
    }

    // I_x(a,b) = 1 − I_{1−x}(b,a) converges faster on this side
    if x > (a + 1.0) / (a + b + 2.0) {
        return 1.0 - incomplete_beta(b, a, 1.0 - x);
    }

    let front = (a * x.ln() + b * (-x).ln_1p() - ln_beta(a, b)).exp() / a;

    const EPS: f64 = 1e-15;
    const FPMIN: f64 = 1e-300;
    const MAX_ITS: usize = 300;

    let mut c = 1.0;
    let mut d = 1.0 - (a + b) * x / (a + 1.0);
    if d.abs() < FPMIN {
        d = FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITS {
        let m = m as f64;
        let m2 = 2.0 * m;

        let aa = m * (b - m) * x / ((a + m2 - 1.0) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        let aa = -(a + m) * (a + b + m) * x / ((a + m2) * (a + m2 + 1.0));
        d = 1.0 + aa * d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    front * h
}

/// Binomial log-mass ln P(X = k) for `X ~ Bin(n, p)`.
///
/// `n` is a non-negative integral `f64` and `p ∈ [0, 1]`; callers validate both.
/// `k` outside `0..=n` or non-integral has log-mass `-∞`.
#[inline]
pub fn binomial_ln_pmf(k: f64, n: f64, p: f64) -> f64 {
    if k < 0.0 || k > n || k.fract() != 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 0.0 {
        return if k == 0.0 { 0.0 } else { f64::NEG_INFINITY };
    }
    if p == 1.0 {
        return if k == n { 0.0 } else { f64::NEG_INFINITY };
    }
    ln_choose(n, k) + k * p.ln() + (n - k) * (-p).ln_1p()
}

/// Binomial CDF P(X ≤ k) for `X ~ Bin(n, p)`, with `k` floored.
///
/// * k < 0  → 0
/// * k ≥ n  → 1
/// * p = 0  → 1 for k ≥ 0
/// * p = 1  → 0 for k < n
#[inline]
pub fn binomial_cdf_scalar(k: f64, n: f64, p: f64) -> f64 {
    let k = k.floor();
    if k < 0.0 {
        return 0.0;
    }
    if k >= n {
        return 1.0;
    }
    if p <= 0.0 {
        return 1.0;
    }
    if p >= 1.0 {
        return 0.0;
    }
    // P(X ≤ k) = I_{1−p}(n − k, k + 1)
    incomplete_beta(n - k, k + 1.0, 1.0 - p)
}

/// Smallest `k ∈ 0..=n` with P(X ≤ k) ≥ q for `X ~ Bin(n, p)`.
///
/// `q ∈ [0, 1]` is assumed; the comparison is fuzzed by a few ulps so that a
/// probability produced by [`binomial_cdf_scalar`] maps back onto its own point.
pub fn binomial_quantile_scalar(q: f64, n: f64, p: f64) -> f64 {
    if p == 0.0 || n == 0.0 {
        return 0.0;
    }
    if p == 1.0 || q >= 1.0 {
        return n;
    }
    let target = q * QUANTILE_FUZZ;
    if binomial_cdf_scalar(0.0, n, p) >= target {
        return 0.0;
    }
    // cdf(lo) < target ≤ cdf(hi)
    let (mut lo, mut hi) = (0.0_f64, n);
    while hi - lo > 1.0 {
        let mid = ((lo + hi) * 0.5).floor();
        if binomial_cdf_scalar(mid, n, p) >= target {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}

/// Standard normal density φ(z).
#[inline(always)]
pub fn normal_pdf_scalar(z: f64) -> f64 {
    normal_ln_pdf_scalar(z).exp()
}

/// ln φ(z).
#[inline(always)]
pub fn normal_ln_pdf_scalar(z: f64) -> f64 {
    -0.5 * z * z - HALF_LOG_TWO_PI
}

/// Standard normal CDF Φ(z), via `erfc` on whichever side keeps precision.
#[inline(always)]
pub fn normal_cdf_scalar(z: f64) -> f64 {
    if z < 0.0 {
        0.5 * libm::erfc(-z / SQRT_2)
    } else {
        1.0 - 0.5 * libm::erfc(z / SQRT_2)
    }
}

/// Acklam's rational approximation to Φ⁻¹(p) for p ∈ (0, 0.5].
#[inline(always)]
fn inv_std_normal_core(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p <= 0.5);

    if p > P_LOW {
        let r = p - 0.5;
        let s = r * r;
        let num = (((((A[0] * s + A[1]) * s + A[2]) * s + A[3]) * s + A[4]) * s + A[5]) * r;
        let den = ((((B[0] * s + B[1]) * s + B[2]) * s + B[3]) * s + B[4]) * s + 1.0;
        num / den
    } else {
        let r = (-2.0 * p.ln()).sqrt();
        let num = ((((C[0] * r + C[1]) * r + C[2]) * r + C[3]) * r + C[4]) * r + C[5];
        let den = (((D[0] * r + D[1]) * r + D[2]) * r + D[3]) * r + 1.0;
        num / den
    }
}

/// Standard normal quantile Φ⁻¹(q).
///
/// Acklam seed followed by one Halley step on Φ(z) − q.
/// `q = 0` → −∞, `q = 1` → +∞, outside `[0, 1]` → NaN.
pub fn normal_quantile_scalar(q: f64) -> f64 {
    if q.is_nan() || !(0.0..=1.0).contains(&q) {
        return f64::NAN;
    }
    if q == 0.0 {
        return f64::NEG_INFINITY;
    }
    if q == 1.0 {
        return f64::INFINITY;
    }
    if q == 0.5 {
        return 0.0;
    }

    let (p_left, sign) = if q < 0.5 { (q, -1.0) } else { (1.0 - q, 1.0) };
    let mut z = inv_std_normal_core(p_left);

    // Halley: f = Φ(z) − p, f' = φ(z), f'' = −z φ(z)
    let pdf = normal_pdf_scalar(z);
    if pdf > 0.0 {
        let u = (normal_cdf_scalar(z) - p_left) / pdf;
        z -= u * (1.0 + 0.5 * z * u);
    }

    sign * -z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "assert_close failed: {a} vs {b} (tol={tol})");
    }

    #[test]
    fn gamma_family() {
        assert_close(ln_gamma(1.0), 0.0, 1e-14);
        assert_close(ln_gamma(5.0), 3.1780538303479458, 1e-13);
        assert_close(ln_gamma(0.5), 0.5723649429247001, 1e-13);
        assert!(ln_gamma(0.0).is_infinite());
        assert_close(factorial(5.0), 120.0, 1e-10);
        assert_close(ln_factorial(5.0), 120.0_f64.ln(), 1e-13);
        assert_close(ln_beta(2.0, 3.0), (1.0_f64 / 12.0).ln(), 1e-13);
    }

    #[test]
    fn choose_values() {
        assert_eq!(choose(10.0, 3.0), 120.0);
        assert_eq!(choose(5.0, 0.0), 1.0);
        assert!(ln_choose(3.0, 4.0).is_infinite());
        assert_close(ln_choose(1000.0, 10.0), 53.927997037888275, 1e-9);
    }

    #[test]
    fn tolerance_and_integrality() {
        assert!(tol_equal(1.0, 1.0 + 1e-10));
        assert!(!tol_equal(1.0, 1.0 + 1e-6));
        let mut d = Diagnostics::new();
        assert!(is_integer(3.0, &mut d));
        assert!(d.is_empty());
        assert!(!is_integer(3.5, &mut d));
        assert_eq!(d.first_non_integer(), Some(3.5));
    }

    #[test]
    fn finite_helpers() {
        let xs = [1.0, f64::INFINITY, 7.0, f64::NAN, -3.0];
        assert_eq!(finite_max(&xs), 7.0);
        assert_eq!(finite_max(&[f64::INFINITY]), f64::NEG_INFINITY);
    }

    #[test]
    fn incomplete_beta_values() {
        // scipy.special.betainc(2.0, 2.0, 0.5) == 0.5
        assert_close(incomplete_beta(2.0, 2.0, 0.5), 0.5, 1e-14);
        // scipy.special.betainc(2.5, 1.5, 0.7) == 0.5843121477019746
        assert_close(incomplete_beta(2.5, 1.5, 0.7), 0.5843121477019746, 1e-12);
        let (a, b, x) = (2.7, 5.3, 0.4);
        assert_close(incomplete_beta(a, b, x) + incomplete_beta(b, a, 1.0 - x), 1.0, 1e-14);
    }

    #[test]
    fn binomial_helpers() {
        // dbinom(3, 10, 0.3) = 0.2668279320
        assert_close(binomial_ln_pmf(3.0, 10.0, 0.3).exp(), 0.266827932, 1e-9);
        // pbinom(3, 10, 0.3) = 0.6496107184
        assert_close(binomial_cdf_scalar(3.0, 10.0, 0.3), 0.6496107184, 1e-9);
        assert_close(binomial_cdf_scalar(3.7, 10.0, 0.3), 0.6496107184, 1e-9);
        assert_eq!(binomial_cdf_scalar(-1.0, 10.0, 0.3), 0.0);
        assert_eq!(binomial_cdf_scalar(10.0, 10.0, 0.3), 1.0);
        // qbinom(0.5, 10, 0.3) = 3
        assert_eq!(binomial_quantile_scalar(0.5, 10.0, 0.3), 3.0);
        assert_eq!(binomial_quantile_scalar(0.0, 10.0, 0.3), 0.0);
        assert_eq!(binomial_quantile_scalar(1.0, 10.0, 0.3), 10.0);
        for k in 0..=10 {
            let k = k as f64;
            let p = binomial_cdf_scalar(k, 10.0, 0.3);
            assert_eq!(binomial_quantile_scalar(p, 10.0, 0.3), k);
        }
    }

    #[test]
    fn normal_helpers() {
        assert_close(normal_cdf_scalar(0.0), 0.5, 1e-15);
        assert_close(normal_cdf_scalar(1.96), 0.9750021048517795, 1e-14);
        assert_close(normal_pdf_scalar(0.0), 0.3989422804014327, 1e-15);
        assert_close(normal_quantile_scalar(0.975), 1.959963984540054, 1e-12);
        assert_close(normal_quantile_scalar(1e-10), -6.361340902404056, 1e-9);
        assert_eq!(normal_quantile_scalar(0.0), f64::NEG_INFINITY);
        assert!(normal_quantile_scalar(1.5).is_nan());
    }
}
