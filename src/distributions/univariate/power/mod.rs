// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Power Distribution
//!
//! Scale `α > 0`, shape `β > 0`, support `0 < x < α`:
//! ```text
//! f(x)    = β·x^(β−1) / α^β
//! F(x)    = x^β / α^β
//! F⁻¹(p)  = α·p^(1/β)
//! ```

mod std;

use minarrow::Bitmask;
use rand::Rng;

use crate::distributions::shared::diagnostics::Evaluated;
use crate::distributions::univariate::common::std::{
    Scale, cdf_kernel_f64_std, density_kernel_f64_std, quantile_kernel_f64_std,
    sample_kernel_f64_std,
};
use crate::errors::KernelError;
use crate::traits::interrupt::NeverInterrupt;

/// Power PDF.
#[inline(always)]
pub fn power_pdf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "power_pdf",
        [x, alpha, beta],
        Scale::Log,
        log_prob,
        null_mask,
        null_count,
        |[x, a, b], d| std::power_logpdf_scalar(x, a, b, d),
    )
}

/// Power CDF.
#[inline(always)]
pub fn power_cdf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    cdf_kernel_f64_std(
        "power_cdf",
        [x, alpha, beta],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
        |[x, a, b], d| std::power_cdf_scalar(x, a, b, d),
    )
}

/// Power quantile.
#[inline(always)]
pub fn power_quantile(
    p: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    quantile_kernel_f64_std(
        "power_quantile",
        [p, alpha, beta],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        |[p, a, b], d| std::power_quantile_scalar(p, a, b, d),
    )
}

/// `n` power draws. Empty parameter arrays give `n` NaNs with an "NAs produced" warning.
#[inline(always)]
pub fn power_sample<R: Rng + ?Sized>(
    n: usize,
    alpha: &[f64],
    beta: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std("power_sample", n, [alpha, beta], rng, |[a, b], rng, d| {
        std::power_sample_scalar(rng, a, b, d)
    })
}

#[cfg(test)]
mod power_tests {
    use super::*;
    use crate::distributions::shared::diagnostics::Warning;
    use crate::distributions::univariate::common::assert_close;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pdf_and_cdf_values() {
        // α = 2, β = 3: f(1) = 3/8, F(1) = 1/8
        let f = power_pdf(&[-1.0, 1.0, 2.0], &[2.0], &[3.0], false, None, None).unwrap();
        assert_eq!(f[0], 0.0);
        assert_close(f[1], 0.375, 1e-15);
        assert_eq!(f[2], 0.0);
        let c = power_cdf(&[-1.0, 1.0, 2.0, 5.0], &[2.0], &[3.0], true, false, None, None).unwrap();
        assert_eq!(c[0], 0.0);
        assert_close(c[1], 0.125, 1e-15);
        assert_eq!(c[2], 1.0);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn tail_flip_and_log() {
        let up = power_cdf(&[1.0], &[2.0], &[3.0], false, false, None, None).unwrap();
        assert_close(up[0], 0.875, 1e-15);
        let logup = power_cdf(&[1.0], &[2.0], &[3.0], false, true, None, None).unwrap();
        assert_close(logup[0], 0.875_f64.ln(), 1e-15);
    }

    #[test]
    fn quantile_inverts_cdf() {
        let ps = [0.0, 0.1, 0.5, 0.9, 1.0];
        let q = power_quantile(&ps, &[4.0], &[0.7], true, false, None, None).unwrap();
        assert_eq!(q[0], 0.0);
        assert_close(q[4], 4.0, 1e-15);
        let back = power_cdf(&q, &[4.0], &[0.7], true, false, None, None).unwrap();
        for i in 1..4 {
            assert_close(back[i], ps[i], 1e-13);
        }
    }

    #[test]
    fn bad_probability_warns() {
        let q = power_quantile(&[-0.1, 0.5], &[1.0], &[1.0], true, false, None, None).unwrap();
        assert!(q[0].is_nan());
        assert_close(q[1], 0.5, 1e-15);
        assert!(q.has_warning(Warning::NaNsProduced));
    }

    #[test]
    fn invalid_shape_is_nan() {
        let f = power_pdf(&[0.5], &[1.0], &[0.0], false, None, None).unwrap();
        assert!(f[0].is_nan());
        assert!(f.has_warning(Warning::NaNsProduced));
    }

    #[test]
    fn empty_params_produce_na_draws() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = power_sample(4, &[], &[1.0], &mut rng).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|v| v.is_nan()));
        assert!(out.has_warning(Warning::NAsProduced));
    }

    #[test]
    fn draws_lie_in_support() {
        let mut rng = StdRng::seed_from_u64(5);
        let out = power_sample(1000, &[3.0, 1.0], &[2.0], &mut rng).unwrap();
        for (i, v) in out.iter().enumerate() {
            let alpha = if i % 2 == 0 { 3.0 } else { 1.0 };
            assert!(*v > 0.0 && *v < alpha);
        }
    }
}
