// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Pareto Distribution
//!
//! Shape `a > 0`, scale `b > 0`, support `x ≥ b`:
//! ```text
//! f(x)    = a·b^a / x^(a+1)
//! F(x)    = 1 − (b/x)^a
//! F⁻¹(p)  = b·(1 − p)^(−1/a)
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

/// Pareto PDF, recycled over `x`, `a` and `b`.
#[inline(always)]
pub fn pareto_pdf(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "pareto_pdf",
        [x, a, b],
        Scale::Log,
        log_prob,
        null_mask,
        null_count,
        |[x, a, b], d| std::pareto_logpdf_scalar(x, a, b, d),
    )
}

/// Pareto CDF.
#[inline(always)]
pub fn pareto_cdf(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    cdf_kernel_f64_std(
        "pareto_cdf",
        [x, a, b],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
        |[x, a, b], d| std::pareto_cdf_scalar(x, a, b, d),
    )
}

/// Pareto quantile.
#[inline(always)]
pub fn pareto_quantile(
    p: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    quantile_kernel_f64_std(
        "pareto_quantile",
        [p, a, b],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        |[p, a, b], d| std::pareto_quantile_scalar(p, a, b, d),
    )
}

/// `n` Pareto draws.
#[inline(always)]
pub fn pareto_sample<R: Rng + ?Sized>(
    n: usize,
    a: &[f64],
    b: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std("pareto_sample", n, [a, b], rng, |[a, b], rng, d| {
        std::pareto_sample_scalar(rng, a, b, d)
    })
}

#[cfg(test)]
mod pareto_tests {
    use super::*;
    use crate::distributions::shared::diagnostics::Warning;
    use crate::distributions::univariate::common::{assert_close, dense_data, single_null_mask};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pdf_values() {
        // f(4; a=2, b=3) = 2·9/64
        let out = dense_data(pareto_pdf(&[2.0, 3.0, 4.0], &[2.0], &[3.0], false, None, None).unwrap());
        assert_eq!(out[0], 0.0);
        assert_close(out[1], 2.0 / 3.0, 1e-15);
        assert_close(out[2], 0.28125, 1e-15);
    }

    #[test]
    fn upper_tail_at_six() {
        let out = pareto_cdf(&[6.0], &[2.0], &[3.0], false, false, None, None).unwrap();
        assert_close(out[0], 0.25, 1e-15);
    }

    #[test]
    fn cdf_boundaries() {
        let out = pareto_cdf(&[1.0, 3.0, f64::INFINITY], &[2.0], &[3.0], true, false, None, None).unwrap();
        assert_eq!(&out[..], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn log_density_matches_density() {
        let xs = [2.0, 3.5, 10.0];
        let lin = pareto_pdf(&xs, &[1.5], &[3.0], false, None, None).unwrap();
        let log = pareto_pdf(&xs, &[1.5], &[3.0], true, None, None).unwrap();
        assert_eq!(log[0], f64::NEG_INFINITY);
        for i in 1..3 {
            assert_close(log[i], lin[i].ln(), 1e-14);
        }
    }

    #[test]
    fn quantile_round_trip() {
        let ps = [0.01, 0.25, 0.5, 0.9, 0.999];
        let q = pareto_quantile(&ps, &[2.5], &[1.5], true, false, None, None).unwrap();
        let back = pareto_cdf(&q, &[2.5], &[1.5], true, false, None, None).unwrap();
        for i in 0..ps.len() {
            assert_close(back[i], ps[i], 1e-12);
        }
        let edges = pareto_quantile(&[0.0, 1.0], &[2.0], &[3.0], true, false, None, None).unwrap();
        assert_eq!(&edges[..], &[3.0, f64::INFINITY]);
    }

    #[test]
    fn quantile_log_upper() {
        // upper-tail log p = ln 0.25 → lower p = 0.75 → 3·0.25^(−1/2) = 6
        let q = pareto_quantile(&[0.25_f64.ln()], &[2.0], &[3.0], false, true, None, None).unwrap();
        assert_close(q[0], 6.0, 1e-12);
    }

    #[test]
    fn invalid_params_warn_once() {
        let out = pareto_pdf(&[1.0, 2.0, 3.0], &[-1.0], &[1.0], false, None, None).unwrap();
        assert!(out.iter().all(|v| v.is_nan()));
        assert!(out.has_warning(Warning::NaNsProduced));
        let q = pareto_quantile(&[1.5], &[1.0], &[1.0], true, false, None, None).unwrap();
        assert!(q[0].is_nan());
        assert!(q.has_warning(Warning::NaNsProduced));
    }

    #[test]
    fn nan_propagates_silently() {
        let out = pareto_cdf(&[f64::NAN, 5.0], &[2.0], &[1.0], true, false, None, None).unwrap();
        assert!(out[0].is_nan());
        assert!(out.diagnostics().is_empty());
    }

    #[test]
    fn recycles_parameters() {
        let out = pareto_cdf(&[4.0], &[1.0, 2.0, 3.0], &[2.0], true, false, None, None).unwrap();
        assert_eq!(out.len(), 3);
        for (i, a) in [1.0_f64, 2.0, 3.0].iter().enumerate() {
            assert_close(out[i], 1.0 - 0.5_f64.powf(*a), 1e-15);
        }
    }

    #[test]
    fn mask_propagation() {
        let mask = single_null_mask(3, 1);
        let out = pareto_pdf(&[4.0, 5.0, 6.0], &[2.0], &[3.0], false, Some(&mask), Some(1)).unwrap();
        assert!(out[1].is_nan());
        assert!(!out.data.null_mask.as_ref().unwrap().get(1));
        assert!(out.data.null_mask.as_ref().unwrap().get(2));
    }

    #[test]
    fn empty_input() {
        let out = pareto_pdf(&[], &[2.0], &[3.0], false, None, None).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn draws_lie_in_support() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = pareto_sample(500, &[3.0], &[2.0], &mut rng).unwrap();
        assert_eq!(out.len(), 500);
        assert!(out.iter().all(|&v| v >= 2.0));
        let bad = pareto_sample(2, &[0.0], &[2.0], &mut rng).unwrap();
        assert!(bad.iter().all(|v| v.is_nan()));
        assert!(bad.has_warning(Warning::NaNsProduced));
    }
}
