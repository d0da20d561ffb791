// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Beta-Binomial Distribution
//!
//! A binomial count whose success probability is itself `Beta(α, β)`:
//! ```text
//! P(X = k) = C(n, k)·B(k + α, n − k + β) / B(α, β),   k = 0..=n
//! ```
//!
//! There is no closed-form CDF. Each call sums the mass once per distinct
//! `(n, α, β)` into a cumulative table and answers every query from it. No
//! quantile is provided.

mod std;

use minarrow::Bitmask;
use rand::Rng;

use crate::distributions::shared::diagnostics::Evaluated;
use crate::distributions::shared::scalar::finite_max;
use crate::distributions::shared::table::CdfMemo;
use crate::distributions::univariate::common::std::{
    Scale, cdf_kernel_f64_std, density_kernel_f64_std, sample_kernel_f64_std,
};
use crate::errors::KernelError;
use crate::traits::interrupt::{Interrupt, NeverInterrupt};

/// Beta-binomial PMF.
#[inline(always)]
pub fn beta_binomial_pmf(
    x: &[f64],
    size: &[f64],
    alpha: &[f64],
    beta: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "beta_binomial_pmf",
        [x, size, alpha, beta],
        Scale::Log,
        log_prob,
        null_mask,
        null_count,
        |[x, n, a, b], d| std::beta_binomial_logpmf_scalar(x, n, a, b, d),
    )
}

/// Beta-binomial CDF. Non-integer points are floored.
#[inline(always)]
pub fn beta_binomial_cdf(
    x: &[f64],
    size: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    beta_binomial_cdf_interruptible(
        x,
        size,
        alpha,
        beta,
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
    )
}

/// [`beta_binomial_cdf`] that polls `interrupt` every `interrupt_interval` rows and
/// returns [`KernelError::Interrupted`] when it fires.
#[inline(always)]
pub fn beta_binomial_cdf_interruptible(
    x: &[f64],
    size: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    interrupt: &dyn Interrupt,
) -> Result<Evaluated, KernelError> {
    let top = finite_max(x);
    let mut memo = CdfMemo::new();
    cdf_kernel_f64_std(
        "beta_binomial_cdf",
        [x, size, alpha, beta],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        interrupt,
        |[x, n, a, b], d| std::beta_binomial_cdf_scalar(x, n, a, b, top, &mut memo, d),
    )
}

/// `n` beta-binomial draws.
#[inline(always)]
pub fn beta_binomial_sample<R: Rng + ?Sized>(
    n: usize,
    size: &[f64],
    alpha: &[f64],
    beta: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std(
        "beta_binomial_sample",
        n,
        [size, alpha, beta],
        rng,
        |[s, a, b], rng, d| std::beta_binomial_sample_scalar(rng, s, a, b, d),
    )
}

#[cfg(test)]
mod beta_binomial_tests {
    use super::*;
    use crate::distributions::shared::diagnostics::Warning;
    use crate::distributions::shared::scalar::{choose, ln_beta};
    use crate::distributions::univariate::common::assert_close;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ::std::sync::atomic::AtomicBool;

    #[test]
    fn pmf_matches_closed_form() {
        let f = beta_binomial_pmf(&[3.0], &[10.0], &[2.0], &[3.0], false, None, None).unwrap();
        let expected = choose(10.0, 3.0) * (ln_beta(5.0, 10.0) - ln_beta(2.0, 3.0)).exp();
        assert!(((f[0] - expected) / expected).abs() < 1e-10);
    }

    #[test]
    fn uniform_prior_gives_flat_mass() {
        // α = β = 1 is uniform on 0..=n
        let xs: Vec<f64> = (0..=5).map(|k| k as f64).collect();
        let f = beta_binomial_pmf(&xs, &[5.0], &[1.0], &[1.0], false, None, None).unwrap();
        for v in f.iter() {
            assert_close(*v, 1.0 / 6.0, 1e-13);
        }
        let c = beta_binomial_cdf(&xs, &[5.0], &[1.0], &[1.0], true, false, None, None).unwrap();
        for (i, v) in c.iter().enumerate() {
            assert_close(*v, (i + 1) as f64 / 6.0, 1e-13);
        }
    }

    #[test]
    fn cdf_boundaries_and_floor() {
        let c = beta_binomial_cdf(
            &[-1.0, 2.5, 2.0, 10.0, 12.0, f64::INFINITY],
            &[10.0],
            &[2.0],
            &[3.0],
            true,
            false,
            None,
            None,
        )
        .unwrap();
        assert_eq!(c[0], 0.0);
        assert_close(c[1], c[2], 1e-15);
        assert_eq!(c[3], 1.0);
        assert_eq!(c[4], 1.0);
        assert_eq!(c[5], 1.0);
    }

    #[test]
    fn cdf_over_mixed_parameters() {
        // each (n, α, β) gets its own table
        let xs = [1.0, 2.0, 3.0, 4.0];
        let c = beta_binomial_cdf(&xs, &[6.0, 8.0], &[1.5], &[2.0, 0.5, 3.0], true, false, None, None)
            .unwrap();
        assert_eq!(c.len(), 4);
        for i in 0..c.len() {
            let x = xs[i];
            let n = [6.0, 8.0][i % 2];
            let b = [2.0, 0.5, 3.0][i % 3];
            let ks: Vec<f64> = (0..=x as usize).map(|k| k as f64).collect();
            let f = beta_binomial_pmf(&ks, &[n], &[1.5], &[b], false, None, None).unwrap();
            assert_close(c[i], f.iter().sum::<f64>(), 1e-12);
        }
    }

    #[test]
    fn upper_tail_log() {
        let lo = beta_binomial_cdf(&[4.0], &[10.0], &[2.0], &[3.0], true, false, None, None).unwrap();
        let up = beta_binomial_cdf(&[4.0], &[10.0], &[2.0], &[3.0], false, true, None, None).unwrap();
        assert_close(up[0], (1.0 - lo[0]).ln(), 1e-13);
    }

    #[test]
    fn non_integer_mass_is_zero() {
        let f = beta_binomial_pmf(&[1.5], &[4.0], &[1.0], &[1.0], true, None, None).unwrap();
        assert_eq!(f[0], f64::NEG_INFINITY);
        assert!(f.has_warning(Warning::NonInteger));
    }

    #[test]
    fn invalid_size_warns() {
        let f = beta_binomial_pmf(&[1.0], &[4.5], &[1.0], &[1.0], false, None, None).unwrap();
        assert!(f[0].is_nan());
        assert!(f.has_warning(Warning::NaNsProduced));
        let c = beta_binomial_cdf(&[1.0], &[4.0], &[0.0], &[1.0], true, false, None, None).unwrap();
        assert!(c[0].is_nan());
        assert!(c.has_warning(Warning::NaNsProduced));
    }

    #[test]
    fn raised_interrupt_aborts() {
        let stop = AtomicBool::new(true);
        let res = beta_binomial_cdf_interruptible(
            &[1.0, 2.0],
            &[4.0],
            &[1.0],
            &[1.0],
            true,
            false,
            None,
            None,
            &stop,
        );
        assert!(matches!(res, Err(KernelError::Interrupted(_))));
    }

    #[test]
    fn draws_within_size() {
        let mut rng = StdRng::seed_from_u64(23);
        let out = beta_binomial_sample(500, &[7.0], &[2.0], &[2.0], &mut rng).unwrap();
        assert!(out.iter().all(|&v| v.fract() == 0.0 && (0.0..=7.0).contains(&v)));
    }
}
