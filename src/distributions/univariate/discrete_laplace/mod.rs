// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Discrete Laplace Distribution
//!
//! Scale `p ∈ (0, 1)`, location `μ`, on the integers:
//! ```text
//! P(X = x) = (1 − p)/(1 + p) · p^|x − μ|
//! ```
//! No quantile is provided.

mod std;

use minarrow::Bitmask;
use rand::Rng;

use crate::distributions::shared::diagnostics::Evaluated;
use crate::distributions::univariate::common::std::{
    Scale, cdf_kernel_f64_std, density_kernel_f64_std, sample_kernel_f64_std,
};
use crate::errors::KernelError;
use crate::traits::interrupt::NeverInterrupt;

/// Discrete Laplace PMF.
#[inline(always)]
pub fn discrete_laplace_pmf(
    x: &[f64],
    scale: &[f64],
    location: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    density_kernel_f64_std(
        "discrete_laplace_pmf",
        [x, scale, location],
        Scale::Linear,
        log_prob,
        null_mask,
        null_count,
        |[x, p, m], d| std::discrete_laplace_pmf_scalar(x, p, m, d),
    )
}

/// Discrete Laplace CDF.
#[inline(always)]
pub fn discrete_laplace_cdf(
    x: &[f64],
    scale: &[f64],
    location: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    cdf_kernel_f64_std(
        "discrete_laplace_cdf",
        [x, scale, location],
        lower_tail,
        log_prob,
        null_mask,
        null_count,
        &NeverInterrupt,
        |[x, p, m], d| std::discrete_laplace_cdf_scalar(x, p, m, d),
    )
}

#[inline(always)]
pub fn discrete_laplace_sample<R: Rng + ?Sized>(
    n: usize,
    scale: &[f64],
    location: &[f64],
    rng: &mut R,
) -> Result<Evaluated, KernelError> {
    sample_kernel_f64_std("discrete_laplace_sample", n, [scale, location], rng, |[p, m], rng, d| {
        std::discrete_laplace_sample_scalar(rng, p, m, d)
    })
}

#[cfg(test)]
mod discrete_laplace_tests {
    use super::*;
    use crate::distributions::shared::diagnostics::Warning;
    use crate::distributions::univariate::common::assert_close;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pmf_values() {
        // p = 0.5: P(0) = 1/3, P(±2) = 1/12
        let f = discrete_laplace_pmf(&[0.0, 2.0, -2.0], &[0.5], &[0.0], false, None, None).unwrap();
        assert_close(f[0], 1.0 / 3.0, 1e-15);
        assert_close(f[1], 1.0 / 12.0, 1e-15);
        assert_close(f[2], 1.0 / 12.0, 1e-15);
    }

    #[test]
    fn cdf_is_sum_of_mass() {
        let p = 0.4;
        let mu = 2.0;
        let xs: Vec<f64> = (-8..=12).map(|k| k as f64).collect();
        let f = discrete_laplace_pmf(&xs, &[p], &[mu], false, None, None).unwrap();
        let c = discrete_laplace_cdf(&xs, &[p], &[mu], true, false, None, None).unwrap();
        // mass below −8 is p^|−9−μ|/(1+p)
        let mut acc = p.powf(11.0) / (1.0 + p);
        for i in 0..xs.len() {
            acc += f[i];
            assert_close(c[i], acc, 1e-14);
        }
    }

    #[test]
    fn cdf_floors_and_limits() {
        let c = discrete_laplace_cdf(&[0.5, 0.0, f64::NEG_INFINITY, f64::INFINITY], &[0.5], &[0.0], true, false, None, None)
            .unwrap();
        assert_close(c[0], c[1], 1e-15);
        assert_eq!(c[2], 0.0);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn non_integer_point_has_no_mass() {
        let f = discrete_laplace_pmf(&[1.5], &[0.5], &[0.0], false, None, None).unwrap();
        assert_eq!(f[0], 0.0);
        assert!(f.has_warning(Warning::NonInteger));
        let lf = discrete_laplace_pmf(&[1.5], &[0.5], &[0.0], true, None, None).unwrap();
        assert_eq!(lf[0], f64::NEG_INFINITY);
    }

    #[test]
    fn scale_must_be_open_unit() {
        for p in [0.0, 1.0, 1.5] {
            let f = discrete_laplace_pmf(&[0.0], &[p], &[0.0], false, None, None).unwrap();
            assert!(f[0].is_nan());
            assert!(f.has_warning(Warning::NaNsProduced));
        }
    }

    #[test]
    fn draws_are_integers_around_location() {
        let mut rng = StdRng::seed_from_u64(17);
        let out = discrete_laplace_sample(2000, &[0.3], &[5.0], &mut rng).unwrap();
        assert!(out.iter().all(|v| v.fract() == 0.0));
        let mean = out.iter().sum::<f64>() / out.len() as f64;
        assert!((mean - 5.0).abs() < 0.2);
    }
}
