// Property tests over randomly drawn parameters.

mod util;

mod property_tests {
    use distr_kernels::distributions::shared::recycle::ParamMatrix;
    use distr_kernels::distributions::univariate::beta_binomial::beta_binomial_cdf;
    use distr_kernels::distributions::univariate::discrete_laplace::discrete_laplace_cdf;
    use distr_kernels::distributions::univariate::discrete_uniform::{
        discrete_uniform_cdf, discrete_uniform_quantile,
    };
    use distr_kernels::distributions::univariate::fatigue_life::{
        fatigue_life_cdf, fatigue_life_quantile,
    };
    use distr_kernels::distributions::univariate::gamma_poisson::gamma_poisson_cdf;
    use distr_kernels::distributions::univariate::gpd::{gpd_cdf, gpd_pdf, gpd_quantile};
    use distr_kernels::distributions::univariate::multinomial::multinomial_sample;
    use distr_kernels::distributions::univariate::pareto::{pareto_cdf, pareto_quantile};
    use distr_kernels::distributions::univariate::power::{power_cdf, power_pdf, power_quantile};
    use distr_kernels::distributions::univariate::zero_inflated_binomial::{zib_cdf, zib_quantile};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn non_decreasing(v: &[f64]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1] + 1e-12)
    }

    proptest! {
        #[test]
        fn pareto_quantile_inverts_cdf(p in 0.001f64..0.999, a in 0.2f64..8.0, b in 0.1f64..20.0) {
            let q = pareto_quantile(&[p], &[a], &[b], true, false, None, None).unwrap();
            let c = pareto_cdf(&[q[0]], &[a], &[b], true, false, None, None).unwrap();
            prop_assert!((c[0] - p).abs() < 1e-10);
        }

        #[test]
        fn power_quantile_inverts_cdf(p in 0.001f64..0.999, alpha in 0.1f64..20.0, beta in 0.2f64..8.0) {
            let q = power_quantile(&[p], &[alpha], &[beta], true, false, None, None).unwrap();
            let c = power_cdf(&[q[0]], &[alpha], &[beta], true, false, None, None).unwrap();
            prop_assert!((c[0] - p).abs() < 1e-10);
        }

        #[test]
        fn gpd_quantile_inverts_cdf(
            p in 0.001f64..0.999,
            mu in -5.0f64..5.0,
            sigma in 0.1f64..5.0,
            xi in -0.8f64..0.8,
        ) {
            let q = gpd_quantile(&[p], &[mu], &[sigma], &[xi], true, false, None, None).unwrap();
            let c = gpd_cdf(&[q[0]], &[mu], &[sigma], &[xi], true, false, None, None).unwrap();
            prop_assert!((c[0] - p).abs() < 1e-9);
        }

        #[test]
        fn fatigue_life_quantile_inverts_cdf(
            p in 0.01f64..0.99,
            alpha in 0.1f64..3.0,
            beta in 0.1f64..10.0,
            mu in -2.0f64..2.0,
        ) {
            let q = fatigue_life_quantile(&[p], &[alpha], &[beta], &[mu], true, false, None, None).unwrap();
            let c = fatigue_life_cdf(&[q[0]], &[alpha], &[beta], &[mu], true, false, None, None).unwrap();
            prop_assert!((c[0] - p).abs() < 1e-8);
        }

        #[test]
        fn tails_are_complementary(x in 0.0f64..30.0, sigma in 0.1f64..5.0, xi in -0.5f64..0.5) {
            let lo = gpd_cdf(&[x], &[0.0], &[sigma], &[xi], true, false, None, None).unwrap();
            let hi = gpd_cdf(&[x], &[0.0], &[sigma], &[xi], false, false, None, None).unwrap();
            prop_assert!((lo[0] + hi[0] - 1.0).abs() < 1e-12);
        }

        #[test]
        fn log_scale_matches_linear(x in 0.01f64..0.99, beta in 0.2f64..6.0) {
            let f = power_pdf(&[x], &[1.0], &[beta], false, None, None).unwrap();
            let lf = power_pdf(&[x], &[1.0], &[beta], true, None, None).unwrap();
            prop_assert!((lf[0].exp() - f[0]).abs() <= 1e-12 * f[0].max(1.0));
            let lp = power_cdf(&[x], &[1.0], &[beta], true, true, None, None).unwrap();
            let lq = power_quantile(&[lp[0]], &[1.0], &[beta], true, true, None, None).unwrap();
            prop_assert!((lq[0] - x).abs() < 1e-9);
            let lin = gpd_pdf(&[x], &[0.0], &[1.0], &[0.1], false, None, None).unwrap();
            let log = gpd_pdf(&[x], &[0.0], &[1.0], &[0.1], true, None, None).unwrap();
            prop_assert!((log[0].exp() - lin[0]).abs() < 1e-13);
        }

        #[test]
        fn discrete_cdfs_are_monotone(
            size in 1.0f64..40.0,
            a in 0.1f64..5.0,
            b in 0.1f64..5.0,
            prob in 0.01f64..0.99,
            pi in 0.0f64..0.9,
        ) {
            let size = size.floor();
            let xs: Vec<f64> = (-2..45).map(|k| k as f64).collect();
            let bb = beta_binomial_cdf(&xs, &[size], &[a], &[b], true, false, None, None).unwrap();
            prop_assert!(non_decreasing(&bb));
            prop_assert!((bb[bb.len() - 1] - 1.0).abs() < 1e-9);
            let gp = gamma_poisson_cdf(&xs, &[a], &[b], true, false, None, None).unwrap();
            prop_assert!(non_decreasing(&gp));
            let dl = discrete_laplace_cdf(&xs, &[prob], &[3.0], true, false, None, None).unwrap();
            prop_assert!(non_decreasing(&dl));
            let zib = zib_cdf(&xs, &[size], &[prob], &[pi], true, false, None, None).unwrap();
            prop_assert!(non_decreasing(&zib));
            prop_assert!(zib[2] >= pi);
        }

        #[test]
        fn discrete_quantiles_are_smallest_covering_point(
            p in 0.0f64..1.0,
            min in -20i32..20,
            width in 0i32..30,
            size in 1.0f64..30.0,
            prob in 0.05f64..0.95,
            pi in 0.0f64..0.8,
        ) {
            let (lo, hi) = (min as f64, (min + width) as f64);
            let q = discrete_uniform_quantile(&[p], &[lo], &[hi], true, false, None, None).unwrap()[0];
            let at = discrete_uniform_cdf(&[q], &[lo], &[hi], true, false, None, None).unwrap()[0];
            prop_assert!(at >= p - 1e-12);
            if q > lo {
                let below = discrete_uniform_cdf(&[q - 1.0], &[lo], &[hi], true, false, None, None).unwrap()[0];
                prop_assert!(below < p + 1e-12);
            }

            let size = size.floor();
            let q = zib_quantile(&[p], &[size], &[prob], &[pi], true, false, None, None).unwrap()[0];
            let at = zib_cdf(&[q], &[size], &[prob], &[pi], true, false, None, None).unwrap()[0];
            prop_assert!(at >= p - 1e-9);
        }

        #[test]
        fn multinomial_rows_sum_to_size(seed in any::<u64>(), size in 0u32..60, w in 0.05f64..0.9) {
            let mut rng = StdRng::seed_from_u64(seed);
            let probs = [w * 0.5, w * 0.5, 1.0 - w];
            let pm = ParamMatrix::new(&probs, 3).unwrap();
            let out = multinomial_sample(20, &[size as f64], &pm, &mut rng).unwrap();
            for i in 0..out.nrows() {
                let row = out.row(i);
                prop_assert_eq!(row.iter().sum::<f64>(), size as f64);
                prop_assert!(row.iter().all(|&v| v >= 0.0));
            }
        }
    }

    #[test]
    fn recycling_matches_elementwise_calls() {
        let xs = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5];
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, 1.0];
        let whole = pareto_cdf(&xs, &a, &b, true, false, None, None).unwrap();
        assert_eq!(whole.len(), 6);
        for i in 0..6 {
            let one = pareto_cdf(&[xs[i]], &[a[i % 3]], &[b[i % 2]], true, false, None, None).unwrap();
            assert_eq!(whole[i], one[0]);
        }
    }
}
