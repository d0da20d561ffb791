// Installing the numeric configuration. Runs in its own test binary so that no
// other kernel call has locked in the defaults first.

use distr_kernels::config::{NumericConfig, init_numeric_config, numeric_config};
use distr_kernels::distributions::shared::recycle::ParamMatrix;
use distr_kernels::distributions::univariate::normal_mixture::normal_mixture_pdf;
use distr_kernels::errors::KernelError;

#[test]
fn install_once_then_read() {
    let bad = NumericConfig { interrupt_interval: 0, ..Default::default() };
    assert!(matches!(init_numeric_config(bad), Err(KernelError::Config(_))));

    let cfg = NumericConfig { min_diff_eps: 1e-3, prob_norm_const: 1e4, interrupt_interval: 16 };
    init_numeric_config(cfg).unwrap();
    assert_eq!(*numeric_config(), cfg);
    assert!(matches!(init_numeric_config(NumericConfig::default()), Err(KernelError::Config(_))));

    // Weights off by 5e-4 now pass the looser sum check.
    let mu = ParamMatrix::new(&[0.0, 1.0], 2).unwrap();
    let sigma = ParamMatrix::new(&[1.0, 1.0], 2).unwrap();
    let alpha = ParamMatrix::new(&[0.5, 0.5005], 2).unwrap();
    let f = normal_mixture_pdf(&[0.5], &mu, &sigma, &alpha, false, None, None).unwrap();
    assert!(f[0].is_finite());
    assert!(f.diagnostics().is_empty());
}
