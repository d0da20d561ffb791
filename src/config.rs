// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration** - *Numeric Tolerances and Loop Behaviour*
//!
//! Process-wide numeric configuration for the distribution kernels.
//!
//! The configuration is installed at most once with [`init_numeric_config`] and is
//! read-only thereafter. Kernels that run before any explicit install see
//! [`NumericConfig::default`], and that default is then locked in.

use std::sync::OnceLock;

use crate::errors::KernelError;

/// Largest evaluation point a cumulative table may be indexed by.
///
/// Points above this produce `NaN` with an integer-coercion warning instead of
/// allocating an unbounded table.
pub const MAX_TABLE_INDEX: f64 = i32::MAX as f64;

/// Numeric tolerances and loop parameters shared by every kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConfig {
    /// Absolute tolerance for `tol_equal`, used for probability-vector sum checks.
    pub min_diff_eps: f64,
    /// Fixed-point scale applied to mixture weights before they are summed and compared,
    /// which keeps round-off in long weight vectors below `min_diff_eps`.
    pub prob_norm_const: f64,
    /// Number of output rows between cooperative interrupt checks.
    pub interrupt_interval: usize,
}

impl Default for NumericConfig {
    fn default() -> Self {
        NumericConfig {
            min_diff_eps: 1e-8,
            prob_norm_const: 1e6,
            interrupt_interval: 1000,
        }
    }
}

impl NumericConfig {
    /// Checks the configuration is usable.
    pub fn validate(&self) -> Result<(), KernelError> {
        if !(self.min_diff_eps.is_finite() && self.min_diff_eps >= 0.0) {
            return Err(KernelError::Config(format!(
                "min_diff_eps must be finite and non-negative, got {}",
                self.min_diff_eps
            )));
        }
        if !(self.prob_norm_const.is_finite() && self.prob_norm_const > 0.0) {
            return Err(KernelError::Config(format!(
                "prob_norm_const must be finite and positive, got {}",
                self.prob_norm_const
            )));
        }
        if self.interrupt_interval == 0 {
            return Err(KernelError::Config("interrupt_interval must be at least 1".into()));
        }
        Ok(())
    }
}

static NUMERIC_CONFIG: OnceLock<NumericConfig> = OnceLock::new();

/// Installs the process-wide numeric configuration.
///
/// Fails if the configuration is invalid, or if a configuration is already in place
/// (either from an earlier install, or because a kernel has already read the defaults).
pub fn init_numeric_config(cfg: NumericConfig) -> Result<(), KernelError> {
    cfg.validate()?;
    NUMERIC_CONFIG.set(cfg).map_err(|_| {
        KernelError::Config("numeric configuration has already been initialised".into())
    })
}

/// Returns the active numeric configuration.
#[inline]
pub fn numeric_config() -> &'static NumericConfig {
    NUMERIC_CONFIG.get_or_init(NumericConfig::default)
}
