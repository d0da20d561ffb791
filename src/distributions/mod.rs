// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Distributions Module** - *Recycling probability kernels*
//!
//! Densities, cumulative probabilities, quantiles and random draws for eleven
//! laws, each evaluated element-wise over cyclically recycled input slices.
//!
//! ## Calling convention
//! - Every input is a slice. The output has the length of the longest input, and
//!   slot `i` reads input `j` at `i % len_j`. An empty input gives an empty output.
//! - `log_prob` returns log densities or log probabilities. `lower_tail = false`
//!   returns `1 − F(x)`, taken before any log.
//! - Quantiles accept probabilities on the same scales and convert them to linear
//!   lower-tail form first: `exp` if `log_prob`, then `1 − p` if upper tail.
//!
//! ## Missing values and warnings
//! A `NaN` input propagates to a `NaN` output silently. A parameter outside its
//! domain also yields `NaN`, but raises a warning that is reported once per call
//! in the returned [`Evaluated`](shared::diagnostics::Evaluated) and through
//! `log::warn!`. Only structural problems, such as matrix parameters with
//! disagreeing column counts, are returned as `Err`.
//!
//! ### Null masks
//! An Arrow-style validity mask may accompany the evaluation points. Null lanes
//! come back as `NaN` with a cleared bit. `NaN` and `inf` produced by the math are
//! ordinary values and never nulled.

/// # **Shared Distribution Utilities**
///
/// - **`constants`**: normal-quantile coefficients and fixed tolerances
/// - **`diagnostics`**: per-call warning accumulation and result wrappers
/// - **`recycle`**: cyclic broadcasting of slices and matrix rows
/// - **`sampler`**: base random generators
/// - **`scalar`**: special functions and binomial/normal helpers
/// - **`table`**: call-scoped cumulative tables for summed CDFs
pub mod shared {
    pub mod constants;
    pub mod diagnostics;
    pub mod recycle;
    pub mod sampler;
    pub mod scalar;
    pub mod table;
}

/// # **Univariate Distributions**
///
/// - **Continuous**: fatigue_life, gpd, normal_mixture, pareto, power
/// - **Discrete**: beta_binomial, discrete_laplace, discrete_uniform, gamma_poisson,
///   multinomial, zero_inflated_binomial
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod beta_binomial;
    /// Birnbaum–Saunders fatigue-life distribution.
    pub mod fatigue_life;
    pub mod discrete_laplace;
    /// Discrete uniform distribution, equal mass over a finite integer range.
    pub mod discrete_uniform;
    pub mod gamma_poisson;
    /// Generalised Pareto distribution for threshold excesses.
    pub mod gpd;
    pub mod multinomial;
    pub mod normal_mixture;
    pub mod pareto;
    pub mod power;
    pub mod zero_inflated_binomial;
}
