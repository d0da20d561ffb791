// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Multinomial Distribution
//!
//! Counts `x₁..x_k` of `size` draws over `k` categories with probabilities
//! `p₁..p_k`:
//! ```text
//! P(x) = size!/∏ xⱼ! · ∏ pⱼ^xⱼ,   Σ xⱼ = size
//! ```
//! `x` and `prob` are row-major matrices with `k` columns; their rows and `size`
//! are recycled to the longest of the three. Only the mass and the sampler are
//! provided.

use minarrow::{Bitmask, FloatArray, Vec64};
use rand::Rng;

use crate::distributions::shared::diagnostics::{Diagnostics, Evaluated, EvaluatedMatrix, Warning};
use crate::distributions::shared::recycle::ParamMatrix;
use crate::distributions::shared::sampler::sample_binomial;
use crate::distributions::shared::scalar::{is_integer, ln_factorial, tol_equal};
use crate::distributions::univariate::common::std::{
    Scale, apply_density_scale, finish, indexed_kernel_f64_std,
};
use crate::errors::{KernelError, log_shape_mismatch};
use crate::traits::interrupt::NeverInterrupt;

#[inline(always)]
fn any_nan(row: &[f64]) -> bool {
    row.iter().any(|v| v.is_nan())
}

#[inline(always)]
fn valid_size(size: f64) -> bool {
    size >= 0.0 && size.fract() == 0.0
}

/// ln P(x) for one row.
///
/// Invalid `size` or `prob` gives `NaN` with a warning. Counts that are negative,
/// non-integer or do not add up to `size` give `−∞`.
#[inline]
pub fn multinomial_logpmf_scalar(x: &[f64], size: f64, prob: &[f64], diag: &mut Diagnostics) -> f64 {
    if size.is_nan() || any_nan(x) || any_nan(prob) {
        return f64::NAN;
    }
    if !valid_size(size) || prob.iter().any(|&p| p < 0.0) || !tol_equal(prob.iter().sum(), 1.0) {
        diag.raise(Warning::NaNsProduced);
        return f64::NAN;
    }
    let mut sum_x = 0.0;
    let mut acc = ln_factorial(size);
    let mut wrong_x = false;
    for (&xj, &pj) in x.iter().zip(prob) {
        if xj < 0.0 || xj.is_infinite() || !is_integer(xj, diag) {
            wrong_x = true;
            continue;
        }
        sum_x += xj;
        if xj > 0.0 {
            acc += xj * pj.ln() - ln_factorial(xj);
        }
    }
    if wrong_x || sum_x != size {
        return f64::NEG_INFINITY;
    }
    acc
}

/// One row of draws by sequential conditional binomials.
///
/// Category `j` draws from what is left of `size` with its probability rescaled by
/// the mass not yet used. The last category takes the exact remainder. Rows with
/// invalid parameters are filled with `NaN`.
pub fn multinomial_sample_row<R: Rng + ?Sized>(
    rng: &mut R,
    size: f64,
    prob: &[f64],
    out: &mut [f64],
    diag: &mut Diagnostics,
) {
    if size.is_nan() || any_nan(prob) {
        diag.raise(Warning::NAsProduced);
        out.fill(f64::NAN);
        return;
    }
    let Some((last, head)) = prob.split_last() else {
        return;
    };
    let mut wrong = !valid_size(size);
    let mut left = size;
    let mut mass = 1.0;
    if !wrong {
        for (j, &pj) in head.iter().enumerate() {
            if pj < 0.0 {
                wrong = true;
                break;
            }
            let q = if mass > 0.0 { (pj / mass).clamp(0.0, 1.0) } else { 0.0 };
            out[j] = sample_binomial(rng, left, q);
            left -= out[j];
            mass -= pj;
        }
        out[head.len()] = left;
        mass -= last;
    }
    if wrong || *last < 0.0 || !tol_equal(mass, 0.0) {
        diag.raise(Warning::NaNsProduced);
        out.fill(f64::NAN);
    }
}

fn check_columns(fname: &str, x: &ParamMatrix<'_>, prob: &ParamMatrix<'_>) -> Result<(), KernelError> {
    if x.ncols() != prob.ncols() {
        return Err(KernelError::ShapeMismatch(log_shape_mismatch(
            fname,
            "x",
            x.ncols(),
            "prob",
            prob.ncols(),
        )));
    }
    Ok(())
}

/// Multinomial PMF, one value per recycled row.
///
/// The optional mask covers the rows of `x`.
pub fn multinomial_pmf(
    x: &ParamMatrix<'_>,
    size: &[f64],
    prob: &ParamMatrix<'_>,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Evaluated, KernelError> {
    const FNAME: &str = "multinomial_pmf";
    check_columns(FNAME, x, prob)?;
    let lens = [x.nrows(), size.len(), prob.nrows()];
    let len = if lens.contains(&0) { 0 } else { lens.into_iter().max().unwrap_or(0) };
    let mut diag = Diagnostics::new();
    let (mut out, out_mask) = indexed_kernel_f64_std(
        FNAME,
        x.nrows(),
        len,
        null_mask,
        null_count,
        &NeverInterrupt,
        &mut diag,
        |i, d| {
            multinomial_logpmf_scalar(x.recycled_row(i), size[i % size.len()], prob.recycled_row(i), d)
        },
    )?;
    apply_density_scale(&mut out, Scale::Log, log_prob);
    Ok(finish(FNAME, out, out_mask, diag))
}

/// `n` multinomial draws as an `n × k` row-major matrix.
///
/// An empty `size` or `prob` yields an all-`NaN` matrix with an "NAs produced" warning.
pub fn multinomial_sample<R: Rng + ?Sized>(
    n: usize,
    size: &[f64],
    prob: &ParamMatrix<'_>,
    rng: &mut R,
) -> Result<EvaluatedMatrix, KernelError> {
    const FNAME: &str = "multinomial_sample";
    let k = prob.ncols();
    let mut diag = Diagnostics::new();
    let mut out = Vec64::with_capacity(n * k);
    out.resize(n * k, f64::NAN);
    if size.is_empty() || prob.nrows() == 0 {
        if n > 0 {
            diag.raise(Warning::NAsProduced);
        }
    } else {
        for (i, row) in out.chunks_mut(k.max(1)).enumerate().take(n) {
            multinomial_sample_row(rng, size[i % size.len()], prob.recycled_row(i), row, &mut diag);
        }
    }
    diag.emit(FNAME);
    Ok(EvaluatedMatrix {
        data: FloatArray::from_vec64(out, None),
        ncols: k,
        diagnostics: diag,
    })
}
