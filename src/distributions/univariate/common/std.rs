// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray, Vec64};
use rand::Rng;

use crate::config::numeric_config;
use crate::distributions::shared::diagnostics::{Diagnostics, Evaluated, Warning};
use crate::distributions::shared::recycle::Recycler;
use crate::errors::KernelError;
use crate::traits::interrupt::{Interrupt, NeverInterrupt};
use crate::utils::{confirm_mask_capacity, has_nulls, recycle_bitmask};

/// Scale a density kernel produces its values on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

/// Recycled kernel helper.
///
/// Evaluates `scalar_body` once per output row of the recycled `inputs`, polling
/// `interrupt` every `interrupt_interval` rows.
///
/// ### Null handling
/// - The validity mask applies to `inputs[0]`, the evaluation points, and is
/// recycled with them. Null lanes produce `NaN` and a cleared output bit.
/// - A mask supplied with a `null_count` of `0` takes the dense path and yields an
/// all-valid output mask.
/// - `NaN` or `inf` values produced by the kernel are kept verbatim and are not
/// nulled in the mask.
#[inline(always)]
pub fn recycled_kernel_f64_std<const K: usize, F>(
    fname: &str,
    inputs: [&[f64]; K],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    interrupt: &dyn Interrupt,
    diag: &mut Diagnostics,
    mut scalar_body: F,
) -> Result<(Vec64<f64>, Option<Bitmask>), KernelError>
where
    F: FnMut([f64; K], &mut Diagnostics) -> f64,
{
    let rec = Recycler::new(inputs);
    indexed_kernel_f64_std(
        fname,
        inputs[0].len(),
        rec.len(),
        null_mask,
        null_count,
        interrupt,
        diag,
        |i, d| scalar_body(rec.row(i), d),
    )
}

/// Row-indexed kernel helper for inputs that are not plain slices.
///
/// Produces `len` values by calling `body` with each output row index. The primary
/// input has `primary_len` rows and its mask is recycled to `len` exactly as in
/// [`recycled_kernel_f64_std`].
#[inline(always)]
pub fn indexed_kernel_f64_std<F>(
    fname: &str,
    primary_len: usize,
    len: usize,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    interrupt: &dyn Interrupt,
    diag: &mut Diagnostics,
    mut body: F,
) -> Result<(Vec64<f64>, Option<Bitmask>), KernelError>
where
    F: FnMut(usize, &mut Diagnostics) -> f64,
{
    confirm_mask_capacity(fname, primary_len, null_mask)?;
    let every = numeric_config().interrupt_interval;
    let mut out = Vec64::with_capacity(len);

    if !has_nulls(null_count, null_mask) {
        for i in 0..len {
            checkpoint(fname, i, every, interrupt)?;
            out.push(body(i, diag));
        }
        let out_mask = null_mask.map(|_| Bitmask::new_set_all(len, true));
        return Ok((out, out_mask));
    }

    let Some(mask) = null_mask else {
        return Err(KernelError::InvalidArguments(format!(
            "{}: null_count > 0 requires null_mask",
            fname
        )));
    };
    let out_mask = recycle_bitmask(mask, primary_len, len);
    for i in 0..len {
        checkpoint(fname, i, every, interrupt)?;
        if out_mask.get(i) {
            out.push(body(i, diag));
        } else {
            out.push(f64::NAN);
        }
    }
    Ok((out, Some(out_mask)))
}

/// Aborts the call when the interrupt source fires on a checkpoint row.
#[inline(always)]
fn checkpoint(
    fname: &str,
    i: usize,
    every: usize,
    interrupt: &dyn Interrupt,
) -> Result<(), KernelError> {
    if i % every == 0 && interrupt.interrupted() {
        return Err(KernelError::Interrupted(format!(
            "{}: interrupted after {} rows",
            fname, i
        )));
    }
    Ok(())
}

/// Converts a density array from its native scale to the requested one.
#[inline]
pub fn apply_density_scale(out: &mut [f64], native: Scale, log_prob: bool) {
    match (native, log_prob) {
        (Scale::Log, false) => out.iter_mut().for_each(|v| *v = v.exp()),
        (Scale::Linear, true) => out.iter_mut().for_each(|v| *v = v.ln()),
        _ => {}
    }
}

/// Applies the tail flip, then the log, to a lower-tail linear CDF array.
#[inline]
pub fn apply_cdf_transforms(out: &mut [f64], lower_tail: bool, log_prob: bool) {
    if !lower_tail {
        out.iter_mut().for_each(|v| *v = 1.0 - *v);
    }
    if log_prob {
        out.iter_mut().for_each(|v| *v = v.ln());
    }
}

/// Maps a caller probability to linear lower-tail form: `exp` first, then `1 − p`.
#[inline(always)]
pub fn prepare_probability(p: f64, lower_tail: bool, log_prob: bool) -> f64 {
    let p = if log_prob { p.exp() } else { p };
    if lower_tail { p } else { 1.0 - p }
}

/// Wraps kernel output with its diagnostics and logs any warnings once.
#[inline]
pub fn finish(
    fname: &str,
    out: Vec64<f64>,
    out_mask: Option<Bitmask>,
    diag: Diagnostics,
) -> Evaluated {
    diag.emit(fname);
    Evaluated {
        data: FloatArray::from_vec64(out, out_mask),
        diagnostics: diag,
    }
}

/// Density/mass driver. `scalar_body` returns values on the `native` scale.
#[inline(always)]
pub fn density_kernel_f64_std<const K: usize, F>(
    fname: &str,
    inputs: [&[f64]; K],
    native: Scale,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: F,
) -> Result<Evaluated, KernelError>
where
    F: FnMut([f64; K], &mut Diagnostics) -> f64,
{
    let mut diag = Diagnostics::new();
    let (mut out, out_mask) = recycled_kernel_f64_std(
        fname,
        inputs,
        null_mask,
        null_count,
        &NeverInterrupt,
        &mut diag,
        scalar_body,
    )?;
    apply_density_scale(&mut out, native, log_prob);
    Ok(finish(fname, out, out_mask, diag))
}

/// CDF driver. `scalar_body` returns the lower-tail probability on the linear scale.
#[inline(always)]
pub fn cdf_kernel_f64_std<const K: usize, F>(
    fname: &str,
    inputs: [&[f64]; K],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    interrupt: &dyn Interrupt,
    scalar_body: F,
) -> Result<Evaluated, KernelError>
where
    F: FnMut([f64; K], &mut Diagnostics) -> f64,
{
    let mut diag = Diagnostics::new();
    let (mut out, out_mask) = recycled_kernel_f64_std(
        fname, inputs, null_mask, null_count, interrupt, &mut diag, scalar_body,
    )?;
    apply_cdf_transforms(&mut out, lower_tail, log_prob);
    Ok(finish(fname, out, out_mask, diag))
}

/// Quantile driver. `scalar_body` receives the row with `row[0]` already mapped to
/// a linear lower-tail probability.
#[inline(always)]
pub fn quantile_kernel_f64_std<const K: usize, F>(
    fname: &str,
    inputs: [&[f64]; K],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    mut scalar_body: F,
) -> Result<Evaluated, KernelError>
where
    F: FnMut([f64; K], &mut Diagnostics) -> f64,
{
    let mut diag = Diagnostics::new();
    let (out, out_mask) = recycled_kernel_f64_std(
        fname,
        inputs,
        null_mask,
        null_count,
        &NeverInterrupt,
        &mut diag,
        |mut row, d| {
            row[0] = prepare_probability(row[0], lower_tail, log_prob);
            scalar_body(row, d)
        },
    )?;
    Ok(finish(fname, out, out_mask, diag))
}

/// Sampling driver: `n` draws with parameters recycled over the draws.
///
/// An empty parameter array leaves nothing to draw from, so every draw is `NaN`
/// and the call reports [`Warning::NAsProduced`].
#[inline(always)]
pub fn sample_kernel_f64_std<const K: usize, R, F>(
    fname: &str,
    n: usize,
    params: [&[f64]; K],
    rng: &mut R,
    mut draw: F,
) -> Result<Evaluated, KernelError>
where
    R: Rng + ?Sized,
    F: FnMut([f64; K], &mut R, &mut Diagnostics) -> f64,
{
    let mut diag = Diagnostics::new();
    let rec = Recycler::with_len(params, n);
    let mut out = Vec64::with_capacity(n);
    if rec.any_empty() {
        if n > 0 {
            diag.raise(Warning::NAsProduced);
        }
        out.resize(n, f64::NAN);
        return Ok(finish(fname, out, None, diag));
    }
    for i in 0..n {
        out.push(draw(rec.row(i), rng, &mut diag));
    }
    Ok(finish(fname, out, None, diag))
}
