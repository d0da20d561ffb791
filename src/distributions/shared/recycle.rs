// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Recycling Views** - *Cyclic broadcasting of kernel inputs*
//!
//! Every kernel accepts its evaluation points and each parameter as independent
//! slices. The output has the length of the longest input and output slot `i`
//! reads input `j` at `i % n_j`. If any input is empty the output is empty.
//!
//! [`Recycler`] does this for scalar-per-row inputs and [`ParamMatrix`] for
//! parameters that carry one vector per row (mixture components, category
//! probabilities).

use crate::errors::KernelError;

/// A fixed set of `K` recycled input slices.
#[derive(Debug, Clone, Copy)]
pub struct Recycler<'a, const K: usize> {
    inputs: [&'a [f64]; K],
    len: usize,
}

impl<'a, const K: usize> Recycler<'a, K> {
    /// Output length is the longest input, or zero when any input is empty.
    #[inline]
    pub fn new(inputs: [&'a [f64]; K]) -> Self {
        let len = if inputs.iter().any(|s| s.is_empty()) {
            0
        } else {
            inputs.iter().map(|s| s.len()).max().unwrap_or(0)
        };
        Recycler { inputs, len }
    }

    /// Recycles the inputs over an explicit number of rows, as samplers do.
    ///
    /// The caller checks [`Recycler::any_empty`] first; an empty input yields no rows.
    #[inline]
    pub fn with_len(inputs: [&'a [f64]; K], len: usize) -> Self {
        let len = if inputs.iter().any(|s| s.is_empty()) { 0 } else { len };
        Recycler { inputs, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` when at least one input has no elements.
    #[inline]
    pub fn any_empty(&self) -> bool {
        self.inputs.iter().any(|s| s.is_empty())
    }

    /// The values feeding output row `i`.
    #[inline(always)]
    pub fn row(&self, i: usize) -> [f64; K] {
        std::array::from_fn(|j| {
            let s = self.inputs[j];
            s[i % s.len()]
        })
    }

    /// Iterates the rows in output order.
    pub fn rows(&self) -> impl Iterator<Item = [f64; K]> + '_ {
        (0..self.len).map(move |i| self.row(i))
    }
}

/// A row-major matrix parameter whose rows are recycled like scalar parameters.
#[derive(Debug, Clone, Copy)]
pub struct ParamMatrix<'a> {
    data: &'a [f64],
    ncols: usize,
}

impl<'a> ParamMatrix<'a> {
    /// Wraps `data` as rows of `ncols` values.
    ///
    /// Errors when the buffer is ragged or when a non-empty buffer claims zero columns.
    pub fn new(data: &'a [f64], ncols: usize) -> Result<Self, KernelError> {
        if ncols == 0 {
            if data.is_empty() {
                return Ok(ParamMatrix { data, ncols });
            }
            return Err(KernelError::ShapeMismatch(
                "matrix parameter with data must have at least one column".into(),
            ));
        }
        if data.len() % ncols != 0 {
            return Err(KernelError::ShapeMismatch(format!(
                "matrix buffer of length {} is not a multiple of {} columns",
                data.len(),
                ncols
            )));
        }
        Ok(ParamMatrix { data, ncols })
    }

    /// A single-row matrix.
    #[inline]
    pub fn from_row(data: &'a [f64]) -> Self {
        ParamMatrix { data, ncols: data.len() }
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        if self.ncols == 0 { 0 } else { self.data.len() / self.ncols }
    }

    /// Row `i % nrows`. The matrix must have at least one row.
    #[inline(always)]
    pub fn recycled_row(&self, i: usize) -> &'a [f64] {
        let r = i % self.nrows();
        &self.data[r * self.ncols..(r + 1) * self.ncols]
    }
}
