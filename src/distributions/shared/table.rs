// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cumulative Tables** - *Call-scoped memoisation for summed CDFs*
//!
//! Laws without a closed-form CDF (beta-binomial, gamma-Poisson) sum their mass
//! function. Rather than re-summing `0..=x` for every query, one table per
//! parameter tuple is built up to the largest point the call asks for, and each
//! query becomes a lookup.
//!
//! A [`CdfMemo`] is created inside a single vectorised call and dropped when it
//! returns; nothing is cached across calls.

use ahash::AHashMap;
use minarrow::Vec64;

use crate::traits::to_bits::ToBits;

/// Cumulative probabilities `t[j] = P(X ≤ j)` for `j = 0..=max_x`.
#[derive(Debug, Clone)]
pub struct CdfTable {
    cumulative: Vec64<f64>,
}

impl CdfTable {
    /// Builds the table from a log-mass function, `t[j] = min(1, t[j-1] + exp(log_mass(j)))`.
    ///
    /// `log_mass` is called once for each `j` in increasing order, so it may carry
    /// recurrence state between calls.
    ///
    /// With `settle_after = Some(mode)`, the build stops at the first `j > mode`
    /// whose increment leaves the running sum unchanged. Past the mode the mass is
    /// decreasing, so no later increment could change the sum either, and lookups
    /// beyond the end return the final value.
    pub fn build<F>(max_x: usize, settle_after: Option<usize>, mut log_mass: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        let mut cumulative = Vec64::with_capacity(max_x.min(4096) + 1);
        let mut acc = 0.0_f64;
        for j in 0..=max_x {
            let next = (acc + log_mass(j).exp()).min(1.0);
            if let Some(mode) = settle_after {
                if j > mode && next == acc {
                    break;
                }
            }
            acc = next;
            cumulative.push(acc);
        }
        CdfTable { cumulative }
    }

    /// `P(X ≤ x)`. Points past the end of the table read its last entry.
    #[inline]
    pub fn get(&self, x: usize) -> f64 {
        match self.cumulative.get(x) {
            Some(&v) => v,
            None => self.cumulative.last().copied().unwrap_or(0.0),
        }
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}

/// Tables for one call, keyed by the bit patterns of an `N`-parameter tuple.
#[derive(Debug, Default)]
pub struct CdfMemo<const N: usize> {
    tables: AHashMap<[u64; N], CdfTable>,
}

impl<const N: usize> CdfMemo<N> {
    pub fn new() -> Self {
        CdfMemo { tables: AHashMap::new() }
    }

    /// The table for `params`, building it with `build` on first use.
    #[inline]
    pub fn get_or_build<F>(&mut self, params: [f64; N], build: F) -> &CdfTable
    where
        F: FnOnce() -> CdfTable,
    {
        self.tables
            .entry(<[f64; N] as ToBits>::to_bits(params))
            .or_insert_with(build)
    }

    /// Number of distinct parameter tuples seen so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
