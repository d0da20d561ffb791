// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Diagnostics** - *Aggregated per-call warnings*
//!
//! Element-wise domain errors never abort a kernel. Each affected lane becomes `NaN`
//! and raises a [`Warning`] in the call's [`Diagnostics`], which de-duplicates them so
//! that a call reports each kind of warning at most once, however many lanes hit it.
//!
//! The accumulated warnings travel back to the caller inside [`Evaluated`] and are
//! also emitted once through `log::warn!` when the call finishes.

use core::fmt;
use std::ops::Deref;

use minarrow::FloatArray;

/// A non-fatal condition raised while evaluating a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A parameter or probability fell outside its domain; the affected lanes are `NaN`.
    NaNsProduced,
    /// A sampler had no usable parameters for some draws; those draws are `NaN`.
    NAsProduced,
    /// A discrete law was evaluated at a non-integer point; its mass there is zero.
    NonInteger,
    /// An evaluation point was too large to index a cumulative table; the lane is `NaN`.
    IntegerCoercion,
}

impl Warning {
    const ALL: [Warning; 4] = [
        Warning::NaNsProduced,
        Warning::NAsProduced,
        Warning::NonInteger,
        Warning::IntegerCoercion,
    ];

    #[inline(always)]
    fn bit(self) -> u8 {
        match self {
            Warning::NaNsProduced => 1,
            Warning::NAsProduced => 1 << 1,
            Warning::NonInteger => 1 << 2,
            Warning::IntegerCoercion => 1 << 3,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NaNsProduced => write!(f, "NaNs produced"),
            Warning::NAsProduced => write!(f, "NAs produced"),
            Warning::NonInteger => write!(f, "non-integer x"),
            Warning::IntegerCoercion => write!(f, "NAs introduced by coercion to integer range"),
        }
    }
}

/// Set of warnings raised during one vectorised call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Diagnostics {
    flags: u8,
    first_non_integer: Option<f64>,
}

impl Diagnostics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `w`. Raising the same warning twice is a no-op.
    #[inline(always)]
    pub fn raise(&mut self, w: Warning) {
        self.flags |= w.bit();
    }

    /// Records a non-integer evaluation point, keeping the first one seen for the log line.
    #[inline]
    pub fn non_integer(&mut self, x: f64) {
        if self.first_non_integer.is_none() {
            self.first_non_integer = Some(x);
        }
        self.raise(Warning::NonInteger);
    }

    #[inline]
    pub fn contains(&self, w: Warning) -> bool {
        self.flags & w.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flags == 0
    }

    /// The first non-integer point recorded, if any.
    #[inline]
    pub fn first_non_integer(&self) -> Option<f64> {
        self.first_non_integer
    }

    /// Warnings raised, in a fixed order.
    pub fn warnings(&self) -> impl Iterator<Item = Warning> + '_ {
        Warning::ALL.into_iter().filter(move |w| self.contains(*w))
    }

    /// Folds another call's warnings into this one.
    #[inline]
    pub fn merge(&mut self, other: &Diagnostics) {
        self.flags |= other.flags;
        if self.first_non_integer.is_none() {
            self.first_non_integer = other.first_non_integer;
        }
    }

    /// Emits each raised warning once through the `log` facade.
    pub fn emit(&self, fname: &str) {
        for w in self.warnings() {
            match (w, self.first_non_integer) {
                (Warning::NonInteger, Some(x)) => log::warn!("{}: non-integer x = {}", fname, x),
                _ => log::warn!("{}: {}", fname, w),
            }
        }
    }
}

/// Result of a vectorised kernel call: the values plus the warnings they raised.
///
/// Dereferences to the value slice, so it can be indexed and iterated directly.
#[derive(Debug, Clone)]
pub struct Evaluated {
    pub data: FloatArray<f64>,
    pub diagnostics: Diagnostics,
}

impl Evaluated {
    #[inline]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[inline]
    pub fn has_warning(&self, w: Warning) -> bool {
        self.diagnostics.contains(w)
    }

    /// Drops the diagnostics, keeping the array.
    #[inline]
    pub fn into_array(self) -> FloatArray<f64> {
        self.data
    }
}

impl Deref for Evaluated {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.data.data
    }
}

/// Row-major matrix result, used by samplers whose draws are vectors.
#[derive(Debug, Clone)]
pub struct EvaluatedMatrix {
    pub data: FloatArray<f64>,
    pub ncols: usize,
    pub diagnostics: Diagnostics,
}

impl EvaluatedMatrix {
    #[inline]
    pub fn nrows(&self) -> usize {
        if self.ncols == 0 {
            0
        } else {
            self.data.data.len() / self.ncols
        }
    }

    /// Row `i` of the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data.data[i * self.ncols..(i + 1) * self.ncols]
    }

    #[inline]
    pub fn has_warning(&self, w: Warning) -> bool {
        self.diagnostics.contains(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raising_is_idempotent() {
        let mut d = Diagnostics::new();
        assert!(d.is_empty());
        d.raise(Warning::NaNsProduced);
        d.raise(Warning::NaNsProduced);
        assert_eq!(d.warnings().collect::<Vec<_>>(), vec![Warning::NaNsProduced]);
    }

    #[test]
    fn keeps_first_non_integer() {
        let mut d = Diagnostics::new();
        d.non_integer(1.5);
        d.non_integer(2.5);
        assert_eq!(d.first_non_integer(), Some(1.5));
        assert!(d.contains(Warning::NonInteger));
        assert!(!d.contains(Warning::NaNsProduced));
    }

    #[test]
    fn merge_unions_flags() {
        let mut a = Diagnostics::new();
        a.raise(Warning::NAsProduced);
        let mut b = Diagnostics::new();
        b.raise(Warning::IntegerCoercion);
        a.merge(&b);
        assert_eq!(
            a.warnings().collect::<Vec<_>>(),
            vec![Warning::NAsProduced, Warning::IntegerCoercion]
        );
    }

    #[test]
    fn warning_text() {
        assert_eq!(Warning::NaNsProduced.to_string(), "NaNs produced");
        assert_eq!(Warning::NAsProduced.to_string(), "NAs produced");
    }
}
