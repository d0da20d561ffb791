// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Validity Mask Helpers*
//!
//! Small helpers for Arrow-style validity masks attached to kernel inputs.

use minarrow::Bitmask;

use crate::errors::{log_length_mismatch, KernelError};

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Checks the mask covers at least `cmp_len` lanes.
/// Used so the hot loop can index the mask without falling off its end.
#[inline(always)]
pub fn confirm_mask_capacity(
    fname: &str,
    cmp_len: usize,
    mask: Option<&Bitmask>,
) -> Result<(), KernelError> {
    if let Some(m) = mask {
        if m.len() < cmp_len {
            return Err(KernelError::LengthMismatch(log_length_mismatch(
                fname,
                cmp_len,
                m.len(),
            )));
        }
    }
    Ok(())
}

/// Builds the output validity mask for a recycled result of `len` lanes.
///
/// The primary input of length `src_len` is recycled, so output lane `i` inherits
/// the validity of input lane `i % src_len`.
#[inline]
pub fn recycle_bitmask(mask: &Bitmask, src_len: usize, len: usize) -> Bitmask {
    let mut out = Bitmask::new_set_all(len, true);
    if src_len == 0 {
        return out;
    }
    for i in 0..len {
        if !mask.get(i % src_len) {
            out.set(i, false);
        }
    }
    out
}
