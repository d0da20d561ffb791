// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Fatal error types for distribution kernels.
//!
//! Per-element domain problems (a negative scale, a probability above one) are *not*
//! errors here. They become `NaN` lanes plus an aggregated warning, see
//! [`Diagnostics`](crate::distributions::shared::diagnostics::Diagnostics).
//! A `KernelError` aborts the whole call and is reserved for cases where no
//! element-wise meaning exists.

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant includes a contextual message string naming the calling
/// kernel and the offending shapes or values.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Invalid arguments provided to kernel function.
    InvalidArguments(String),

    /// Array length mismatch between operands, e.g. a validity mask shorter than its data.
    LengthMismatch(String),

    /// Matrix-valued parameters whose column counts disagree, or ragged matrix buffers.
    ShapeMismatch(String),

    /// The caller's interrupt flag was raised during a long evaluation loop.
    Interrupted(String),

    /// Process-wide numeric configuration could not be installed.
    Config(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            KernelError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
            KernelError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}

/// Formats a column-count mismatch between two matrix parameters.
pub fn log_shape_mismatch(fname: &str, lhs: &str, lhs_cols: usize, rhs: &str, rhs_cols: usize) -> String {
    format!(
        "{}: number of columns in '{}' ({}) does not equal number of columns in '{}' ({})",
        fname, lhs, lhs_cols, rhs, rhs_cols
    )
}
