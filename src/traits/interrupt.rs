// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Interrupt trait** - *Cooperative cancellation for long kernel loops*

use std::sync::atomic::{AtomicBool, Ordering};

/// Source of a cooperative cancellation request.
///
/// Long recycling loops poll `interrupted` every
/// [`interrupt_interval`](crate::config::NumericConfig::interrupt_interval) rows and
/// abort the whole call with [`KernelError::Interrupted`](crate::errors::KernelError::Interrupted)
/// when it returns `true`. No partial output is returned.
pub trait Interrupt {
    /// Returns `true` once the caller wants the current call abandoned.
    fn interrupted(&self) -> bool;
}

/// An interrupt source that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    #[inline(always)]
    fn interrupted(&self) -> bool {
        false
    }
}

/// A flag another thread can raise with `store(true, ..)`.
impl Interrupt for AtomicBool {
    #[inline]
    fn interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: Interrupt + ?Sized> Interrupt for &T {
    #[inline]
    fn interrupted(&self) -> bool {
        (**self).interrupted()
    }
}
