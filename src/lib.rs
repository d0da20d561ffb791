// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! Recycling-vectorised density, distribution, quantile and sampling kernels for
//! eleven probability laws, returning `Minarrow` float arrays with aggregated
//! per-call warnings.

pub mod distributions;

pub mod traits {
    pub mod interrupt;
    pub mod to_bits;
}

pub mod config;

pub mod errors;

pub mod utils;
