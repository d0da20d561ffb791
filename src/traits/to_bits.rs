//! # **ToBit trait** - *IEEE 754 bit conversion for hashable parameter keys*

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

/// Converts floating-point values to their IEEE 754 bit representation.
///
/// `f64` is neither `Eq` nor `Hash`, so parameter tuples are turned into bit
/// patterns before they key the call-scoped CDF memo.
/// Distinct bit patterns are distinct keys: `0.0` and `-0.0` do not share a table,
/// which costs one extra build and never a wrong answer.
pub trait ToBits {
    /// The unsigned integer type representing the bit pattern.
    type Bits: Eq + std::hash::Hash + Copy;

    /// Converts the value to its IEEE 754 bit representation.
    fn to_bits(self) -> Self::Bits;
}

impl ToBits for f64 {
    type Bits = u64;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }
}

/// Parameter tuples, element-wise.
impl<const N: usize> ToBits for [f64; N] {
    type Bits = [u64; N];

    #[inline(always)]
    fn to_bits(self) -> [u64; N] {
        self.map(f64::to_bits)
    }
}
