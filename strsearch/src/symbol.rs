// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::hash::Hash;

/// A fixed-width unit of text that can be searched.
///
/// Every matcher compares symbols for equality. Boyer-Moore additionally hashes them into its
/// bad-character table, and Rabin-Karp folds their [`ordinal()`](Self::ordinal) into its rolling
/// hash.
pub trait Symbol: Copy + Eq + Hash {
    /// Returns the numeric value of this symbol.
    fn ordinal(self) -> u32;
}

impl Symbol for u8 {
    fn ordinal(self) -> u32 {
        self.into()
    }
}

impl Symbol for u16 {
    fn ordinal(self) -> u32 {
        self.into()
    }
}

impl Symbol for u32 {
    fn ordinal(self) -> u32 {
        self
    }
}

impl Symbol for char {
    fn ordinal(self) -> u32 {
        self.into()
    }
}
