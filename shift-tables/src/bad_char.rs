// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    collections::{HashMap, hash_map},
    hash::Hash,
};

/// The last occurrence of every symbol in a pattern.
///
/// Symbols that never occur in the pattern are absent from the table. Lookups for them return
/// `None`, or -1 through [`sentinel_index()`](Self::sentinel_index), which is the value the
/// Boyer-Moore shift arithmetic expects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BadCharTable<S>
where
    S: Eq + Hash,
{
    last: HashMap<S, usize>,
}

impl<S> BadCharTable<S>
where
    S: Copy + Eq + Hash,
{
    /// Creates a new `BadCharTable` for `pattern`.
    ///
    /// This operation is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tables::BadCharTable;
    ///
    /// let table = BadCharTable::new(b"abca");
    /// assert_eq!(table.last_index(&b'a'), Some(3));
    /// assert_eq!(table.last_index(&b'z'), None);
    /// ```
    #[must_use]
    pub fn new(pattern: &[S]) -> Self {
        let mut last = HashMap::with_capacity(pattern.len());

        // Later occurrences overwrite earlier ones
        for (i, &symbol) in pattern.iter().enumerate() {
            last.insert(symbol, i);
        }

        Self { last }
    }
}

impl<S> BadCharTable<S>
where
    S: Eq + Hash,
{
    /// Returns the index of the last occurrence of `symbol` in the pattern, if any.
    #[must_use]
    pub fn last_index(&self, symbol: &S) -> Option<usize> {
        self.last.get(symbol).copied()
    }

    /// Returns the index of the last occurrence of `symbol` in the pattern, or -1 if it does not
    /// occur.
    #[must_use]
    pub fn sentinel_index(&self, symbol: &S) -> isize {
        self.last_index(symbol).map_or(-1, |i| i as isize)
    }

    /// Returns an iterator over every distinct symbol of the pattern and its last index, in
    /// arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.last.iter().map(|(symbol, &i)| (symbol, i))
    }

    /// Returns the number of distinct symbols in the pattern.
    #[must_use]
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// Returns `true` if the table was built from an empty pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

impl<S> IntoIterator for BadCharTable<S>
where
    S: Eq + Hash,
{
    type Item = (S, usize);
    type IntoIter = hash_map::IntoIter<S, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.last.into_iter()
    }
}
