// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Brute-force search.

use crate::Symbol;

/// Returns the start of every occurrence of `pattern` in `text` by comparing the pattern against
/// each window of the text.
///
/// Matches are returned in increasing order and may overlap. An empty pattern or a pattern longer
/// than the text has no matches.
///
/// This operation is *O*(*n* \* *m*).
///
/// # Examples
///
/// ```
/// assert_eq!(strsearch::naive::search(b"abababa", b"aba"), [0, 2, 4]);
/// ```
#[must_use]
pub fn search<S>(text: &[S], pattern: &[S]) -> Vec<usize>
where
    S: Symbol,
{
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}
