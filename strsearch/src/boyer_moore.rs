// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Boyer-Moore search with the bad-character and good-suffix rules.

use shift_tables::{BadCharTable, good_suffix, suffixes};
use tracing::debug;

use crate::Symbol;

/// The result of a Boyer-Moore search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoyerMooreOutcome<S>
where
    S: Symbol,
{
    matches: Vec<usize>,
    bad_char: BadCharTable<S>,
    suffixes: Vec<usize>,
    good_suffix: Vec<usize>,
}

impl<S> BoyerMooreOutcome<S>
where
    S: Symbol,
{
    /// The start of every occurrence of the pattern, in increasing order.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// The last occurrence of every pattern symbol.
    #[must_use]
    pub fn bad_char(&self) -> &BadCharTable<S> {
        &self.bad_char
    }

    /// The suffix lengths the good-suffix table was derived from.
    ///
    /// See [`shift_tables::suffixes()`].
    #[must_use]
    pub fn suffixes(&self) -> &[usize] {
        &self.suffixes
    }

    /// The shift to apply for a mismatch at each pattern position.
    ///
    /// See [`shift_tables::good_suffix()`].
    #[must_use]
    pub fn good_suffix(&self) -> &[usize] {
        &self.good_suffix
    }

    /// Consumes this outcome, returning only the matches.
    #[must_use]
    pub fn into_matches(self) -> Vec<usize> {
        self.matches
    }
}

/// Returns the start of every occurrence of `pattern` in `text` along with the tables the search
/// ran with.
///
/// Each alignment of the pattern is compared right to left. On a mismatch the pattern moves by
/// the larger of the bad-character and good-suffix shifts. After a full match it moves so that
/// the last pattern occurrence of the symbol just past the window lines up with it. Matches are
/// returned in increasing order and may overlap. An empty pattern or a pattern longer than the
/// text has no matches; the tables for a non-empty pattern are still returned.
///
/// This operation is *O*(*n* \* *m*) in the worst case and usually sublinear in *n*.
///
/// # Examples
///
/// ```
/// let outcome = strsearch::boyer_moore::search(b"abababa", b"aba");
///
/// assert_eq!(outcome.matches(), [0, 2, 4]);
/// assert_eq!(outcome.bad_char().last_index(&b'a'), Some(2));
/// assert_eq!(outcome.good_suffix(), [2, 2, 1]);
/// ```
#[must_use]
pub fn search<S>(text: &[S], pattern: &[S]) -> BoyerMooreOutcome<S>
where
    S: Symbol,
{
    let bad_char = BadCharTable::new(pattern);
    let suffixes = suffixes(pattern);
    let good_suffix = good_suffix(&suffixes);
    let n = text.len();
    let m = pattern.len();

    let mut matches = Vec::new();
    if m != 0 && m <= n {
        debug!(m, distinct = bad_char.len(), "built boyer-moore tables");

        let mut shift = 0;
        while shift <= n - m {
            // Compare right to left; `j` ends as the mismatch position plus one, or 0 on a match
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }

            if j == 0 {
                matches.push(shift);
                shift += if shift + m < n {
                    (m as isize - bad_char.sentinel_index(&text[shift + m])) as usize
                } else {
                    1
                };
            } else {
                let j = j - 1;
                let bad_char_shift = j as isize - bad_char.sentinel_index(&text[shift + j]);
                shift += bad_char_shift.max(good_suffix[j] as isize).max(1) as usize;
            }
        }
    }

    BoyerMooreOutcome {
        matches,
        bad_char,
        suffixes,
        good_suffix,
    }
}
