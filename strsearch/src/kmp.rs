// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Knuth-Morris-Pratt search.

use shift_tables::lps;
use tracing::debug;

use crate::Symbol;

/// The result of a Knuth-Morris-Pratt search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KmpOutcome {
    matches: Vec<usize>,
    lps: Vec<usize>,
}

impl KmpOutcome {
    /// The start of every occurrence of the pattern, in increasing order.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// The failure function the search ran with.
    ///
    /// See [`shift_tables::lps()`].
    #[must_use]
    pub fn lps(&self) -> &[usize] {
        &self.lps
    }

    /// Consumes this outcome, returning only the matches.
    #[must_use]
    pub fn into_matches(self) -> Vec<usize> {
        self.matches
    }
}

/// Returns the start of every occurrence of `pattern` in `text` along with the failure function of
/// `pattern`.
///
/// The text is scanned once without ever moving backwards. After a full match the scan resumes
/// from the longest border of the pattern, so overlapping matches are found. An empty pattern or
/// a pattern longer than the text has no matches; the failure function is still returned.
///
/// This operation is *O*(*n* + *m*).
///
/// # Examples
///
/// ```
/// let outcome = strsearch::kmp::search(b"abababa", b"aba");
///
/// assert_eq!(outcome.matches(), [0, 2, 4]);
/// assert_eq!(outcome.lps(), [0, 0, 1]);
/// ```
#[must_use]
pub fn search<S>(text: &[S], pattern: &[S]) -> KmpOutcome
where
    S: Symbol,
{
    let lps = lps(pattern);
    let n = text.len();
    let m = pattern.len();

    let mut matches = Vec::new();
    if m == 0 || m > n {
        return KmpOutcome { matches, lps };
    }

    debug!(m, "built failure function");

    let mut i = 0;
    let mut j = 0;
    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                matches.push(i - j);
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    KmpOutcome { matches, lps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_match() {
        let outcome = search(b"ABABDABACDABABCABAB", b"ABABCABAB");

        assert_eq!(outcome.matches(), [10]);
        assert_eq!(outcome.lps(), [0, 0, 1, 2, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn overlapping_matches() {
        assert_eq!(search(b"aaaa", b"aa").into_matches(), [0, 1, 2]);
    }

    #[test]
    fn resumes_from_border() {
        assert_eq!(search(b"abababab", b"abab").matches(), [0, 2, 4]);
    }

    #[test]
    fn falls_back_on_partial_match() {
        assert_eq!(search(b"aabaaabaaac", b"aabaaac").matches(), [4]);
    }

    #[test]
    fn pattern_longer_than_text() {
        let outcome = search(b"ab", b"ababaca");

        assert!(outcome.matches().is_empty());
        assert_eq!(outcome.lps(), [0, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn empty_pattern() {
        let outcome = search(b"text", b"");

        assert!(outcome.matches().is_empty());
        assert!(outcome.lps().is_empty());
    }
}
