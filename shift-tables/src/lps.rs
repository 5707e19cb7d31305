// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the failure function of `pattern`.
///
/// Entry `i` of the result is the length of the longest proper prefix of `pattern[..=i]` that is
/// also a suffix of it. The first entry is always 0. An empty pattern yields an empty table.
///
/// This operation is *O*(*m*).
///
/// # Examples
///
/// ```
/// assert_eq!(shift_tables::lps(b"aabaaab"), [0, 1, 0, 1, 2, 2, 3]);
/// ```
#[must_use]
pub fn lps<S>(pattern: &[S]) -> Vec<usize>
where
    S: PartialEq,
{
    let mut table = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            table[i] = len;
            i += 1;
        } else if len != 0 {
            // Retry with the next shorter border without consuming pattern[i]
            len = table[len - 1];
        } else {
            table[i] = 0;
            i += 1;
        }
    }

    table
}
