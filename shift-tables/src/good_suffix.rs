// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the good-suffix shifts from the suffix lengths of a pattern.
///
/// `suffixes` must be the output of [`suffixes()`](crate::suffixes) for the pattern. Entry `j` of
/// the result is how far the pattern may be shifted when a mismatch occurs at position `j` after
/// `pattern[j + 1..]` has matched. Every shift lies in `1..=m`.
///
/// # Examples
///
/// ```
/// use shift_tables::{good_suffix, suffixes};
///
/// assert_eq!(good_suffix(&suffixes(b"ANPANMAN")), [6, 6, 6, 6, 6, 3, 8, 1]);
/// ```
#[must_use]
pub fn good_suffix(suffixes: &[usize]) -> Vec<usize> {
    let m = suffixes.len();
    // `m` doubles as the marker for entries no rule has filled yet
    let mut shifts = vec![m; m];

    // Only a prefix of the pattern can line up with the matched suffix
    let mut j = 0;
    for i in (0..m).rev() {
        if suffixes[i] == i + 1 {
            while j < m - 1 - i {
                if shifts[j] == m {
                    shifts[j] = m - 1 - i;
                }
                j += 1;
            }
        }
    }

    // The matched suffix reoccurs in full elsewhere in the pattern
    for i in 0..m.saturating_sub(1) {
        shifts[m - 1 - suffixes[i]] = m - 1 - i;
    }

    shifts
}
