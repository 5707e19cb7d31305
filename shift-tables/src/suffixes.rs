// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the suffix lengths of `pattern` used by the good-suffix rule.
///
/// Entry `i` of the result is the length of the longest substring of `pattern` ending at `i` that
/// is also a suffix of `pattern`. The last entry is always `pattern.len()`. An empty pattern yields
/// an empty table.
///
/// Positions falling inside the most recently matched window `(g, f]` reuse the value computed
/// for the mirrored position near the end of the pattern, which keeps this operation *O*(*m*).
///
/// # Examples
///
/// ```
/// assert_eq!(shift_tables::suffixes(b"ANPANMAN"), [0, 2, 0, 0, 2, 0, 0, 8]);
/// ```
#[must_use]
pub fn suffixes<S>(pattern: &[S]) -> Vec<usize>
where
    S: PartialEq,
{
    let m = pattern.len();
    if m == 0 {
        return Vec::new();
    }

    let mut suff = vec![0; m];
    suff[m - 1] = m;

    // The window bounds go negative once a match reaches the start of the pattern
    let last = m as isize - 1;
    let mut g = last;
    let mut f = last;

    for i in (0..last).rev() {
        let mirrored = suff[(i + last - f) as usize];
        if i > g && (mirrored as isize) < i - g {
            suff[i as usize] = mirrored;
        } else {
            if i < g {
                g = i;
            }
            f = i;
            while g >= 0 && pattern[g as usize] == pattern[(g + last - f) as usize] {
                g -= 1;
            }
            suff[i as usize] = (f - g) as usize;
        }
    }

    suff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_symbol() {
        assert_eq!(suffixes(b"x"), [1]);
    }

    #[test]
    fn distinct_symbols() {
        assert_eq!(suffixes(b"abc"), [0, 0, 3]);
    }

    #[test]
    fn repeated_symbol() {
        assert_eq!(suffixes(b"aaaa"), [1, 2, 3, 4]);
    }

    #[test]
    fn reuses_mirrored_values() {
        assert_eq!(suffixes(b"gcagagag"), [1, 0, 0, 2, 0, 4, 0, 8]);
        assert_eq!(suffixes(b"ABABCABAB"), [0, 2, 0, 4, 0, 0, 2, 0, 9]);
    }

    #[test]
    fn empty_pattern() {
        assert!(suffixes::<u8>(&[]).is_empty());
    }

    #[test]
    fn matches_direct_computation() {
        let pattern = b"abaabaabbabaab";
        let suff = suffixes(pattern);

        for (i, &len) in suff.iter().enumerate() {
            let direct = pattern[..=i]
                .iter()
                .rev()
                .zip(pattern.iter().rev())
                .take_while(|(a, b)| a == b)
                .count();
            assert_eq!(len, direct, "wrong suffix length at {i}");
        }
    }
}
