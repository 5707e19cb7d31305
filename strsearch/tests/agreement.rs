// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use std::num::NonZeroU32;

use proptest::prelude::*;
use strsearch::{RabinKarpConfig, Symbol, boyer_moore, kmp, naive, rabin_karp};

fn brute_force<S>(text: &[S], pattern: &[S]) -> Vec<usize>
where
    S: Symbol,
{
    if pattern.is_empty() {
        return Vec::new();
    }
    (0..text.len().saturating_sub(pattern.len() - 1))
        .filter(|&i| text[i..].starts_with(pattern))
        .collect()
}

fn all_algorithms<S>(text: &[S], pattern: &[S]) -> [Vec<usize>; 4]
where
    S: Symbol,
{
    [
        naive::search(text, pattern),
        rabin_karp::search(text, pattern),
        kmp::search(text, pattern).into_matches(),
        boyer_moore::search(text, pattern).into_matches(),
    ]
}

#[test]
fn textbook_scenario() {
    for matches in all_algorithms(b"ABABDABACDABABCABAB", b"ABABCABAB") {
        assert_eq!(matches, [10]);
    }
}

#[test]
fn overlapping_matches() {
    for matches in all_algorithms(b"aaaa", b"aa") {
        assert_eq!(matches, [0, 1, 2]);
    }
}

#[test]
fn empty_inputs() {
    for text in [&b""[..], b"a", b"some text"] {
        for matches in all_algorithms(text, b"") {
            assert!(matches.is_empty(), "empty pattern matched in {text:?}");
        }
    }
    for pattern in [&b"a"[..], b"motif"] {
        for matches in all_algorithms(b"", pattern) {
            assert!(matches.is_empty(), "{pattern:?} matched in empty text");
        }
    }
}

#[test]
fn pattern_longer_than_text() {
    for matches in all_algorithms(b"motif", b"motifs") {
        assert!(matches.is_empty());
    }
}

#[test]
fn binary_text() {
    let text: Vec<u8> = (0..=u8::MAX).chain(0..=u8::MAX).collect();
    let pattern = [u8::MAX, 0, 1];

    for matches in all_algorithms(&text, &pattern) {
        assert_eq!(matches, [255]);
    }
}

#[test]
fn wide_symbols() {
    let text: Vec<char> = "год за годом, года идут".chars().collect();
    let pattern: Vec<char> = "год".chars().collect();

    for matches in all_algorithms(&text, &pattern) {
        assert_eq!(matches, [0, 7, 14]);
    }
}

#[test]
fn tables_are_exposed() {
    let kmp_outcome = kmp::search(b"xababacax", b"ababaca");
    assert_eq!(kmp_outcome.matches(), [1]);
    assert_eq!(kmp_outcome.lps(), [0, 0, 1, 2, 3, 0, 1]);

    let bm_outcome = boyer_moore::search(b"xabcx", b"abc");
    assert_eq!(bm_outcome.matches(), [1]);
    assert_eq!(bm_outcome.bad_char().sentinel_index(&b'a'), 0);
    assert_eq!(bm_outcome.bad_char().sentinel_index(&b'b'), 1);
    assert_eq!(bm_outcome.bad_char().sentinel_index(&b'c'), 2);
    assert_eq!(bm_outcome.bad_char().sentinel_index(&b'x'), -1);
}

fn small_alphabet(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), 0..max_len)
}

proptest! {
    #[test]
    fn agrees_with_brute_force(text in small_alphabet(64), pattern in small_alphabet(6)) {
        let expected = brute_force(&text, &pattern);

        for matches in all_algorithms(&text, &pattern) {
            prop_assert_eq!(&matches, &expected);
        }
    }

    #[test]
    fn every_match_is_an_occurrence(text in any::<Vec<u8>>(), pattern in small_alphabet(3)) {
        for matches in all_algorithms(&text, &pattern) {
            prop_assert!(matches.windows(2).all(|w| w[0] < w[1]));
            for i in matches {
                prop_assert_eq!(&text[i..i + pattern.len()], &pattern[..]);
            }
        }
    }

    #[test]
    fn collisions_never_leak(
        text in small_alphabet(48),
        pattern in small_alphabet(4),
        modulus in 1..8u32,
    ) {
        let config = *RabinKarpConfig::new().modulus(NonZeroU32::new(modulus).unwrap());

        prop_assert_eq!(
            rabin_karp::search_with_config(&text, &pattern, &config),
            brute_force(&text, &pattern)
        );
    }

    #[test]
    fn good_suffix_shifts_in_range(pattern in small_alphabet(24)) {
        let outcome = boyer_moore::search(&pattern, &pattern);

        for &shift in outcome.good_suffix() {
            prop_assert!((1..=pattern.len()).contains(&shift));
        }
    }
}
