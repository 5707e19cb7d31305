// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Rolling-hash search.

use std::num::NonZeroU32;

use tracing::{debug, trace};

use crate::Symbol;

/// Returns the start of every occurrence of `pattern` in `text` using a rolling hash with the
/// default base and modulus.
///
/// This function is a shorthand for [`search_with_config()`] called with the default options.
///
/// # Examples
///
/// ```
/// assert_eq!(strsearch::rabin_karp::search(b"abababa", b"aba"), [0, 2, 4]);
/// ```
#[must_use]
pub fn search<S>(text: &[S], pattern: &[S]) -> Vec<usize>
where
    S: Symbol,
{
    search_with_config(text, pattern, &RabinKarpConfig::default())
}

/// Returns the start of every occurrence of `pattern` in `text` using a rolling hash.
///
/// A window whose hash equals the pattern's hash is only reported after comparing it with the
/// pattern symbol by symbol, so the result does not depend on how often hashes collide. Matches
/// are returned in increasing order and may overlap. An empty pattern or a pattern longer than
/// the text has no matches.
///
/// This operation is *O*(*n* + *m*) on average and *O*(*n* \* *m*) when most windows collide.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use strsearch::rabin_karp::{self, RabinKarpConfig};
///
/// let config = *RabinKarpConfig::new().modulus(NonZeroU32::new(1_000_000_007).unwrap());
/// assert_eq!(rabin_karp::search_with_config(b"abababa", b"aba", &config), [0, 2, 4]);
/// ```
#[must_use]
pub fn search_with_config<S>(text: &[S], pattern: &[S], config: &RabinKarpConfig) -> Vec<usize>
where
    S: Symbol,
{
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return Vec::new();
    }

    let hasher = RollingHash::new(config, m);
    let pattern_hash = hasher.hash(pattern);
    let mut window_hash = hasher.hash(&text[..m]);

    let mut matches = Vec::new();
    let mut spurious = 0;
    for i in 0..=n - m {
        if window_hash == pattern_hash {
            if text[i..i + m] == *pattern {
                matches.push(i);
            } else {
                trace!(offset = i, "spurious hash hit");
                spurious += 1;
            }
        }
        if i < n - m {
            window_hash = hasher.roll(window_hash, text[i], text[i + m]);
        }
    }

    debug!(
        matches = matches.len(),
        spurious,
        modulus = config.modulus,
        "rabin-karp scan finished"
    );

    matches
}

/// Configuration for a Rabin-Karp search.
///
/// The default modulus is deliberately small, which makes hash collisions common. Every collision
/// is filtered out by a direct comparison, so a larger modulus only changes how often that
/// comparison happens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct RabinKarpConfig {
    base: u32,
    modulus: u32,
}

impl RabinKarpConfig {
    /// Creates a new configuration for Rabin-Karp searches
    ///
    /// This configuration can be reused across searches.
    pub const fn new() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
            modulus: Self::DEFAULT_MODULUS.get(),
        }
    }

    /// Sets the base of the polynomial hash.
    ///
    /// The base should be at least the size of the alphabet being searched so distinct windows
    /// tend to hash differently.
    pub fn base(&mut self, base: u32) -> &mut Self {
        self.base = base;
        self
    }

    /// Sets the prime modulus of the polynomial hash.
    pub fn modulus(&mut self, modulus: NonZeroU32) -> &mut Self {
        self.modulus = modulus.get();
        self
    }

    /// The default hash base, one per possible byte value
    pub const DEFAULT_BASE: u32 = 256;

    /// The default hash modulus
    pub const DEFAULT_MODULUS: NonZeroU32 = NonZeroU32::new(101).unwrap();
}

impl Default for RabinKarpConfig {
    fn default() -> Self {
        Self::new()
    }
}

// Every intermediate value is below 2^64 because both the base and the running hash are below
// 2^32
struct RollingHash {
    base: u64,
    modulus: u64,
    // base^(m - 1) mod modulus, the weight of the symbol leaving the window
    high: u64,
}

impl RollingHash {
    fn new(config: &RabinKarpConfig, m: usize) -> Self {
        let base = u64::from(config.base);
        let modulus = u64::from(config.modulus);
        let high = (1..m).fold(1 % modulus, |high, _| high * base % modulus);

        Self {
            base,
            modulus,
            high,
        }
    }

    fn hash<S>(&self, symbols: &[S]) -> u64
    where
        S: Symbol,
    {
        symbols.iter().fold(0, |hash, &symbol| {
            (self.base * hash + u64::from(symbol.ordinal())) % self.modulus
        })
    }

    fn roll<S>(&self, hash: u64, outgoing: S, incoming: S) -> u64
    where
        S: Symbol,
    {
        let outgoing = u64::from(outgoing.ordinal()) % self.modulus * self.high % self.modulus;
        // Add the modulus before subtracting so the hash never goes negative
        let remaining = (hash + self.modulus - outgoing) % self.modulus;

        (self.base * remaining + u64::from(incoming.ordinal())) % self.modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_modulus(modulus: u32) -> RabinKarpConfig {
        *RabinKarpConfig::new().modulus(NonZeroU32::new(modulus).unwrap())
    }

    #[test]
    fn single_match() {
        assert_eq!(search(b"ABABDABACDABABCABAB", b"ABABCABAB"), [10]);
    }

    #[test]
    fn overlapping_matches() {
        assert_eq!(search(b"aaaa", b"aa"), [0, 1, 2]);
    }

    #[test]
    fn collisions_are_verified() {
        // With a modulus of 1 every window collides with the pattern
        let text = b"the quick brown fox jumps over the lazy dog";

        assert_eq!(search_with_config(text, b"the", &with_modulus(1)), [0, 31]);
        assert!(search_with_config(text, b"cat", &with_modulus(1)).is_empty());
    }

    #[test]
    fn large_modulus() {
        let config = with_modulus(u32::MAX);

        assert_eq!(search_with_config(b"xyzxyzxy", b"zxy", &config), [2, 5]);
    }

    #[test]
    fn large_base_and_modulus() {
        let config = *RabinKarpConfig::new()
            .base(u32::MAX)
            .modulus(NonZeroU32::new(4_294_967_291).unwrap());
        let text: Vec<u32> = vec![u32::MAX, 7, u32::MAX, 7, u32::MAX];

        assert_eq!(search_with_config(&text, &[u32::MAX, 7], &config), [0, 2]);
    }

    #[test]
    fn rolled_hash_matches_fresh_hash() {
        let text = b"rolling hashes must agree with direct hashing";
        let m = 6;
        let hasher = RollingHash::new(&RabinKarpConfig::default(), m);

        let mut rolled = hasher.hash(&text[..m]);
        for i in 0..text.len() - m {
            rolled = hasher.roll(rolled, text[i], text[i + m]);
            assert_eq!(rolled, hasher.hash(&text[i + 1..i + 1 + m]), "mismatch at {i}");
        }
    }

    #[test]
    fn degenerate_inputs() {
        assert!(search(b"text", b"").is_empty());
        assert!(search(b"", b"text").is_empty());
        assert!(search(b"ab", b"abc").is_empty());
    }
}
