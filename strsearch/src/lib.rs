// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Classical exact string search.
//!
//! This crate provides four independent implementations of the same operation: finding the start
//! of every occurrence of a pattern in a text. They differ only in how they avoid redundant
//! comparisons:
//!
//! - [`naive`] compares the pattern against every window of the text.
//! - [`rabin_karp`] only compares windows whose rolling hash equals the pattern's hash.
//! - [`kmp`] never moves backwards in the text, resuming from the pattern's failure function.
//! - [`boyer_moore`] compares right to left and skips ahead using the bad-character and
//!   good-suffix rules.
//!
//! Every search returns matches in increasing order, overlapping matches included, and treats an
//! empty pattern or a pattern longer than the text as having no matches. The Knuth-Morris-Pratt
//! and Boyer-Moore searches also hand back the tables they were run with.
//!
//! # Examples
//!
//! Every algorithm agrees on where a pattern occurs:
//!
//! ```
//! use strsearch::{boyer_moore, kmp, naive, rabin_karp};
//!
//! let text = b"ABABDABACDABABCABAB";
//! let pattern = b"ABABCABAB";
//!
//! assert_eq!(naive::search(text, pattern), [10]);
//! assert_eq!(rabin_karp::search(text, pattern), [10]);
//! assert_eq!(kmp::search(text, pattern).matches(), [10]);
//! assert_eq!(boyer_moore::search(text, pattern).matches(), [10]);
//! ```
//!
//! Searches are not limited to bytes:
//!
//! ```
//! let text: Vec<char> = "żółw żółty".chars().collect();
//! let pattern: Vec<char> = "żół".chars().collect();
//!
//! assert_eq!(strsearch::kmp::search(&text, &pattern).matches(), [0, 5]);
//! ```

pub mod boyer_moore;
#[cfg(feature = "java-ffi")]
mod jni;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;
mod symbol;

pub use boyer_moore::BoyerMooreOutcome;
pub use kmp::KmpOutcome;
pub use rabin_karp::RabinKarpConfig;
pub use symbol::Symbol;
