// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Precomputed tables for exact string matching.
//!
//! Knuth-Morris-Pratt needs the failure function ([`lps()`]), while Boyer-Moore needs a
//! [`BadCharTable`] plus the good-suffix table, which is itself derived from the pattern's
//! [`suffixes()`]. Every builder is generic over the symbol type, so the tables work for bytes as
//! well as for wider alphabets.
//!
//! # Examples
//!
//! ```
//! use shift_tables::{BadCharTable, good_suffix, lps, suffixes};
//!
//! let pattern = b"ababaca";
//! assert_eq!(lps(pattern), [0, 0, 1, 2, 3, 0, 1]);
//!
//! let bad_char = BadCharTable::new(pattern);
//! assert_eq!(bad_char.last_index(&b'a'), Some(6));
//!
//! let suff = suffixes(pattern);
//! let shifts = good_suffix(&suff);
//! assert_eq!(shifts.len(), pattern.len());
//! ```

mod bad_char;
mod good_suffix;
mod lps;
mod suffixes;

pub use bad_char::BadCharTable;
pub use good_suffix::good_suffix;
pub use lps::lps;
pub use suffixes::suffixes;
