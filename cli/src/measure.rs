// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fmt::{self, Display, Formatter},
    time::{Duration, Instant},
};

use clap::ValueEnum;
use strsearch::{
    BoyerMooreOutcome, KmpOutcome, RabinKarpConfig, boyer_moore, kmp, naive, rabin_karp,
};
use tracing::info;

/// A search algorithm, ordered the way results are reported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, ValueEnum)]
pub enum Algorithm {
    Naive,
    RabinKarp,
    Kmp,
    BoyerMoore,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::RabinKarp,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
    ];
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Naive => "Naive",
            Algorithm::RabinKarp => "Rabin-Karp",
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "Boyer-Moore",
        };
        f.pad(name)
    }
}

/// What a single algorithm produced.
pub enum Outcome {
    Plain(Vec<usize>),
    Kmp(KmpOutcome),
    BoyerMoore(BoyerMooreOutcome<u8>),
}

impl Outcome {
    pub fn matches(&self) -> &[usize] {
        match self {
            Outcome::Plain(matches) => matches,
            Outcome::Kmp(outcome) => outcome.matches(),
            Outcome::BoyerMoore(outcome) => outcome.matches(),
        }
    }
}

/// One timed run of an algorithm.
pub struct Measurement {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub outcome: Outcome,
}

/// Runs `algorithm` once over `text`, timing the whole call including table construction.
pub fn measure(
    algorithm: Algorithm,
    text: &[u8],
    pattern: &[u8],
    config: &RabinKarpConfig,
) -> Measurement {
    let start = Instant::now();
    let outcome = match algorithm {
        Algorithm::Naive => Outcome::Plain(naive::search(text, pattern)),
        Algorithm::RabinKarp => {
            Outcome::Plain(rabin_karp::search_with_config(text, pattern, config))
        }
        Algorithm::Kmp => Outcome::Kmp(kmp::search(text, pattern)),
        Algorithm::BoyerMoore => Outcome::BoyerMoore(boyer_moore::search(text, pattern)),
    };
    let elapsed = start.elapsed();

    info!(
        %algorithm,
        matches = outcome.matches().len(),
        elapsed_ns = elapsed.as_nanos(),
        "search finished"
    );

    Measurement {
        algorithm,
        elapsed,
        outcome,
    }
}
