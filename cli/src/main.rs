// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

mod measure;
mod report;
mod source;

use std::{io, num::NonZeroU32, path::PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use strsearch::RabinKarpConfig;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::measure::{Algorithm, Measurement};

/// Find every occurrence of a pattern in a file with classical string search algorithms and
/// compare how long each one takes
#[derive(Parser)]
#[command(name = "strsearch", version)]
struct Args {
    /// File to search, or `-` for standard input
    text: PathBuf,

    /// Pattern to search for
    #[arg(required_unless_present = "pattern_file", conflicts_with = "pattern_file")]
    pattern: Option<String>,

    /// Read the pattern from a file instead
    #[arg(long, value_name = "PATH")]
    pattern_file: Option<PathBuf>,

    /// Algorithm to run; may be repeated. Runs all of them by default
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<Algorithm>,

    /// Modulus of the Rabin-Karp rolling hash
    #[arg(long, default_value_t = RabinKarpConfig::DEFAULT_MODULUS.get())]
    modulus: u32,

    /// Also print the tables built by KMP and Boyer-Moore
    #[arg(long)]
    tables: bool,

    /// Log more details to stderr; may be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let modulus = NonZeroU32::new(args.modulus).context("Rabin-Karp modulus must be non-zero")?;
    let config = *RabinKarpConfig::new().modulus(modulus);

    let text = source::read_text(&args.text).context("Failed to read text")?;
    let pattern = match args.pattern_file {
        Some(path) => source::read_text(&path).context("Failed to read pattern")?,
        None => args.pattern.unwrap_or_default().into_bytes(),
    };

    let mut algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms
    };
    algorithms.sort_unstable();
    algorithms.dedup();

    let measurements: Vec<Measurement> = algorithms
        .into_iter()
        .map(|algorithm| measure::measure(algorithm, &text, &pattern, &config))
        .collect();
    warn_on_disagreement(&measurements);

    report::render(&mut io::stdout().lock(), &measurements, args.tables)
        .context("Failed to write report")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn warn_on_disagreement(measurements: &[Measurement]) {
    let Some((first, rest)) = measurements.split_first() else {
        return;
    };

    for measurement in rest {
        if measurement.outcome.matches() != first.outcome.matches() {
            warn!(
                expected = %first.algorithm,
                found = %measurement.algorithm,
                "algorithms disagree on the matches"
            );
        }
    }
}
