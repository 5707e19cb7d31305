// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    ascii,
    fmt::Debug,
    io::{self, Write},
};

use strsearch::{BoyerMooreOutcome, KmpOutcome};

use crate::measure::{Measurement, Outcome};

const ALGORITHM_HEADER: &str = "Algorithm";
const TIME_HEADER: &str = "Execution Time (ns)";
const MATCHES_HEADER: &str = "Matches";

/// Writes a table of every measurement to `out`, followed by each algorithm's tables if
/// `with_tables` is set.
pub fn render<W>(out: &mut W, measurements: &[Measurement], with_tables: bool) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let name_width = measurements
        .iter()
        .map(|m| m.algorithm.to_string().len())
        .chain([ALGORITHM_HEADER.len()])
        .max()
        .unwrap_or_default();

    writeln!(
        out,
        "{ALGORITHM_HEADER:<name_width$}  {TIME_HEADER}  {MATCHES_HEADER}",
    )?;
    for measurement in measurements {
        writeln!(
            out,
            "{:<name_width$}  {:>time_width$}  {:?}",
            measurement.algorithm,
            measurement.elapsed.as_nanos(),
            measurement.outcome.matches(),
            time_width = TIME_HEADER.len(),
        )?;
    }

    if with_tables {
        for measurement in measurements {
            match &measurement.outcome {
                Outcome::Plain(_) => {}
                Outcome::Kmp(outcome) => {
                    writeln!(out)?;
                    writeln!(out, "{}", measurement.algorithm)?;
                    render_kmp_tables(out, outcome)?;
                }
                Outcome::BoyerMoore(outcome) => {
                    writeln!(out)?;
                    writeln!(out, "{}", measurement.algorithm)?;
                    render_boyer_moore_tables(out, outcome)?;
                }
            }
        }
    }

    Ok(())
}

fn render_kmp_tables<W>(out: &mut W, outcome: &KmpOutcome) -> io::Result<()>
where
    W: Write + ?Sized,
{
    render_row(out, "LPS Table", outcome.lps())
}

fn render_boyer_moore_tables<W>(out: &mut W, outcome: &BoyerMooreOutcome<u8>) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut bad_char: Vec<_> = outcome.bad_char().iter().collect();
    bad_char.sort_unstable();
    let bad_char: Vec<String> = bad_char
        .into_iter()
        .map(|(&symbol, last)| format!("'{}': {last}", ascii::escape_default(symbol)))
        .collect();

    writeln!(out, "  Bad Char Table: {{{}}}", bad_char.join(", "))?;
    render_row(out, "Suffix Table", outcome.suffixes())?;
    render_row(out, "Good Suffix Table", outcome.good_suffix())
}

fn render_row<W, T>(out: &mut W, name: &str, table: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Debug,
{
    writeln!(out, "  {name}: {table:?}")
}
