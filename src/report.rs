//! Console report for a validation run

use std::collections::HashSet;
use std::io::{self, Write};

use crate::parser::FenString;
use crate::validator::Summary;

pub const SUCCESS_BANNER: &str = "All positions are correct!";

/// Write the human-readable report for `summary` to `out`.
///
/// Only invalid or unevaluated records are listed. Position sets are sorted
/// here so the output is stable between runs.
pub fn write_report<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    for (index, outcome) in &summary.outcomes {
        match outcome {
            Ok(result) if result.is_valid() => {}
            Ok(result) => {
                writeln!(out, "Error in position {}: {}", index, result.origin)?;
                write_block(out, "Missing positions", &result.missing)?;
                write_block(out, "Extra incorrect positions", &result.extra)?;
            }
            Err(e) => {
                writeln!(out, "Could not evaluate position {}: {}", index, e)?;
            }
        }
    }

    if let Some(index) = summary.aborted_at {
        writeln!(out, "Run aborted at position {}; later positions were not evaluated", index)?;
    } else if summary.all_valid() {
        writeln!(out, "{}", SUCCESS_BANNER)?;
    }
    Ok(())
}

fn write_block<W: Write>(out: &mut W, title: &str, positions: &HashSet<FenString>) -> io::Result<()> {
    if positions.is_empty() {
        return Ok(());
    }

    let mut sorted: Vec<&FenString> = positions.iter().collect();
    sorted.sort();

    writeln!(out, "  {}:", title)?;
    for fen in sorted {
        writeln!(out, "    {}", fen)?;
    }
    Ok(())
}
