//! Reference log generation and perft counting through an [`Oracle`]

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::error::ValidateError;
use crate::oracle::Oracle;
use crate::parser::{FenString, ValidationRecord, SENTINEL};

/// Expand `fen` breadth-first for `depth` plies and emit one record per leaf,
/// listing the leaf's successors in sorted order.
///
/// Leaves reached through different move orders appear once per path.
pub fn reference_records<O: Oracle + ?Sized>(
    oracle: &O,
    fen: &str,
    depth: u8,
) -> Result<Vec<ValidationRecord>, ValidateError> {
    let mut records = Vec::new();
    let mut queue: VecDeque<(FenString, u8)> = VecDeque::new();
    queue.push_back((fen.trim().to_string(), 0));

    while let Some((node, ply)) = queue.pop_front() {
        let successors = oracle.successors(&node)?;

        if ply < depth {
            let mut children: Vec<FenString> = successors.into_iter().collect();
            children.sort();
            queue.extend(children.into_iter().map(|child| (child, ply + 1)));
        } else {
            let mut claimed: Vec<FenString> = successors.into_iter().collect();
            claimed.sort();
            records.push(ValidationRecord {
                origin: node,
                claimed,
            });
        }
    }

    log::debug!("generated {} reference records at depth {}", records.len(), depth);
    Ok(records)
}

/// Write `records` in log format, each preceded by the sentinel line.
pub fn write_log<W: Write>(out: &mut W, records: &[ValidationRecord]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", SENTINEL)?;
        writeln!(out, "{}", record.origin)?;
        for fen in &record.claimed {
            writeln!(out, "{}", fen)?;
        }
    }
    Ok(())
}

/// Count leaf nodes `depth` plies below `fen`.
pub fn perft<O: Oracle + ?Sized>(oracle: &O, fen: &str, depth: u8) -> Result<u64, ValidateError> {
    if depth == 0 {
        return Ok(1);
    }

    let successors = oracle.successors(fen)?;
    if depth == 1 {
        return Ok(successors.len() as u64);
    }

    let mut nodes = 0u64;
    for child in &successors {
        nodes += perft(oracle, child, depth - 1)?;
    }
    Ok(nodes)
}
