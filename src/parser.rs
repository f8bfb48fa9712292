//! Position log parser for perft-validator
//!
//! A log is a flat list of lines. `NEW` separates records; the first line of a
//! record is the origin position, every following line a claimed successor.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ValidateError;

/// Line that closes the current record and opens the next one.
pub const SENTINEL: &str = "NEW";

/// FEN-encoded position token, compared textually.
pub type FenString = String;

/// One origin position plus the successors the generator claims for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRecord {
    pub origin: FenString,
    pub claimed: Vec<FenString>,
}

/// Incremental parser. Feed lines one by one, then call [`LogParser::finish`].
#[derive(Debug, Default)]
pub struct LogParser {
    records: Vec<ValidationRecord>,
    origin: Option<FenString>,
    claimed: Vec<FenString>,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if trimmed == SENTINEL {
            self.close_pending();
            return;
        }

        match self.origin {
            None => self.origin = Some(trimmed.to_string()),
            Some(_) => self.claimed.push(trimmed.to_string()),
        }
    }

    /// Close the pending record (if it has an origin) and return everything parsed.
    pub fn finish(mut self) -> Vec<ValidationRecord> {
        self.close_pending();
        self.records
    }

    fn close_pending(&mut self) {
        let claimed = std::mem::take(&mut self.claimed);
        // A pending record without origin is dropped silently
        if let Some(origin) = self.origin.take() {
            self.records.push(ValidationRecord { origin, claimed });
        }
    }
}

/// Parse a sequence of lines into records, preserving first-appearance order.
pub fn parse_lines<I, S>(lines: I) -> Vec<ValidationRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LogParser::new();
    for line in lines {
        parser.feed_line(line.as_ref());
    }
    parser.finish()
}

pub fn parse_log(text: &str) -> Vec<ValidationRecord> {
    parse_lines(text.lines())
}

/// Read and parse the log stored at `path`.
pub fn read_log(path: &Path) -> Result<Vec<ValidationRecord>, ValidateError> {
    let io_err = |source| ValidateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut parser = LogParser::new();
    for line in reader.lines() {
        parser.feed_line(&line.map_err(io_err)?);
    }

    let records = parser.finish();
    log::debug!("parsed {} records from {}", records.len(), path.display());
    Ok(records)
}
