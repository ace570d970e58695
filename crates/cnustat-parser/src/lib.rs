//! Line-oriented parser for Micronode diagnostic logs.
//!
//! A single linear pass over the input: each non-blank line is run through
//! a fixed, ordered set of patterns (CNU stats line first, then generic
//! `Key: Value`). Matches accumulate into a [`ParseOutcome`]; anything that
//! matches nothing is reported as ignored, never dropped silently.

mod error;
mod outcome;
mod patterns;
mod rules;
mod stats_line;

pub use error::{Error, Result};
pub use outcome::{IgnoredLine, ParseOutcome};
pub use rules::{LineMatch, match_line};

use cnustat_types::RawLog;
use std::path::Path;

/// The log parser. Stateless; every invocation is an independent scan.
#[derive(Debug, Default)]
pub struct LogParser;

impl LogParser {
    pub fn new() -> Self {
        LogParser
    }

    /// Load a file and parse it. IO failures (missing or unreadable file)
    /// propagate; parse-level problems never do.
    pub fn parse_file(&self, path: &Path) -> Result<ParseOutcome> {
        let log = RawLog::from_path(path)?;
        Ok(self.parse(&log))
    }

    /// Scan a loaded log. Blank lines are skipped without being counted.
    pub fn parse(&self, log: &RawLog) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for (idx, line) in log.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match rules::match_line(line) {
                Some(LineMatch::Stats(stats)) => outcome.stats.push(*stats),
                Some(LineMatch::Field { key, value }) => {
                    if !outcome.record.insert(key, value) {
                        outcome.duplicate_keys += 1;
                    }
                }
                None => outcome.ignored.push(IgnoredLine {
                    number: idx + 1,
                    text: line.to_string(),
                }),
            }
        }

        outcome
    }
}
