use cnustat_types::{LinkStats, ParsedRecord};
use serde::Serialize;

/// A line that matched no recognized pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IgnoredLine {
    /// 1-based line number in the input
    pub number: usize,
    pub text: String,
}

/// Everything one parse invocation produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// Generic key-value fields, first occurrence wins
    pub record: ParsedRecord,
    /// One entry per matched CNU statistics line, in log order
    pub stats: Vec<LinkStats>,
    /// Non-blank lines that matched nothing
    pub ignored: Vec<IgnoredLine>,
    /// Count of key-value lines whose key was already present
    pub duplicate_keys: usize,
}

impl ParseOutcome {
    /// True when the scan recognized nothing at all.
    pub fn is_empty(&self) -> bool {
        self.record.is_empty() && self.stats.is_empty()
    }
}
