use crate::patterns::KEY_VALUE;
use crate::stats_line::parse_stats_line;
use cnustat_types::{FieldValue, LinkStats};

/// What a single line resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum LineMatch {
    /// A full CNU statistics line
    Stats(Box<LinkStats>),
    /// A generic `Key: Value` diagnostic line
    Field { key: String, value: FieldValue },
}

/// Run a line through the recognized patterns, most specific first.
///
/// First match wins; the formats are mutually exclusive so no backtracking
/// across rules is needed. Returns None for an unrecognized line.
pub fn match_line(line: &str) -> Option<LineMatch> {
    if let Some(stats) = parse_stats_line(line) {
        return Some(LineMatch::Stats(Box::new(stats)));
    }

    if let Some(caps) = KEY_VALUE.captures(line) {
        return Some(LineMatch::Field {
            key: caps[1].to_string(),
            value: FieldValue::infer(&caps[2]),
        });
    }

    None
}
