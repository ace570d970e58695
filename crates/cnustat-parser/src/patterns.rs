use once_cell::sync::Lazy;
use regex::Regex;

/// A CNU statistics line: trace prefix, link identity, Rx counters, and a
/// free-form tail that carries the per-channel groups.
pub(crate) static STATS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*",
        r"(\d+):",              // record id (captured but not carried)
        r"([\d.]+):",           // linux timestamp
        r"(\w+):",              // trace level
        r"(\w+):",              // module
        r"\s*([^\s:]+)\s*:\s*", // function
        r"(\d+):\s*",           // source line number
        r"<(\d+):([^>]+)>,",    // moca port, port device
        r"<(\d+),([^>]+)>,",    // cnu id, cnu mac
        r"<(\d+)>\s*",          // reporting source code
        r"<Rx Good/Bad,Percent\s+(\d+)/\s*(\d+),\s*([\d.]+)%>",
        r".*?per channel\s*(.*)$",
    ))
    .expect("stats line regex")
});

/// One per-channel group inside the stats line tail:
/// `<band: rxBits/rxPower/rxSnr/rxPhyRate,txBits/txPhyRate>`.
pub(crate) static CHANNEL_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(\d+):\s*(\d+)/(-?\d+)/(\d+)/(\d+),(\d+)/(\d+)>").expect("channel group regex")
});

/// A generic `Key: Value` diagnostic line. The key must start with a letter
/// so the trace-prefixed stats format never falls through to this rule.
pub(crate) static KEY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_ ./()%-]*?)\s*:\s*(\S.*?)\s*$").expect("key value regex")
});
