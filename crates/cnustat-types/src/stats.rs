use serde::{Deserialize, Serialize};
use std::fmt;

/// Trace prefix carried by every Micronode stats line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceHeader {
    /// Linux epoch timestamp, fractional seconds included
    pub timestamp: f64,
    pub level: String,
    pub module: String,
    pub function: String,
    pub source_line: u32,
}

/// Which side of the link reported the statistics.
///
/// The wire encoding is a single digit: 0 for the Micronode head-end,
/// anything else for the CNU itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsSource {
    Micronode,
    Cnu,
}

impl StatsSource {
    pub fn from_code(code: u32) -> Self {
        if code == 0 {
            StatsSource::Micronode
        } else {
            StatsSource::Cnu
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsSource::Micronode => "Micronode",
            StatsSource::Cnu => "CNU",
        }
    }
}

impl fmt::Display for StatsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-band figures from the "per channel" tail of a stats line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub band_index: u32,
    pub rx_bits_per_sym: u32,
    /// dBm, can be negative
    pub rx_power: i32,
    /// dB
    pub rx_snr: u32,
    /// Mbps
    pub rx_phy_rate: u32,
    pub tx_bits_per_sym: u32,
    /// Mbps
    pub tx_phy_rate: u32,
}

/// One fully parsed CNU statistics line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStats {
    pub header: TraceHeader,
    pub moca_port: u32,
    pub moca_port_dev: String,
    pub cnu_id: u32,
    pub cnu_mac: String,
    pub source: StatsSource,
    pub rx_good: u64,
    pub rx_bad: u64,
    pub rx_bad_percent: f64,
    pub channels: Vec<ChannelStats>,
}
