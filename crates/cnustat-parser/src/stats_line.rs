use crate::patterns::{CHANNEL_GROUP, STATS_LINE};
use cnustat_types::{ChannelStats, LinkStats, StatsSource, TraceHeader};

/// Attempt to parse a single CNU statistics line.
///
/// Returns None when the line does not match the stats format or when a
/// captured number fails to parse (overflow); the caller treats both as an
/// unmatched line rather than aborting the scan.
pub(crate) fn parse_stats_line(line: &str) -> Option<LinkStats> {
    let caps = STATS_LINE.captures(line)?;

    let header = TraceHeader {
        timestamp: caps[2].parse().ok()?,
        level: caps[3].to_string(),
        module: caps[4].to_string(),
        function: caps[5].to_string(),
        source_line: caps[6].parse().ok()?,
    };

    let channels = parse_channel_tail(&caps[15])?;

    Some(LinkStats {
        header,
        moca_port: caps[7].parse().ok()?,
        moca_port_dev: caps[8].trim().to_string(),
        cnu_id: caps[9].parse().ok()?,
        cnu_mac: caps[10].trim().to_string(),
        source: StatsSource::from_code(caps[11].parse().ok()?),
        rx_good: caps[12].parse().ok()?,
        rx_bad: caps[13].parse().ok()?,
        rx_bad_percent: caps[14].parse().ok()?,
        channels,
    })
}

/// Scan the tail of a stats line for per-channel groups. A tail with no
/// groups is valid; the channel list is just empty.
fn parse_channel_tail(tail: &str) -> Option<Vec<ChannelStats>> {
    let mut channels = Vec::new();
    for caps in CHANNEL_GROUP.captures_iter(tail) {
        channels.push(ChannelStats {
            band_index: caps[1].parse().ok()?,
            rx_bits_per_sym: caps[2].parse().ok()?,
            rx_power: caps[3].parse().ok()?,
            rx_snr: caps[4].parse().ok()?,
            rx_phy_rate: caps[5].parse().ok()?,
            tx_bits_per_sym: caps[6].parse().ok()?,
            tx_phy_rate: caps[7].parse().ok()?,
        });
    }
    Some(channels)
}
