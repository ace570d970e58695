use anyhow::{Result, anyhow};
use cnustat_parser::ParseOutcome;
use cnustat_types::LinkStats;

const HEADERS: [&str; 18] = [
    "timestamp",
    "module",
    "function",
    "moca_port",
    "moca_port_dev",
    "cnu_id",
    "cnu_mac",
    "source",
    "rx_good",
    "rx_bad",
    "rx_bad_percent",
    "band_index",
    "rx_bits_per_sym",
    "rx_power",
    "rx_snr",
    "rx_phy_rate",
    "tx_bits_per_sym",
    "tx_phy_rate",
];

/// One row per channel of every stats line. A stats line with no channel
/// groups still gets one row with the channel columns empty. Generic
/// key-value fields have no tabular shape and are not exported here.
pub fn render(outcome: &ParseOutcome) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(HEADERS)?;

    for stats in &outcome.stats {
        if stats.channels.is_empty() {
            let mut row = base_columns(stats);
            row.extend((0..7).map(|_| String::new()));
            wtr.write_record(&row)?;
            continue;
        }

        for ch in &stats.channels {
            let mut row = base_columns(stats);
            row.push(ch.band_index.to_string());
            row.push(ch.rx_bits_per_sym.to_string());
            row.push(ch.rx_power.to_string());
            row.push(ch.rx_snr.to_string());
            row.push(ch.rx_phy_rate.to_string());
            row.push(ch.tx_bits_per_sym.to_string());
            row.push(ch.tx_phy_rate.to_string());
            wtr.write_record(&row)?;
        }
    }

    let data = wtr
        .into_inner()
        .map_err(|e| anyhow!("failed to flush csv buffer: {}", e))?;
    Ok(String::from_utf8(data)?)
}

fn base_columns(stats: &LinkStats) -> Vec<String> {
    vec![
        stats.header.timestamp.to_string(),
        stats.header.module.clone(),
        stats.header.function.clone(),
        stats.moca_port.to_string(),
        stats.moca_port_dev.clone(),
        stats.cnu_id.to_string(),
        stats.cnu_mac.clone(),
        stats.source.to_string(),
        stats.rx_good.to_string(),
        stats.rx_bad.to_string(),
        stats.rx_bad_percent.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnustat_parser::LogParser;
    use cnustat_types::RawLog;

    const STATS_LINE: &str = "7:1612345678.123:INFO:MOCA:cnuStatsReport:1024: \
        <1:eth0>,<3,00:11:22:33:44:55>,<0> \
        <Rx Good/Bad,Percent 123456/ 42, 0.03%> stats per channel \
        <0: 8/-12/38/700,8/650><1: 7/-15/35/680,7/640>";

    #[test]
    fn one_row_per_channel() {
        let outcome = LogParser::new().parse(&RawLog::from_text(STATS_LINE));
        let rendered = render(&outcome).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timestamp,module,function"));
        assert!(lines[1].contains("00:11:22:33:44:55"));
        assert!(lines[1].contains("Micronode"));
        assert!(lines[1].ends_with("0,8,-12,38,700,8,650"));
        assert!(lines[2].ends_with("1,7,-15,35,680,7,640"));
    }

    #[test]
    fn stats_line_without_channels_gets_one_row() {
        let line = "7:1612345678.123:INFO:MOCA:cnuStatsReport:1024: \
            <1:eth0>,<3,00:11:22:33:44:55>,<0> \
            <Rx Good/Bad,Percent 123456/ 42, 0.03%> per channel ";
        let outcome = LogParser::new().parse(&RawLog::from_text(line));
        let rendered = render(&outcome).unwrap();

        assert_eq!(rendered.lines().count(), 2);
    }
}
