use chrono::DateTime;
use cnustat_parser::ParseOutcome;
use cnustat_types::{ChannelStats, LinkStats};
use owo_colors::OwoColorize;

const RULE: &str = "---------------------------------------------------";

/// Color gate. ANSI codes are applied after padding so alignment survives.
struct Style {
    color: bool,
}

impl Style {
    fn label(&self, s: &str) -> String {
        if self.color {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    fn heading(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn dim(&self, s: &str) -> String {
        if self.color {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }
}

pub fn render(outcome: &ParseOutcome, debug: bool, color: bool) -> String {
    let style = Style { color };
    let mut out = String::new();

    for stats in &outcome.stats {
        render_stats_block(&mut out, stats, &style);
    }

    if !outcome.record.is_empty() {
        out.push_str(&style.heading("Fields:"));
        out.push('\n');
        let width = outcome.record.keys().map(str::len).max().unwrap_or(0);
        for (key, value) in outcome.record.iter() {
            let padded = format!("{:<width$}", key);
            out.push_str(&format!("  {}  {}\n", style.label(&padded), value));
        }
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&summary_line(outcome, debug, &style));

    if debug && !outcome.ignored.is_empty() {
        out.push('\n');
        out.push_str(&style.heading("=== NO MATCH LINES ==="));
        out.push('\n');
        for line in &outcome.ignored {
            out.push_str(&format!(
                "{} {}\n",
                style.dim(&format!("NO MATCH [{}]:", line.number)),
                line.text
            ));
        }
    }

    out
}

fn render_stats_block(out: &mut String, stats: &LinkStats, style: &Style) {
    out.push_str(RULE);
    out.push('\n');

    let mut line = |label: &str, value: String| {
        let padded = format!("{:<12}", label);
        out.push_str(&format!("{}{}\n", style.label(&padded), value));
    };

    line("Timestamp:", format_timestamp(stats.header.timestamp));
    line("Level:", stats.header.level.clone());
    line("Module:", stats.header.module.clone());
    line("Function:", stats.header.function.clone());
    line("Line:", stats.header.source_line.to_string());
    line(
        "MoCA Port:",
        format!("{} ({})", stats.moca_port, stats.moca_port_dev),
    );
    line("CNU ID:", stats.cnu_id.to_string());
    line("CNU MAC:", stats.cnu_mac.clone());
    line("Source:", stats.source.to_string());
    line("Rx Good:", stats.rx_good.to_string());
    line("Rx Bad:", stats.rx_bad.to_string());
    line("Rx % Bad:", stats.rx_bad_percent.to_string());

    out.push_str(&style.heading("Channel Stats:"));
    out.push('\n');
    for ch in &stats.channels {
        out.push_str(&format!("  {}\n", channel_line(ch)));
    }
    out.push_str(RULE);
    out.push('\n');
}

fn channel_line(ch: &ChannelStats) -> String {
    format!(
        "Band {} | RX {} bits/sym | {} dBm | SNR {} dB | RX PHY {} Mbps | TX {} bits/sym | TX PHY {} Mbps",
        ch.band_index,
        ch.rx_bits_per_sym,
        ch.rx_power,
        ch.rx_snr,
        ch.rx_phy_rate,
        ch.tx_bits_per_sym,
        ch.tx_phy_rate
    )
}

fn summary_line(outcome: &ParseOutcome, debug: bool, style: &Style) -> String {
    let mut summary = format!(
        "Summary: {} stats block(s), {} field(s), {} ignored line(s)\n",
        outcome.stats.len(),
        outcome.record.len(),
        outcome.ignored.len()
    );
    if !outcome.ignored.is_empty() && !debug {
        summary.push_str(&style.dim("(rerun with --debug to see ignored lines)"));
        summary.push('\n');
    }
    summary
}

/// Render the epoch timestamp as UTC wall-clock, keeping the raw value
/// alongside since device clocks are not always trustworthy.
fn format_timestamp(ts: f64) -> String {
    let secs = ts.trunc() as i64;
    let nanos = ((ts.fract() * 1e9).round() as u32).min(999_999_999);
    match DateTime::from_timestamp(secs, nanos) {
        Some(dt) => format!("{} ({})", dt.format("%Y-%m-%d %H:%M:%S%.3f UTC"), ts),
        None => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnustat_parser::LogParser;
    use cnustat_types::RawLog;

    const STATS_LINE: &str = "7:1612345678.123:INFO:MOCA:cnuStatsReport:1024: \
        <1:eth0>,<3,00:11:22:33:44:55>,<0> \
        <Rx Good/Bad,Percent 123456/ 42, 0.03%> stats per channel \
        <0: 8/-12/38/700,8/650>";

    fn outcome_for(text: &str) -> ParseOutcome {
        LogParser::new().parse(&RawLog::from_text(text))
    }

    #[test]
    fn stats_block_layout() {
        let rendered = render(&outcome_for(STATS_LINE), false, false);

        assert!(rendered.contains("MoCA Port:  1 (eth0)"));
        assert!(rendered.contains("CNU MAC:    00:11:22:33:44:55"));
        assert!(rendered.contains("Source:     Micronode"));
        assert!(rendered.contains("Rx Good:    123456"));
        assert!(rendered.contains(
            "Band 0 | RX 8 bits/sym | -12 dBm | SNR 38 dB | RX PHY 700 Mbps"
        ));
        assert!(rendered.contains("Summary: 1 stats block(s), 0 field(s), 0 ignored line(s)"));
    }

    #[test]
    fn fields_are_aligned() {
        let rendered = render(&outcome_for("Status: OK\nVoltage: 3.3V\n"), false, false);
        assert!(rendered.contains("  Status   OK\n"));
        assert!(rendered.contains("  Voltage  3.3V\n"));
    }

    #[test]
    fn debug_appends_unmatched_lines() {
        let rendered = render(&outcome_for("Status: OK\ngarbage line\n"), true, false);
        assert!(rendered.contains("=== NO MATCH LINES ==="));
        assert!(rendered.contains("NO MATCH [2]: garbage line"));
    }

    #[test]
    fn no_color_output_has_no_escape_codes() {
        let rendered = render(&outcome_for(STATS_LINE), true, false);
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn timestamp_renders_as_utc() {
        let formatted = format_timestamp(1612345678.123);
        assert!(formatted.starts_with("2021-02-03 "));
        assert!(formatted.ends_with("(1612345678.123)"));
    }
}
