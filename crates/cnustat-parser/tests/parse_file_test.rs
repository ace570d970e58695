use cnustat_parser::LogParser;
use cnustat_types::FieldValue;
use std::io::Write;
use std::path::Path;

const STATS_LINE: &str = "7:1612345678.123:INFO:MOCA:cnuStatsReport:1024: \
    <1:eth0>,<3,00:11:22:33:44:55>,<0> \
    <Rx Good/Bad,Percent 123456/ 42, 0.03%> stats per channel \
    <0: 8/-12/38/700,8/650><1: 7/-15/35/680,7/640>";

#[test]
fn parse_file_handles_mixed_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("micronode.log");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Status: OK").unwrap();
    writeln!(file, "{}", STATS_LINE).unwrap();
    writeln!(file).unwrap();
    writeln!(file, "some pasted shell prompt $").unwrap();
    writeln!(file, "Uptime: 86400").unwrap();
    drop(file);

    let outcome = LogParser::new().parse_file(&path).unwrap();

    assert_eq!(outcome.record.len(), 2);
    assert_eq!(
        outcome.record.get("Uptime"),
        Some(&FieldValue::Integer(86400))
    );
    assert_eq!(outcome.stats.len(), 1);
    assert_eq!(outcome.stats[0].channels.len(), 2);
    assert_eq!(outcome.ignored.len(), 1);
    assert_eq!(outcome.ignored[0].number, 4);
}

#[test]
fn parse_file_propagates_missing_file() {
    let err = LogParser::new()
        .parse_file(Path::new("/nonexistent/micronode.log"))
        .unwrap_err();
    assert!(err.to_string().contains("IO error") || err.to_string().contains("Log load error"));
}

#[test]
fn outcome_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("micronode.log");
    std::fs::write(&path, format!("Status: OK\n{}\n", STATS_LINE)).unwrap();

    let outcome = LogParser::new().parse_file(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&outcome).unwrap())
        .unwrap();

    assert_eq!(json["record"]["Status"], "OK");
    assert_eq!(json["stats"][0]["cnu_mac"], "00:11:22:33:44:55");
    assert_eq!(json["stats"][0]["source"], "micronode");
    assert_eq!(json["stats"][0]["channels"][1]["rx_power"], -15);
}
