use anyhow::Result;
use cnustat_parser::ParseOutcome;

pub fn render(outcome: &ParseOutcome) -> Result<String> {
    let mut json = serde_json::to_string_pretty(outcome)?;
    json.push('\n');
    Ok(json)
}
