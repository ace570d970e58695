use crate::args::OutputFormat;
use crate::presentation;
use crate::writer;
use anyhow::{Context, Result};
use cnustat_parser::LogParser;
use cnustat_types::RawLog;
use is_terminal::IsTerminal;
use std::path::Path;

pub fn handle(
    input: &Path,
    debug: bool,
    output: Option<&Path>,
    format: OutputFormat,
    no_color: bool,
) -> Result<()> {
    let log = RawLog::from_path(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let outcome = LogParser::new().parse(&log);

    // Non-fatal conditions warn on stderr and still produce output
    if log.is_empty() {
        eprintln!("Warning: {} is empty", input.display());
    } else if outcome.is_empty() {
        eprintln!(
            "Warning: no recognized fields found in {} ({} line(s) ignored)",
            input.display(),
            outcome.ignored.len()
        );
    }
    if outcome.duplicate_keys > 0 {
        eprintln!(
            "Warning: {} duplicate field name(s) ignored (first occurrence wins)",
            outcome.duplicate_keys
        );
    }

    let color = format == OutputFormat::Text
        && output.is_none()
        && !no_color
        && std::io::stdout().is_terminal();

    let rendered = match format {
        OutputFormat::Text => presentation::text::render(&outcome, debug, color),
        OutputFormat::Json => presentation::json::render(&outcome)?,
        OutputFormat::Csv => presentation::csv::render(&outcome)?,
    };

    match output {
        Some(path) => {
            writer::write_to_file(path, &rendered)?;
            eprintln!("Wrote parsed output to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
