use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cnustat")]
#[command(about = "Parse CNU link statistics from Micronode diagnostic logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input log file (pasted or captured Micronode output)
    pub input: PathBuf,

    #[arg(
        short = 'd',
        long,
        help = "Append lines that matched no pattern after the parsed output"
    )]
    pub debug: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write parsed output to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable aligned listing
    Text,
    /// One JSON document for the whole parse outcome
    Json,
    /// One row per channel of every stats line
    Csv,
}
