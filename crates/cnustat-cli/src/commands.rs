use crate::args::Cli;
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    handlers::parse::handle(
        &cli.input,
        cli.debug,
        cli.output.as_deref(),
        cli.format,
        cli.no_color,
    )
}
