mod args;
mod commands;
mod handlers;
mod presentation;
mod writer;

pub use args::{Cli, OutputFormat};
pub use commands::run;
