mod handlers;
pub mod parse;

use std::io::{self, IsTerminal};

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::HistError;

pub fn run() -> Result<(), HistError> {
    let cli = parse::Cli::parse();
    init_logging(cli.verbose);

    if cli.man {
        handlers::manual();
        return Ok(());
    }
    handlers::histogram(&cli)
}

/// stderr only; stdout carries nothing but the histogram.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
