use std::{io::ErrorKind, process::ExitCode};

use bar_histogram::{HistError, cli};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        // reader went away (`histogram | head`)
        Err(HistError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("histogram: {e}");
            ExitCode::FAILURE
        }
    }
}
