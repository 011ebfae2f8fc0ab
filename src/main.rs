//! Library CLI - local-first catalog management

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = library_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
