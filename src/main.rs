//! Todo CLI - In-memory task list behind an interactive menu

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = todo_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
