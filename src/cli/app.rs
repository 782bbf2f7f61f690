//! Shell entry point

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::store::TaskStore;

use super::menu;
use super::output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "In-memory todo list with an interactive menu")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the shell
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Todo shell starting");

    // The store lives exactly as long as this call; nothing persists.
    let mut store = TaskStore::new();
    let stdin = io::stdin();
    menu::run_loop(&mut store, &output, &mut stdin.lock())?;

    output.verbose(&format!("Shell exited with {} task(s) in memory", store.len()));
    Ok(())
}
