//! CLI entry point for the mini crossword fill engine

use clap::Parser;
use minifill::io::cli::{Cli, CommandRunner};

fn main() -> minifill::Result<()> {
    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli);
    runner.run()
}
