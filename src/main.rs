//! CLI entry point for the rectangle packing solver

use clap::Parser;
use rectcover::io::cli::{Cli, PuzzleRunner};
use std::process::ExitCode;

fn main() -> rectcover::Result<ExitCode> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    let mut stdout = std::io::stdout().lock();
    let report = runner.run(&mut stdout)?;
    Ok(runner.exit_code(&report))
}
