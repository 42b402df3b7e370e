//! Command-line interface for solving a packing puzzle

use crate::algorithm::ordering::search_order;
use crate::algorithm::search::{SearchOptions, SearchReport, Solver};
use crate::io::configuration::{
    DEFAULT_BOARD_SIZE, DEFAULT_SEED, EXHAUSTED_EXIT_CODE, PNG_CELL_SCALE, REFERENCE_PIECES,
};
use crate::io::error::{Result, report_write_error};
use crate::io::image::export_layout_as_png;
use crate::io::progress::SearchProgress;
use crate::io::report::{format_stats, write_layout, write_outcome};
use crate::spatial::partition::generate_partition;
use crate::spatial::pieces::{Piece, Puzzle};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rectcover")]
#[command(
    author,
    version,
    about = "Cover a square board exactly with rectangular pieces"
)]
/// Command-line arguments for the packing solver
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Side length of the square board
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Piece as WIDTHxHEIGHT; repeat for each piece (defaults to the built-in set)
    #[arg(short = 'p', long = "piece", value_name = "WxH", value_parser = parse_piece)]
    pub pieces: Vec<Piece>,

    /// Generate a random solvable set of this many pieces
    #[arg(short, long, value_name = "COUNT", conflicts_with = "pieces")]
    pub generate: Option<usize>,

    /// Seed for piece generation and for ordering pieces of equal area
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the solved board as text
    #[arg(short, long)]
    pub render: bool,

    /// Write the solved board to a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Try every copy of identical pieces at each cell
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Exit with a non-zero status when no solution exists
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a `WxH` piece argument
///
/// # Errors
///
/// Returns the error message if the text is not two positive integers
pub fn parse_piece(text: &str) -> std::result::Result<Piece, String> {
    text.parse::<Piece>().map_err(|error| error.to_string())
}

/// Builds the puzzle described by the arguments, solves it and reports
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Puzzle from generated, explicit or built-in pieces, in that priority
    ///
    /// # Errors
    ///
    /// Returns an error if the board size, a piece or the generation count is
    /// invalid
    pub fn build_puzzle(&self) -> Result<Puzzle> {
        if let Some(count) = self.cli.generate {
            let seed = self.cli.seed.unwrap_or(DEFAULT_SEED);
            let pieces = generate_partition(self.cli.size, count, seed)?;
            return Puzzle::new(self.cli.size, pieces);
        }

        if self.cli.pieces.is_empty() {
            Puzzle::from_dimensions(self.cli.size, &REFERENCE_PIECES)
        } else {
            Puzzle::new(self.cli.size, self.cli.pieces.clone())
        }
    }

    /// Search options selected by the flags
    pub const fn search_options(&self) -> SearchOptions {
        SearchOptions {
            skip_duplicate_pieces: !self.cli.keep_duplicates,
        }
    }

    /// Solve the puzzle and write the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle is invalid, writing to `out` fails or the
    /// image cannot be exported
    // Allow print for progress notices that must not mix with the report
    #[allow(clippy::print_stderr)]
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SearchReport> {
        let puzzle = self.build_puzzle()?;

        if !self.cli.quiet && puzzle.piece_area() != puzzle.board_area() {
            eprintln!(
                "Pieces cover {} cells but the board has {}",
                puzzle.piece_area(),
                puzzle.board_area()
            );
        }

        let pieces = search_order(puzzle.pieces(), self.cli.seed);
        let mut progress = if self.cli.should_show_progress() {
            SearchProgress::new(pieces.len())
        } else {
            SearchProgress::hidden(pieces.len())
        };

        let start_time = Instant::now();
        let report = Solver::new(puzzle.size(), pieces)?
            .with_options(self.search_options())
            .with_observer(&mut progress)
            .run()?;

        progress.finish();
        if self.cli.should_show_progress() {
            eprintln!(
                "Searched {} in {:.2?}",
                format_stats(&report.stats),
                start_time.elapsed()
            );
            if report.outcome.is_solved() && report.unplaced > 0 {
                eprintln!("{} pieces were left unplaced", report.unplaced);
            }
        }

        write_outcome(out, &report.outcome).map_err(report_write_error)?;

        if let Some(solution) = report.outcome.solution() {
            let layout = solution.layout()?;
            if self.cli.render {
                writeln!(out).map_err(report_write_error)?;
                write_layout(out, &layout).map_err(report_write_error)?;
            }
            if let Some(ref path) = self.cli.output {
                export_layout_as_png(&layout, PNG_CELL_SCALE, path)?;
            }
        } else if self.cli.output.is_some() && !self.cli.quiet {
            eprintln!("No image written: the board could not be covered");
        }

        Ok(report)
    }

    /// Process exit status for a finished search
    pub fn exit_code(&self, report: &SearchReport) -> ExitCode {
        if self.cli.strict && !report.outcome.is_solved() {
            ExitCode::from(EXHAUSTED_EXIT_CODE)
        } else {
            ExitCode::SUCCESS
        }
    }
}
