//! Text output of search results

use std::io::Write;

use crate::algorithm::search::{SearchOutcome, SearchStats};
use crate::io::configuration::{EMPTY_SYMBOL, LAYOUT_SYMBOLS};
use crate::spatial::layout::Layout;

/// Header line printed before the placements of a solution
pub const SOLUTION_HEADER: &str = "Solution:";
/// Line printed when the search is exhausted
pub const NO_SOLUTION: &str = "No solution found.";

/// Write the outcome: a header and one line per placement, or a single
/// no-solution line
///
/// # Errors
///
/// Returns any error raised by the writer
pub fn write_outcome<W: Write>(out: &mut W, outcome: &SearchOutcome) -> std::io::Result<()> {
    match outcome {
        SearchOutcome::Solved(solution) => {
            writeln!(out, "{SOLUTION_HEADER}")?;
            for placement in solution.placements() {
                writeln!(
                    out,
                    "Piece ({:2}, {:2}) at ({:2}, {:2})",
                    placement.width, placement.height, placement.x, placement.y
                )?;
            }
        }
        SearchOutcome::Exhausted => writeln!(out, "{NO_SOLUTION}")?,
    }
    Ok(())
}

/// Symbol used for a layout label in text renderings
pub fn label_symbol(label: u32) -> char {
    if label == 0 {
        return EMPTY_SYMBOL;
    }
    let symbols = LAYOUT_SYMBOLS.chars().count();
    let index = (label as usize - 1) % symbols;
    LAYOUT_SYMBOLS.chars().nth(index).unwrap_or(EMPTY_SYMBOL)
}

/// Write the board as text, one symbol per cell and one line per row
///
/// # Errors
///
/// Returns any error raised by the writer
pub fn write_layout<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    for row in layout.rows() {
        let line: String = row.into_iter().map(label_symbol).collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// One-line summary of the work done by a search
pub fn format_stats(stats: &SearchStats) -> String {
    format!(
        "{} nodes, {} attempts, {} placements, {} backtracks, deepest {}",
        stats.nodes, stats.attempts, stats.placements, stats.backtracks, stats.deepest
    )
}
