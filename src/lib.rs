//! Exact rectangle packing of a square board by bitboard backtracking
//!
//! The board is a grid of occupancy bits, one `u64` per row. The search always
//! fills the topmost-leftmost free cell next, trying every unplaced piece in
//! both orientations there and undoing placements on failure, until every
//! cell is covered or every branch is exhausted.

#![forbid(unsafe_code)]

/// Backtracking search, piece ordering and solutions
pub mod algorithm;
/// Command line, configuration, errors and output
pub mod io;
/// Board, pieces, layouts and puzzle generation
pub mod spatial;

pub use algorithm::search::{SearchOutcome, SearchReport, solve};
pub use io::error::{PackingError, Result};
pub use spatial::{Board, Piece, Puzzle};
