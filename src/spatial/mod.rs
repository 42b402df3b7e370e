//! Spatial data structures for the packing board
//!
//! This module contains spatial-related functionality including:
//! - The occupancy bitboard
//! - Pieces, orientations and placements
//! - Label grids reconstructed from placements
//! - Random solvable partitions

/// Occupancy bitboard with free-cell accounting
pub mod board;
/// Label grid built from a placement trail
pub mod layout;
/// Random guillotine partitions of a board
pub mod partition;
/// Piece, orientation, placement and puzzle types
pub mod pieces;

pub use board::Board;
pub use pieces::{Orientation, Piece, Placement, Puzzle};
