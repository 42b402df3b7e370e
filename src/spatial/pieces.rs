//! Rectangular pieces, their orientations and their placements on a board

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, REFERENCE_PIECES};
use crate::io::error::{PackingError, Result};
use crate::spatial::board::validate_board_size;

/// Effective width and height a piece is laid down with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Extent along the row axis
    pub width: usize,
    /// Extent along the column axis
    pub height: usize,
}

impl Orientation {
    /// Number of cells covered
    pub const fn area(self) -> usize {
        self.width * self.height
    }
}

/// Immutable axis-aligned rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    width: usize,
    height: usize,
}

impl Piece {
    /// Create a piece
    ///
    /// # Errors
    ///
    /// Returns `InvalidPiece` if either side is zero or longer than the
    /// largest supported board
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PackingError::InvalidPiece {
                width,
                height,
                reason: "both sides must be at least 1".to_string(),
            });
        }
        if width > MAX_BOARD_SIZE || height > MAX_BOARD_SIZE {
            return Err(PackingError::InvalidPiece {
                width,
                height,
                reason: format!("no side may exceed {MAX_BOARD_SIZE}"),
            });
        }
        Ok(Self { width, height })
    }

    /// Width as given
    pub const fn width(self) -> usize {
        self.width
    }

    /// Height as given
    pub const fn height(self) -> usize {
        self.height
    }

    /// Number of cells covered in either orientation
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    /// Square pieces look the same when rotated
    pub const fn is_square(self) -> bool {
        self.width == self.height
    }

    /// Side lengths ordered short-then-long, equal for rotated copies
    pub fn shape(self) -> (usize, usize) {
        (self.width.min(self.height), self.width.max(self.height))
    }

    /// Orientations worth trying: as given, then rotated unless square
    pub fn orientations(self) -> impl Iterator<Item = Orientation> {
        let given = Orientation {
            width: self.width,
            height: self.height,
        };
        let rotated = (!self.is_square()).then_some(Orientation {
            width: self.height,
            height: self.width,
        });
        std::iter::once(given).chain(rotated)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Piece {
    type Err = PackingError;

    /// Parse `WxH` (or `W,H`)
    fn from_str(text: &str) -> Result<Self> {
        let malformed = || crate::io::error::invalid_parameter("piece", &text, &"expected WxH");

        let (width, height) = text
            .trim()
            .split_once(['x', 'X', ','])
            .ok_or_else(malformed)?;
        let width = width.trim().parse::<usize>().ok().ok_or_else(malformed)?;
        let height = height.trim().parse::<usize>().ok().ok_or_else(malformed)?;
        Self::new(width, height)
    }
}

/// One entry of the placement trail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Index of the piece in the search order
    pub piece: usize,
    /// Column of the top-left cell
    pub x: usize,
    /// Row of the top-left cell
    pub y: usize,
    /// Effective width
    pub width: usize,
    /// Effective height
    pub height: usize,
}

impl Placement {
    /// Row-major index of the top-left cell on a board of side `size`
    pub const fn cell(&self, size: usize) -> usize {
        self.y * size + self.x
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Orientation the piece was placed in
    pub const fn orientation(&self) -> Orientation {
        Orientation {
            width: self.width,
            height: self.height,
        }
    }

    /// Check whether both rectangles share a cell
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Board side and the pieces that must cover it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    pieces: Vec<Piece>,
}

impl Puzzle {
    /// Create a puzzle
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoardSize` if `size` is zero or exceeds [`MAX_BOARD_SIZE`]
    pub fn new(size: usize, pieces: Vec<Piece>) -> Result<Self> {
        validate_board_size(size)?;
        Ok(Self { size, pieces })
    }

    /// Create a puzzle from raw `(width, height)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if the size or any piece is invalid
    pub fn from_dimensions(size: usize, dimensions: &[(usize, usize)]) -> Result<Self> {
        let pieces = dimensions
            .iter()
            .map(|&(width, height)| Piece::new(width, height))
            .collect::<Result<Vec<_>>>()?;
        Self::new(size, pieces)
    }

    /// The built-in 56x56 instance with twelve pieces
    ///
    /// # Errors
    ///
    /// Only fails if the reference constants are edited into an invalid state
    pub fn reference() -> Result<Self> {
        Self::from_dimensions(DEFAULT_BOARD_SIZE, &REFERENCE_PIECES)
    }

    /// Board side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Pieces in input order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of cells on the board
    pub const fn board_area(&self) -> usize {
        self.size * self.size
    }

    /// Sum of all piece areas
    pub fn piece_area(&self) -> usize {
        self.pieces.iter().map(|piece| piece.area()).sum()
    }
}
