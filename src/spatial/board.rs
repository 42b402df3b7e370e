//! Square occupancy bitboard with one row word per board row
//!
//! Bit `x` of row `y` is set iff cell `(x, y)` is covered. The board keeps a
//! running count of free cells that always equals `size * size` minus the
//! number of set bits. Cells are also addressed by row-major index
//! `y * size + x`, which is the order the search fills them in.

use std::fmt;

use crate::io::configuration::MAX_BOARD_SIZE;
use crate::io::error::{PackingError, Result};

/// Check that `size` is a supported board side
///
/// # Errors
///
/// Returns `InvalidBoardSize` if `size` is zero or exceeds [`MAX_BOARD_SIZE`]
pub const fn validate_board_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(PackingError::InvalidBoardSize {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

/// Occupancy state of a square board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<u64>,
    size: usize,
    free_cells: usize,
}

impl Board {
    /// Create an empty board of the given side length
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoardSize` if `size` is zero or exceeds [`MAX_BOARD_SIZE`]
    pub fn new(size: usize) -> Result<Self> {
        validate_board_size(size)?;

        Ok(Self {
            rows: vec![0; size],
            size,
            free_cells: size * size,
        })
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Number of uncovered cells
    pub const fn free_cells(&self) -> usize {
        self.free_cells
    }

    /// Check whether every cell is covered
    pub const fn is_full(&self) -> bool {
        self.free_cells == 0
    }

    /// Row words, bit `x` of entry `y` covering cell `(x, y)`
    pub fn rows(&self) -> &[u64] {
        &self.rows
    }

    /// Count covered cells directly from the row words
    pub fn occupied_cells(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Row-major index of a cell
    pub const fn cell_index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Column and row of a row-major cell index
    pub const fn cell_coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    /// Test a single cell; cells outside the board read as occupied
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        if x >= self.size {
            return true;
        }
        self.rows.get(y).is_none_or(|row| (row >> x) & 1 == 1)
    }

    /// Mask of `width` contiguous set bits starting at bit `shift`
    ///
    /// Widths of 64 or more saturate to a full word; bits moved past the top
    /// of the word are dropped.
    pub fn mask(width: usize, shift: usize) -> u64 {
        if width == 0 {
            return 0;
        }
        let base = if width >= 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        u32::try_from(shift)
            .ok()
            .and_then(|shift| base.checked_shl(shift))
            .unwrap_or(0)
    }

    /// Check that a `width` x `height` rectangle with top-left `(x, y)` lies on
    /// the board and covers only free cells
    ///
    /// Out-of-bounds rectangles are rejected before any bit is examined, for
    /// any extent up to `usize::MAX`.
    pub fn is_free(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        let outside = |start: usize, extent: usize| {
            start
                .checked_add(extent)
                .is_none_or(|end| end > self.size)
        };
        if outside(x, width) || outside(y, height) {
            return false;
        }
        let mask = Self::mask(width, x);
        self.rows
            .iter()
            .skip(y)
            .take(height)
            .all(|row| row & mask == 0)
    }

    /// Cover a rectangle
    ///
    /// The caller must have checked the region with [`Self::is_free`]; this is
    /// the search hot path and performs no verification.
    pub fn place(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let mask = Self::mask(width, x);
        for row in self.rows.iter_mut().skip(y).take(height) {
            *row |= mask;
        }
        self.free_cells -= width * height;
    }

    /// Uncover a rectangle previously covered by [`Self::place`] with the same
    /// arguments
    pub fn remove(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let mask = Self::mask(width, x);
        for row in self.rows.iter_mut().skip(y).take(height) {
            *row &= !mask;
        }
        self.free_cells += width * height;
    }

    /// Lowest row-major cell index at or after `start` that is free
    pub fn find_next_free(&self, start: usize) -> Option<usize> {
        if start >= self.cell_count() {
            return None;
        }

        let (start_x, start_y) = self.cell_coordinates(start);
        let row_mask = Self::mask(self.size, 0);

        for (y, row) in self.rows.iter().enumerate().skip(start_y) {
            // Columns before the start cell only matter on the first row
            let skipped = if y == start_y { start_x } else { 0 };
            let free = !row & row_mask & !Self::mask(skipped, 0);
            if free != 0 {
                return Some(self.cell_index(free.trailing_zeros() as usize, y));
            }
        }

        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let symbol = if self.is_occupied(x, y) { '#' } else { '.' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
