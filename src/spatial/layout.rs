//! Label grid reconstructed from a placement trail
//!
//! Each cell holds 0 when uncovered or `k + 1` when covered by the `k`-th
//! placement. Building the grid checks bounds and overlap, so a layout that
//! exists is always a valid partial tiling.

use ndarray::Array2;

use crate::io::error::{Result, invalid_layout};
use crate::spatial::pieces::Placement;

/// Cell-by-cell view of which placement covers what
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Labels indexed by `[row, col]`
    labels: Array2<u32>,
}

impl Layout {
    /// Create a layout with no cells covered
    pub fn empty(size: usize) -> Self {
        Self {
            labels: Array2::zeros((size, size)),
        }
    }

    /// Paint placements in trail order onto a `size` x `size` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayout` if a placement leaves the board or covers a cell
    /// already covered by an earlier placement
    pub fn from_placements(size: usize, placements: &[Placement]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for (index, placement) in placements.iter().enumerate() {
            if placement.x + placement.width > size || placement.y + placement.height > size {
                return Err(invalid_layout(&format!(
                    "placement {index} ({}x{} at {}, {}) leaves the {size}x{size} board",
                    placement.width, placement.height, placement.x, placement.y
                )));
            }

            let label = index as u32 + 1;
            for row in placement.y..placement.y + placement.height {
                for col in placement.x..placement.x + placement.width {
                    let Some(cell) = layout.labels.get_mut([row, col]) else {
                        return Err(invalid_layout(&format!("cell ({col}, {row}) is missing")));
                    };
                    if *cell != 0 {
                        return Err(invalid_layout(&format!(
                            "placement {index} overlaps placement {} at ({col}, {row})",
                            *cell - 1
                        )));
                    }
                    *cell = label;
                }
            }
        }

        Ok(layout)
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.labels.nrows()
    }

    /// Label of the cell at column `x`, row `y`
    pub fn label_at(&self, x: usize, y: usize) -> Option<u32> {
        self.labels.get([y, x]).copied()
    }

    /// Number of cells not covered by any placement
    pub fn empty_cells(&self) -> usize {
        self.labels.iter().filter(|&&label| label == 0).count()
    }

    /// Check that every cell is covered
    pub fn is_complete(&self) -> bool {
        self.empty_cells() == 0
    }

    /// Rows of labels from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<u32>> + '_ {
        self.labels.rows().into_iter().map(|row| row.to_vec())
    }
}
