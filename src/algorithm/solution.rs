use crate::io::error::{Result, invalid_layout};
use crate::spatial::layout::Layout;
use crate::spatial::pieces::Placement;

/// Complete tiling found by the search, in placement order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    size: usize,
    placements: Vec<Placement>,
}

impl Solution {
    /// Wrap a placement trail for a board of side `size`
    pub const fn new(size: usize, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }

    /// Board side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Placements in the order the search committed them
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placed pieces
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check whether no piece was placed
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Sum of placed areas
    pub fn total_area(&self) -> usize {
        self.placements.iter().map(Placement::area).sum()
    }

    /// Label grid of the tiling
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayout` if placements leave the board or overlap
    pub fn layout(&self) -> Result<Layout> {
        Layout::from_placements(self.size, &self.placements)
    }

    /// Check that placements stay on the board, are pairwise disjoint and
    /// cover every cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayout` describing the first defect found
    pub fn verify(&self) -> Result<()> {
        let layout = self.layout()?;
        if !layout.is_complete() {
            return Err(invalid_layout(&format!(
                "{} cells are left uncovered",
                layout.empty_cells()
            )));
        }
        Ok(())
    }
}
