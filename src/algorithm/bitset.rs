use bitvec::prelude::*;

/// Fixed-size bitset over piece indices, used as the pool of unplaced pieces
///
/// Indices are 0-based positions in the search order. Out-of-range indices
/// are ignored by mutations and never reported as members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSet {
    bits: BitVec,
    capacity: usize,
}

impl PieceSet {
    /// Create a set containing every piece index below `capacity`
    pub fn full(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Insert a piece index
    pub fn insert(&mut self, piece: usize) {
        if piece < self.capacity {
            self.bits.set(piece, true);
        }
    }

    /// Remove a piece index
    pub fn remove(&mut self, piece: usize) {
        if piece < self.capacity {
            self.bits.set(piece, false);
        }
    }

    /// Test piece membership
    pub fn contains(&self, piece: usize) -> bool {
        self.bits.get(piece).as_deref() == Some(&true)
    }

    /// Test if no pieces are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count pieces in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }
}
