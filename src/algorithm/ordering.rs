//! Order in which pieces are offered to the search
//!
//! Trying large pieces first fills the board with few, constrained choices
//! near the root. The order never affects whether a packing is found, only
//! which one is found first and how long it takes.

use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::spatial::pieces::Piece;

/// Stable sort by descending area; equal areas keep their relative order
pub fn sort_by_area_descending(pieces: &mut [Piece]) {
    pieces.sort_by(|a, b| b.area().cmp(&a.area()));
}

/// Search order for a piece list
///
/// With a `tie_seed`, pieces are shuffled with that seed before the stable
/// sort, so pieces of equal area get a reproducible seed-dependent order.
pub fn search_order(pieces: &[Piece], tie_seed: Option<u64>) -> Vec<Piece> {
    let mut ordered = pieces.to_vec();
    if let Some(seed) = tie_seed {
        let mut rng = StdRng::seed_from_u64(seed);
        ordered.shuffle(&mut rng);
    }
    sort_by_area_descending(&mut ordered);
    ordered
}
