/// Bitset over piece indices tracking the pool of unplaced pieces
pub mod bitset;
/// Descending-area piece ordering with seeded tie shuffling
pub mod ordering;
/// Backtracking search anchored at the first free cell
pub mod search;
/// Completed tilings and their verification
pub mod solution;
