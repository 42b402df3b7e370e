//! Depth-first backtracking over the occupancy bitboard
//!
//! Every node is anchored to the lowest-indexed free cell. Whatever tiling
//! exists must cover that cell with some piece whose top-left corner sits on
//! it, so trying every remaining piece in both orientations there is enough
//! to keep the search complete while collapsing the branching factor to
//! "fixed cell, any piece". The floor passed to children is the anchor plus
//! one, so cells before it are always covered.

use crate::algorithm::bitset::PieceSet;
use crate::algorithm::solution::Solution;
use crate::io::error::{PackingError, Result};
use crate::spatial::board::Board;
use crate::spatial::pieces::{Orientation, Piece, Placement, Puzzle};

/// Hooks called while the search runs
///
/// All methods default to doing nothing.
pub trait SearchObserver {
    /// A node was entered with `depth` pieces placed
    fn on_node(&mut self, _depth: usize) {}

    /// An orientation of `piece` is about to be tested at `cell`
    fn on_attempt(&mut self, _piece: usize, _orientation: Orientation, _cell: usize) {}

    /// A placement was undone, returning the search to `depth` pieces placed
    fn on_backtrack(&mut self, _depth: usize) {}
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_node(&mut self, depth: usize) {
        (**self).on_node(depth);
    }

    fn on_attempt(&mut self, piece: usize, orientation: Orientation, cell: usize) {
        (**self).on_attempt(piece, orientation, cell);
    }

    fn on_backtrack(&mut self, depth: usize) {
        (**self).on_backtrack(depth);
    }
}

impl<O: SearchObserver> SearchObserver for Option<O> {
    fn on_node(&mut self, depth: usize) {
        if let Some(observer) = self {
            observer.on_node(depth);
        }
    }

    fn on_attempt(&mut self, piece: usize, orientation: Orientation, cell: usize) {
        if let Some(observer) = self {
            observer.on_attempt(piece, orientation, cell);
        }
    }

    fn on_backtrack(&mut self, depth: usize) {
        if let Some(observer) = self {
            observer.on_backtrack(depth);
        }
    }
}

/// Search behaviour switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Skip a piece at a node when a piece of the same shape was already tried
    /// there
    ///
    /// The skipped subtree mirrors one already explored, so the outcome and
    /// the first trail found are unchanged.
    pub skip_duplicate_pieces: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            skip_duplicate_pieces: true,
        }
    }
}

/// Counters collected during a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls entered
    pub nodes: u64,
    /// Orientations tested against the board
    pub attempts: u64,
    /// Pieces committed to the board
    pub placements: u64,
    /// Placements undone
    pub backtracks: u64,
    /// Most pieces placed at once
    pub deepest: usize,
}

/// Result of a completed search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every piece placed and every cell covered
    Solved(Solution),
    /// No arrangement covers the board with these pieces
    Exhausted,
}

impl SearchOutcome {
    /// Check whether a tiling was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Tiling found, if any
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Exhausted => None,
        }
    }
}

/// Outcome, counters and final board of a search
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Whether and how the board was tiled
    pub outcome: SearchOutcome,
    /// Work done by the search
    pub stats: SearchStats,
    /// Pieces still in the pool when the search ended
    ///
    /// Non-zero on success only when the pieces cover more than the board.
    pub unplaced: usize,
    /// Board as the search left it: tiled on success, empty on exhaustion
    pub board: Board,
}

/// Backtracking engine over one board and an ordered piece list
///
/// Pieces are tried in the order given; use
/// [`search_order`](crate::algorithm::ordering::search_order) to get the
/// usual descending-area order.
pub struct Solver<O: SearchObserver = NoopObserver> {
    board: Board,
    pieces: Vec<Piece>,
    pool: PieceSet,
    trail: Vec<Placement>,
    stats: SearchStats,
    options: SearchOptions,
    observer: O,
}

impl Solver<NoopObserver> {
    /// Create a solver for an empty board of side `size`
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoardSize` if `size` is not a supported board side
    pub fn new(size: usize, pieces: Vec<Piece>) -> Result<Self> {
        let board = Board::new(size)?;
        let pool = PieceSet::full(pieces.len());
        Ok(Self {
            board,
            trail: Vec::with_capacity(pieces.len()),
            pieces,
            pool,
            stats: SearchStats::default(),
            options: SearchOptions::default(),
            observer: NoopObserver,
        })
    }
}

impl<O: SearchObserver> Solver<O> {
    /// Replace the observer
    pub fn with_observer<P: SearchObserver>(self, observer: P) -> Solver<P> {
        Solver {
            board: self.board,
            pieces: self.pieces,
            pool: self.pool,
            trail: self.trail,
            stats: self.stats,
            options: self.options,
            observer,
        }
    }

    /// Replace the search options
    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Pieces in the order they are tried
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Run the search to the first tiling or to exhaustion
    ///
    /// # Errors
    ///
    /// Returns `InconsistentBoard` if the free-cell counter ever disagrees with
    /// the occupancy bits. This does not happen while the board is only
    /// mutated by the search itself.
    pub fn run(mut self) -> Result<SearchReport> {
        let solved = self.backtrack(0)?;

        let outcome = if solved {
            SearchOutcome::Solved(Solution::new(self.board.size(), self.trail))
        } else {
            SearchOutcome::Exhausted
        };

        Ok(SearchReport {
            outcome,
            stats: self.stats,
            unplaced: self.pool.len(),
            board: self.board,
        })
    }

    fn backtrack(&mut self, floor: usize) -> Result<bool> {
        let depth = self.trail.len();
        self.stats.nodes += 1;
        self.stats.deepest = self.stats.deepest.max(depth);
        self.observer.on_node(depth);

        if self.board.is_full() {
            return Ok(true);
        }
        if self.pool.is_empty() {
            return Ok(false);
        }

        let Some(cell) = self.board.find_next_free(floor) else {
            return Err(PackingError::InconsistentBoard {
                free_cells: self.board.free_cells(),
                floor,
            });
        };
        let (x, y) = self.board.cell_coordinates(cell);

        let mut tried_shapes: Vec<(usize, usize)> = Vec::new();

        for index in 0..self.pieces.len() {
            if !self.pool.contains(index) {
                continue;
            }
            let Some(&piece) = self.pieces.get(index) else {
                continue;
            };

            if self.options.skip_duplicate_pieces {
                let shape = piece.shape();
                if tried_shapes.contains(&shape) {
                    continue;
                }
                tried_shapes.push(shape);
            }

            for orientation in piece.orientations() {
                self.stats.attempts += 1;
                self.observer.on_attempt(index, orientation, cell);

                if self.try_place(index, orientation, x, y, cell)? {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    // Places, recurses and undoes on failure; the board is untouched unless
    // this returns Ok(true)
    fn try_place(
        &mut self,
        index: usize,
        orientation: Orientation,
        x: usize,
        y: usize,
        cell: usize,
    ) -> Result<bool> {
        let Orientation { width, height } = orientation;
        if !self.board.is_free(x, y, width, height) {
            return Ok(false);
        }

        self.board.place(x, y, width, height);
        self.trail.push(Placement {
            piece: index,
            x,
            y,
            width,
            height,
        });
        self.pool.remove(index);
        self.stats.placements += 1;

        if self.backtrack(cell + 1)? {
            return Ok(true);
        }

        self.pool.insert(index);
        self.trail.pop();
        self.board.remove(x, y, width, height);
        self.stats.backtracks += 1;
        self.observer.on_backtrack(self.trail.len());

        Ok(false)
    }
}

/// Solve a puzzle with the pieces in descending-area order
///
/// # Errors
///
/// Propagates board construction and invariant errors from [`Solver::run`]
pub fn solve(puzzle: &Puzzle) -> Result<SearchReport> {
    solve_with(puzzle, SearchOptions::default(), NoopObserver)
}

/// Solve a puzzle in descending-area order with explicit options and observer
///
/// # Errors
///
/// Propagates board construction and invariant errors from [`Solver::run`]
pub fn solve_with<O: SearchObserver>(
    puzzle: &Puzzle,
    options: SearchOptions,
    observer: O,
) -> Result<SearchReport> {
    let pieces = crate::algorithm::ordering::search_order(puzzle.pieces(), None);
    Solver::new(puzzle.size(), pieces)?
        .with_options(options)
        .with_observer(observer)
        .run()
}
