//! Puzzle constants and runtime configuration defaults

/// Side length of the reference board
pub const DEFAULT_BOARD_SIZE: usize = 56;

// Each board row is packed into a single u64
/// Largest supported board side
pub const MAX_BOARD_SIZE: usize = 64;

/// Pieces of the reference puzzle as (width, height)
///
/// Their areas sum to exactly `DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE`.
pub const REFERENCE_PIECES: [(usize, usize); 12] = [
    (28, 14),
    (21, 18),
    (21, 18),
    (21, 14),
    (21, 14),
    (32, 11),
    (32, 10),
    (28, 7),
    (28, 6),
    (17, 14),
    (14, 4),
    (10, 7),
];

/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;

// Progress display settings
/// Number of search nodes between spinner refreshes
pub const PROGRESS_TICK_INTERVAL: u64 = 50_000;

// Output settings
/// Pixels per board cell in exported images
pub const PNG_CELL_SCALE: u32 = 8;
/// Symbols assigned to pieces in text renderings, cycled in trail order
pub const LAYOUT_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
/// Symbol for an uncovered cell in text renderings
pub const EMPTY_SYMBOL: char = '.';
/// Process exit status for an exhausted search when `--strict` is set
pub const EXHAUSTED_EXIT_CODE: u8 = 2;
