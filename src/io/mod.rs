/// Command-line parsing and the puzzle runner
pub mod cli;
/// Puzzle constants and output defaults
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// PNG export of tiled boards
pub mod image;
/// Terminal progress for long searches
pub mod progress;
/// Text rendering of search outcomes
pub mod report;
