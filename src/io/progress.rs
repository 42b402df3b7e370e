//! Spinner showing search activity while the backtracking runs

use crate::algorithm::search::SearchObserver;
use crate::io::configuration::PROGRESS_TICK_INTERVAL;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Search observer driving a terminal spinner
///
/// The spinner is refreshed every [`PROGRESS_TICK_INTERVAL`] nodes so the
/// hot path only pays for a counter increment.
pub struct SearchProgress {
    spinner: ProgressBar,
    piece_count: usize,
    nodes: u64,
    backtracks: u64,
    depth: usize,
    deepest: usize,
}

impl SearchProgress {
    /// Create a spinner drawing to stderr
    pub fn new(piece_count: usize) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message(format!("searching with {piece_count} pieces"));
        Self::with_bar(spinner, piece_count)
    }

    /// Create a progress tracker that counts but never draws
    pub fn hidden(piece_count: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), piece_count)
    }

    fn with_bar(spinner: ProgressBar, piece_count: usize) -> Self {
        Self {
            spinner,
            piece_count,
            nodes: 0,
            backtracks: 0,
            depth: 0,
            deepest: 0,
        }
    }

    /// Nodes seen so far
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Backtracks seen so far
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Most pieces seen placed at once
    pub const fn deepest(&self) -> usize {
        self.deepest
    }

    /// Status line shown next to the spinner
    pub fn message(&self) -> String {
        format!(
            "{} nodes, depth {}/{}, deepest {}",
            self.nodes, self.depth, self.piece_count, self.deepest
        )
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl SearchObserver for SearchProgress {
    fn on_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.depth = depth;
        self.deepest = self.deepest.max(depth);

        if self.nodes % PROGRESS_TICK_INTERVAL == 0 {
            self.spinner.set_message(self.message());
            self.spinner.tick();
        }
    }

    fn on_backtrack(&mut self, depth: usize) {
        self.backtracks += 1;
        self.depth = depth;
    }
}
