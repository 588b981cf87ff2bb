//! Batch progress tracking for multi-puzzle generation

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch generation
///
/// Small batches just report per-puzzle completion messages; larger
/// batches get a single batch bar to avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Initialize the display for the given puzzle count
    pub fn initialize(&mut self, puzzle_count: usize) {
        if puzzle_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(puzzle_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            batch_bar.enable_steady_tick(Duration::from_millis(100));
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Mark one puzzle as completed
    pub fn complete_puzzle(&self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
            batch_bar.set_message(format!(
                "puzzle {} in {} ms",
                index + 1,
                elapsed.as_millis()
            ));
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All puzzles generated");
        }
        let _ = self.multi_progress.clear();
    }
}
