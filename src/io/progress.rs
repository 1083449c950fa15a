//! Progress display for batch generation

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many seeds of a batch have been rendered
pub struct ProgressManager {
    bar: ProgressBar,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, skipped: 0 }
    }

    /// Create a progress manager that tracks counts without drawing
    pub fn hidden() -> Self {
        let manager = Self::new();
        manager.bar.set_draw_target(ProgressDrawTarget::hidden());
        manager
    }

    /// Set the number of seeds in the batch
    pub fn initialize(&mut self, seed_count: usize) {
        self.bar.set_length(seed_count as u64);
        self.bar.set_position(0);
        self.skipped = 0;
    }

    /// Show which seed is being rendered
    pub fn start_seed(&self, seed: &str) {
        self.bar.set_message(seed.to_string());
    }

    /// Count a rendered seed
    pub fn complete_seed(&self) {
        self.bar.inc(1);
    }

    /// Count a seed whose output already existed
    pub fn skip_seed(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Seeds handled so far, rendered or skipped
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Seeds skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        let message = if self.skipped == 0 {
            "All patterns generated".to_string()
        } else {
            format!("Done ({} skipped)", self.skipped)
        };
        self.bar.finish_with_message(message);
    }
}
