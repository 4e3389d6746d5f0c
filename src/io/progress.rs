//! Progress bar management for batch runs

use crate::io::configuration::BATCH_PROGRESS_THRESHOLD;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static ITERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} steps")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display across files and refinement steps
///
/// A batch-level bar appears only when several files are processed; the
/// per-file bar tracks refinement steps within the current image.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    step_bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no visible bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            step_bar: ProgressBar::hidden(),
        }
    }

    /// Initialize bars for the given number of files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count >= BATCH_PROGRESS_THRESHOLD {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let step_bar = ProgressBar::new(0);
        step_bar.set_style(ITERATION_STYLE.clone());
        self.step_bar = self.multi_progress.add(step_bar);
    }

    /// Reset the step bar for a new file
    pub fn start_file(&mut self, path: &Path, step_budget: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.step_bar.reset();
        self.step_bar.set_length(step_budget as u64);
        self.step_bar.set_position(0);
        self.step_bar.set_message(display_name);
    }

    /// Report the current refinement step
    pub fn update_step(&self, step: usize) {
        self.step_bar.set_position(step as u64);
    }

    /// Mark the current file as completed
    pub fn complete_file(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        self.step_bar.finish();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
