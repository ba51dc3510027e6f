//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static OVERALL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Per-file display state: collapse progress plus the running attempt number
#[derive(Clone, Default)]
struct FileProgress {
    name: String,
    collapsed: usize,
    total: usize,
    attempt: usize,
}

impl FileProgress {
    fn started(&self) -> bool {
        !self.name.is_empty()
    }

    fn paint(&self, bar: &ProgressBar) {
        bar.set_length(self.total as u64);
        bar.set_position(self.collapsed as u64);
        let width = self.total.to_string().len();
        bar.set_message(format!(
            "attempt {} {:>width$}/{}",
            self.attempt, self.collapsed, self.total
        ));
        bar.set_prefix(self.name.clone());
    }
}

/// Coordinates progress display for batch operations
///
/// Small batches get one bar per file showing collapsed cells against the
/// output total and the current attempt number, which bumps whenever a
/// contradiction forces a restart. Large batches collapse to a rolling
/// window of per-file bars under a single overall counter.
pub struct ProgressManager {
    multi: MultiProgress,
    overall: Option<ProgressBar>,
    bars: Vec<ProgressBar>,
    states: Vec<FileProgress>,
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
            multi: MultiProgress::new(),
            overall: None,
            bars: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Allocate bars for the batch, switching to overall mode when large
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let overall = ProgressBar::new(file_count as u64);
            overall.set_style(OVERALL_STYLE.clone());
            self.overall = Some(self.multi.add(overall));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(CELL_STYLE.clone());
            self.bars.push(self.multi.add(bar));
        }
    }

    /// Begin displaying a file, sized by its output cell count
    pub fn start_file(&mut self, index: usize, path: &Path, total_cells: usize) {
        if index >= self.states.len() {
            self.states.resize(index + 1, FileProgress::default());
        }
        if let Some(state) = self.states.get_mut(index) {
            *state = FileProgress {
                name: path.file_name().unwrap_or_default().to_string_lossy().into(),
                collapsed: 0,
                total: total_cells,
                attempt: 1,
            };
        }
        self.redraw();
    }

    /// Report collapsed cell count and attempt number for a file
    pub fn update_solving(&mut self, index: usize, collapsed: usize, attempt: usize) {
        if let Some(state) = self.states.get_mut(index) {
            state.collapsed = collapsed;
            state.attempt = attempt;
        }
        self.redraw();
    }

    /// Mark a file finished and advance the overall counter
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref overall) = self.overall {
            overall.inc(1);
        }
        if let Some(state) = self.states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.collapsed = state.total;
        }
        self.redraw();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref overall) = self.overall {
            overall.finish_with_message("All files processed");
        }
        let _ = self.multi.clear();
    }

    /// Paint the most recently started files onto the available bars
    fn redraw(&self) {
        let active: Vec<&FileProgress> =
            self.states.iter().filter(|state| state.started()).collect();
        let window_start = active.len().saturating_sub(self.bars.len());
        let visible = active.get(window_start..).unwrap_or(&[]);

        for (state, bar) in visible.iter().zip(&self.bars) {
            state.paint(bar);
        }
        for bar in self.bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
