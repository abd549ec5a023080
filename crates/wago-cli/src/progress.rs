//! Console progress bars.

use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use wago_core::{Phase, ProgressReporter};
use wago_ingest::{DownloadProgress, SourceTable};

const TICK: Duration = Duration::from_millis(120);

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("  {prefix:25} [{bar:40}] {percent:>3}%  {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("  {prefix:25} {spinner:.dim} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["|", "/", "-", "\\", " "])
}

/// Progress bars for table downloads, one line per table.
pub struct DownloadBars {
    multi: MultiProgress,
}

impl DownloadBars {
    pub fn new(hidden: bool) -> Self {
        let multi = if hidden {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };
        Self { multi }
    }

    /// Adds the bar for `table`; its length is set once the response size is known.
    pub fn table_bar(&self, table: SourceTable) -> ProgressBar {
        let bar = self.multi.add(ProgressBar::no_length());
        bar.set_style(spinner_style());
        bar.set_prefix(format!("Fetching {table}"));
        bar.enable_steady_tick(TICK);
        bar
    }
}

/// Updates a download bar from a progress callback.
pub fn update_download_bar(bar: &ProgressBar, progress: DownloadProgress) {
    if let Some(total) = progress.total
        && bar.length() != Some(total)
    {
        bar.set_length(total);
        bar.set_style(bar_style());
    }
    bar.set_position(progress.downloaded);
    bar.set_message(progress.downloaded_display());
}

/// [`ProgressReporter`] drawing one bar per pipeline phase.
pub struct ConsoleReporter {
    hidden: bool,
    current: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(hidden: bool) -> Self {
        Self {
            hidden,
            current: None,
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn phase_started(&mut self, phase: Phase, total: Option<u64>) {
        let bar = match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                bar.set_style(bar_style());
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(spinner_style());
                bar.enable_steady_tick(TICK);
                bar
            }
        };
        if self.hidden {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_prefix(phase.label());
        self.current = Some(bar);
    }

    fn advance(&mut self, delta: u64) {
        if let Some(bar) = &self.current {
            bar.inc(delta);
        }
    }

    fn phase_finished(&mut self, _phase: Phase) {
        if let Some(bar) = self.current.take() {
            bar.finish_with_message("done");
        }
    }
}
