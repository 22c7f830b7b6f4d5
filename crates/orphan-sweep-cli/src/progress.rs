use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use orphan_sweep_core::{CleanupOutcome, LibraryScan, ProgressReporter};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// CLI progress reporter using indicatif progress bars.
///
/// - Library listing: spinner
/// - Studio processing: progress bar (studio count known after listing)
/// - Deletion: one line per item, printed above the bar
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_bar(&self, pb: ProgressBar) {
        let mut guard = self.guard();
        if let Some(old) = guard.take() {
            old.finish_and_clear();
        }
        *guard = Some(pb);
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.guard().take() {
            pb.finish_and_clear();
        }
    }

    fn println(&self, line: String) {
        match self.guard().as_ref() {
            Some(pb) => pb.println(line),
            None => println!("{}", line),
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(TICK_CHARS)
}

fn studio_bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "  {spinner:.cyan} Studios [{bar:30.cyan/dim}] {pos}/{len} {wide_msg:.dim}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━╸─")
    .tick_chars(TICK_CHARS)
}

impl ProgressReporter for CliReporter {
    fn on_library_start(&self, root: &Path) {
        println!("Scanning library: {}", root.display());
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style());
        pb.set_message("Listing studios...");
        pb.enable_steady_tick(Duration::from_millis(80));
        self.set_bar(pb);
    }

    fn on_studios_found(&self, _root: &Path, studio_count: usize) {
        let pb = ProgressBar::new(studio_count as u64);
        pb.set_style(studio_bar_style());
        pb.enable_steady_tick(Duration::from_millis(80));
        self.set_bar(pb);
    }

    fn on_studio_complete(&self, done: usize, _total: usize, studio: &Path) {
        if let Some(pb) = self.guard().as_ref() {
            pb.set_position(done as u64);
            if let Some(name) = studio.file_name() {
                pb.set_message(name.to_string_lossy().into_owned());
            }
        }
    }

    fn on_library_complete(&self, scan: &LibraryScan) {
        self.finish_bar();
        eprintln!(
            "  {} Scan complete: {} studios, {} title folders in {:.2}s",
            "✓".green(),
            scan.studios,
            scan.titles,
            scan.duration.as_secs_f64()
        );
    }

    fn on_cleanup_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} Deleting [{bar:30.red/dim}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("━╸─")
                .tick_chars(TICK_CHARS),
        );
        self.set_bar(pb);
    }

    fn on_item_deleted(&self, path: &Path) {
        self.println(format!("{} Deleted: {}", "✓".green(), path.display()));
        if let Some(pb) = self.guard().as_ref() {
            pb.inc(1);
        }
    }

    fn on_item_failed(&self, path: &Path, error: &str) {
        self.println(format!(
            "{} Failed to delete {}: {}",
            "❌".red(),
            path.display(),
            error
        ));
        if let Some(pb) = self.guard().as_ref() {
            pb.inc(1);
        }
    }

    fn on_cleanup_complete(&self, _outcome: &CleanupOutcome) {
        self.finish_bar();
    }
}
