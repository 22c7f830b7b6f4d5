use crate::findings::CleanupReport;
use crate::progress::ProgressReporter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupOutcome {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    /// Paths that were already gone when their turn came.
    pub skipped: Vec<PathBuf>,
}

/// Delete everything the report marks as deletable.
///
/// Orphaned folders go first (recursively), then orphaned files, then empty
/// folders in reverse discovery order. Removing an orphaned folder can take
/// other listed paths with it, so files and empty folders are re-checked
/// before removal. Structure warnings are never acted on.
pub fn execute_cleanup(report: &CleanupReport, reporter: &dyn ProgressReporter) -> CleanupOutcome {
    let mut outcome = CleanupOutcome::default();
    reporter.on_cleanup_start(report.deletable_count());

    for folder in &report.orphaned_folders {
        remove_path(folder, |p| fs::remove_dir_all(p), &mut outcome, reporter);
    }

    for file in &report.orphaned_files {
        remove_path(file, |p| fs::remove_file(p), &mut outcome, reporter);
    }

    // An empty folder that gained content since the scan fails here rather
    // than being removed with its new content.
    for folder in report.empty_folders.iter().rev() {
        remove_path(folder, |p| fs::remove_dir(p), &mut outcome, reporter);
    }

    info!(
        "Cleanup executed: {} deleted, {} failed, {} already gone",
        outcome.deleted.len(),
        outcome.failed.len(),
        outcome.skipped.len()
    );
    reporter.on_cleanup_complete(&outcome);
    outcome
}

fn remove_path<F>(
    path: &Path,
    remove: F,
    outcome: &mut CleanupOutcome,
    reporter: &dyn ProgressReporter,
) where
    F: Fn(&Path) -> io::Result<()>,
{
    if !exists(path) {
        warn!("'{}' no longer exists, skipping", path.display());
        outcome.skipped.push(path.to_path_buf());
        return;
    }

    match remove(path) {
        Ok(()) => {
            debug!("Deleted: {}", path.display());
            reporter.on_item_deleted(path);
            outcome.deleted.push(path.to_path_buf());
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("'{}' vanished before removal, skipping", path.display());
            outcome.skipped.push(path.to_path_buf());
        }
        Err(err) => {
            let message = err.to_string();
            error!("Failed to delete '{}': {}", path.display(), message);
            reporter.on_item_failed(path, &message);
            outcome.failed.push((path.to_path_buf(), message));
        }
    }
}

fn exists(path: &Path) -> bool {
    !matches!(fs::symlink_metadata(path), Err(err) if err.kind() == io::ErrorKind::NotFound)
}
