use crate::cleanup::CleanupOutcome;
use crate::engine::LibraryScan;
use std::path::Path;

/// Trait for reporting sweep progress.
///
/// CLI implements with indicatif. Scan hooks are called from worker threads.
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_library_start(&self, _root: &Path) {}
    fn on_studios_found(&self, _root: &Path, _studio_count: usize) {}
    fn on_studio_complete(&self, _done: usize, _total: usize, _studio: &Path) {}
    fn on_library_complete(&self, _scan: &LibraryScan) {}
    fn on_cleanup_start(&self, _total: usize) {}
    fn on_item_deleted(&self, _path: &Path) {}
    fn on_item_failed(&self, _path: &Path, _error: &str) {}
    fn on_cleanup_complete(&self, _outcome: &CleanupOutcome) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
