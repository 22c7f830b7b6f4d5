use crate::classify::Level;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A deviation from the expected layout. Reported only, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StructureWarning {
    VideoAtWrongLevel { level: Level, path: PathBuf },
    MetadataAtWrongLevel { level: Level, path: PathBuf },
    UnexpectedSubdirectory { path: PathBuf },
    UnreadableStudio { path: PathBuf, reason: String },
    UnreadableTitle { path: PathBuf, reason: String },
}

impl StructureWarning {
    pub fn path(&self) -> &Path {
        match self {
            StructureWarning::VideoAtWrongLevel { path, .. }
            | StructureWarning::MetadataAtWrongLevel { path, .. }
            | StructureWarning::UnexpectedSubdirectory { path }
            | StructureWarning::UnreadableStudio { path, .. }
            | StructureWarning::UnreadableTitle { path, .. } => path,
        }
    }
}

impl fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureWarning::VideoAtWrongLevel { level, path } => write!(
                f,
                "Video file at {} level (should be in title folder): {}",
                level,
                path.display()
            ),
            StructureWarning::MetadataAtWrongLevel { level, path } => write!(
                f,
                "Metadata file at {} level (should be in title folder): {}",
                level,
                path.display()
            ),
            StructureWarning::UnexpectedSubdirectory { path } => write!(
                f,
                "Unexpected subdirectory in title folder: {}",
                path.display()
            ),
            StructureWarning::UnreadableStudio { path, reason } => write!(
                f,
                "Cannot read studio directory: {} ({})",
                path.display(),
                reason
            ),
            StructureWarning::UnreadableTitle { path, reason } => write!(
                f,
                "Cannot read title directory: {} ({})",
                path.display(),
                reason
            ),
        }
    }
}

/// Everything a sweep found, grouped by category.
///
/// Order within each list is arrival order from the scan workers and is not
/// stable between runs. Use [`CleanupReport::sorted`] to compare reports.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Title folders with metadata but no video.
    pub orphaned_folders: Vec<PathBuf>,
    /// Metadata files above title level with no matching video beside them.
    pub orphaned_files: Vec<PathBuf>,
    pub empty_folders: Vec<PathBuf>,
    pub structure_warnings: Vec<StructureWarning>,
}

impl CleanupReport {
    /// Number of paths the deletion pass would act on.
    pub fn deletable_count(&self) -> usize {
        self.orphaned_folders.len() + self.orphaned_files.len() + self.empty_folders.len()
    }

    pub fn is_clean(&self) -> bool {
        self.deletable_count() == 0 && self.structure_warnings.is_empty()
    }

    pub fn sorted(&self) -> CleanupReport {
        let mut report = self.clone();
        report.orphaned_folders.sort();
        report.orphaned_files.sort();
        report.empty_folders.sort();
        report.structure_warnings.sort();
        report
    }
}

/// Shared accumulator the scan workers append into.
///
/// One lock guards all four lists and is held for a single push at a time.
#[derive(Debug, Default)]
pub struct ResultCollector {
    report: Mutex<CleanupReport>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CleanupReport> {
        // A panic elsewhere cannot leave a Vec::push half done.
        self.report.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_orphaned_folder(&self, path: PathBuf) {
        self.lock().orphaned_folders.push(path);
    }

    pub fn record_orphaned_file(&self, path: PathBuf) {
        self.lock().orphaned_files.push(path);
    }

    pub fn record_empty_folder(&self, path: PathBuf) {
        self.lock().empty_folders.push(path);
    }

    pub fn record_warning(&self, warning: StructureWarning) {
        self.lock().structure_warnings.push(warning);
    }

    pub fn snapshot(&self) -> CleanupReport {
        self.lock().clone()
    }

    pub fn into_report(self) -> CleanupReport {
        self.report
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
