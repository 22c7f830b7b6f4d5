use crate::classify::Level;
use crate::config::AppConfig;
use crate::error::Error;
use crate::findings::{CleanupReport, ResultCollector};
use crate::progress::ProgressReporter;
use crate::scanner;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

pub struct SweepEngine {
    workers: usize,
}

/// Statistics for one library root.
#[derive(Debug, Clone)]
pub struct LibraryScan {
    pub root: PathBuf,
    pub studios: usize,
    pub titles: usize,
    pub duration: Duration,
}

#[derive(Debug)]
pub struct SweepResult {
    pub report: CleanupReport,
    pub libraries: Vec<LibraryScan>,
    /// Roots that could not be scanned, with the reason.
    pub failed_roots: Vec<(PathBuf, String)>,
    pub duration: Duration,
}

impl SweepEngine {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.workers)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scan each root in turn into one shared report.
    ///
    /// A root that fails validation is logged and skipped; the rest still run.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P], reporter: &dyn ProgressReporter) -> SweepResult {
        let start = Instant::now();
        let results = ResultCollector::new();
        let mut libraries = Vec::new();
        let mut failed_roots = Vec::new();

        for root in roots {
            let root = root.as_ref();
            match self.scan_library(root, &results, reporter) {
                Ok(scan) => libraries.push(scan),
                Err(err) => {
                    error!("{}", err);
                    failed_roots.push((root.to_path_buf(), err.to_string()));
                }
            }
        }

        SweepResult {
            report: results.into_report(),
            libraries,
            failed_roots,
            duration: start.elapsed(),
        }
    }

    /// Scan one library root, appending findings to `results`.
    ///
    /// Studios are processed on a pool of `workers` threads. The empty studio
    /// check runs only after every studio has been processed.
    pub fn scan_library(
        &self,
        root: &Path,
        results: &ResultCollector,
        reporter: &dyn ProgressReporter,
    ) -> Result<LibraryScan, Error> {
        let start = Instant::now();

        let metadata = fs::metadata(root).map_err(|source| Error::LibraryNotFound {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        debug!("Scanning library: {}", root.display());
        reporter.on_library_start(root);

        scanner::check_direct_children(root, Level::Library, results);

        let studio_dirs =
            scanner::read_subdirectories(root).map_err(|source| Error::ReadLibrary {
                path: root.to_path_buf(),
                source,
            })?;
        let total = studio_dirs.len();
        reporter.on_studios_found(root, total);

        let titles = AtomicUsize::new(0);
        if self.workers == 0 {
            warn!(
                "No workers configured, skipping {} studio folders in {}",
                total,
                root.display()
            );
        } else {
            let completed = AtomicUsize::new(0);
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .thread_name(|i| format!("sweep-{}", i))
                .build()?;

            pool.install(|| {
                studio_dirs.par_iter().for_each(|studio| {
                    let count = scanner::process_studio(studio, results);
                    titles.fetch_add(count, Ordering::Relaxed);
                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    reporter.on_studio_complete(done, total, studio);
                });
            });
        }

        for studio in &studio_dirs {
            match scanner::is_dir_empty(studio) {
                Ok(true) => {
                    debug!("Empty studio folder: {}", studio.display());
                    results.record_empty_folder(studio.clone());
                }
                Ok(false) => {}
                Err(err) => debug!("Could not recheck {}: {}", studio.display(), err),
            }
        }

        let scan = LibraryScan {
            root: root.to_path_buf(),
            studios: total,
            titles: titles.into_inner(),
            duration: start.elapsed(),
        };
        debug!(
            "Library {} scanned: {} studios, {} title folders in {:.2}s",
            root.display(),
            scan.studios,
            scan.titles,
            scan.duration.as_secs_f64()
        );
        reporter.on_library_complete(&scan);

        Ok(scan)
    }
}
