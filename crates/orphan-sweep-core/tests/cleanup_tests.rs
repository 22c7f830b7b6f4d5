use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::tempdir;

use orphan_sweep_core::{
    execute_cleanup, CleanupOutcome, CleanupReport, ProgressReporter, SilentReporter,
    StructureWarning, SweepEngine,
};

fn create_file(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "test content").unwrap();
}

#[derive(Default)]
struct RecordingReporter {
    deleted: Mutex<Vec<String>>,
    failed: Mutex<Vec<String>>,
    total: Mutex<Option<usize>>,
}

impl ProgressReporter for RecordingReporter {
    fn on_cleanup_start(&self, total: usize) {
        *self.total.lock().unwrap() = Some(total);
    }

    fn on_item_deleted(&self, path: &Path) {
        self.deleted
            .lock()
            .unwrap()
            .push(path.to_string_lossy().into_owned());
    }

    fn on_item_failed(&self, path: &Path, _error: &str) {
        self.failed
            .lock()
            .unwrap()
            .push(path.to_string_lossy().into_owned());
    }
}

#[test]
fn test_scan_then_cleanup_removes_findings() {
    let tmp = tempdir().unwrap();
    let library = tmp.path().join("Library");
    let kept_title = library.join("StudioA").join("Movie1");
    create_file(&kept_title.join("movie.mkv"));
    create_file(&kept_title.join("movie.nfo"));
    create_file(&library.join("StudioA").join("Movie2").join("poster.jpg"));
    create_file(&library.join("StudioA").join("Movie2").join("movie.trickplay").join("1.jpg"));
    create_file(&library.join("readme.txt"));
    fs::create_dir_all(library.join("StudioB")).unwrap();
    fs::create_dir_all(library.join("StudioA").join("Movie3")).unwrap();

    let result = SweepEngine::new(4).scan(&[&library], &SilentReporter);
    assert_eq!(result.report.deletable_count(), 4);

    let reporter = RecordingReporter::default();
    let outcome = execute_cleanup(&result.report, &reporter);

    assert_eq!(outcome.deleted.len(), 4);
    assert!(outcome.failed.is_empty());
    assert_eq!(*reporter.total.lock().unwrap(), Some(4));
    assert_eq!(reporter.deleted.lock().unwrap().len(), 4);

    assert!(!library.join("StudioA").join("Movie2").exists());
    assert!(!library.join("StudioA").join("Movie3").exists());
    assert!(!library.join("StudioB").exists());
    assert!(!library.join("readme.txt").exists());
    assert!(kept_title.join("movie.mkv").exists());
    assert!(kept_title.join("movie.nfo").exists());
}

#[test]
fn test_paths_under_removed_folder_are_skipped() {
    let tmp = tempdir().unwrap();
    let orphan = tmp.path().join("Studio").join("Orphan");
    let nested_empty = orphan.join("nested");
    let nested_file = orphan.join("old.nfo");
    create_file(&nested_file);
    fs::create_dir_all(&nested_empty).unwrap();

    let report = CleanupReport {
        orphaned_folders: vec![orphan.clone()],
        orphaned_files: vec![nested_file.clone()],
        empty_folders: vec![nested_empty.clone()],
        structure_warnings: vec![],
    };

    let outcome = execute_cleanup(&report, &SilentReporter);

    assert_eq!(outcome.deleted, vec![orphan.clone()]);
    assert_eq!(outcome.skipped, vec![nested_file, nested_empty]);
    assert!(outcome.failed.is_empty());
    assert!(!orphan.exists());
}

#[test]
fn test_empty_folders_removed_in_reverse_order() {
    let tmp = tempdir().unwrap();
    let studio = tmp.path().join("Studio");
    let title = studio.join("Title");
    fs::create_dir_all(&title).unwrap();

    // Discovery order lists the parent first; reverse order lets the child go
    // first so the parent is empty by the time it is removed.
    let report = CleanupReport {
        empty_folders: vec![studio.clone(), title.clone()],
        ..CleanupReport::default()
    };

    let outcome = execute_cleanup(&report, &SilentReporter);

    assert_eq!(outcome.deleted, vec![title, studio.clone()]);
    assert!(!studio.exists());
}

#[test]
fn test_non_empty_folder_is_a_failure_not_a_forced_removal() {
    let tmp = tempdir().unwrap();
    let studio = tmp.path().join("Studio");
    let late_arrival = studio.join("Title").join("movie.mkv");
    create_file(&late_arrival);

    let report = CleanupReport {
        empty_folders: vec![studio.clone()],
        ..CleanupReport::default()
    };

    let reporter = RecordingReporter::default();
    let outcome = execute_cleanup(&report, &reporter);

    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].0, studio);
    assert_eq!(reporter.failed.lock().unwrap().len(), 1);
    assert!(late_arrival.exists());
}

#[test]
fn test_structure_warnings_are_never_deleted() {
    let tmp = tempdir().unwrap();
    let video = tmp.path().join("Library").join("movie.mkv");
    let extras = tmp.path().join("Library").join("Studio").join("Title").join("extras");
    create_file(&video);
    fs::create_dir_all(&extras).unwrap();

    let report = CleanupReport {
        structure_warnings: vec![
            StructureWarning::UnexpectedSubdirectory {
                path: extras.clone(),
            },
            StructureWarning::VideoAtWrongLevel {
                level: orphan_sweep_core::classify::Level::Library,
                path: video.clone(),
            },
        ],
        ..CleanupReport::default()
    };

    let outcome = execute_cleanup(&report, &SilentReporter);

    assert_eq!(outcome, CleanupOutcome::default());
    assert!(video.exists());
    assert!(extras.exists());
}
