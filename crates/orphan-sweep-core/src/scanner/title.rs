use super::walk::read_entries;
use crate::classify::{classify_title, TitleState};
use crate::findings::{ResultCollector, StructureWarning};
use std::path::Path;
use tracing::debug;

/// Classifies one title folder and records what it found.
///
/// Returns `None` when the folder could not be listed, in which case a
/// warning is the only thing recorded for it.
pub fn process_title_folder(title_path: &Path, results: &ResultCollector) -> Option<TitleState> {
    let entries = match read_entries(title_path) {
        Ok(entries) => entries,
        Err(err) => {
            results.record_warning(StructureWarning::UnreadableTitle {
                path: title_path.to_path_buf(),
                reason: err.to_string(),
            });
            return None;
        }
    };

    let verdict = classify_title(&entries);

    for subdir in &verdict.unexpected_subdirs {
        results.record_warning(StructureWarning::UnexpectedSubdirectory {
            path: title_path.join(subdir),
        });
    }

    match verdict.state {
        TitleState::Empty => {
            debug!("Empty title folder: {}", title_path.display());
            results.record_empty_folder(title_path.to_path_buf());
        }
        TitleState::Orphaned => {
            debug!("Orphaned title folder: {}", title_path.display());
            results.record_orphaned_folder(title_path.to_path_buf());
        }
        TitleState::Valid => {}
    }

    Some(verdict.state)
}
