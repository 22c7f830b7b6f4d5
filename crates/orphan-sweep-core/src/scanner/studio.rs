use super::off_level::check_direct_children;
use super::title::process_title_folder;
use super::walk::read_subdirectories;
use crate::classify::Level;
use crate::findings::{ResultCollector, StructureWarning};
use std::path::Path;
use tracing::debug;

/// Processes a studio: its own stray files, then each title folder in turn.
///
/// Returns the number of title folders visited.
pub fn process_studio(studio_path: &Path, results: &ResultCollector) -> usize {
    check_direct_children(studio_path, Level::Studio, results);

    let title_dirs = match read_subdirectories(studio_path) {
        Ok(dirs) => dirs,
        Err(err) => {
            results.record_warning(StructureWarning::UnreadableStudio {
                path: studio_path.to_path_buf(),
                reason: err.to_string(),
            });
            return 0;
        }
    };

    for title_path in &title_dirs {
        process_title_folder(title_path, results);
    }

    debug!(
        "Studio {} done, {} title folders",
        studio_path.display(),
        title_dirs.len()
    );
    title_dirs.len()
}
