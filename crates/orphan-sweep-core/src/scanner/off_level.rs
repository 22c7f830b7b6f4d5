use super::walk::read_entries;
use crate::classify::{classify_off_level, Level, OffLevelVerdict};
use crate::findings::{ResultCollector, StructureWarning};
use std::path::Path;
use tracing::debug;

/// Checks the files sitting directly in a library or studio directory.
///
/// An unreadable directory is skipped without a warning; the walk that
/// descends into it reports read failures itself.
pub fn check_direct_children(dir: &Path, level: Level, results: &ResultCollector) {
    let entries = match read_entries(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Skipping {} level check of {}: {}", level, dir.display(), err);
            return;
        }
    };

    for (entry, verdict) in classify_off_level(&entries) {
        let path = dir.join(&entry.file_name);
        match verdict {
            OffLevelVerdict::MisplacedVideo => {
                debug!("Video file at {} level: {}", level, path.display());
                results.record_warning(StructureWarning::VideoAtWrongLevel { level, path });
            }
            OffLevelVerdict::MisplacedMetadata => {
                debug!("Metadata file at {} level: {}", level, path.display());
                results.record_warning(StructureWarning::MetadataAtWrongLevel { level, path });
            }
            OffLevelVerdict::Orphaned => {
                debug!("Orphaned file: {}", path.display());
                results.record_orphaned_file(path);
            }
        }
    }
}
