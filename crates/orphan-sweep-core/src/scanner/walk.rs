use crate::classify::{Entry, EntryKind};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the immediate children of `dir`, sorted by file name.
///
/// Symlinks are not followed, so a link to a directory is listed as a file.
/// Any error while listing fails the whole read.
pub fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry_result| -> io::Result<Entry> {
            let entry = entry_result.map_err(io::Error::from)?;
            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            Ok(Entry::new(entry.file_name(), kind))
        })
        .collect()
}

/// Lists the immediate child directories of `dir` as full paths.
pub fn read_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(read_entries(dir)?
        .into_iter()
        .filter(Entry::is_dir)
        .map(|entry| dir.join(&entry.file_name))
        .collect())
}

pub fn is_dir_empty(dir: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}
