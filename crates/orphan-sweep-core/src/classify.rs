//! Pure classification rules for the `library/studio/title` layout.
//!
//! Nothing here touches the filesystem. Callers list a directory into
//! [`Entry`] values and ask what each entry (or the directory as a whole)
//! should be reported as.

use std::borrow::Cow;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// Extensions (lowercase, with the dot) that mark a file as a video.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mkv", ".mp4", ".avi", ".m4v"];

/// Directory name suffixes that are expected companions of a video inside a title folder.
pub const METADATA_SUBDIR_SUFFIXES: &[&str] = &[".trickplay"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub file_name: OsString,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(file_name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
        }
    }

    pub fn file(file_name: impl Into<OsString>) -> Self {
        Self::new(file_name, EntryKind::File)
    }

    pub fn dir(file_name: impl Into<OsString>) -> Self {
        Self::new(file_name, EntryKind::Directory)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }
}

/// Which level of the hierarchy an off-level file was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Library,
    Studio,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Library => f.write_str("library"),
            Level::Studio => f.write_str("studio"),
        }
    }
}

/// Splits a file name into stem and extension at the last `.`.
///
/// The extension keeps its dot. `".nfo"` splits into `("", ".nfo")` and a
/// name without any dot has an empty extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

pub fn is_video_file(name: &str) -> bool {
    let (_, ext) = split_name(name);
    let ext = ext.to_ascii_lowercase();
    VIDEO_EXTENSIONS.contains(&ext.as_str())
}

pub fn is_metadata_subdir(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    METADATA_SUBDIR_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Lowercased stem, the key used for basename matching.
pub fn stem_key(name: &str) -> String {
    split_name(name).0.to_ascii_lowercase()
}

/// True when any video stem is a prefix of `stem`.
///
/// This is a loose prefix test: `movie-poster` and `movie2` both match `movie`.
pub fn matches_video<'a, I>(stem: &str, video_stems: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let stem = stem.to_ascii_lowercase();
    video_stems
        .into_iter()
        .any(|video| stem.starts_with(video.as_str()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffLevelVerdict {
    /// A video outside a title folder. Reported, never deleted.
    MisplacedVideo,
    /// Metadata outside a title folder whose video sits next to it.
    MisplacedMetadata,
    /// Metadata outside a title folder with no video to belong to.
    Orphaned,
}

/// Classifies the files found directly in a library or studio directory.
///
/// Directories are skipped; the walk descends into them separately.
pub fn classify_off_level(entries: &[Entry]) -> Vec<(&Entry, OffLevelVerdict)> {
    let files: Vec<&Entry> = entries.iter().filter(|e| !e.is_dir()).collect();

    let video_stems: HashSet<String> = files
        .iter()
        .map(|e| e.name())
        .filter(|name| is_video_file(name))
        .map(|name| stem_key(&name))
        .collect();

    files
        .into_iter()
        .map(|entry| {
            let name = entry.name();
            let verdict = if is_video_file(&name) {
                OffLevelVerdict::MisplacedVideo
            } else if matches_video(split_name(&name).0, &video_stems) {
                OffLevelVerdict::MisplacedMetadata
            } else {
                OffLevelVerdict::Orphaned
            };
            (entry, verdict)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleState {
    Empty,
    /// Has content but no video file.
    Orphaned,
    Valid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleVerdict<'a> {
    pub state: TitleState,
    pub unexpected_subdirs: Vec<&'a OsStr>,
}

/// Classifies a title folder from its listing.
///
/// Empty wins over everything else. Otherwise the folder is orphaned unless
/// at least one entry is a video file, and every subdirectory without a
/// metadata suffix is listed as unexpected whatever the state.
pub fn classify_title(entries: &[Entry]) -> TitleVerdict<'_> {
    if entries.is_empty() {
        return TitleVerdict {
            state: TitleState::Empty,
            unexpected_subdirs: Vec::new(),
        };
    }

    let mut has_video = false;
    let mut unexpected_subdirs = Vec::new();

    for entry in entries {
        let name = entry.name();
        if entry.is_dir() {
            if !is_metadata_subdir(&name) {
                unexpected_subdirs.push(entry.file_name.as_os_str());
            }
        } else if is_video_file(&name) {
            has_video = true;
        }
    }

    let state = if has_video {
        TitleState::Valid
    } else {
        TitleState::Orphaned
    };

    TitleVerdict {
        state,
        unexpected_subdirs,
    }
}
