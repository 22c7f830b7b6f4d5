//! Filesystem side of the sweep: list a directory, classify it, record findings.

mod off_level;
mod studio;
mod title;
mod walk;

pub use off_level::check_direct_children;
pub use studio::process_studio;
pub use title::process_title_folder;
pub use walk::{is_dir_empty, read_entries, read_subdirectories};
