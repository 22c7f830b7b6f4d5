use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Error accessing library path {}: {source}", path.display())]
    LibraryNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Library path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Error reading library directory {}: {source}", path.display())]
    ReadLibrary {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
