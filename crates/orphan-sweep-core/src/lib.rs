pub mod classify;
pub mod cleanup;
pub mod config;
pub mod engine;
pub mod error;
pub mod findings;
pub mod progress;
pub mod scanner;

pub use cleanup::{execute_cleanup, CleanupOutcome};
pub use config::AppConfig;
pub use engine::{LibraryScan, SweepEngine, SweepResult};
pub use error::Error;
pub use findings::{CleanupReport, ResultCollector, StructureWarning};
pub use progress::{ProgressReporter, SilentReporter};
