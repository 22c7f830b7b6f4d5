use clap::Parser;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "orphan-sweep")]
#[command(
    about = "Find and remove metadata left behind after videos are deleted",
    long_about = None,
    after_help = "Expected structure: library/studio/title/video.mkv"
)]
pub struct Cli {
    /// Actually delete folders and files (default is dry-run)
    #[arg(long)]
    pub execute: bool,

    /// Number of concurrent workers [default: 10]
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Library roots to scan, in order
    #[arg(value_name = "LIBRARY_PATH")]
    pub library_paths: Vec<String>,
}
