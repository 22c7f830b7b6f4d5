use crate::error::Error;
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;

pub const DEFAULT_WORKERS: usize = 10;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub library_paths: Vec<String>,
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Delete findings instead of only reporting them.
    #[serde(default)]
    pub execute: bool,
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_paths: Vec::new(),
            workers: DEFAULT_WORKERS,
            execute: false,
        }
    }
}

/// Loads `Config.*` from the working directory if present, then
/// `ORPHAN_SWEEP_*` environment variables on top.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(
            Environment::with_prefix("ORPHAN_SWEEP")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("library_paths"),
        )
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(source: &str) -> AppConfig {
        Config::builder()
            .add_source(ConfigFile::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>()
            .unwrap()
    }

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = from_toml("");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.workers, 10);
        assert!(!config.execute);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = from_toml(
            r#"
            library_paths = ["/media/movies", "/media/shows"]
            workers = 4
            execute = true
            "#,
        );
        assert_eq!(
            config.library_paths,
            vec!["/media/movies".to_string(), "/media/shows".to_string()]
        );
        assert_eq!(config.workers, 4);
        assert!(config.execute);
    }
}
