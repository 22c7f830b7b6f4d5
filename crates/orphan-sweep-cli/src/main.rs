mod commands;
mod logging;
mod progress;
mod report;

use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::Cli;
use dotenv::dotenv;
use orphan_sweep_core::{execute_cleanup, AppConfig, SweepEngine};
use progress::CliReporter;
use tracing::{debug, error};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let config = match orphan_sweep_core::config::load_configuration() {
        Ok(config) => merge_args(config, args),
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };
    debug!("Configuration: {:?}", config);

    if config.library_paths.is_empty() {
        let _ = Cli::command().print_help();
        process::exit(1);
    }

    if !config.execute {
        println!(
            "{}",
            "=== DRY RUN MODE (use --execute to actually delete) ===".yellow()
        );
        println!();
    }

    let reporter = CliReporter::new();
    let engine = SweepEngine::from_config(&config);
    let result = engine.scan(&config.library_paths, &reporter);
    debug!(
        "{} libraries scanned, {} failed, in {:.2}s",
        result.libraries.len(),
        result.failed_roots.len(),
        result.duration.as_secs_f64()
    );

    report::print_report(&result.report);

    if config.execute {
        println!("\n{}", "=".repeat(60));
        println!("Executing deletions...");
        let outcome = execute_cleanup(&result.report, &reporter);
        report::print_cleanup_summary(&outcome);
    } else {
        report::print_dry_run_summary(&result.report);
    }

    Ok(())
}

/// Command-line values take precedence over the configuration file.
fn merge_args(mut config: AppConfig, args: Cli) -> AppConfig {
    if !args.library_paths.is_empty() {
        config.library_paths = args.library_paths;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    config.execute |= args.execute;
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let config = AppConfig {
            library_paths: vec!["/from/config".to_string()],
            workers: 10,
            execute: false,
        };
        let args = Cli::try_parse_from(["orphan-sweep", "--workers", "0", "--execute", "/from/args"])
            .unwrap();

        let merged = merge_args(config, args);
        assert_eq!(merged.library_paths, vec!["/from/args".to_string()]);
        assert_eq!(merged.workers, 0);
        assert!(merged.execute);
    }

    #[test]
    fn test_config_paths_used_when_no_args() {
        let config = AppConfig {
            library_paths: vec!["/from/config".to_string()],
            ..AppConfig::default()
        };
        let args = Cli::try_parse_from(["orphan-sweep"]).unwrap();

        let merged = merge_args(config.clone(), args);
        assert_eq!(merged, config);
    }
}
