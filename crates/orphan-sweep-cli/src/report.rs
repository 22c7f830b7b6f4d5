use colored::*;
use orphan_sweep_core::{CleanupOutcome, CleanupReport};
use std::fmt::Display;

fn print_section<T: Display>(heading: ColoredString, items: &[T]) {
    if items.is_empty() {
        return;
    }
    println!("\n{} ({}):", heading, items.len());
    for item in items {
        println!("   {}", item);
    }
}

pub fn print_report(report: &CleanupReport) {
    println!("\n{}", "=".repeat(60));

    print_section("⚠️  Structure warnings".yellow(), &report.structure_warnings);

    let folders: Vec<_> = report.orphaned_folders.iter().map(|p| p.display()).collect();
    print_section("🗑️  Orphaned metadata folders (no video file)".red(), &folders);

    let files: Vec<_> = report.orphaned_files.iter().map(|p| p.display()).collect();
    print_section(
        "🗑️  Orphaned metadata files (no video file at same level)".red(),
        &files,
    );

    let empties: Vec<_> = report.empty_folders.iter().map(|p| p.display()).collect();
    print_section("📁 Empty folders".cyan(), &empties);
}

pub fn print_dry_run_summary(report: &CleanupReport) {
    let total = report.deletable_count();
    if total > 0 {
        println!(
            "\n💡 Run with {} to delete {} items",
            "--execute".bold(),
            total.to_string().red()
        );
    } else {
        println!("\n{} Nothing to clean up", "✓".green());
    }
}

pub fn print_cleanup_summary(outcome: &CleanupOutcome) {
    println!(
        "\nDeleted {} items, {} failures",
        outcome.deleted.len().to_string().green(),
        outcome.failed.len().to_string().red()
    );
}
