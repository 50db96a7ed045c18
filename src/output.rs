//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Processed adder.png
//! Error processing tiny.png: Invalid crop size: cannot crop to 1200x675 from 800x600
//! Processed circuit.png
//! Done. Optimized images in static/presets/ (2 processed, 1 failed)
//! ```
//!
//! A run that stops before converting anything produces a single line instead:
//!
//! ```text
//! Source directory 'assets-source/presets/originals' does not exist. Place originals there.
//! Cannot read source directory 'assets-source/presets/originals': Not a directory: ...
//! No PNG files found in assets-source/presets/originals
//! Cannot create output directory 'static/presets': Permission denied (os error 13)
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns a `String` for testability and has a
//! `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::process::{FileOutcome, RunReport};
use std::path::Path;

/// One line per source file, success or failure.
pub fn format_file_outcome(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Processed { name, .. } => format!("Processed {}", name),
        FileOutcome::Failed { name, error } => format!("Error processing {}: {}", name, error),
    }
}

pub fn print_file_outcome(outcome: &FileOutcome) {
    println!("{}", format_file_outcome(outcome));
}

/// Closing line for the run.
pub fn format_run_report(report: &RunReport) -> String {
    match report {
        RunReport::SourceMissing { source_dir } => format!(
            "Source directory '{}' does not exist. Place originals there.",
            source_dir.display()
        ),
        RunReport::SourceUnreadable { source_dir, error } => format!(
            "Cannot read source directory '{}': {}",
            source_dir.display(),
            error
        ),
        RunReport::NoSources { source_dir } => {
            format!("No PNG files found in {}", source_dir.display())
        }
        RunReport::OutputUnwritable { output_dir, error } => format!(
            "Cannot create output directory '{}': {}",
            output_dir.display(),
            error
        ),
        RunReport::Completed { output_dir, .. } => {
            let done = format!("Done. Optimized images in {}", dir_display(output_dir));
            match report.failed_count() {
                0 => done,
                failed => format!(
                    "{} ({} processed, {} failed)",
                    done,
                    report.processed_count(),
                    failed
                ),
            }
        }
    }
}

pub fn print_run_report(report: &RunReport) {
    println!("{}", format_run_report(report));
}

/// Directory path with exactly one trailing separator.
fn dir_display(dir: &Path) -> String {
    let s = dir.display().to_string();
    if s.ends_with('/') {
        s
    } else {
        format!("{}/", s)
    }
}
