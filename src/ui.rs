//! Terminal output for the vrs binary.
//!
//! `format_*` functions build the styled text and `display_*` functions print
//! it, so the wording can be tested without capturing stdout.

use console::style;

use crate::cli::orchestration::BumpOutcome;
use crate::error::VrsError;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_hint(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Summary of a bump: the version change, then one line per synced file.
pub fn format_bump_outcome(outcome: &BumpOutcome) -> String {
    let mut out = format_success(&format!(
        "Bumped version {} -> {}",
        style(&outcome.previous_version).red(),
        style(&outcome.new_version).green()
    ));

    for file in &outcome.synced_files {
        out.push_str(&format!("\n  synced {}", file));
    }

    out
}

pub fn display_error(error: &anyhow::Error) {
    eprintln!("{}", format_error(&error.to_string()));

    let not_found = error
        .downcast_ref::<VrsError>()
        .is_some_and(VrsError::is_not_found);
    if not_found {
        eprintln!("{}", format_hint("Run `vrs init` to start tracking a version here."));
    }
}

pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

pub fn display_bump_outcome(outcome: &BumpOutcome) {
    println!("{}", format_bump_outcome(outcome));
}
