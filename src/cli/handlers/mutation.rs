//! Confirmation and result reporting for commands that change state

use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::json;

/// Ask before an irreversible change unless `yes` was given.
///
/// Returns `false` when the user declines; the caller should stop.
pub fn confirm_destructive(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    eprintln!("{} Delete {}? This cannot be undone.", "⚠".yellow(), what);
    let confirmed = Confirm::new()
        .with_prompt("Confirm deletion?")
        .default(false)
        .interact()?;

    if !confirmed {
        eprintln!("Cancelled.");
    }
    Ok(confirmed)
}

/// Print the outcome of a successful mutation.
///
/// JSON output wraps `data` in the usual `{data, meta}` envelope; the other
/// formats print `message` as a single status line.
pub fn report_success<T: Serialize>(format: OutputFormat, data: &T, message: &str) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(data)?),
        OutputFormat::Pretty | OutputFormat::Table => println!("{} {}", "✓".green(), message),
    }
    Ok(())
}
