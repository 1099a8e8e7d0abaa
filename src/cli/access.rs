//! Access report commands
//!
//! `user-access` resolves one user; `list-users-access` resolves every
//! member of the organization against a single repository and team listing.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::{AccessDisplay, UserAccessDisplay};
use crate::output::{json, table};
use crate::resolve::{AccessReport, ProgressCallback};

const INCOMPLETE_NOTE: &str = "Access through the organization's default permission or parent teams is not detected.";

/// Progress bar on stderr; hidden for JSON so scripted output stays clean.
fn progress_bar(format: OutputFormat, message: String) -> ProgressBar {
    if format == OutputFormat::Json {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

fn repo_progress(bar: &ProgressBar) -> ProgressCallback {
    let bar = bar.clone();
    Arc::new(move |done: usize, total: usize| {
        bar.set_length(total as u64);
        bar.set_position(done as u64);
    })
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "⚠".yellow(), warning);
    }
}

// ============================================================================
// user-access
// ============================================================================

/// Run the user-access command
pub async fn user_access(opts: &GlobalOptions, user: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;
    let username = ctx.require_user(org, user).await?;
    debug!("Resolved '{}' to '{}'", user, username);

    let bar = progress_bar(ctx.format, format!("Checking access for {}", username));
    let report = ctx
        .access_resolver()
        .with_progress(repo_progress(&bar))
        .resolve_access(org, &username)
        .await;
    bar.finish_and_clear();

    match ctx.format {
        OutputFormat::Json => {
            println!(
                "{}",
                json::format_json_with_warnings(&report, &report.warnings)?
            );
        }
        OutputFormat::Table => {
            let rows: Vec<AccessDisplay> = report.grants.iter().map(AccessDisplay::from).collect();
            println!(
                "{}",
                table::format_table_or(&rows, "No accessible repositories found.")
            );
            print_warnings(&report.warnings);
        }
        OutputFormat::Pretty => {
            print_report(&report);
            print_warnings(&report.warnings);
        }
    }

    Ok(())
}

fn print_report(report: &AccessReport) {
    println!(
        "User '{}' has access to {} of {} repositories in '{}':",
        report.username.bold(),
        report.grants.len(),
        report.repositories_checked,
        report.org
    );
    for grant in &report.grants {
        let visibility = if grant.private {
            "private".yellow()
        } else {
            "public".normal()
        };
        println!(
            "  - {} ({}) {} via {}",
            grant.repo.bold(),
            visibility,
            grant.permission.to_string().green(),
            grant.path
        );
    }
    if !report.teams.is_empty() {
        println!("  Teams: {}", report.teams.join(", "));
    }
    if !report.is_complete() {
        println!("{}", "Some listings were cut short; grants may be missing.".yellow());
    }
    println!("{}", INCOMPLETE_NOTE.dimmed());
}

// ============================================================================
// list-users-access
// ============================================================================

/// Run the list-users-access command.
///
/// Members are resolved one after another; each member's repositories are
/// checked with the configured concurrency.
pub async fn list_users_access(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let members = ctx.api.list_members(org).await;
    let mut warnings = Vec::new();
    if let Some(e) = &members.truncated_by {
        let message = format!(
            "Member listing for '{}' stopped after {} members: {}",
            org,
            members.items.len(),
            e
        );
        warn!("{}", message);
        warnings.push(message);
    }

    let resolver = ctx.access_resolver();
    let (repos, repo_warning) = resolver.list_repos(org).await;
    let (teams, team_warning) = resolver.list_teams(org).await;
    warnings.extend(repo_warning);
    warnings.extend(team_warning);

    let bar = progress_bar(ctx.format, format!("Resolving access in {}", org));
    bar.set_length(members.items.len() as u64);

    let mut reports = Vec::with_capacity(members.items.len());
    for member in &members.items {
        bar.set_message(member.login.clone());
        let report = resolver
            .resolve_for_repos(org, &member.login, repos.clone(), &teams)
            .await;
        warnings.extend(report.warnings.iter().cloned());
        reports.push(report);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let mut seen = HashSet::new();
    warnings.retain(|w| seen.insert(w.clone()));

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", json::format_json_with_warnings(&reports, &warnings)?);
        }
        OutputFormat::Table => {
            let rows: Vec<UserAccessDisplay> = reports
                .iter()
                .flat_map(|r| {
                    r.grants
                        .iter()
                        .map(|g| UserAccessDisplay::new(&r.username, g))
                })
                .collect();
            println!("{}", table::format_table(&rows));
            print_warnings(&warnings);
        }
        OutputFormat::Pretty => {
            println!(
                "Repository access for {} members of '{}' ({} repositories):",
                reports.len(),
                org,
                repos.len()
            );
            for report in &reports {
                println!();
                println!("{} ({} repositories)", report.username.bold(), report.grants.len());
                for grant in &report.grants {
                    println!(
                        "  - {} {} via {}",
                        grant.repo,
                        grant.permission.to_string().green(),
                        grant.path
                    );
                }
            }
            println!();
            println!("{}", INCOMPLETE_NOTE.dimmed());
            print_warnings(&warnings);
        }
    }

    Ok(())
}
