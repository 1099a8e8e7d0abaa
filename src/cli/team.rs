//! Team management commands
//!
//! Teams are addressed by display name on the command line and by slug on
//! the wire; every command except `create-team` looks the team up first.

use log::debug;
use serde_json::json;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_destructive, report_success, run_list_command};
use crate::client::models::{CreateTeamRequest, Permission, Team};
use crate::error::Result;
use crate::models::TeamDisplay;

// ============================================================================
// Listing
// ============================================================================

/// Run the list-teams command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Team, TeamDisplay, _, _>(opts, "teams", |api, org| async move {
        api.list_teams(&org).await
    })
    .await
}

// ============================================================================
// Team CRUD
// ============================================================================

/// Run the create-team command
pub async fn create(opts: &GlobalOptions, name: &str, description: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let team = ctx
        .api
        .create_team(org, &CreateTeamRequest::new(name, description))
        .await?;

    report_success(
        ctx.format,
        &team,
        &format!("Created team '{}' in '{}'", team.name, org),
    )
}

/// Run the delete-team command
pub async fn delete(opts: &GlobalOptions, name: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;
    let team = ctx.require_team(org, name).await?;

    if !confirm_destructive(&format!("team '{}' in '{}'", team.name, org), yes)? {
        return Ok(());
    }

    ctx.api.delete_team(org, &team.slug).await?;

    report_success(
        ctx.format,
        &json!({"deleted": true, "team": team.name, "slug": team.slug}),
        &format!("Deleted team '{}' in '{}'", team.name, org),
    )
}

// ============================================================================
// Repository grants
// ============================================================================

/// Run the add-repo command
pub async fn add_repo(
    opts: &GlobalOptions,
    name: &str,
    repo: &str,
    permission: Permission,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;
    let team = ctx.require_team(org, name).await?;

    ctx.api
        .add_team_to_repo(org, &team.slug, repo, permission)
        .await?;

    report_success(
        ctx.format,
        &json!({"team": team.name, "repo": repo, "permission": permission}),
        &format!(
            "Added team '{}' to repo '{}' with permission '{}'",
            team.name, repo, permission
        ),
    )
}

/// Run the remove-repo command
pub async fn remove_repo(opts: &GlobalOptions, name: &str, repo: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;
    let team = ctx.require_team(org, name).await?;

    ctx.api.remove_team_from_repo(org, &team.slug, repo).await?;

    report_success(
        ctx.format,
        &json!({"team": team.name, "repo": repo, "removed": true}),
        &format!("Removed team '{}' from repo '{}'", team.name, repo),
    )
}

// ============================================================================
// Membership
// ============================================================================

/// Run the add-user command.
///
/// `user` may be a login or a member's public email.
pub async fn add_user(opts: &GlobalOptions, name: &str, user: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;
    let username = ctx.require_user(org, user).await?;
    let team = ctx.require_team(org, name).await?;

    let membership = ctx.api.add_user_to_team(org, &team.slug, &username).await?;
    let state = membership
        .as_ref()
        .map(|m| m.state.clone())
        .unwrap_or_else(|| "active".to_string());
    debug!("Membership of '{}' in '{}' is {}", username, team.slug, state);

    let message = if state == "pending" {
        format!(
            "Invited user '{}' to team '{}' in '{}' (pending acceptance)",
            username, team.name, org
        )
    } else {
        format!("Added user '{}' to team '{}' in '{}'", username, team.name, org)
    };

    report_success(
        ctx.format,
        &json!({"team": team.name, "user": username, "state": state}),
        &message,
    )
}

/// Run the remove-user command
pub async fn remove_user(opts: &GlobalOptions, name: &str, user: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;
    let username = ctx.require_user(org, user).await?;
    let team = ctx.require_team(org, name).await?;

    ctx.api
        .remove_user_from_team(org, &team.slug, &username)
        .await?;

    report_success(
        ctx.format,
        &json!({"team": team.name, "user": username, "removed": true}),
        &format!(
            "Removed user '{}' from team '{}' in '{}'",
            username, team.name, org
        ),
    )
}
