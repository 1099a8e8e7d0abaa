//! Team operations
//!
//! Lookups by display name, team CRUD, user membership and team/repo grants.
//! Every mutation addresses the team by its slug.

use log::debug;
use serde_json::Value;
use urlencoding::encode;

use super::{GitHubApi, encode_body};
use crate::client::models::{
    CreateTeamRequest, Permission, Repository, Team, TeamMembership, TeamRepoRequest,
};
use crate::client::transport::{ApiRequest, ApiResult, REPOSITORY_MEDIA_TYPE};
use crate::error::ApiError;

fn team_path(org: &str, slug: &str) -> String {
    format!("/orgs/{}/teams/{}", encode(org), encode(slug))
}

fn team_repo_path(org: &str, slug: &str, repo: &str) -> String {
    format!(
        "{}/repos/{}/{}",
        team_path(org, slug),
        encode(org),
        encode(repo)
    )
}

fn membership_path(org: &str, slug: &str, username: &str) -> String {
    format!(
        "{}/memberships/{}",
        team_path(org, slug),
        encode(username)
    )
}

impl GitHubApi {
    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find a team by display name (case-insensitive) or slug.
    ///
    /// Returns `Ok(None)` when the complete listing has no such team. If the
    /// listing was cut short by an error and the team was not among the
    /// records seen, that error is returned instead.
    pub async fn find_team(&self, org: &str, name: &str) -> ApiResult<Option<Team>> {
        let teams = self.list_teams(org).await;
        if let Some(team) = teams.items.into_iter().find(|t| t.matches(name)) {
            debug!("Resolved team '{}' to slug '{}'", name, team.slug);
            return Ok(Some(team));
        }
        match teams.truncated_by {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }

    // ========================================================================
    // Team CRUD
    // ========================================================================

    /// Create a closed team.
    pub async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> ApiResult<Team> {
        let body = encode_body(request)?;
        self.fetch(ApiRequest::post(
            format!("/orgs/{}/teams", encode(org)),
            body,
        ))
        .await
    }

    /// Delete a team by slug.
    pub async fn delete_team(&self, org: &str, slug: &str) -> ApiResult<()> {
        self.send(ApiRequest::delete(team_path(org, slug))).await?;
        Ok(())
    }

    // ========================================================================
    // Team / repository grants
    // ========================================================================

    /// Grant a team `permission` on an organization repository.
    pub async fn add_team_to_repo(
        &self,
        org: &str,
        slug: &str,
        repo: &str,
        permission: Permission,
    ) -> ApiResult<()> {
        let body = encode_body(&TeamRepoRequest { permission })?;
        self.send(ApiRequest::put(team_repo_path(org, slug, repo)).body(body))
            .await?;
        Ok(())
    }

    /// Remove a team's access to an organization repository.
    pub async fn remove_team_from_repo(&self, org: &str, slug: &str, repo: &str) -> ApiResult<()> {
        self.send(ApiRequest::delete(team_repo_path(org, slug, repo)))
            .await?;
        Ok(())
    }

    /// The team's explicit permission on a repository.
    ///
    /// `Ok(None)` means the server answered but reported no usable
    /// permission. A team without access answers 404, which is an `Err`.
    pub async fn team_repo_permission(
        &self,
        org: &str,
        slug: &str,
        repo: &str,
    ) -> ApiResult<Option<Permission>> {
        let value = self
            .send(ApiRequest::get(team_repo_path(org, slug, repo)).accept(REPOSITORY_MEDIA_TYPE))
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        let repository: Repository = serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Unexpected team repository response: {}", e))
        })?;
        Ok(repository.permission())
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// A user's membership in a team.
    pub async fn team_membership(
        &self,
        org: &str,
        slug: &str,
        username: &str,
    ) -> ApiResult<TeamMembership> {
        self.fetch(ApiRequest::get(membership_path(org, slug, username)))
            .await
    }

    /// Add (or invite) a user to a team.
    pub async fn add_user_to_team(
        &self,
        org: &str,
        slug: &str,
        username: &str,
    ) -> ApiResult<Option<TeamMembership>> {
        let value = self
            .send(ApiRequest::put(membership_path(org, slug, username)))
            .await?;
        Ok(membership_from(value))
    }

    /// Remove a user from a team.
    pub async fn remove_user_from_team(
        &self,
        org: &str,
        slug: &str,
        username: &str,
    ) -> ApiResult<()> {
        self.send(ApiRequest::delete(membership_path(org, slug, username)))
            .await?;
        Ok(())
    }
}

fn membership_from(value: Value) -> Option<TeamMembership> {
    if value.is_null() {
        None
    } else {
        serde_json::from_value(value).ok()
    }
}
