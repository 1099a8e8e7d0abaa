//! Repository access resolution for one user
//!
//! For every organization repository, a user's access is the first of:
//! 1. a direct collaborator grant, then
//! 2. an explicit grant held by one of the user's active teams, scanning the
//!    teams in listing order and stopping at the first one with a permission.
//!
//! Access through the organization's default repository permission, or
//! through a parent team without its own team/repo grant, is not detected.
//! An absent repository means "no access found through these paths".

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, warn};
use serde::Serialize;

use super::{AccessGrant, AccessPath};
use crate::client::models::{Permission, Repository, Team};
use crate::client::{GitHubApi, run_indexed};
use crate::config::DEFAULT_CONCURRENCY;

/// Called after each repository with `(done, total)`.
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Outcome of resolving one user's access across an organization
#[derive(Debug, Clone, Serialize)]
pub struct AccessReport {
    pub org: String,
    pub username: String,
    /// Grants in repository listing order
    pub grants: Vec<AccessGrant>,
    /// Names of the teams the user is an active member of
    pub teams: Vec<String>,
    pub repositories_checked: usize,
    /// Repository or team listings that were cut short; the grants may be
    /// incomplete
    pub warnings: Vec<String>,
}

impl AccessReport {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Resolves which repositories a user can reach.
#[derive(Clone)]
pub struct AccessResolver {
    api: GitHubApi,
    concurrency: usize,
    progress: Option<ProgressCallback>,
}

impl AccessResolver {
    pub fn new(api: GitHubApi) -> Self {
        Self {
            api,
            concurrency: DEFAULT_CONCURRENCY,
            progress: None,
        }
    }

    /// Maximum per-repository lookups in flight. `1` checks repositories
    /// strictly one after another.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Resolve `username`'s access to every repository of `org`.
    ///
    /// Never fails: a lookup error only drops the grant it would have
    /// produced, and a truncated listing is reported in `warnings`.
    pub async fn resolve_access(&self, org: &str, username: &str) -> AccessReport {
        let (repos, repo_warning) = self.list_repos(org).await;
        let (teams, team_warning) = self.list_teams(org).await;
        let mut report = self.resolve_for_repos(org, username, repos, &teams).await;

        report.warnings = repo_warning.into_iter().chain(team_warning).collect();
        report
    }

    /// List the organization's repositories once, for reuse across users.
    pub async fn list_repos(&self, org: &str) -> (Vec<Repository>, Option<String>) {
        let repos = self.api.list_repos(org).await;
        let warning = repos.truncated_by.map(|e| {
            let message = format!(
                "Repository listing for '{}' stopped after {} repositories: {}",
                org,
                repos.items.len(),
                e
            );
            warn!("{}", message);
            message
        });
        (repos.items, warning)
    }

    /// List the organization's teams once, for reuse across users.
    pub async fn list_teams(&self, org: &str) -> (Vec<Team>, Option<String>) {
        let teams = self.api.list_teams(org).await;
        let warning = teams.truncated_by.map(|e| {
            let message = format!(
                "Team listing for '{}' stopped after {} teams: {}",
                org,
                teams.items.len(),
                e
            );
            warn!("{}", message);
            message
        });
        (teams.items, warning)
    }

    /// Resolve `username`'s access to already listed repositories and teams.
    pub async fn resolve_for_repos(
        &self,
        org: &str,
        username: &str,
        repos: Vec<Repository>,
        org_teams: &[Team],
    ) -> AccessReport {
        let teams = self.active_teams(org, username, org_teams).await;

        let total = repos.len();
        debug!(
            "Checking {} repositories in '{}' for '{}' ({} teams)",
            total,
            org,
            username,
            teams.len()
        );

        let team_names = teams.iter().map(|t| t.name.clone()).collect();
        let teams = Arc::new(teams);
        let done = Arc::new(AtomicUsize::new(0));
        let org_owned = org.to_string();
        let user_owned = username.to_string();

        let grants = run_indexed(
            repos,
            |repo| {
                let resolver = self.clone();
                let teams = Arc::clone(&teams);
                let done = Arc::clone(&done);
                let org = org_owned.clone();
                let username = user_owned.clone();
                async move {
                    let grant = resolver.grant_for(&org, &username, &repo, &teams).await;
                    let finished = done.fetch_add(1, Ordering::SeqCst) + 1;
                    if let Some(ref progress) = resolver.progress {
                        progress(finished, total);
                    }
                    grant
                }
            },
            self.concurrency,
        )
        .await;

        AccessReport {
            org: org.to_string(),
            username: username.to_string(),
            grants: grants.into_iter().flatten().collect(),
            teams: team_names,
            repositories_checked: total,
            warnings: Vec::new(),
        }
    }

    /// Teams of `org_teams` that `username` is an active member of, in
    /// listing order.
    ///
    /// A pending invitation or a failed membership lookup does not count.
    async fn active_teams(&self, org: &str, username: &str, org_teams: &[Team]) -> Vec<Team> {
        let mut teams = Vec::new();
        for team in org_teams {
            match self.api.team_membership(org, &team.slug, username).await {
                Ok(membership) if membership.is_active() => teams.push(team.clone()),
                Ok(membership) => debug!(
                    "'{}' membership in '{}' is {}, ignoring",
                    username, team.slug, membership.state
                ),
                Err(e) if e.is_not_found() => {}
                Err(e) => debug!(
                    "Membership lookup for '{}' in '{}' failed: {}",
                    username, team.slug, e
                ),
            }
        }
        teams
    }

    /// Grant for a single repository: direct first, then the first team.
    async fn grant_for(
        &self,
        org: &str,
        username: &str,
        repo: &Repository,
        teams: &[Team],
    ) -> Option<AccessGrant> {
        let grant = |path, permission| AccessGrant {
            repo: repo.name.clone(),
            private: repo.private,
            path,
            permission,
        };

        if let Some(permission) = self.direct_permission(org, username, &repo.name).await {
            return Some(grant(AccessPath::Direct, permission));
        }

        for team in teams {
            match self
                .api
                .team_repo_permission(org, &team.slug, &repo.name)
                .await
            {
                Ok(Some(permission)) => {
                    return Some(grant(AccessPath::ViaTeam(team.name.clone()), permission));
                }
                Ok(None) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) => debug!(
                    "Team '{}' lookup on '{}' failed: {}",
                    team.slug, repo.name, e
                ),
            }
        }
        None
    }

    async fn direct_permission(&self, org: &str, username: &str, repo: &str) -> Option<Permission> {
        let collaborators = self.api.list_direct_collaborators(org, repo).await;
        let found = collaborators
            .items
            .into_iter()
            .find(|c| c.login.eq_ignore_ascii_case(username));

        match found {
            Some(collaborator) => collaborator.permission(),
            None => {
                if let Some(e) = collaborators.truncated_by {
                    debug!("Collaborator listing for '{}' incomplete: {}", repo, e);
                }
                None
            }
        }
    }
}
