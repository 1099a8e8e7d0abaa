//! Test fixtures for a mocked GitHub organization
//!
//! [`OrgFixture`] describes repositories, teams, members and grants, and
//! builds a [`MockTransport`] answering every endpoint the resolvers touch.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use serde_json::{Value, json};

use super::mock::MockTransport;
use super::models::Permission;
use super::transport::Method;

/// Builder for a mocked organization.
///
/// # Example
/// ```ignore
/// let mock = OrgFixture::new("acme")
///     .repo("api", true)
///     .team("Frontend")
///     .team_member("Frontend", "alice")
///     .team_repo("Frontend", "api", "admin")
///     .build()
///     .await;
/// ```
#[derive(Debug, Clone)]
pub struct OrgFixture {
    org: String,
    repos: Vec<(String, bool)>,
    teams: Vec<String>,
    members: Vec<(String, Option<String>)>,
    direct: Vec<(String, String, String)>,
    team_members: Vec<(String, String, String)>,
    team_repos: Vec<(String, String, String)>,
    failures: Vec<String>,
}

/// Slug GitHub derives from a team name (lowercase, spaces to dashes).
pub fn slug_of(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Permission flags JSON implied by a role name.
fn flags_for(role: &str) -> Value {
    let level = Permission::from_role_name(role);
    let at_least = |p: Permission| level.is_some_and(|l| l >= p);
    json!({
        "admin": at_least(Permission::Admin),
        "maintain": at_least(Permission::Maintain),
        "push": at_least(Permission::Push),
        "triage": at_least(Permission::Triage),
        "pull": at_least(Permission::Pull),
    })
}

impl OrgFixture {
    pub fn new(org: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            repos: Vec::new(),
            teams: Vec::new(),
            members: Vec::new(),
            direct: Vec::new(),
            team_members: Vec::new(),
            team_repos: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Add a repository (listing order = call order).
    pub fn repo(mut self, name: &str, private: bool) -> Self {
        self.repos.push((name.to_string(), private));
        self
    }

    /// Add a team (listing order = call order).
    pub fn team(mut self, name: &str) -> Self {
        self.teams.push(name.to_string());
        self
    }

    /// Add an organization member with an optional public email.
    pub fn member(mut self, login: &str, public_email: Option<&str>) -> Self {
        self.members
            .push((login.to_string(), public_email.map(String::from)));
        self
    }

    /// Make `user` a direct collaborator on `repo` with a role name.
    pub fn direct(mut self, repo: &str, user: &str, role: &str) -> Self {
        self.direct
            .push((repo.to_string(), user.to_string(), role.to_string()));
        self
    }

    /// Make `user` an active member of team `team`.
    pub fn team_member(mut self, team: &str, user: &str) -> Self {
        self.team_members
            .push((slug_of(team), user.to_string(), "active".to_string()));
        self
    }

    /// Make `user` a pending (invited) member of team `team`.
    pub fn pending_team_member(mut self, team: &str, user: &str) -> Self {
        self.team_members
            .push((slug_of(team), user.to_string(), "pending".to_string()));
        self
    }

    /// Grant team `team` a role on `repo`.
    pub fn team_repo(mut self, team: &str, repo: &str, role: &str) -> Self {
        self.team_repos
            .push((slug_of(team), repo.to_string(), role.to_string()));
        self
    }

    /// Make every GET to `path` fail with a 500.
    pub fn fail(mut self, path: &str) -> Self {
        self.failures.push(path.to_string());
        self
    }

    pub fn collaborators_path(&self, repo: &str) -> String {
        format!("/repos/{}/{}/collaborators", self.org, repo)
    }

    pub fn team_repo_path(&self, team: &str, repo: &str) -> String {
        format!(
            "/orgs/{}/teams/{}/repos/{}/{}",
            self.org,
            slug_of(team),
            self.org,
            repo
        )
    }

    pub fn membership_path(&self, team: &str, user: &str) -> String {
        format!("/orgs/{}/teams/{}/memberships/{}", self.org, slug_of(team), user)
    }

    /// Build the mock transport.
    pub async fn build(self) -> MockTransport {
        let org = self.org.clone();
        let mut mock = MockTransport::new();

        let repos = self
            .repos
            .iter()
            .map(|(name, private)| json!({"name": name, "private": private}))
            .collect();
        mock = mock.with_list(&format!("/orgs/{}/repos", org), repos).await;

        let teams = self
            .teams
            .iter()
            .enumerate()
            .map(|(i, name)| json!({"id": i + 1, "slug": slug_of(name), "name": name}))
            .collect();
        mock = mock.with_list(&format!("/orgs/{}/teams", org), teams).await;

        let members = self
            .members
            .iter()
            .map(|(login, _)| json!({"login": login}))
            .collect();
        mock = mock.with_list(&format!("/orgs/{}/members", org), members).await;

        for (login, email) in &self.members {
            mock = mock
                .with_json(
                    Method::Get,
                    &format!("/users/{}", login),
                    json!({"login": login, "email": email}),
                )
                .await;
        }

        for (repo, _) in &self.repos {
            let collaborators = self
                .direct
                .iter()
                .filter(|(r, _, _)| r == repo)
                .map(|(_, user, role)| {
                    json!({"login": user, "role_name": role, "permissions": flags_for(role)})
                })
                .collect();
            mock = mock
                .with_list(&self.collaborators_path(repo), collaborators)
                .await;
        }

        for (slug, user, state) in &self.team_members {
            mock = mock
                .with_json(
                    Method::Get,
                    &format!("/orgs/{}/teams/{}/memberships/{}", org, slug, user),
                    json!({"state": state, "role": "member"}),
                )
                .await;
        }

        for (slug, repo, role) in &self.team_repos {
            mock = mock
                .with_json(
                    Method::Get,
                    &format!("/orgs/{}/teams/{}/repos/{}/{}", org, slug, org, repo),
                    json!({"name": repo, "role_name": role, "permissions": flags_for(role)}),
                )
                .await;
        }

        for path in &self.failures {
            mock = mock.with_status(path, 500, "Server Error").await;
        }

        mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_of() {
        assert_eq!(slug_of("Frontend Core"), "frontend-core");
        assert_eq!(slug_of("ops"), "ops");
    }

    #[test]
    fn test_flags_for_write() {
        let flags = flags_for("write");
        assert_eq!(flags["push"], true);
        assert_eq!(flags["pull"], true);
        assert_eq!(flags["maintain"], false);
    }
}
