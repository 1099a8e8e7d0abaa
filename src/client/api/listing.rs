//! Paginated collection listings

use urlencoding::encode;

use super::GitHubApi;
use crate::client::models::{Collaborator, Member, OrgMembership, Repository, Team};
use crate::client::pagination::Paged;
use crate::client::transport::ApiRequest;

impl GitHubApi {
    /// Organizations the authenticated user belongs to
    pub async fn list_orgs(&self) -> Paged<OrgMembership> {
        self.list(ApiRequest::get("/user/memberships/orgs")).await
    }

    /// Teams of an organization, in listing order
    pub async fn list_teams(&self, org: &str) -> Paged<Team> {
        self.list(ApiRequest::get(format!("/orgs/{}/teams", encode(org))))
            .await
    }

    /// Repositories of an organization, in listing order
    pub async fn list_repos(&self, org: &str) -> Paged<Repository> {
        self.list(ApiRequest::get(format!("/orgs/{}/repos", encode(org))))
            .await
    }

    /// Members of an organization (logins only; `public_email` is unset)
    pub async fn list_members(&self, org: &str) -> Paged<Member> {
        self.list(ApiRequest::get(format!("/orgs/{}/members", encode(org))))
            .await
    }

    /// Collaborators granted access to the repository directly (not through
    /// teams or org defaults)
    pub async fn list_direct_collaborators(&self, owner: &str, repo: &str) -> Paged<Collaborator> {
        self.list(
            ApiRequest::get(format!(
                "/repos/{}/{}/collaborators",
                encode(owner),
                encode(repo)
            ))
            .query("affiliation", "direct"),
        )
        .await
    }
}
