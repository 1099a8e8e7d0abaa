//! Team models

use serde::{Deserialize, Serialize};

use super::permission::Permission;

/// Organization team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: u64,

    /// URL-safe key used in every team endpoint
    pub slug: String,

    /// Display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `closed` or `secret`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
}

impl Team {
    /// Case-insensitive name match, or exact slug match.
    pub fn matches(&self, name_or_slug: &str) -> bool {
        self.name.to_lowercase() == name_or_slug.to_lowercase() || self.slug == name_or_slug
    }
}

/// Team membership of one user
/// (`GET /orgs/{org}/teams/{slug}/memberships/{username}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMembership {
    /// `active` or `pending`
    pub state: String,

    /// `member` or `maintainer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl TeamMembership {
    pub fn is_active(&self) -> bool {
        self.state == "active"
    }
}

/// Body of `POST /orgs/{org}/teams`
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: String,
    pub privacy: String,
}

impl CreateTeamRequest {
    /// New closed (visible to org members) team.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            privacy: "closed".to_string(),
        }
    }
}

/// Body of `PUT /orgs/{org}/teams/{slug}/repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamRepoRequest {
    pub permission: Permission,
}
