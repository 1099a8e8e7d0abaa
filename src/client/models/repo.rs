//! Repository and collaborator models

use serde::{Deserialize, Serialize};

use super::permission::{Permission, PermissionFlags};

/// Repository resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (without owner)
    pub name: String,

    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    #[serde(default)]
    pub archived: bool,

    /// Caller's (or a team's) permission flags, when the endpoint reports them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionFlags>,

    /// Role name, when the endpoint reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Repository {
    /// Permission carried by this record, if any.
    pub fn permission(&self) -> Option<Permission> {
        Permission::from_record(self.role_name.as_deref(), self.permissions.as_ref())
    }

    /// "private" or "public"
    pub fn visibility(&self) -> &'static str {
        if self.private { "private" } else { "public" }
    }
}

/// Repository collaborator (`GET /repos/{owner}/{repo}/collaborators`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub login: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionFlags>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Collaborator {
    pub fn permission(&self) -> Option<Permission> {
        Permission::from_record(self.role_name.as_deref(), self.permissions.as_ref())
    }
}

/// Body of `POST /orgs/{org}/repos`
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepoRequest {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
}

impl CreateRepoRequest {
    pub fn new(name: impl Into<String>, private: bool, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            private,
            has_issues: true,
            has_projects: true,
            has_wiki: true,
        }
    }
}
