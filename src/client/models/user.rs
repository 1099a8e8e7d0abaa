//! User and member models

use serde::{Deserialize, Serialize};

/// Organization member as listed by `GET /orgs/{org}/members`, optionally
/// enriched with the public email from the user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub login: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_email: Option<String>,
}

/// Public user profile (`GET /users/{username}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,

    /// Public email; `None` when the user keeps it private
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserProfile {
    /// Case-insensitive comparison of the public email.
    pub fn has_email(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|e| e.to_lowercase() == email.to_lowercase())
    }
}

impl From<UserProfile> for Member {
    fn from(profile: UserProfile) -> Self {
        Self {
            login: profile.login,
            public_email: profile.email,
        }
    }
}

/// `GET /search/users` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUsersResponse {
    #[serde(default)]
    pub items: Vec<Member>,
}
