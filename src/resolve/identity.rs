//! Identifier to GitHub login resolution

use log::{debug, warn};

use crate::client::GitHubApi;

/// Maps a username or email to a canonical GitHub login.
#[derive(Clone)]
pub struct IdentityResolver {
    api: GitHubApi,
}

impl IdentityResolver {
    pub fn new(api: GitHubApi) -> Self {
        Self { api }
    }

    /// Resolve `identifier` within `org`.
    ///
    /// Identifiers containing `@` are treated as emails; anything else as a
    /// login whose existence is checked. `None` means the identifier could
    /// not be resolved (unknown user, private email, ...), which is not an
    /// error at this level.
    pub async fn resolve(&self, identifier: &str, org: &str) -> Option<String> {
        if identifier.trim().is_empty() {
            return None;
        }
        if identifier.contains('@') {
            self.resolve_email(identifier, org).await
        } else {
            self.resolve_username(identifier).await
        }
    }

    async fn resolve_username(&self, username: &str) -> Option<String> {
        match self.api.get_user(username).await {
            Ok(_) => Some(username.to_string()),
            Err(e) => {
                debug!("User lookup for '{}' failed: {}", username, e);
                None
            }
        }
    }

    /// First org member (listing order) whose public email matches, then a
    /// user search as fallback.
    async fn resolve_email(&self, email: &str, org: &str) -> Option<String> {
        if let Some(login) = self.match_member_email(email, org).await {
            return Some(login);
        }

        match self.api.search_users_by_email(email).await {
            Ok(response) => {
                let login = response.items.into_iter().next().map(|m| m.login);
                if let Some(ref login) = login {
                    debug!("Email '{}' resolved to '{}' via user search", email, login);
                }
                login
            }
            Err(e) => {
                debug!("User search for '{}' failed: {}", email, e);
                None
            }
        }
    }

    async fn match_member_email(&self, email: &str, org: &str) -> Option<String> {
        let members = self.api.list_members(org).await;
        if let Some(ref e) = members.truncated_by {
            warn!(
                "Member listing for '{}' incomplete ({} members seen): {}",
                org,
                members.items.len(),
                e
            );
        }

        for member in members.items {
            match self.api.get_user(&member.login).await {
                Ok(profile) if profile.has_email(email) => {
                    debug!("Email '{}' matches member '{}'", email, profile.login);
                    return Some(member.login);
                }
                Ok(_) => {}
                Err(e) => debug!("Profile lookup for '{}' failed: {}", member.login, e),
            }
        }
        None
    }
}
