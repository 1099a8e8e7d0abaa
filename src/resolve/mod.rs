//! Identity and access resolution
//!
//! - [`IdentityResolver`] turns a username or email into a GitHub login.
//! - [`AccessResolver`] computes which organization repositories a login can
//!   reach, and through which path.

use std::fmt;

use serde::Serialize;

use crate::client::models::Permission;

mod access;
mod identity;

pub use access::{AccessReport, AccessResolver, ProgressCallback};
pub use identity::IdentityResolver;

/// How a user reaches a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "team", rename_all = "snake_case")]
pub enum AccessPath {
    /// Direct collaborator grant on the repository
    Direct,
    /// Grant held by a team the user is an active member of (team name)
    ViaTeam(String),
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessPath::Direct => f.write_str("direct"),
            AccessPath::ViaTeam(team) => write!(f, "team: {}", team),
        }
    }
}

/// One repository a user can reach. At most one grant per repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessGrant {
    pub repo: String,
    pub private: bool,
    pub path: AccessPath,
    pub permission: Permission,
}
