//! Access grant display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Permission;
use crate::resolve::{AccessGrant, AccessPath};

/// One repository a user can reach.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AccessDisplay {
    #[tabled(rename = "REPOSITORY")]
    pub repo: String,

    #[tabled(rename = "VISIBILITY")]
    pub visibility: String,

    #[tabled(rename = "PERMISSION")]
    pub permission: Permission,

    /// "direct" or the granting team's name
    #[tabled(rename = "VIA")]
    pub via: String,
}

impl From<&AccessGrant> for AccessDisplay {
    fn from(grant: &AccessGrant) -> Self {
        Self {
            repo: grant.repo.clone(),
            visibility: if grant.private { "private" } else { "public" }.to_string(),
            permission: grant.permission,
            via: via_label(&grant.path),
        }
    }
}

impl From<AccessGrant> for AccessDisplay {
    fn from(grant: AccessGrant) -> Self {
        AccessDisplay::from(&grant)
    }
}

/// Access row for the organization-wide report (one row per user and
/// repository).
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserAccessDisplay {
    #[tabled(rename = "USER")]
    pub user: String,

    #[tabled(rename = "REPOSITORY")]
    pub repo: String,

    #[tabled(rename = "PERMISSION")]
    pub permission: Permission,

    #[tabled(rename = "VIA")]
    pub via: String,
}

impl UserAccessDisplay {
    pub fn new(user: &str, grant: &AccessGrant) -> Self {
        Self {
            user: user.to_string(),
            repo: grant.repo.clone(),
            permission: grant.permission,
            via: via_label(&grant.path),
        }
    }
}

fn via_label(path: &AccessPath) -> String {
    match path {
        AccessPath::Direct => "direct".to_string(),
        AccessPath::ViaTeam(team) => team.clone(),
    }
}
