//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization login (the identifier used in API paths)
    pub login: String,

    /// Numeric organization ID
    #[serde(default)]
    pub id: u64,

    /// Organization description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Authenticated user's membership in an organization
/// (`GET /user/memberships/orgs`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMembership {
    pub organization: Organization,

    /// `admin` or `member`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// `active` or `pending`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
