//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::OrgMembership;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Organization login
    #[tabled(rename = "ORGANIZATION")]
    pub login: String,

    /// Your role in the organization
    #[tabled(rename = "ROLE")]
    pub role: String,
}

impl From<OrgMembership> for OrgDisplay {
    fn from(membership: OrgMembership) -> Self {
        Self {
            login: membership.organization.login,
            role: or_dash(membership.role.as_deref()),
        }
    }
}
