//! Organization member display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Member;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "LOGIN")]
    pub login: String,
}

impl From<Member> for MemberDisplay {
    fn from(member: Member) -> Self {
        Self {
            login: member.login,
        }
    }
}
