//! Team display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, truncate_string};
use crate::client::models::Team;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "SLUG")]
    pub slug: String,

    #[tabled(rename = "PRIVACY")]
    pub privacy: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Team> for TeamDisplay {
    fn from(team: Team) -> Self {
        Self {
            name: team.name,
            id: team.id,
            slug: team.slug,
            privacy: or_dash(team.privacy.as_deref()),
            description: truncate_string(&or_dash(team.description.as_deref()), 50),
        }
    }
}
