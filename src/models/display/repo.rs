//! Repository display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, truncate_string};
use crate::client::models::Repository;

/// Repository display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    /// Repository name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// "private" or "public"
    #[tabled(rename = "VISIBILITY")]
    pub visibility: String,

    /// "yes" when archived
    #[tabled(rename = "ARCHIVED")]
    pub archived: String,

    /// Description (truncated for tables)
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Repository> for RepoDisplay {
    fn from(repo: Repository) -> Self {
        Self {
            visibility: repo.visibility().to_string(),
            archived: if repo.archived { "yes" } else { "no" }.to_string(),
            description: truncate_string(&or_dash(repo.description.as_deref()), 60),
            name: repo.name,
        }
    }
}
