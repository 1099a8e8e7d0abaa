//! GitHub API data models
//!
//! Wire types returned by the GitHub REST API, organized by resource.

mod org;
mod permission;
mod repo;
mod team;
mod user;

pub use org::OrgMembership;
pub use permission::Permission;
pub use repo::{Collaborator, CreateRepoRequest, Repository};
pub use team::{CreateTeamRequest, Team, TeamMembership, TeamRepoRequest};
pub use user::{Member, SearchUsersResponse, UserProfile};
