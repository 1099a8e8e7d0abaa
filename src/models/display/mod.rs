//! Display model implementations for table and JSON output

mod access;
mod common;
mod member;
mod org;
mod repo;
mod team;

pub use access::{AccessDisplay, UserAccessDisplay};
pub use member::MemberDisplay;
pub use org::OrgDisplay;
pub use repo::RepoDisplay;
pub use team::TeamDisplay;
