//! Display models for CLI output
//!
//! Conversions from API and resolution types into table rows and JSON.

pub mod display;

pub use display::{
    AccessDisplay, MemberDisplay, OrgDisplay, RepoDisplay, TeamDisplay, UserAccessDisplay,
};
