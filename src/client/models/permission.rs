//! Repository permission levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Repository permission, weakest first.
///
/// GitHub reports these under two vocabularies: the REST permission names
/// (`pull`, `push`, ...) and role names (`read`, `write`, ...). Both parse.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Triage => "triage",
            Permission::Push => "push",
            Permission::Maintain => "maintain",
            Permission::Admin => "admin",
        }
    }

    /// Parse a permission or role name. Unknown names (custom roles, `none`)
    /// yield `None`.
    pub fn from_role_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pull" | "read" => Some(Permission::Pull),
            "triage" => Some(Permission::Triage),
            "push" | "write" => Some(Permission::Push),
            "maintain" => Some(Permission::Maintain),
            "admin" => Some(Permission::Admin),
            _ => None,
        }
    }

    /// Resolve from a record's `role_name`, falling back to its flags.
    pub fn from_record(role_name: Option<&str>, flags: Option<&PermissionFlags>) -> Option<Self> {
        role_name
            .and_then(Self::from_role_name)
            .or_else(|| flags.and_then(PermissionFlags::highest))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_role_name(s).ok_or_else(|| format!("unknown permission '{}'", s))
    }
}

/// `permissions` object attached to repositories and collaborators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub triage: bool,
    #[serde(default)]
    pub pull: bool,
}

impl PermissionFlags {
    /// Strongest permission whose flag is set.
    pub fn highest(&self) -> Option<Permission> {
        if self.admin {
            Some(Permission::Admin)
        } else if self.maintain {
            Some(Permission::Maintain)
        } else if self.push {
            Some(Permission::Push)
        } else if self.triage {
            Some(Permission::Triage)
        } else if self.pull {
            Some(Permission::Pull)
        } else {
            None
        }
    }
}
