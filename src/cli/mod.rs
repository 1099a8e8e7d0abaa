//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::Permission;

pub mod access;
pub mod args;
pub mod context;
pub mod handlers;
pub mod org;
pub mod repo;
pub mod team;
pub mod user;

pub use args::OutputFormat;
pub use context::CommandContext;

/// ghorg - GitHub organization management
#[derive(Parser, Debug)]
#[command(name = "ghorg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "GHORG_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// GitHub organization (defaults to default_org from the config file)
    #[arg(long, global = true, env = "GHORG_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "GHORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHORG_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Maximum repositories checked concurrently during access resolution
    #[arg(long, global = true, env = "GHORG_CONCURRENCY", hide_env = true,
          value_parser = clap::value_parser!(usize))]
    pub concurrency: Option<usize>,

    /// GitHub API base URL
    #[arg(long, global = true, env = "GHORG_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List organizations you belong to
    ListOrgs,

    /// List the organization's teams
    ListTeams,

    /// List the organization's repositories
    ListRepos,

    /// List the organization's members
    ListMembers,

    /// Create a team
    CreateTeam {
        /// Team name
        #[arg(long)]
        team: String,

        /// Team description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a team
    DeleteTeam {
        /// Team name
        #[arg(long)]
        team: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Grant a team access to a repository
    AddRepo {
        /// Team name
        #[arg(long)]
        team: String,

        /// Repository name
        #[arg(long)]
        repo: String,

        /// Permission to grant
        #[arg(long, value_enum)]
        permission: Permission,
    },

    /// Remove a team's access to a repository
    RemoveRepo {
        /// Team name
        #[arg(long)]
        team: String,

        /// Repository name
        #[arg(long)]
        repo: String,
    },

    /// Add a user to a team
    AddUser {
        /// Team name
        #[arg(long)]
        team: String,

        /// GitHub username or public email
        #[arg(long)]
        user: String,
    },

    /// Remove a user from a team
    RemoveUser {
        /// Team name
        #[arg(long)]
        team: String,

        /// GitHub username or public email
        #[arg(long)]
        user: String,
    },

    /// Create a repository
    CreateRepo {
        /// Name for the new repository
        #[arg(long)]
        repo_name: String,

        /// Make the repository private
        #[arg(long)]
        repo_private: bool,

        /// Repository description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a repository
    DeleteRepo {
        /// Repository name
        #[arg(long)]
        repo: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show which repositories a user can access, and how
    UserAccess {
        /// GitHub username or public email
        #[arg(long)]
        user: String,
    },

    /// Show repository access for every organization member
    ListUsersAccess,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   ghorg completion bash > /etc/bash_completion.d/ghorg
  zsh:    ghorg completion zsh > \"${fpath[1]}/_ghorg\"
  fish:   ghorg completion fish > ~/.config/fish/completions/ghorg.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
