//! Command execution context
//!
//! Loads configuration and the credential, builds the API client, and
//! resolves the target organization, so command handlers start from a
//! ready-to-use [`GitHubApi`].

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::models::Team;
use crate::client::{GitHubApi, GitHubClient};
use crate::config::{Config, load_credential};
use crate::error::{ConfigError, Error, Result};
use crate::resolve::{AccessResolver, IdentityResolver};

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// Typed API over the shared transport
    pub api: GitHubApi,
    /// Output format preference
    pub format: OutputFormat,
    /// Organization from `--org`/`GHORG_ORG`, or the config default
    org: Option<String>,
    concurrency: usize,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// # Errors
    /// Fails before any network call when the config file is unreadable or
    /// `GITHUB_TOKEN` is missing.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        config.validate()?;

        let credential = load_credential()?;
        let api_host = opts
            .api_host_ref()
            .map(|h| h.trim_end_matches('/').to_string())
            .unwrap_or_else(|| config.api_host());
        debug!("Using API host {}", api_host);

        let client = GitHubClient::with_base_url(credential, &api_host)?;
        let api = GitHubApi::new(Arc::new(client));

        let org = opts
            .org_ref()
            .map(str::to_string)
            .or_else(|| config.default_org.clone());
        let concurrency = opts
            .concurrency
            .map(|c| c.max(1))
            .unwrap_or_else(|| config.concurrency());

        Ok(Self {
            api,
            format: opts.format,
            org,
            concurrency,
        })
    }

    /// Get the organization, returning an error if not set.
    pub fn require_org(&self) -> Result<&str> {
        match self.org.as_deref().map(str::trim) {
            Some(org) if !org.is_empty() => Ok(org),
            _ => Err(ConfigError::MissingOrg.into()),
        }
    }

    pub fn identity_resolver(&self) -> IdentityResolver {
        IdentityResolver::new(self.api.clone())
    }

    pub fn access_resolver(&self) -> AccessResolver {
        AccessResolver::new(self.api.clone()).concurrency(self.concurrency)
    }

    /// Look up a team by name, failing with [`Error::TeamNotFound`].
    pub async fn require_team(&self, org: &str, name: &str) -> Result<Team> {
        self.api
            .find_team(org, name)
            .await?
            .ok_or_else(|| Error::TeamNotFound {
                team: name.to_string(),
                org: org.to_string(),
            })
    }

    /// Resolve a username or email, failing with [`Error::UserNotFound`].
    pub async fn require_user(&self, org: &str, identifier: &str) -> Result<String> {
        self.identity_resolver()
            .resolve(identifier, org)
            .await
            .ok_or_else(|| Error::UserNotFound {
                identifier: identifier.to_string(),
            })
    }
}
