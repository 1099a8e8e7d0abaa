//! Global CLI options shared across all commands
//!
//! One struct instead of threading every global flag through each handler.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file defaults are applied in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Organization override (bypasses `default_org`)
    pub org: Option<String>,

    /// Custom config file path (defaults to ~/.ghorg/config.yaml)
    pub config: Option<String>,

    /// Maximum concurrent per-repository lookups
    pub concurrency: Option<usize>,

    /// API base URL override, for GitHub Enterprise or testing
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            config: cli.config.clone(),
            concurrency: cli.concurrency,
            api_host: cli.api_host.clone(),
        }
    }

    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
