//! Configuration management for ghorg
//!
//! The bearer token only ever comes from the environment (`GITHUB_TOKEN`,
//! optionally via a `.env` file). Everything else has a default and may be
//! set in an optional YAML file at `~/.ghorg/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::Credential;
use crate::error::{ConfigError, Result};

/// Environment variable holding the GitHub token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Default GitHub REST API base URL
pub const DEFAULT_API_HOST: &str = "https://api.github.com";

/// Default number of concurrent per-repository lookups
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Application configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Organization used when `--org` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_org: Option<String>,

    /// API base URL override (GitHub Enterprise, tests)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Concurrent per-repository lookups during access resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".ghorg").join("config.yaml"))
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields the default config; a
    /// missing file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let path = PathBuf::from(p);
                if !path.exists() {
                    return Err(ConfigError::Invalid(format!(
                        "Config file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot work at runtime
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == Some(0) {
            return Err(ConfigError::Invalid("concurrency must be at least 1".to_string()).into());
        }
        if let Some(org) = &self.default_org {
            if org.trim().is_empty() {
                return Err(ConfigError::Invalid("default_org must not be empty".to_string()).into());
            }
        }
        Ok(())
    }

    /// API base URL with the default applied and any trailing slash removed
    pub fn api_host(&self) -> String {
        self.api_host
            .as_deref()
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_string()
    }

    /// Concurrency with the default applied
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(DEFAULT_CONCURRENCY).max(1)
    }
}

/// Read the credential from the process environment.
///
/// Loads `.env` from the working directory first (if present) without
/// overriding variables that are already set.
pub fn load_credential() -> Result<Credential> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            log::warn!("Failed to load .env file: {}", e);
        }
    }
    credential_from(std::env::var(TOKEN_ENV_VAR).ok())
}

/// Build a credential from an optional raw token value
pub fn credential_from(raw: Option<String>) -> Result<Credential> {
    match raw {
        Some(token) if !token.trim().is_empty() => Ok(Credential::new(token.trim())),
        _ => Err(ConfigError::MissingToken.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_org.is_none());
        assert_eq!(config.api_host(), DEFAULT_API_HOST);
        assert_eq!(config.concurrency(), DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "default_org: acme\napi_host: http://localhost:8080/\nconcurrency: 2\n",
        )
        .unwrap();

        let config = Config::load_at(path.to_str()).unwrap();
        assert_eq!(config.default_org.as_deref(), Some("acme"));
        assert_eq!(config.api_host(), "http://localhost:8080");
        assert_eq!(config.concurrency(), 2);
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "").unwrap();

        let config = Config::load_at(path.to_str()).unwrap();
        assert!(config.default_org.is_none());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        let result = Config::load_at(path.to_str());
        assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "concurrency: 0\n").unwrap();

        let result = Config::load_at(path.to_str());
        assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "default_org: [unterminated\n").unwrap();

        let result = Config::load_at(path.to_str());
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_credential_from_missing_or_blank() {
        assert!(matches!(
            credential_from(None),
            Err(Error::Config(ConfigError::MissingToken))
        ));
        assert!(matches!(
            credential_from(Some("   ".to_string())),
            Err(Error::Config(ConfigError::MissingToken))
        ));
    }

    #[test]
    fn test_credential_from_trims() {
        let credential = credential_from(Some(" ghp_abc \n".to_string())).unwrap();
        assert_eq!(credential.token(), "ghp_abc");
    }
}
