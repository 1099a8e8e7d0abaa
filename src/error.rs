//! Error types for the ghorg CLI

use thiserror::Error;

/// Result type alias for ghorg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}", user_not_found_message(.identifier))]
    UserNotFound { identifier: String },

    #[error("Team '{team}' not found in '{org}'")]
    TeamNotFound { team: String, org: String },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

fn user_not_found_message(identifier: &str) -> String {
    if identifier.contains('@') {
        format!(
            "Could not resolve '{}' to a GitHub user. The email may be private or not a \
             member's public email; pass the GitHub username instead (e.g. 'octocat').",
            identifier
        )
    } else {
        format!("Invalid GitHub username: {}", identifier)
    }
}

/// Errors from a single GitHub API call
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 answer.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GITHUB_TOKEN environment variable is not set.")]
    MissingToken,

    #[error(
        "Organization not configured. Pass --org <ORG>, set GHORG_ORG, or set default_org in the config file."
    )]
    MissingOrg,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
