//! Transport abstraction over the GitHub REST API
//!
//! A [`Transport`] executes one authenticated call and normalizes the outcome
//! into `Result<serde_json::Value, ApiError>`. Everything above it (pagination,
//! typed API, resolvers) only talks to this trait.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;

/// Result of a single transport call
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Default media type sent in the `Accept` header
pub const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Media type that makes team/repo checks return the repository with permissions
pub const REPOSITORY_MEDIA_TYPE: &str = "application/vnd.github.v3.repository+json";

/// HTTP methods the client issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Static bearer token, read once at startup and never mutated
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// A single API request.
///
/// # Example
/// ```ignore
/// let request = ApiRequest::get("/orgs/acme/repos")
///     .query("page", "2")
///     .query("per_page", "100");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path relative to the API base URL, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    /// JSON body, only sent for POST and PUT
    pub body: Option<Value>,
    /// Overrides the default `Accept` media type
    pub accept: Option<&'static str>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            accept: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).body(body)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query pair.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Override the `Accept` media type.
    pub fn accept(mut self, media_type: &'static str) -> Self {
        self.accept = Some(media_type);
        self
    }

    /// Path plus query string, for logging and mock routing.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

/// Executes authenticated calls against a REST endpoint.
///
/// Implementations never retry. A failed call is reported to the caller,
/// which decides whether to continue or abort.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request.
    ///
    /// Returns the parsed JSON body on 200/201/204, or `Value::Null` when the
    /// body is empty.
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value>;
}
