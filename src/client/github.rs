//! GitHub REST API transport implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use super::transport::{ApiRequest, ApiResult, Credential, GITHUB_V3_MEDIA_TYPE, Method, Transport};
use crate::error::ApiError;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Message used when an error body has no `message` field
const UNKNOWN_ERROR: &str = "Unknown error";

/// GitHub API client backed by reqwest
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    credential: Credential,
}

impl GitHubClient {
    /// Create a client against a custom base URL (GitHub Enterprise, tests)
    pub fn with_base_url(credential: Credential, base_url: &str) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("ghorg/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        })
    }
}

#[async_trait]
impl Transport for GitHubClient {
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!("{} {}", request.method, request.target());

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .header(
                "Authorization",
                format!("Bearer {}", self.credential.token()),
            )
            .header("Accept", request.accept.unwrap_or(GITHUB_V3_MEDIA_TYPE));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        match (&request.body, request.method) {
            (Some(body), Method::Post | Method::Put) => {
                builder = builder.json(body);
            }
            (None, Method::Put) => {
                // GitHub rejects bodiless PUTs without an explicit zero length
                builder = builder.body("");
            }
            _ => {}
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        debug!("{} {} -> {}", request.method, request.path, status.as_u16());
        normalize_response(status, &text)
    }
}

/// Map a status and raw body to the transport result.
fn normalize_response(status: StatusCode, body: &str) -> ApiResult<Value> {
    match status {
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => {
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(body).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })
        }
        _ => Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(body),
        }),
    }
}

/// Pull the `message` field out of an error body.
fn error_message(body: &str) -> String {
    if body.trim().is_empty() {
        return "No response".to_string();
    }
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}
