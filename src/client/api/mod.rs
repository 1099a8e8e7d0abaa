//! Typed GitHub API surface
//!
//! [`GitHubApi`] wraps a [`Transport`] and exposes one method per endpoint the
//! CLI and the resolvers use. Methods are split by resource:
//! - [`listing`] - paginated collection listings
//! - [`team`] - team lookup, membership and team/repo grants
//! - [`repo`] - repository creation and deletion
//! - [`user`] - user profiles and search

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::pagination::{Paged, collect_all};
use super::transport::{ApiRequest, ApiResult, Transport};
use crate::error::ApiError;

mod listing;
mod repo;
mod team;
mod user;

/// Typed client over any [`Transport`]. Cheap to clone.
#[derive(Clone)]
pub struct GitHubApi {
    transport: Arc<dyn Transport>,
}

impl GitHubApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Execute a request and return the raw JSON value.
    pub async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        self.transport.execute(request).await
    }

    /// Execute a request and deserialize the body.
    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let path = request.path.clone();
        let value = self.send(request).await?;
        serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Unexpected response from {}: {}", path, e))
        })
    }

    /// Collect every page of a listing.
    async fn list<T: DeserializeOwned>(&self, request: ApiRequest) -> Paged<T> {
        collect_all(self.transport.as_ref(), request)
            .await
            .into_typed()
    }
}

/// Serialize a request body.
fn encode_body<T: Serialize>(body: &T) -> ApiResult<Value> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to encode request: {}", e)))
}
