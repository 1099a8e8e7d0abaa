//! Mock transport for testing
//!
//! Routes requests by method and path to canned responses so the paginator,
//! typed API and resolvers can be tested without a server.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::transport::{ApiRequest, ApiResult, Method, Transport};
use crate::error::ApiError;

/// Canned response for one route
#[derive(Debug, Clone)]
enum Route {
    /// Same answer for every call
    Fixed(ApiResult<Value>),
    /// Answer chosen by the `page` query parameter (1-indexed); pages past
    /// the end answer with an empty array
    Pages(Vec<ApiResult<Value>>),
}

/// Mock transport.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_json(Method::Get, "/users/alice", json!({"login": "alice"}))
///     .await;
/// let value = mock.execute(ApiRequest::get("/users/alice")).await?;
/// ```
#[derive(Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), Route>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    captured_requests: Arc<Mutex<Vec<ApiRequest>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with a JSON body.
    pub async fn with_json(self, method: Method, path: &str, body: Value) -> Self {
        self.with_result(method, path, Ok(body)).await
    }

    /// Answer `method path` with an arbitrary result.
    pub async fn with_result(self, method: Method, path: &str, result: ApiResult<Value>) -> Self {
        self.routes
            .lock()
            .await
            .insert((method, path.to_string()), Route::Fixed(result));
        self
    }

    /// Answer `GET path` with an HTTP error status.
    pub async fn with_status(self, path: &str, status: u16, message: &str) -> Self {
        self.with_result(
            Method::Get,
            path,
            Err(ApiError::Status {
                status,
                message: message.to_string(),
            }),
        )
        .await
    }

    /// Answer `GET path` page by page.
    pub async fn with_pages(self, path: &str, pages: Vec<ApiResult<Value>>) -> Self {
        self.routes
            .lock()
            .await
            .insert((Method::Get, path.to_string()), Route::Pages(pages));
        self
    }

    /// Answer `GET path` with a single page holding `records`.
    pub async fn with_list(self, path: &str, records: Vec<Value>) -> Self {
        self.with_pages(path, vec![Ok(Value::Array(records))]).await
    }

    /// Delay every answer for `path`.
    pub async fn with_delay(self, path: &str, delay: Duration) -> Self {
        self.delays.lock().await.insert(path.to_string(), delay);
        self
    }

    /// All requests seen so far, in arrival order.
    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Number of requests made to `path` (any method, any query).
    pub async fn calls_to(&self, path: &str) -> usize {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.path == path)
            .count()
    }

    /// Number of requests whose method is not GET.
    pub async fn mutation_count(&self) -> usize {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method != Method::Get)
            .count()
    }

    /// Highest number of requests that were in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn page_of(request: &ApiRequest) -> usize {
        request
            .query
            .iter()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(1)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value> {
        self.captured_requests.lock().await.push(request.clone());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = self.delays.lock().await.get(&request.path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        let route = self
            .routes
            .lock()
            .await
            .get(&(request.method, request.path.clone()))
            .cloned();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match route {
            Some(Route::Fixed(result)) => result,
            Some(Route::Pages(pages)) => {
                let page = Self::page_of(&request);
                pages
                    .get(page.saturating_sub(1))
                    .cloned()
                    .unwrap_or_else(|| Ok(json!([])))
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "Not Found".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unrouted_request_is_not_found() {
        let mock = MockTransport::new();
        let err = mock
            .execute(ApiRequest::get("/users/nobody"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_routes_by_method() {
        let mock = MockTransport::new()
            .with_json(Method::Put, "/x", json!({"ok": true}))
            .await;

        assert!(mock.execute(ApiRequest::put("/x")).await.is_ok());
        assert!(mock.execute(ApiRequest::get("/x")).await.is_err());
        assert_eq!(mock.calls_to("/x").await, 2);
        assert_eq!(mock.mutation_count().await, 1);
    }

    #[tokio::test]
    async fn test_pages_past_end_are_empty() {
        let mock = MockTransport::new()
            .with_list("/list", vec![json!(1)])
            .await;

        let second = mock
            .execute(ApiRequest::get("/list").query("page", "2"))
            .await
            .unwrap();
        assert_eq!(second, json!([]));
    }
}
