//! Page-number pagination over GitHub list endpoints
//!
//! GitHub list endpoints take `page` (1-indexed) and `per_page` query
//! parameters. [`collect_all`] walks the pages until an empty one comes back.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{ApiRequest, Transport};
use crate::error::ApiError;

/// Records requested per page (GitHub maximum)
pub const PER_PAGE: usize = 100;

/// Pagination parameters for a single page request.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().page(2);
/// let request = params.apply(ApiRequest::get("/orgs/acme/repos"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number, starting at 1
    pub page: usize,
    /// Number of records per page
    pub per_page: usize,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
        }
    }
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Query pairs in GitHub parameter names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }

    /// Add the pagination pairs to a request, keeping its existing query.
    pub fn apply(&self, request: ApiRequest) -> ApiRequest {
        self.to_query_params()
            .into_iter()
            .fold(request, |req, (k, v)| req.query(k, v))
    }
}

/// All records gathered from a paginated endpoint.
#[derive(Debug, Clone, Default)]
pub struct PageCollection {
    /// Records in server order, concatenated across pages
    pub records: Vec<Value>,
    /// Set when a page request failed and the listing stopped early
    pub truncated_by: Option<ApiError>,
}

impl PageCollection {
    /// Deserialize the records, skipping any that don't match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Paged<T> {
        let items = self
            .records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<T>(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("Skipping malformed record: {}", e);
                    None
                }
            })
            .collect();

        Paged {
            items,
            truncated_by: self.truncated_by,
        }
    }
}

/// Typed records from a paginated endpoint.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub truncated_by: Option<ApiError>,
}

/// Collect every record of a paginated endpoint.
///
/// Stops at the first empty page. A failed page ends the listing early: the
/// records gathered so far are returned and the error is kept in
/// [`PageCollection::truncated_by`] instead of being raised.
pub async fn collect_all(transport: &dyn Transport, base: ApiRequest) -> PageCollection {
    let mut collection = PageCollection::default();
    let mut params = PaginationParams::new();

    loop {
        let request = params.apply(base.clone());

        match transport.execute(request).await {
            Ok(Value::Array(page)) if !page.is_empty() => {
                debug!("{} page {} returned {} records", base.path, params.page, page.len());
                collection.records.extend(page);
                params = params.page(params.page + 1);
            }
            Ok(_) => break,
            Err(e) => {
                warn!(
                    "Listing {} stopped at page {} after {} records: {}",
                    base.path,
                    params.page,
                    collection.records.len(),
                    e
                );
                collection.truncated_by = Some(e);
                break;
            }
        }
    }

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use serde::Deserialize;
    use serde_json::json;

    fn numbered(start: usize, count: usize) -> Value {
        Value::Array((start..start + count).map(|i| json!({ "n": i })).collect())
    }

    #[test]
    fn test_pagination_params_default() {
        let params = PaginationParams::new();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, PER_PAGE);

        let query = params.to_query_params();
        assert!(query.contains(&("page", "1".to_string())));
        assert!(query.contains(&("per_page", "100".to_string())));
    }

    #[test]
    fn test_pagination_params_apply_keeps_existing_query() {
        let request = PaginationParams::new()
            .page(3)
            .apply(ApiRequest::get("/repos/acme/api/collaborators").query("affiliation", "direct"));

        assert_eq!(
            request.target(),
            "/repos/acme/api/collaborators?affiliation=direct&page=3&per_page=100"
        );
    }

    #[tokio::test]
    async fn test_collect_all_concatenates_until_empty_page() {
        let mock = MockTransport::new()
            .with_pages(
                "/orgs/acme/repos",
                vec![
                    Ok(numbered(0, 100)),
                    Ok(numbered(100, 100)),
                    Ok(numbered(200, 37)),
                    Ok(json!([])),
                ],
            )
            .await;

        let collection = collect_all(&mock, ApiRequest::get("/orgs/acme/repos")).await;

        assert_eq!(collection.records.len(), 237);
        assert!(collection.truncated_by.is_none());
        for (i, record) in collection.records.iter().enumerate() {
            assert_eq!(record["n"], i);
        }
        assert_eq!(mock.calls_to("/orgs/acme/repos").await, 4);
    }

    #[tokio::test]
    async fn test_collect_all_truncates_silently_on_error() {
        let mock = MockTransport::new()
            .with_pages(
                "/orgs/acme/repos",
                vec![
                    Ok(numbered(0, 100)),
                    Err(ApiError::Status {
                        status: 502,
                        message: "Bad Gateway".to_string(),
                    }),
                ],
            )
            .await;

        let collection = collect_all(&mock, ApiRequest::get("/orgs/acme/repos")).await;

        assert_eq!(collection.records.len(), 100);
        assert!(collection.truncated_by.is_some());
        assert_eq!(collection.truncated_by.unwrap().status(), Some(502));
    }

    #[tokio::test]
    async fn test_collect_all_first_page_error_is_empty() {
        let mock = MockTransport::new()
            .with_pages(
                "/orgs/acme/repos",
                vec![Err(ApiError::Network("down".to_string()))],
            )
            .await;

        let collection = collect_all(&mock, ApiRequest::get("/orgs/acme/repos")).await;
        assert!(collection.records.is_empty());
        assert!(collection.truncated_by.is_some());
    }

    #[tokio::test]
    async fn test_collect_all_sends_page_params() {
        let mock = MockTransport::new()
            .with_pages("/orgs/acme/teams", vec![Ok(numbered(0, 2)), Ok(json!([]))])
            .await;

        collect_all(&mock, ApiRequest::get("/orgs/acme/teams")).await;

        let targets: Vec<String> = mock
            .requests()
            .await
            .into_iter()
            .map(|r| r.target())
            .collect();
        assert_eq!(
            targets,
            vec![
                "/orgs/acme/teams?page=1&per_page=100",
                "/orgs/acme/teams?page=2&per_page=100",
            ]
        );
    }

    #[tokio::test]
    async fn test_into_typed_skips_malformed_records() {
        #[derive(Deserialize)]
        struct Named {
            name: String,
        }

        let collection = PageCollection {
            records: vec![json!({"name": "a"}), json!({"id": 1}), json!({"name": "b"})],
            truncated_by: None,
        };

        let typed = collection.into_typed::<Named>();
        assert!(typed.truncated_by.is_none());
        let names: Vec<String> = typed.items.into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
