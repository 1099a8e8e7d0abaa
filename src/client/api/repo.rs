//! Repository operations

use urlencoding::encode;

use super::{GitHubApi, encode_body};
use crate::client::models::{CreateRepoRequest, Repository};
use crate::client::transport::{ApiRequest, ApiResult};

impl GitHubApi {
    /// Create a repository in an organization.
    pub async fn create_repo(&self, org: &str, request: &CreateRepoRequest) -> ApiResult<Repository> {
        let body = encode_body(request)?;
        self.fetch(ApiRequest::post(
            format!("/orgs/{}/repos", encode(org)),
            body,
        ))
        .await
    }

    /// Delete an organization repository.
    pub async fn delete_repo(&self, org: &str, repo: &str) -> ApiResult<()> {
        self.send(ApiRequest::delete(format!(
            "/repos/{}/{}",
            encode(org),
            encode(repo)
        )))
        .await?;
        Ok(())
    }
}
