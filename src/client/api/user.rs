//! User profile and search operations

use urlencoding::encode;

use super::GitHubApi;
use crate::client::models::{SearchUsersResponse, UserProfile};
use crate::client::transport::{ApiRequest, ApiResult};

impl GitHubApi {
    /// Public profile of a user. Fails with 404 for unknown logins.
    pub async fn get_user(&self, username: &str) -> ApiResult<UserProfile> {
        self.fetch(ApiRequest::get(format!("/users/{}", encode(username))))
            .await
    }

    /// Search users whose public email matches `email`.
    pub async fn search_users_by_email(&self, email: &str) -> ApiResult<SearchUsersResponse> {
        self.fetch(ApiRequest::get("/search/users").query("q", format!("{} in:email", email)))
            .await
    }
}
