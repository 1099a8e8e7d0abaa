//! GitHub API client
//!
//! Layers, leaves first:
//! - [`transport`] - the [`Transport`](transport::Transport) trait, requests and credentials
//! - [`github`] - reqwest-backed [`GitHubClient`]
//! - [`pagination`] - page-number walking with silent truncation
//! - [`api`] - typed endpoint methods on [`GitHubApi`]
//! - [`parallel`] - bounded, order-preserving fan-out

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parallel;
pub mod transport;

pub use api::GitHubApi;
pub use github::GitHubClient;
pub use pagination::Paged;
pub use parallel::run_indexed;
pub use transport::Credential;
