//! Repository commands

use log::debug;
use serde_json::json;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_destructive, report_success, run_list_command};
use crate::client::models::{CreateRepoRequest, Repository};
use crate::error::Result;
use crate::models::RepoDisplay;

/// Run the list-repos command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Repository, RepoDisplay, _, _>(opts, "repositories", |api, org| async move {
        api.list_repos(&org).await
    })
    .await
}

/// Run the create-repo command
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    private: bool,
    description: &str,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    let request = CreateRepoRequest::new(name, private, description);
    let repo = ctx.api.create_repo(org, &request).await?;
    debug!("Created repository {:?}", repo.html_url);

    report_success(
        ctx.format,
        &repo,
        &format!(
            "Created {} repo '{}' in '{}'",
            repo.visibility(),
            repo.name,
            org
        ),
    )
}

/// Run the delete-repo command
pub async fn delete(opts: &GlobalOptions, repo: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?;

    if !confirm_destructive(&format!("repository '{}/{}'", org, repo), yes)? {
        return Ok(());
    }

    ctx.api.delete_repo(org, repo).await?;

    report_success(
        ctx.format,
        &json!({"deleted": true, "org": org, "repo": repo}),
        &format!("Deleted repo '{}' in '{}'", repo, org),
    )
}
