//! Generic list command handler
//!
//! Standard flow shared by the org-scoped list commands:
//! 1. Create command context
//! 2. Resolve the organization
//! 3. Fetch every page
//! 4. Convert to display type and print

use std::future::Future;

use log::{debug, warn};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::{GitHubApi, Paged};
use crate::error::Result;
use crate::output::Formattable;

/// Run a standard org-scoped list command.
///
/// A listing cut short by an error still prints what was collected, with a
/// warning on stderr.
///
/// # Example
///
/// ```ignore
/// run_list_command::<Team, TeamDisplay, _, _>(opts, "teams", |api, org| async move {
///     api.list_teams(&org).await
/// })
/// .await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Paged<T>>,
    F: FnOnce(GitHubApi, String) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    let org = ctx.require_org()?.to_string();

    debug!("Fetching {} for org {}", resource_name, org);
    let page = fetcher(ctx.api.clone(), org.clone()).await;
    debug!("Fetched {} {}", page.items.len(), resource_name);

    if let Some(e) = &page.truncated_by {
        warn!("Listing of {} in '{}' is incomplete: {}", resource_name, org, e);
        eprintln!(
            "Warning: {} listing stopped early ({}); results may be incomplete.",
            resource_name, e
        );
    }

    let display_items: Vec<D> = page.items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}
