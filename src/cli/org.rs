//! Organization command implementations

use log::{debug, warn};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::output::Formattable;

/// Run the list-orgs command.
///
/// Lists the authenticated user's organizations, so no `--org` is needed.
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let memberships = ctx.api.list_orgs().await;
    debug!("Fetched {} organization memberships", memberships.items.len());
    if let Some(e) = &memberships.truncated_by {
        warn!("Organization listing is incomplete: {}", e);
        eprintln!("Warning: organization listing stopped early ({}).", e);
    }

    let display: Vec<OrgDisplay> = memberships
        .items
        .into_iter()
        .map(OrgDisplay::from)
        .collect();
    display.print(ctx.format)
}
