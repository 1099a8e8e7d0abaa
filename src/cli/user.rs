//! Organization member commands

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::models::Member;
use crate::error::Result;
use crate::models::MemberDisplay;

/// Run the list-members command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Member, MemberDisplay, _, _>(opts, "members", |api, org| async move {
        api.list_members(&org).await
    })
    .await
}
