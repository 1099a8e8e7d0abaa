//! Shared command handler flows

mod list;
mod mutation;

pub use list::run_list_command;
pub use mutation::{confirm_destructive, report_success};
