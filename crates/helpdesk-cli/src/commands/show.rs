// Rust guideline compliant 2026-02-06

//! Implementation of the `hd show` command.

use crate::commands::Session;
use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::show_ticket;

/// Shows a ticket with its comments and the actions open to the viewer.
///
/// Supports partial ID resolution (minimum 3 characters).
///
/// # Errors
///
/// Returns a not-found error if the ticket does not exist or the acting user
/// may not view it.
pub fn execute(session: &Session, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let detail = show_ticket(session.storage(), session.username()?, id)?;
    Ok(formatter.format_detail(&detail))
}
