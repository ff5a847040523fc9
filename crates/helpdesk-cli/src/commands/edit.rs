// Rust guideline compliant 2026-02-06

//! Implementation of the `hd edit` command.

use crate::commands::Session;
use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::{edit_ticket, parse_priority, TicketEdit};

/// Changes the description or priority of an active ticket.
///
/// Only the owner of an active ticket may edit it; other requests change
/// nothing and report so.
///
/// # Errors
///
/// Returns an error if the ticket or user cannot be resolved or the priority
/// name is unknown.
pub fn execute(
    session: &Session,
    id: &str,
    description: Option<String>,
    priority: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let edit = TicketEdit {
        description,
        priority: priority.as_deref().map(parse_priority).transpose()?,
    };

    match edit_ticket(session.storage(), session.username()?, id, edit)? {
        Some(ticket) => Ok(formatter.format_ticket(&ticket)),
        None => Ok(formatter.format_message("No changes applied.")),
    }
}
