// Rust guideline compliant 2026-02-06

//! Implementation of the `hd create` command.
//!
//! Opens a new ticket in the active status, owned by the acting user.

use crate::commands::Session;
use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::{create_ticket, parse_priority, TicketDraft};

/// Creates a ticket.
///
/// # Arguments
///
/// * `session` - Open repository and acting user
/// * `title` - Ticket title
/// * `description` - Optional description
/// * `priority` - Optional priority name; the configured default otherwise
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - No acting user is set or the user is unknown
/// - The priority name is not recognized
/// - The title is blank
pub fn execute(
    session: &Session,
    title: String,
    description: Option<String>,
    priority: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let priority = match priority {
        Some(value) => parse_priority(&value)?,
        None => session.config().default_priority,
    };
    let draft = TicketDraft {
        title,
        description: description.unwrap_or_default(),
        priority,
    };

    let ticket = create_ticket(session.storage(), session.username()?, draft)?;
    Ok(formatter.format_ticket(&ticket))
}
