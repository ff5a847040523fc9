// Rust guideline compliant 2026-02-06

//! Implementation of `hd list` and `hd restored`.

use crate::commands::Session;
use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::{list_tickets, parse_priority, parse_status, restored_tickets, ListOptions};

/// Lists the tickets visible to the acting user.
///
/// # Arguments
///
/// * `session` - Open repository and acting user
/// * `status` - Optional status filter, by name
/// * `priority` - Optional priority filter, by name
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if a filter value is not a known choice or the user is
/// unknown.
pub fn execute(
    session: &Session,
    status: Option<String>,
    priority: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let options = ListOptions {
        status: status.as_deref().map(parse_status).transpose()?,
        priority: priority.as_deref().map(parse_priority).transpose()?,
    };

    let tickets = list_tickets(
        session.storage(),
        session.username()?,
        &options,
        session.config().visibility(),
    )?;
    Ok(formatter.format_ticket_list(&tickets))
}

/// Lists restored tickets awaiting staff review.
///
/// # Errors
///
/// Returns a permission error if the acting user is not staff.
pub fn restored(session: &Session, formatter: &dyn OutputFormatter) -> Result<String> {
    let tickets = restored_tickets(session.storage(), session.username()?)?;
    Ok(formatter.format_ticket_list(&tickets))
}
