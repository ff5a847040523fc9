// Rust guideline compliant 2026-02-06

//! Implementation of `hd comments` commands.

use crate::commands::Session;
use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::{add_comment, list_comments};

/// Adds a discussion comment to an active ticket.
///
/// # Errors
///
/// Returns a validation error if the ticket is not active, the acting user
/// is neither its owner nor staff, or the body is blank.
pub fn add(
    session: &Session,
    id: &str,
    body: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let comment = add_comment(session.storage(), session.username()?, id, body)?;
    Ok(formatter.format_comment(&comment))
}

/// Lists a ticket's comments, oldest first.
///
/// # Errors
///
/// Returns a not-found error if the ticket is not visible to the acting
/// user.
pub fn list(session: &Session, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let comments = list_comments(session.storage(), session.username()?, id)?;
    Ok(formatter.format_comment_list(&comments))
}
