// Rust guideline compliant 2026-02-06

//! Implementation of the `hd set-status` command.
//!
//! Moves a ticket along the workflow. Rejecting requires a comment and
//! restoring accepts one; both are stored together with the status change.

use crate::commands::Session;
use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::{apply_status_transition, parse_status};

/// Requests a status change.
///
/// # Arguments
///
/// * `session` - Open repository and acting user
/// * `id` - Ticket ID (full or partial)
/// * `status` - Target status name
/// * `comment` - Optional accompanying comment
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns a validation error keyed by `status` or `comment`, or a
/// permission error, if the transition is not allowed.
pub fn execute(
    session: &Session,
    id: &str,
    status: &str,
    comment: Option<&str>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let status = parse_status(status)?;
    let outcome = apply_status_transition(
        session.storage(),
        session.username()?,
        id,
        Some(status),
        comment,
    )?;
    Ok(formatter.format_outcome(&outcome))
}
