// Rust guideline compliant 2026-02-09

//! Discussion comments.

use crate::error::Result;
use crate::ids::resolve_ticket_id;
use crate::principal::resolve_principal;
use crate::tickets::viewable_ticket;
use helpdesk_core::{can_comment, Comment, Storage, Topic};
use tracing::{debug, info};

/// Adds a discussion comment from `username` to a ticket.
///
/// # Errors
///
/// Returns a `ticket`-scoped validation error if the ticket is not active or
/// the principal is neither its owner nor staff, and a `body` error if the
/// text is blank.
pub fn add_comment(
    storage: &Storage,
    username: &str,
    ticket_id: &str,
    body: &str,
) -> Result<Comment> {
    storage.transaction(|tx| -> Result<Comment> {
        let principal = resolve_principal(tx, username)?;
        let id = resolve_ticket_id(tx, ticket_id)?;
        let ticket = tx.ticket(&id)?;

        if let Err(err) = can_comment(&principal, ticket) {
            debug!(ticket = %id, user = %principal.username, error = %err, "comment refused");
            return Err(err.into());
        }

        let comment = Comment::new(id, principal.user_id, Topic::Discussion, body)?;
        let comment = tx.insert_comment(comment)?;
        info!(ticket = %comment.ticket, comment = %comment.id, user = %principal.username, "comment added");
        Ok(comment)
    })
}

/// Lists a ticket's comments, oldest first.
///
/// # Errors
///
/// Returns `NotFound` if the ticket does not exist or the principal may not
/// view it.
pub fn list_comments(storage: &Storage, username: &str, ticket_id: &str) -> Result<Vec<Comment>> {
    let snapshot = storage.load()?;
    let principal = resolve_principal(&snapshot, username)?;
    let ticket = viewable_ticket(&snapshot, &principal, ticket_id)?;
    Ok(snapshot
        .comments_for(&ticket.id)
        .into_iter()
        .cloned()
        .collect())
}
