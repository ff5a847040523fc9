// Rust guideline compliant 2026-02-09

//! Applying status transitions.
//!
//! A status change, the comment it mandates, and the Discard deletion all
//! happen inside one store transaction: either every write lands or none
//! does.

use crate::error::Result;
use crate::ids::resolve_ticket_id;
use crate::principal::resolve_principal;
use helpdesk_core::{plan_transition, Comment, Status, Storage, Ticket};
use serde::Serialize;
use tracing::{debug, info};

/// Result of an applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransitionOutcome {
    /// The ticket's status was updated.
    Updated {
        /// The ticket after the change.
        ticket: Ticket,
        /// Comment created alongside, if the transition took one.
        comment: Option<Comment>,
    },
    /// The ticket and its comments were deleted.
    Discarded {
        /// ID of the deleted ticket.
        ticket_id: String,
        /// Number of comments deleted with it.
        removed_comments: usize,
    },
}

/// Validates and applies a status change requested by `username`.
///
/// # Arguments
///
/// * `storage` - Record store
/// * `username` - Acting user
/// * `ticket_id` - Full or partial ticket ID
/// * `requested` - Target status
/// * `comment` - Accompanying text; blank counts as absent
///
/// # Errors
///
/// Returns a validation error keyed by `status` or `comment` (or form-level)
/// if the transition is not allowed, and leaves the store untouched.
pub fn apply_status_transition(
    storage: &Storage,
    username: &str,
    ticket_id: &str,
    requested: Option<Status>,
    comment: Option<&str>,
) -> Result<TransitionOutcome> {
    storage.transaction(|tx| -> Result<TransitionOutcome> {
        let principal = resolve_principal(tx, username)?;
        let id = resolve_ticket_id(tx, ticket_id)?;
        let ticket = tx.ticket(&id)?.clone();

        let plan = match plan_transition(&ticket, requested, comment, &principal) {
            Ok(plan) => plan,
            Err(err) => {
                debug!(
                    ticket = %id,
                    user = %principal.username,
                    from = %ticket.status,
                    requested = ?requested,
                    error = %err,
                    "transition rejected"
                );
                return Err(err.into());
            }
        };

        if plan.deletes_ticket() {
            let removed_comments = tx.delete_ticket(&id)?;
            info!(
                ticket = %id,
                user = %principal.username,
                transition = plan.transition().verb(),
                removed_comments,
                "ticket discarded"
            );
            return Ok(TransitionOutcome::Discarded {
                ticket_id: id,
                removed_comments,
            });
        }

        let mut updated = ticket;
        let from = updated.status;
        updated.status = plan.target();
        updated.touch();
        tx.update_ticket(updated.clone())?;

        let comment = match &plan.comment {
            Some(planned) => {
                let comment = Comment::new(
                    id.clone(),
                    principal.user_id.clone(),
                    planned.topic,
                    &planned.body,
                )?;
                Some(tx.insert_comment(comment)?)
            }
            None => None,
        };

        info!(
            ticket = %id,
            user = %principal.username,
            transition = plan.transition().verb(),
            from = %from,
            to = %updated.status,
            with_comment = comment.is_some(),
            "status changed"
        );
        Ok(TransitionOutcome::Updated {
            ticket: updated,
            comment,
        })
    })
}
