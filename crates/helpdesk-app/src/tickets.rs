// Rust guideline compliant 2026-02-09

//! Ticket services: creation, lookup, editing and the two list views.

use crate::error::Result;
use crate::ids::resolve_ticket_id;
use crate::list::{filter_tickets, ListOptions};
use crate::principal::resolve_principal;
use helpdesk_core::visibility;
use helpdesk_core::{
    available_transitions, can_comment, can_edit, can_view, visible_tickets, Comment,
    EntityKind, Error as CoreError, Principal, Priority, Snapshot, Status, Storage, Ticket,
    TicketQuery, TransitionRule, VisibilityOptions,
};
use serde::Serialize;
use tracing::{debug, info};

/// Input for creating a ticket.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    /// Short summary; immutable once stored.
    pub title: String,
    /// Longer description, may be empty.
    pub description: String,
    /// Initial priority.
    pub priority: Priority,
}

/// Requested changes to a ticket's editable fields.
#[derive(Debug, Clone, Default)]
pub struct TicketEdit {
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
}

impl TicketEdit {
    fn is_empty(&self) -> bool {
        self.description.is_none() && self.priority.is_none()
    }
}

/// Everything a detail view of one ticket needs.
#[derive(Debug, Clone, Serialize)]
pub struct TicketDetail {
    /// The ticket itself.
    pub ticket: Ticket,
    /// Its comments, oldest first.
    pub comments: Vec<Comment>,
    /// Transitions the viewer may trigger now.
    pub transitions: Vec<TransitionRule>,
    /// Whether the viewer may edit description and priority.
    pub can_edit: bool,
    /// Whether the viewer may add a discussion comment.
    pub can_comment: bool,
}

/// Looks up a ticket the principal is allowed to see.
///
/// Tickets the principal may not view are reported as not found.
pub(crate) fn viewable_ticket(
    snapshot: &Snapshot,
    principal: &Principal,
    partial_id: &str,
) -> Result<Ticket> {
    let id = resolve_ticket_id(snapshot, partial_id)?;
    let ticket = snapshot.ticket(&id)?;
    if !can_view(principal, ticket) {
        debug!(ticket = %id, user = %principal.username, "ticket hidden from viewer");
        return Err(CoreError::not_found(EntityKind::Ticket, id).into());
    }
    Ok(ticket.clone())
}

/// Creates a ticket owned by `username` in the active status.
///
/// # Errors
///
/// Returns an error if the user is unknown or the title is blank.
pub fn create_ticket(storage: &Storage, username: &str, draft: TicketDraft) -> Result<Ticket> {
    let ticket = storage.transaction(|tx| -> Result<Ticket> {
        let principal = resolve_principal(tx, username)?;
        let mut ticket = Ticket::new(draft.title, principal.user_id);
        ticket.description = draft.description.trim().to_string();
        ticket.priority = draft.priority;
        Ok(tx.insert_ticket(ticket)?)
    })?;
    info!(ticket = %ticket.id, owner = %username, "ticket created");
    Ok(ticket)
}

/// Returns a ticket with its comments and the viewer's available actions.
///
/// # Errors
///
/// Returns `NotFound` if the ticket does not exist or the principal may not
/// view it.
pub fn show_ticket(storage: &Storage, username: &str, ticket_id: &str) -> Result<TicketDetail> {
    let snapshot = storage.load()?;
    let principal = resolve_principal(&snapshot, username)?;
    let ticket = viewable_ticket(&snapshot, &principal, ticket_id)?;

    let comments = snapshot
        .comments_for(&ticket.id)
        .into_iter()
        .cloned()
        .collect();
    let transitions = available_transitions(&ticket, &principal)
        .into_iter()
        .copied()
        .collect();

    Ok(TicketDetail {
        can_edit: can_edit(&principal, &ticket),
        can_comment: can_comment(&principal, &ticket).is_ok(),
        ticket,
        comments,
        transitions,
    })
}

/// Applies `edit` if the principal owns the ticket and it is still active.
///
/// Anything else is a silent no-op.
///
/// # Returns
///
/// The updated ticket, or `None` if the edit was refused.
///
/// # Errors
///
/// Returns an error if the user or ticket cannot be resolved, or the store
/// cannot be written.
pub fn edit_ticket(
    storage: &Storage,
    username: &str,
    ticket_id: &str,
    edit: TicketEdit,
) -> Result<Option<Ticket>> {
    storage.transaction(|tx| -> Result<Option<Ticket>> {
        let principal = resolve_principal(tx, username)?;
        let id = resolve_ticket_id(tx, ticket_id)?;
        let mut ticket = tx.ticket(&id)?.clone();

        if !can_edit(&principal, &ticket) {
            debug!(ticket = %id, user = %principal.username, status = %ticket.status, "edit refused");
            return Ok(None);
        }
        if edit.is_empty() {
            return Ok(Some(ticket));
        }

        if let Some(description) = edit.description {
            ticket.description = description.trim().to_string();
        }
        if let Some(priority) = edit.priority {
            ticket.priority = priority;
        }
        ticket.touch();
        tx.update_ticket(ticket.clone())?;
        info!(ticket = %id, user = %principal.username, "ticket edited");
        Ok(Some(ticket))
    })
}

/// Returns the principal's general ticket list, filtered and newest first.
///
/// # Errors
///
/// Returns an error if the user is unknown or the store cannot be read.
pub fn list_tickets(
    storage: &Storage,
    username: &str,
    options: &ListOptions,
    visibility: VisibilityOptions,
) -> Result<Vec<Ticket>> {
    let snapshot = storage.load()?;
    let principal = resolve_principal(&snapshot, username)?;

    let mut query = if principal.is_admin() {
        TicketQuery::default()
    } else {
        TicketQuery::owned_by(principal.user_id.as_str())
    };
    if let Some(status) = options.status {
        query = query.with_status(status);
    }
    let candidates = snapshot.query_tickets(&query).into_iter().cloned().collect();

    let visible = visible_tickets(&principal, candidates, visibility);
    debug!(user = %principal.username, visible = visible.len(), "tickets listed");
    Ok(filter_tickets(visible, options))
}

/// Returns restored tickets awaiting review, newest first.
///
/// # Errors
///
/// Returns a form-level validation error if the principal is not staff.
pub fn restored_tickets(storage: &Storage, username: &str) -> Result<Vec<Ticket>> {
    let snapshot = storage.load()?;
    let principal = resolve_principal(&snapshot, username)?;
    let candidates = snapshot
        .query_tickets(&TicketQuery::in_status(Status::Restored))
        .into_iter()
        .cloned()
        .collect();
    let restored = visibility::restored_tickets(&principal, candidates)?;
    Ok(filter_tickets(restored, &ListOptions::default()))
}
