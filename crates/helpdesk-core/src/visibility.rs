// Rust guideline compliant 2026-02-06

//! Ticket ownership and visibility rules.
//!
//! All functions here are pure: they look at the principal's role and the
//! ticket's owner and status, never at storage.

use crate::error::ValidationError;
use crate::models::{Status, Ticket};
use crate::role::{Principal, Relation};

/// Tunables for the general ticket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityOptions {
    /// Hide rejected tickets from staff as well as restored ones.
    pub admin_hides_rejected: bool,
}

/// Returns true if `ticket` belongs in `principal`'s general list.
///
/// Restored tickets never appear here; staff review them through the
/// restored list instead.
#[must_use]
pub fn is_listed(principal: &Principal, ticket: &Ticket, options: VisibilityOptions) -> bool {
    if ticket.status == Status::Restored {
        return false;
    }

    match principal.relation_to(ticket) {
        Relation::Admin => !(options.admin_hides_rejected && ticket.status == Status::Rejected),
        Relation::Owner => true,
        Relation::Stranger => false,
    }
}

/// Filters `tickets` down to the general list for `principal`.
#[must_use]
pub fn visible_tickets(
    principal: &Principal,
    tickets: Vec<Ticket>,
    options: VisibilityOptions,
) -> Vec<Ticket> {
    tickets
        .into_iter()
        .filter(|ticket| is_listed(principal, ticket, options))
        .collect()
}

/// Returns the restored tickets awaiting staff review.
///
/// # Errors
///
/// Returns a form-level error if `principal` is not staff.
pub fn restored_tickets(
    principal: &Principal,
    tickets: Vec<Ticket>,
) -> Result<Vec<Ticket>, ValidationError> {
    if !principal.is_admin() {
        return Err(ValidationError::form(
            "Only an administrator can review restored tickets.",
        ));
    }

    Ok(tickets
        .into_iter()
        .filter(|ticket| ticket.status == Status::Restored)
        .collect())
}

/// Returns true if `principal` may open `ticket` directly, in any status.
#[must_use]
pub fn can_view(principal: &Principal, ticket: &Ticket) -> bool {
    principal.is_admin() || principal.owns(ticket)
}

/// Returns true if `principal` may edit the description and priority.
#[must_use]
pub fn can_edit(principal: &Principal, ticket: &Ticket) -> bool {
    ticket.status == Status::Active && principal.owns(ticket)
}
